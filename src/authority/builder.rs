// self
use crate::{
	_prelude::*,
	authority::{AuthorityDescriptor, AuthorityKind},
};

/// Host every templated authority URL points at.
pub const DEFAULT_AUTHORITY_HOST: &str = "https://login.microsoftonline.com";
/// Tenant used when the caller does not name one.
pub const COMMON_TENANT: &str = "common";

/// Builder for [`AuthorityDescriptor`] values.
///
/// Building is pure: the same inputs always produce the same descriptor.
#[derive(Clone, Debug)]
pub struct AuthorityDescriptorBuilder {
	/// Kind of the descriptor being constructed.
	pub kind: AuthorityKind,
	/// Optional tenant; empty values count as absent.
	pub tenant: Option<String>,
	/// Optional custom authority URL; empty values count as absent.
	pub authority_url: Option<String>,
}
impl AuthorityDescriptorBuilder {
	/// Creates a new builder seeded with the provided kind.
	pub fn new(kind: AuthorityKind) -> Self {
		Self { kind, tenant: None, authority_url: None }
	}

	/// Sets the tenant.
	pub fn tenant(mut self, tenant: impl Into<String>) -> Self {
		self.tenant = Some(tenant.into());

		self
	}

	/// Sets a custom authority URL that overrides the templated default.
	pub fn authority_url(mut self, url: impl Into<String>) -> Self {
		self.authority_url = Some(url.into());

		self
	}

	/// Consumes the builder and produces the descriptor.
	pub fn build(self) -> AuthorityDescriptor {
		let tenant_id = non_empty(self.tenant).unwrap_or_else(|| COMMON_TENANT.to_owned());
		let authority_url = non_empty(self.authority_url)
			.unwrap_or_else(|| format!("{DEFAULT_AUTHORITY_HOST}/{tenant_id}"));

		AuthorityDescriptor {
			kind: self.kind,
			authority_url,
			tenant_id,
			is_default: matches!(self.kind, AuthorityKind::ConsumerB2c),
		}
	}
}

fn non_empty(value: Option<String>) -> Option<String> {
	value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	const TENANT: &str = "f6785b1e-7ae8-4c41-8b72-d418f03cc1d7";

	#[test]
	fn tenant_defaults_to_common_when_absent_or_empty() {
		for kind in AuthorityKind::ALL {
			let absent = AuthorityDescriptor::build(kind, None, None);
			let empty = AuthorityDescriptor::build(kind, Some(""), None);

			assert_eq!(absent.tenant_id, COMMON_TENANT);
			assert_eq!(absent.authority_url, "https://login.microsoftonline.com/common");
			assert_eq!(absent, empty);
		}
	}

	#[test]
	fn tenant_is_echoed_into_the_templated_url() {
		let descriptor = AuthorityDescriptor::build(AuthorityKind::Workforce, Some(TENANT), None);

		assert_eq!(descriptor.tenant_id, TENANT);
		assert_eq!(descriptor.authority_url, format!("https://login.microsoftonline.com/{TENANT}"));
		assert!(!descriptor.is_default);
	}

	#[test]
	fn custom_url_always_wins() {
		for kind in AuthorityKind::ALL {
			let descriptor =
				AuthorityDescriptor::build(kind, Some(TENANT), Some("https://www.recognize.nl"));

			assert_eq!(descriptor.authority_url, "https://www.recognize.nl");
			assert_eq!(descriptor.tenant_id, TENANT);
			assert_eq!(descriptor.kind, kind);
		}

		let fallback =
			AuthorityDescriptor::build(AuthorityKind::CustomerIdentity, Some(TENANT), Some(""));

		assert_eq!(fallback.authority_url, format!("{DEFAULT_AUTHORITY_HOST}/{TENANT}"));
	}

	#[test]
	fn only_b2c_is_flagged_default() {
		let flags = AuthorityKind::ALL
			.map(|kind| AuthorityDescriptor::builder(kind).build().is_default);

		assert_eq!(flags, [false, true, false]);
	}

	#[test]
	fn building_is_deterministic() {
		let lhs = AuthorityDescriptor::builder(AuthorityKind::ConsumerB2c)
			.tenant(TENANT)
			.authority_url("https://contoso.b2clogin.com/contoso.onmicrosoft.com/B2C_1_signin")
			.build();
		let rhs = AuthorityDescriptor::builder(AuthorityKind::ConsumerB2c)
			.tenant(TENANT)
			.authority_url("https://contoso.b2clogin.com/contoso.onmicrosoft.com/B2C_1_signin")
			.build();

		assert_eq!(lhs, rhs);
	}
}
