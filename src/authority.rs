//! Authority descriptors describing how to reach the identity provider.
//!
//! `kind` defines the closed [`AuthorityKind`] union accepted at the caller boundary, and
//! `builder` turns a kind, an optional tenant, and an optional custom URL into an immutable
//! [`AuthorityDescriptor`].

/// Builder API for assembling authority descriptors.
pub mod builder;
/// Supported authority kinds.
pub mod kind;

pub use builder::*;
pub use kind::*;

// self
use crate::_prelude::*;

/// Immutable description of the identity provider authority for one call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorityDescriptor {
	/// Authority kind selecting the emitted configuration shape.
	pub kind: AuthorityKind,
	/// Authority URL; a custom URL always wins over the templated default.
	pub authority_url: String,
	/// Tenant the templated URL and audience refer to (`common` when none was supplied).
	pub tenant_id: String,
	/// Whether the authority is flagged as the SDK's default authority.
	pub is_default: bool,
}
impl AuthorityDescriptor {
	/// Creates a new builder for the provided kind.
	pub fn builder(kind: AuthorityKind) -> AuthorityDescriptorBuilder {
		AuthorityDescriptorBuilder::new(kind)
	}

	/// Builds a descriptor from optional caller inputs in one call.
	pub fn build(kind: AuthorityKind, tenant: Option<&str>, custom_url: Option<&str>) -> Self {
		let mut builder = Self::builder(kind);

		if let Some(tenant) = tenant {
			builder = builder.tenant(tenant);
		}
		if let Some(url) = custom_url {
			builder = builder.authority_url(url);
		}

		builder.build()
	}
}
