// self
use crate::{_prelude::*, error::InputError};

/// Authority flavors understood by the identity SDK.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthorityKind {
	/// Microsoft Entra ID workforce tenants (`AAD`).
	#[default]
	#[serde(rename = "AAD")]
	Workforce,
	/// Azure AD B2C consumer tenants (`B2C`).
	#[serde(rename = "B2C")]
	ConsumerB2c,
	/// Entra External ID customer tenants (`CIAM`).
	#[serde(rename = "CIAM")]
	CustomerIdentity,
}
impl AuthorityKind {
	/// Every supported kind, in the order they are reported to callers.
	pub const ALL: [Self; 3] = [Self::Workforce, Self::ConsumerB2c, Self::CustomerIdentity];

	/// Returns the tag used by callers and the SDK configuration.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Workforce => "AAD",
			Self::ConsumerB2c => "B2C",
			Self::CustomerIdentity => "CIAM",
		}
	}
}
impl Display for AuthorityKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for AuthorityKind {
	type Err = InputError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|kind| kind.as_str() == s)
			.ok_or_else(|| InputError::UnsupportedAuthorityType { value: s.to_owned() })
	}
}
