//! Caller-facing token outcome.

// self
use crate::{
	_prelude::*,
	auth::{AuthenticationResult, TokenSecret},
};

/// Tokens returned to the host after a successful login.
///
/// Built fresh for every acquisition and never cached. All three fields are always present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenOutcome {
	/// Access token for the requested scopes.
	pub access_token: TokenSecret,
	/// ID token of the account the result is bound to.
	pub id_token: TokenSecret,
	/// Scopes granted by the provider, in provider order.
	pub scopes: Vec<String>,
}
impl From<AuthenticationResult> for TokenOutcome {
	fn from(result: AuthenticationResult) -> Self {
		Self {
			access_token: result.access_token,
			id_token: result.account.id_token,
			scopes: result.scopes,
		}
	}
}
