//! Signed-in account and raw SDK authentication results.

// self
use crate::{_prelude::*, auth::TokenSecret};

/// Account bound to a client context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
	/// Username, used as the login hint for interactive flows.
	pub username: String,
	/// ID token issued for the account.
	pub id_token: TokenSecret,
}
impl Account {
	/// Creates an account record.
	pub fn new(username: impl Into<String>, id_token: TokenSecret) -> Self {
		Self { username: username.into(), id_token }
	}
}

/// Successful authentication as reported by the identity SDK.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticationResult {
	/// Issued access token.
	pub access_token: TokenSecret,
	/// Account the token was issued for.
	pub account: Account,
	/// Scopes granted by the provider, in provider order.
	pub scopes: Vec<String>,
}
