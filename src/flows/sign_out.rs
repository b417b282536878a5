//! Session termination for the bound account.

// self
use crate::{_prelude::*, error::SignOutError, sdk::ClientContext};

/// Signs the bound account out, failing when no account is bound.
pub async fn sign_out(context: &dyn ClientContext) -> Result<(), SignOutError> {
	let account = context.current_account().await.map_err(|e| {
		tracing::error!(error = %e, "Unable to query the current account.");

		SignOutError::Sdk(e)
	})?;

	if account.is_none() {
		return Err(SignOutError::NoAccount);
	}

	context.sign_out().await.map_err(|e| {
		tracing::error!(error = %e, "Error occurred during logout.");

		SignOutError::Sdk(e)
	})
}
