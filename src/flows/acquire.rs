//! Token acquisition orchestration.
//!
//! A bound account gets one silent attempt against the context's default authority. Any silent
//! failure (user interaction required or otherwise) falls through to a single interactive flow,
//! which pre-fills the bound account's username so the SDK does not reject a mismatched account.
//! Interactive flows are never retried.

// self
use crate::{
	_prelude::*,
	auth::{PromptKind, ScopeSet, TokenOutcome},
	error::AcquireError,
	obs::{self, AcquisitionPath},
	sdk::{ClientContext, InteractiveOutcome, InteractiveRequest, SilentError, SilentRequest},
};

/// Acquires tokens for `scopes`, preferring silent renewal when an account is bound.
pub async fn acquire_token(
	context: &dyn ClientContext,
	scopes: &ScopeSet,
	prompt: PromptKind,
) -> Result<TokenOutcome, AcquireError> {
	let account = context.current_account().await.map_err(|e| {
		tracing::error!(error = %e, "Unable to query the current account.");

		AcquireError::Failed(e)
	})?;

	if let Some(account) = &account {
		obs::record_acquisition_path(AcquisitionPath::Silent);
		tracing::info!(scopes = %scopes, "Starting silent login flow.");

		let request = SilentRequest {
			scopes: scopes.clone(),
			authority: context.default_authority().to_owned(),
			account: account.clone(),
		};

		match context.acquire_token_silent(&request).await {
			Ok(result) => return Ok(TokenOutcome::from(result)),
			Err(SilentError::UiRequired(e)) => {
				tracing::info!(error = %e, "Silent login requires user interaction.");
			},
			Err(SilentError::Other(e)) => {
				tracing::warn!(error = %e, "Silent login failed; falling back to interactive login.");
			},
		}
	}

	obs::record_acquisition_path(AcquisitionPath::Interactive);
	tracing::info!(scopes = %scopes, prompt = %prompt, "Starting interactive login flow.");

	let request = InteractiveRequest {
		scopes: scopes.clone(),
		prompt,
		login_hint: account.map(|account| account.username),
	};

	match context.acquire_token_interactive(&request).await {
		InteractiveOutcome::Success(result) => Ok(TokenOutcome::from(result)),
		InteractiveOutcome::Cancelled => {
			tracing::info!("Login cancelled.");

			Err(AcquireError::Cancelled)
		},
		InteractiveOutcome::Failed(e) => {
			tracing::error!(error = %e, "Unable to acquire token interactively.");

			Err(AcquireError::Failed(e))
		},
	}
}
