//! Caller-facing flows powered by the [`Bridge`] facade.

pub mod acquire;
pub mod options;
pub mod sign_out;

pub use acquire::*;
pub use options::*;
pub use sign_out::*;

// self
use crate::{
	_prelude::*,
	auth::TokenOutcome,
	error::Rejection,
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	provision::Provisioner,
};

/// Entry points exposed to the host app shell.
///
/// Every call provisions a fresh client context, so nothing is cached between calls. Failures
/// are logged with their cause and converted into a [`Rejection`] at this boundary only.
///
/// Only returned errors are converted. A panicking [`IdentitySdk`](crate::sdk::IdentitySdk) or
/// [`ClientContext`](crate::sdk::ClientContext) implementation unwinds through these methods;
/// hosts that need a hard boundary must catch it around the returned future.
#[derive(Debug)]
pub struct Bridge {
	/// Provisioner used to materialize a context per call.
	pub provisioner: Provisioner,
}
impl Bridge {
	/// Creates a bridge around the provided provisioner.
	pub fn new(provisioner: Provisioner) -> Self {
		Self { provisioner }
	}

	/// Signs the user in and returns tokens for the requested scopes.
	pub async fn login(&self, options: &LoginOptions) -> Result<TokenOutcome, Rejection> {
		const KIND: FlowKind = FlowKind::Login;

		let span = FlowSpan::new(KIND, "login");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				let request = options.context.context_request()?;
				let scopes = options.scope_set()?;
				let prompt = options.prompt_kind();
				let context = self.provisioner.provision(&request).await?;
				let outcome = acquire_token(context.as_ref(), &scopes, prompt).await?;

				Ok::<_, Error>(outcome)
			})
			.await;

		finish(KIND, result)
	}

	/// Signs the bound account out.
	pub async fn logout(&self, options: &ContextOptions) -> Result<(), Rejection> {
		const KIND: FlowKind = FlowKind::Logout;

		let span = FlowSpan::new(KIND, "logout");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				let request = options.context_request()?;
				let context = self.provisioner.provision(&request).await?;

				sign_out(context.as_ref()).await?;

				Ok::<_, Error>(())
			})
			.await;

		finish(KIND, result)
	}

	/// Alias for [`Bridge::logout`]; a context holds at most one account.
	pub async fn logout_all(&self, options: &ContextOptions) -> Result<(), Rejection> {
		self.logout(options).await
	}
}

fn finish<T>(kind: FlowKind, result: Result<T>) -> Result<T, Rejection> {
	match result {
		Ok(value) => {
			obs::record_flow_outcome(kind, FlowOutcome::Success);

			Ok(value)
		},
		Err(e) => {
			obs::record_flow_outcome(kind, FlowOutcome::Failure);
			tracing::warn!(flow = kind.as_str(), error = ?e, "Rejecting bridge call.");

			Err(e.into())
		},
	}
}
