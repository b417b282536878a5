//! Contracts for the external identity SDK collaborator.
//!
//! The SDK owns every protocol concern: token exchange, caching, silent renewal, and broker
//! interaction. Its callback-based results are modelled as futures that resolve exactly once,
//! with the three-way interactive callback collapsed into [`InteractiveOutcome`].

// self
use crate::{
	_prelude::*,
	auth::{Account, AuthenticationResult, PromptKind, ScopeSet},
	provision::HostApp,
};

/// Boxed future returned by collaborator calls.
pub type SdkFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a + Send>>;

/// Entry point of the identity SDK.
pub trait IdentitySdk
where
	Self: Send + Sync,
{
	/// Materializes a single-account client context from the configuration artifact at
	/// `artifact`.
	///
	/// The artifact is removed as soon as the returned future resolves, so implementations must
	/// finish reading it before then.
	fn create_context<'a>(
		&'a self,
		host: &'a HostApp,
		artifact: &'a Path,
	) -> SdkFuture<'a, Result<Arc<dyn ClientContext>, SdkError>>;
}

/// Handle able to perform authentication operations for zero or one signed-in account.
pub trait ClientContext
where
	Self: Send + Sync,
{
	/// URL of the authority the context was configured with.
	fn default_authority(&self) -> &str;

	/// Returns the account currently bound to the context, if any.
	fn current_account(&self) -> SdkFuture<'_, Result<Option<Account>, SdkError>>;

	/// Renews tokens for the bound account without user interaction.
	fn acquire_token_silent<'a>(
		&'a self,
		request: &'a SilentRequest,
	) -> SdkFuture<'a, Result<AuthenticationResult, SilentError>>;

	/// Runs the interactive authorization flow on the host's foreground UI surface.
	fn acquire_token_interactive<'a>(
		&'a self,
		request: &'a InteractiveRequest,
	) -> SdkFuture<'a, InteractiveOutcome>;

	/// Signs the bound account out.
	fn sign_out(&self) -> SdkFuture<'_, Result<(), SdkError>>;
}
impl Debug for dyn ClientContext {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ClientContext").field("authority", &self.default_authority()).finish()
	}
}

/// Parameters of a silent acquisition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SilentRequest {
	/// Requested scopes.
	pub scopes: ScopeSet,
	/// Authority to renew against.
	pub authority: String,
	/// Account the renewal is scoped to.
	pub account: Account,
}

/// Parameters of an interactive acquisition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InteractiveRequest {
	/// Requested scopes.
	pub scopes: ScopeSet,
	/// Prompt behavior.
	pub prompt: PromptKind,
	/// Username pre-filled into the sign-in page.
	pub login_hint: Option<String>,
}

/// Error reported by the identity SDK.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("{code}: {message}")]
pub struct SdkError {
	/// SDK error code.
	pub code: String,
	/// Human-readable description.
	pub message: String,
}
impl SdkError {
	/// Creates an SDK error.
	pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { code: code.into(), message: message.into() }
	}
}

/// Silent acquisition failures.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum SilentError {
	/// The SDK needs the user to interact before it can issue tokens.
	#[error("User interaction required: {0}.")]
	UiRequired(SdkError),
	/// Any other silent failure.
	#[error("Silent acquisition failed: {0}.")]
	Other(SdkError),
}

/// Result of the interactive flow; exactly one is delivered per flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InteractiveOutcome {
	/// The user completed sign-in.
	Success(AuthenticationResult),
	/// The user dismissed the flow.
	Cancelled,
	/// The SDK reported an error.
	Failed(SdkError),
}
