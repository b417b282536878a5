//! Bridge-level error types shared across provisioning, acquisition, and sign-out.
//!
//! Internal code passes typed errors up the call chain; only [`Rejection`] crosses the host
//! boundary, so callers never observe more than a stable message.

// self
use crate::{_prelude::*, sdk::SdkError};

/// Bridge-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical bridge error produced by flows.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Caller supplied invalid options; no SDK interaction was attempted.
	#[error(transparent)]
	Input(#[from] InputError),
	/// The identity context could not be provisioned.
	#[error(transparent)]
	Provision(#[from] ProvisionError),
	/// No token could be obtained.
	#[error(transparent)]
	Acquire(#[from] AcquireError),
	/// Sign-out could not be completed.
	#[error(transparent)]
	SignOut(#[from] SignOutError),
}

/// Caller input failures detected before any SDK interaction.
#[derive(Debug, ThisError)]
pub enum InputError {
	/// Key hash was missing or empty.
	#[error("Invalid key hash specified.")]
	InvalidKeyHash,
	/// Client identifier was missing or malformed.
	#[error("Invalid client ID specified.")]
	InvalidClientId,
	/// Authority type is not one of the supported kinds.
	#[error("Invalid authorityType specified. Only AAD, B2C and CIAM are supported.")]
	UnsupportedAuthorityType {
		/// Raw value supplied by the caller.
		value: String,
	},
	/// Requested scopes cannot be normalized.
	#[error("Invalid scopes specified.")]
	InvalidScope(#[from] crate::auth::ScopeValidationError),
	/// Options payload could not be decoded.
	#[error("Invalid options specified.")]
	MalformedOptions {
		/// Decoding failure with the offending JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Failures raised while materializing a client context.
#[derive(Debug, ThisError)]
pub enum ProvisionError {
	/// The configuration artifact could not be serialized or written.
	#[error("Unable to fetch context.")]
	ArtifactWrite {
		/// Underlying serialization or I/O failure.
		#[source]
		source: ArtifactError,
	},
	/// The identity SDK refused to create a context from the artifact.
	#[error("Unable to create identity context.")]
	CreateContext(#[source] SdkError),
}

/// Serialization and filesystem failures around the configuration artifact.
#[derive(Debug, ThisError)]
pub enum ArtifactError {
	/// Configuration could not be rendered as JSON.
	#[error("Failed to serialize client configuration.")]
	Serialize(#[from] serde_json::Error),
	/// Artifact file could not be created or written.
	#[error("Failed to write configuration artifact {}.", path.display())]
	Io {
		/// Artifact location.
		path: PathBuf,
		/// Underlying filesystem failure.
		#[source]
		source: std::io::Error,
	},
}

/// Terminal acquisition failures; both variants look identical to the caller.
#[derive(Debug, ThisError)]
pub enum AcquireError {
	/// The user dismissed the interactive flow.
	#[error("Login was cancelled by the user.")]
	Cancelled,
	/// The SDK reported an error.
	#[error("Unable to acquire token: {0}.")]
	Failed(#[source] SdkError),
}

/// Sign-out failures.
#[derive(Debug, ThisError)]
pub enum SignOutError {
	/// No account is bound to the context.
	#[error("Nothing to sign out from.")]
	NoAccount,
	/// The SDK reported an error while signing out.
	#[error("Unable to sign out.")]
	Sdk(#[source] SdkError),
}

/// Caller-visible rejection returned by [`Bridge`](crate::flows::Bridge) entry points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("{message}")]
pub struct Rejection {
	/// Stable, user-facing message.
	pub message: String,
}
impl Rejection {
	/// Message used for every failed token acquisition.
	pub const TOKEN_UNAVAILABLE: &'static str = "Unable to obtain access token";

	/// Creates a rejection carrying the provided message.
	pub fn new(message: impl Into<String>) -> Self {
		Self { message: message.into() }
	}
}
impl From<Error> for Rejection {
	fn from(e: Error) -> Self {
		match e {
			Error::Acquire(_) => Self::new(Self::TOKEN_UNAVAILABLE),
			other => Self::new(other.to_string()),
		}
	}
}
