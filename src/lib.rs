//! Microsoft identity login/logout orchestration for mobile app shells.
//!
//! The crate builds authority descriptors and SDK configuration documents, provisions a client
//! context through an external identity SDK, and decides between silent and interactive token
//! acquisition. Every protocol concern (token exchange, caching, broker interaction) stays with the
//! SDK collaborator described in [`sdk`].

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod authority;
pub mod config;
pub mod error;
pub mod flows;
pub mod obs;
pub mod provision;
pub mod sdk;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and a scripted identity SDK for integration tests; enabled via
	//! `cfg(test)` or the `test` crate feature.

	pub use crate::_prelude::*;

	// crates.io
	use parking_lot::Mutex;
	// self
	use crate::{
		auth::{Account, AuthenticationResult, TokenSecret},
		flows::Bridge,
		provision::{HostApp, Provisioner, ProvisionerConfig},
		sdk::{
			ClientContext, IdentitySdk, InteractiveOutcome, InteractiveRequest, SdkError,
			SdkFuture, SilentError, SilentRequest,
		},
	};

	/// Package identifier used by the scripted host application.
	pub const TEST_PACKAGE_ID: &str = "nl.recognize.project-x";

	/// Calls observed by a [`ScriptedContext`].
	#[derive(Clone, Debug, Default)]
	pub struct ContextCalls {
		/// Number of current-account probes.
		pub current_account: usize,
		/// Silent acquisition requests in call order.
		pub silent: Vec<SilentRequest>,
		/// Interactive acquisition requests in call order.
		pub interactive: Vec<InteractiveRequest>,
		/// Number of sign-out requests.
		pub sign_out: usize,
	}

	/// Client context that replays scripted SDK responses and records every call.
	#[derive(Debug)]
	pub struct ScriptedContext {
		authority: String,
		account: Option<Account>,
		account_error: Option<SdkError>,
		silent: Result<AuthenticationResult, SilentError>,
		interactive: InteractiveOutcome,
		sign_out: Result<(), SdkError>,
		calls: Mutex<ContextCalls>,
	}
	impl ScriptedContext {
		/// Creates a context with no bound account whose silent path requires UI and whose
		/// interactive path is cancelled.
		pub fn new(authority: impl Into<String>) -> Self {
			Self {
				authority: authority.into(),
				account: None,
				account_error: None,
				silent: Err(SilentError::UiRequired(SdkError::new(
					"no_tokens_found",
					"No cached tokens for the account.",
				))),
				interactive: InteractiveOutcome::Cancelled,
				sign_out: Ok(()),
				calls: Default::default(),
			}
		}

		/// Binds an account to the context.
		pub fn with_account(mut self, account: Account) -> Self {
			self.account = Some(account);

			self
		}

		/// Makes the current-account probe fail.
		pub fn with_account_error(mut self, error: SdkError) -> Self {
			self.account_error = Some(error);

			self
		}

		/// Scripts the silent acquisition response.
		pub fn with_silent(mut self, response: Result<AuthenticationResult, SilentError>) -> Self {
			self.silent = response;

			self
		}

		/// Scripts the interactive acquisition response.
		pub fn with_interactive(mut self, outcome: InteractiveOutcome) -> Self {
			self.interactive = outcome;

			self
		}

		/// Scripts a sign-out failure.
		pub fn with_sign_out_error(mut self, error: SdkError) -> Self {
			self.sign_out = Err(error);

			self
		}

		/// Snapshot of the calls observed so far.
		pub fn calls(&self) -> ContextCalls {
			self.calls.lock().clone()
		}
	}
	impl ClientContext for ScriptedContext {
		fn default_authority(&self) -> &str {
			&self.authority
		}

		fn current_account(&self) -> SdkFuture<'_, Result<Option<Account>, SdkError>> {
			Box::pin(async move {
				self.calls.lock().current_account += 1;

				match &self.account_error {
					Some(err) => Err(err.clone()),
					None => Ok(self.account.clone()),
				}
			})
		}

		fn acquire_token_silent<'a>(
			&'a self,
			request: &'a SilentRequest,
		) -> SdkFuture<'a, Result<AuthenticationResult, SilentError>> {
			Box::pin(async move {
				self.calls.lock().silent.push(request.clone());

				self.silent.clone()
			})
		}

		fn acquire_token_interactive<'a>(
			&'a self,
			request: &'a InteractiveRequest,
		) -> SdkFuture<'a, InteractiveOutcome> {
			Box::pin(async move {
				self.calls.lock().interactive.push(request.clone());

				self.interactive.clone()
			})
		}

		fn sign_out(&self) -> SdkFuture<'_, Result<(), SdkError>> {
			Box::pin(async move {
				self.calls.lock().sign_out += 1;

				self.sign_out.clone()
			})
		}
	}

	/// Configuration artifact observed while a context was being created.
	#[derive(Clone, Debug)]
	pub struct CapturedArtifact {
		/// Path handed to the SDK.
		pub path: PathBuf,
		/// Parsed artifact contents at creation time.
		pub config: serde_json::Value,
	}

	/// Identity SDK that hands out a single [`ScriptedContext`].
	#[derive(Debug)]
	pub struct ScriptedSdk {
		context: Arc<ScriptedContext>,
		create_error: Option<SdkError>,
		artifacts: Mutex<Vec<CapturedArtifact>>,
	}
	impl ScriptedSdk {
		/// Wraps the provided context.
		pub fn new(context: Arc<ScriptedContext>) -> Self {
			Self { context, create_error: None, artifacts: Default::default() }
		}

		/// Makes every context creation fail with the provided error.
		pub fn failing_with(mut self, error: SdkError) -> Self {
			self.create_error = Some(error);

			self
		}

		/// Artifacts captured so far, one per context creation.
		pub fn artifacts(&self) -> Vec<CapturedArtifact> {
			self.artifacts.lock().clone()
		}

		/// Number of context creations attempted.
		pub fn create_calls(&self) -> usize {
			self.artifacts.lock().len()
		}
	}
	impl IdentitySdk for ScriptedSdk {
		fn create_context<'a>(
			&'a self,
			_host: &'a HostApp,
			artifact: &'a Path,
		) -> SdkFuture<'a, Result<Arc<dyn ClientContext>, SdkError>> {
			Box::pin(async move {
				let raw = std::fs::read(artifact)
					.map_err(|e| SdkError::new("io_error", e.to_string()))?;
				let config = serde_json::from_slice(&raw)
					.map_err(|e| SdkError::new("invalid_configuration", e.to_string()))?;

				self.artifacts.lock().push(CapturedArtifact { path: artifact.to_path_buf(), config });

				if let Some(err) = &self.create_error {
					return Err(err.clone());
				}

				let context: Arc<dyn ClientContext> = self.context.clone();

				Ok(context)
			})
		}
	}

	/// Builds an account fixture.
	pub fn test_account(username: &str, id_token: &str) -> Account {
		Account::new(username, TokenSecret::new(id_token))
	}

	/// Builds an SDK result fixture whose account carries `id_token`.
	pub fn test_result(access_token: &str, id_token: &str, scopes: &[&str]) -> AuthenticationResult {
		AuthenticationResult {
			access_token: TokenSecret::new(access_token),
			account: test_account("user@recognize.nl", id_token),
			scopes: scopes.iter().map(|scope| scope.to_string()).collect(),
		}
	}

	/// Constructs a [`Bridge`] over the scripted SDK with the host's private storage at
	/// `files_dir`.
	pub fn build_test_bridge(sdk: Arc<ScriptedSdk>, files_dir: &Path) -> Bridge {
		let host = HostApp::new(TEST_PACKAGE_ID, files_dir);
		let sdk: Arc<dyn IdentitySdk> = sdk;

		Bridge::new(Provisioner::new(sdk, host, ProvisionerConfig::default()))
	}
}

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		path::{Path, PathBuf},
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;

	pub use crate::error::{Error, Result};
}

pub use url;
#[cfg(test)] use {color_eyre as _, msauth_bridge as _, tempfile as _};
