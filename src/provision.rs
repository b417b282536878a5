//! Client context provisioning.
//!
//! The [`Provisioner`] renders a [`ClientConfig`] for the call, persists it as a scoped
//! [`ConfigArtifact`] in the host's private storage, and hands that artifact to the SDK. The
//! artifact never outlives the provisioning call.

pub mod artifact;

pub use artifact::ConfigArtifact;

// self
use crate::{
	_prelude::*,
	auth::{ClientId, KeyHash},
	authority::AuthorityDescriptor,
	config::{ClientConfig, RedirectUri},
	error::{ArtifactError, ProvisionError},
	sdk::{ClientContext, IdentitySdk},
};

/// Host application facts the provisioner depends on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostApp {
	/// Package or bundle identifier; part of the redirect URI.
	pub package_id: String,
	/// Private storage directory the configuration artifact is written to.
	pub files_dir: PathBuf,
}
impl HostApp {
	/// Describes a host application.
	pub fn new(package_id: impl Into<String>, files_dir: impl Into<PathBuf>) -> Self {
		Self { package_id: package_id.into(), files_dir: files_dir.into() }
	}
}

/// Tunables for artifact placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProvisionerConfig {
	/// File name of the artifact inside [`HostApp::files_dir`].
	pub artifact_name: String,
	/// Appends a random suffix per call so concurrent provisioning never shares a path.
	pub unique_artifact_names: bool,
}
impl ProvisionerConfig {
	/// Default artifact file name.
	pub const DEFAULT_ARTIFACT_NAME: &'static str = "auth_config.json";

	/// Enables or disables per-call artifact names.
	pub fn with_unique_artifact_names(mut self, enabled: bool) -> Self {
		self.unique_artifact_names = enabled;

		self
	}
}
impl Default for ProvisionerConfig {
	fn default() -> Self {
		Self { artifact_name: Self::DEFAULT_ARTIFACT_NAME.into(), unique_artifact_names: false }
	}
}

/// Validated inputs for one provisioning call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextRequest {
	/// Authority descriptor for the call.
	pub descriptor: AuthorityDescriptor,
	/// Application (client) identifier.
	pub client_id: ClientId,
	/// Optional domain hint.
	pub domain_hint: Option<String>,
	/// Key hash paired with the host package in the redirect URI.
	pub key_hash: KeyHash,
	/// Whether the broker redirect URI is registered for the app.
	pub broker_redirect_uri_registered: bool,
}

/// Materializes client contexts through the identity SDK.
pub struct Provisioner {
	sdk: Arc<dyn IdentitySdk>,
	host: HostApp,
	config: ProvisionerConfig,
	fixed_path_guard: AsyncMutex<()>,
}
impl Provisioner {
	/// Creates a provisioner for the provided SDK and host.
	pub fn new(sdk: Arc<dyn IdentitySdk>, host: HostApp, config: ProvisionerConfig) -> Self {
		Self { sdk, host, config, fixed_path_guard: AsyncMutex::new(()) }
	}

	/// Builds the client configuration a request would hand to the SDK.
	pub fn client_config(&self, request: &ContextRequest) -> ClientConfig {
		ClientConfig::new(
			&request.descriptor,
			request.client_id.clone(),
			request.domain_hint.clone(),
			RedirectUri::new(&self.host.package_id, &request.key_hash),
			request.broker_redirect_uri_registered,
		)
	}

	/// Writes the configuration artifact, asks the SDK for a context, and removes the artifact.
	pub async fn provision(
		&self,
		request: &ContextRequest,
	) -> Result<Arc<dyn ClientContext>, ProvisionError> {
		let config = self.client_config(request);
		let contents = config.to_json().map_err(|e| {
			tracing::error!(error = %e, "Unable to serialize client configuration.");

			ProvisionError::ArtifactWrite { source: ArtifactError::from(e) }
		})?;
		// Calls sharing the fixed artifact path take turns.
		let _exclusive = if self.config.unique_artifact_names {
			None
		} else {
			Some(self.fixed_path_guard.lock().await)
		};
		let artifact = ConfigArtifact::write(self.artifact_path(), &contents).map_err(|source| {
			tracing::error!(error = %source, "Unable to write configuration artifact.");

			ProvisionError::ArtifactWrite { source }
		})?;

		tracing::debug!(
			path = %artifact.path().display(),
			redirect_uri = %config.redirect_uri,
			authority = %request.descriptor.authority_url,
			"Creating identity context."
		);

		let created = self.sdk.create_context(&self.host, artifact.path()).await;

		drop(artifact);

		created.map_err(|e| {
			tracing::error!(error = %e, "Unable to create identity context.");

			ProvisionError::CreateContext(e)
		})
	}

	fn artifact_path(&self) -> PathBuf {
		let name = if self.config.unique_artifact_names {
			artifact::unique_name(&self.config.artifact_name)
		} else {
			self.config.artifact_name.clone()
		};

		self.host.files_dir.join(name)
	}
}
impl Debug for Provisioner {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Provisioner")
			.field("host", &self.host)
			.field("config", &self.config)
			.finish()
	}
}
