//! Caller-facing option payloads and their validation.

// self
use crate::{
	_prelude::*,
	auth::{ClientId, KeyHash, PromptKind, ScopeSet},
	authority::{AuthorityDescriptor, AuthorityKind},
	error::InputError,
	provision::ContextRequest,
};

/// Options shared by every entry point that needs a client context.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextOptions {
	/// Application (client) identifier.
	#[serde(default)]
	pub client_id: Option<String>,
	/// Optional domain hint.
	#[serde(default)]
	pub domain_hint: Option<String>,
	/// Optional tenant; `common` when absent.
	#[serde(default)]
	pub tenant: Option<String>,
	/// Signing key hash registered with the identity provider.
	#[serde(default)]
	pub key_hash: Option<String>,
	/// Authority kind tag; `AAD` when absent.
	#[serde(default)]
	pub authority_type: Option<String>,
	/// Custom authority URL overriding the templated default.
	#[serde(default)]
	pub authority_url: Option<String>,
	/// Whether the broker redirect URI is registered.
	#[serde(default)]
	pub broker_redirect_uri_registered: bool,
}
impl ContextOptions {
	/// Decodes options from a JSON payload.
	pub fn from_json(payload: &str) -> Result<Self, InputError> {
		decode(payload)
	}

	/// Validates the options into a provisioning request.
	///
	/// Checks run in a fixed order (key hash, authority type, client ID) so the first problem
	/// the caller sees is stable.
	pub fn context_request(&self) -> Result<ContextRequest, InputError> {
		let key_hash = self
			.key_hash
			.as_deref()
			.and_then(|raw| KeyHash::new(raw).ok())
			.ok_or(InputError::InvalidKeyHash)?;
		let kind = match self.authority_type.as_deref() {
			Some(raw) => raw.parse::<AuthorityKind>()?,
			None => AuthorityKind::default(),
		};
		let client_id = self
			.client_id
			.as_deref()
			.and_then(|raw| ClientId::new(raw).ok())
			.ok_or(InputError::InvalidClientId)?;
		let descriptor =
			AuthorityDescriptor::build(kind, self.tenant.as_deref(), self.authority_url.as_deref());

		Ok(ContextRequest {
			descriptor,
			client_id,
			domain_hint: self.domain_hint.clone(),
			key_hash,
			broker_redirect_uri_registered: self.broker_redirect_uri_registered,
		})
	}
}

/// Options accepted by the login entry point.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginOptions {
	/// Context options.
	#[serde(flatten)]
	pub context: ContextOptions,
	/// Requested scopes.
	pub scopes: Vec<String>,
	/// Prompt preference; unrecognized values fall back to `select_account`.
	#[serde(default)]
	pub prompt: Option<String>,
}
impl LoginOptions {
	/// Decodes options from a JSON payload.
	pub fn from_json(payload: &str) -> Result<Self, InputError> {
		decode(payload)
	}

	/// Validates the requested scopes.
	pub fn scope_set(&self) -> Result<ScopeSet, InputError> {
		Ok(ScopeSet::new(self.scopes.iter().cloned())?)
	}

	/// Resolves the prompt preference.
	pub fn prompt_kind(&self) -> PromptKind {
		PromptKind::resolve(self.prompt.as_deref())
	}
}

fn decode<T>(payload: &str) -> Result<T, InputError>
where
	T: for<'de> Deserialize<'de>,
{
	let mut de = serde_json::Deserializer::from_str(payload);

	serde_path_to_error::deserialize(&mut de).map_err(|source| InputError::MalformedOptions { source })
}
