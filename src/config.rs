//! Client configuration documents handed to the identity SDK.
//!
//! [`ClientConfig`] serializes into the JSON shape the SDK reads from its configuration file:
//! client identifier, redirect URI, single-account mode, and one authority entry whose shape
//! depends on the [`AuthorityKind`].

// crates.io
use serde::Serializer;
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	auth::{ClientId, KeyHash},
	authority::{AuthorityDescriptor, AuthorityKind},
};

/// Scheme of every broker-capable redirect URI.
pub const REDIRECT_SCHEME: &str = "msauth";

/// Redirect URI registered with the identity provider for a host package and key hash.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RedirectUri(String);
impl RedirectUri {
	/// Derives `msauth://{package_id}/{urlencoded key hash}`.
	///
	/// The result depends on nothing else, and must match the registration exactly or context
	/// creation fails.
	pub fn new(package_id: &str, key_hash: &KeyHash) -> Self {
		let encoded: String = form_urlencoded::byte_serialize(key_hash.as_bytes()).collect();

		Self(format!("{REDIRECT_SCHEME}://{package_id}/{encoded}"))
	}

	/// Returns the URI as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl Display for RedirectUri {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

/// Account mode requested from the SDK.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountMode {
	/// Zero or one signed-in account per context.
	#[default]
	Single,
}

/// User agent the SDK should use for interactive flows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorizationUserAgent {
	/// Let the SDK pick between the browser and an embedded web view.
	#[default]
	Default,
}

/// Audience block attached to workforce authorities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Audience {
	/// Audience type.
	#[serde(rename = "type")]
	pub kind: &'static str,
	/// Tenant the audience is scoped to.
	pub tenant_id: String,
}

/// Single authority entry of the SDK configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum AuthorityConfig {
	/// Workforce authority.
	#[serde(rename = "AAD")]
	Workforce {
		/// Authority URL.
		authority_url: String,
		/// Audience block.
		audience: Audience,
	},
	/// B2C authority.
	#[serde(rename = "B2C")]
	ConsumerB2c {
		/// Authority URL.
		authority_url: String,
		/// Default-authority flag, written as a string.
		#[serde(rename = "default", serialize_with = "flag_as_string")]
		is_default: bool,
	},
	/// Customer identity authority.
	#[serde(rename = "CIAM")]
	CustomerIdentity {
		/// Authority URL.
		authority_url: String,
	},
}
impl AuthorityConfig {
	/// Audience type used for workforce authorities.
	pub const WORKFORCE_AUDIENCE: &'static str = "AzureADMultipleOrgs";
}
impl From<&AuthorityDescriptor> for AuthorityConfig {
	fn from(descriptor: &AuthorityDescriptor) -> Self {
		let authority_url = descriptor.authority_url.clone();

		match descriptor.kind {
			AuthorityKind::Workforce => Self::Workforce {
				authority_url,
				audience: Audience {
					kind: Self::WORKFORCE_AUDIENCE,
					tenant_id: descriptor.tenant_id.clone(),
				},
			},
			AuthorityKind::ConsumerB2c =>
				Self::ConsumerB2c { authority_url, is_default: descriptor.is_default },
			AuthorityKind::CustomerIdentity => Self::CustomerIdentity { authority_url },
		}
	}
}

/// Configuration document consumed by the SDK's context-creation entry point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClientConfig {
	/// Application (client) identifier.
	pub client_id: ClientId,
	/// Optional domain hint forwarded to the sign-in page.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub domain_hint: Option<String>,
	/// Interactive user agent preference.
	pub authorization_user_agent: AuthorizationUserAgent,
	/// Registered redirect URI.
	pub redirect_uri: RedirectUri,
	/// Account mode.
	pub account_mode: AccountMode,
	/// Broker redirect registration flag; only emitted for workforce authorities.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub broker_redirect_uri_registered: Option<bool>,
	/// Authority entries; always exactly one.
	pub authorities: Vec<AuthorityConfig>,
}
impl ClientConfig {
	/// Assembles a configuration from the descriptor and client settings.
	pub fn new(
		descriptor: &AuthorityDescriptor,
		client_id: ClientId,
		domain_hint: Option<String>,
		redirect_uri: RedirectUri,
		broker_redirect_uri_registered: bool,
	) -> Self {
		let broker_redirect_uri_registered = matches!(descriptor.kind, AuthorityKind::Workforce)
			.then_some(broker_redirect_uri_registered);

		Self {
			client_id,
			domain_hint: domain_hint.filter(|hint| !hint.is_empty()),
			authorization_user_agent: AuthorizationUserAgent::default(),
			redirect_uri,
			account_mode: AccountMode::default(),
			broker_redirect_uri_registered,
			authorities: vec![AuthorityConfig::from(descriptor)],
		}
	}

	/// Renders the configuration as JSON bytes.
	pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
		serde_json::to_vec(self)
	}
}

fn flag_as_string<S>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
	S: Serializer,
{
	serializer.serialize_str(if *flag { "true" } else { "false" })
}
