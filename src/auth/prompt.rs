//! Interactive prompt preferences.

// self
use crate::_prelude::*;

/// Prompt behavior requested from the interactive authorization flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromptKind {
	/// Let the user pick among known accounts.
	#[default]
	SelectAccount,
	/// Force credential entry.
	Login,
	/// Force the consent screen.
	Consent,
	/// Only prompt when the provider requires it.
	WhenRequired,
	/// Offer account creation.
	Create,
}
impl PromptKind {
	/// Resolves a caller-supplied prompt value.
	///
	/// Matching is case-insensitive. Missing values select [`PromptKind::SelectAccount`];
	/// unrecognized values do the same and emit a warning instead of failing the call.
	pub fn resolve(value: Option<&str>) -> Self {
		let Some(raw) = value else {
			return Self::default();
		};

		match raw.to_lowercase().as_str() {
			"select_account" => Self::SelectAccount,
			"login" => Self::Login,
			"consent" => Self::Consent,
			"none" => Self::WhenRequired,
			"create" => Self::Create,
			_ => {
				tracing::warn!(prompt = raw, "Unrecognized prompt option.");

				Self::default()
			},
		}
	}

	/// Returns the identifier the identity SDK uses for this prompt.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::SelectAccount => "SELECT_ACCOUNT",
			Self::Login => "LOGIN",
			Self::Consent => "CONSENT",
			Self::WhenRequired => "WHEN_REQUIRED",
			Self::Create => "CREATE",
		}
	}
}
impl Display for PromptKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn known_prompts_match_case_insensitively() {
		assert_eq!(PromptKind::resolve(Some("LOGIN")), PromptKind::Login);
		assert_eq!(PromptKind::resolve(Some("Consent")), PromptKind::Consent);
		assert_eq!(PromptKind::resolve(Some("none")), PromptKind::WhenRequired);
		assert_eq!(PromptKind::resolve(Some("create")), PromptKind::Create);
		assert_eq!(PromptKind::resolve(Some("select_account")), PromptKind::SelectAccount);
	}

	#[test]
	fn missing_or_unknown_prompts_degrade_to_select_account() {
		assert_eq!(PromptKind::resolve(None), PromptKind::SelectAccount);
		assert_eq!(PromptKind::resolve(Some("always")), PromptKind::SelectAccount);
		assert_eq!(PromptKind::resolve(Some("")), PromptKind::SelectAccount);
	}
}
