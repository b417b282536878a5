//! Strongly typed identifiers validated at the caller boundary.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal, $validate:ident) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Creates a new identifier after validation.
			pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
				let view = value.as_ref();

				$validate($kind, view)?;

				Ok(Self(view.to_owned()))
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				$validate($kind, &value)?;

				Ok(Self(value))
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
	};
}

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("{kind} cannot be empty.")]
	Empty {
		/// Kind of identifier (client ID, key hash).
		kind: &'static str,
	},
	/// The identifier contains whitespace characters.
	#[error("{kind} contains whitespace.")]
	ContainsWhitespace {
		/// Kind of identifier (client ID, key hash).
		kind: &'static str,
	},
}

def_id! {
	ClientId,
	"Application (client) identifier registered with the identity provider.",
	"Client ID",
	validate_token
}
def_id! {
	KeyHash,
	"Signing-certificate hash paired with the host package identifier in the redirect URI.",
	"Key hash",
	validate_non_empty
}

impl Debug for ClientId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "ClientId({})", self.0)
	}
}
impl Debug for KeyHash {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "KeyHash({})", self.0)
	}
}

fn validate_non_empty(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty { kind });
	}

	Ok(())
}

fn validate_token(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	validate_non_empty(kind, view)?;

	if view.chars().any(char::is_whitespace) {
		return Err(IdentifierError::ContainsWhitespace { kind });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn client_ids_reject_empty_and_whitespace() {
		assert!(ClientId::new("").is_err());
		assert!(ClientId::new(" 3892f330").is_err(), "Leading whitespace must be rejected.");

		let client = ClientId::new("3892f330-5945-4db6-9167-4d5e644ab840")
			.expect("Client fixture should be considered valid.");

		assert_eq!(client.as_ref(), "3892f330-5945-4db6-9167-4d5e644ab840");
	}

	#[test]
	fn key_hash_only_requires_content() {
		assert_eq!(KeyHash::new(""), Err(IdentifierError::Empty { kind: "Key hash" }));

		let hash = KeyHash::new("cmFuZG9tLWtleS1oYXNoLW9idGFpbmVkLWZyb20tYXp1cmU=")
			.expect("Base64 key hash should be accepted.");

		assert!(hash.ends_with('='));
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let client: ClientId =
			serde_json::from_str("\"client-42\"").expect("Client ID should deserialize.");

		assert_eq!(client.as_ref(), "client-42");
		assert!(serde_json::from_str::<KeyHash>("\"\"").is_err());
	}
}
