//! Scoped configuration file handed to the SDK's context-creation entry point.

// std
use std::{
	fs::{self, File},
	io::{ErrorKind, Write},
};
// crates.io
use rand::{Rng, distr::Alphanumeric};
// self
use crate::{_prelude::*, error::ArtifactError};

const UNIQUE_SUFFIX_LEN: usize = 12;

/// Configuration file that exists exactly as long as this value.
///
/// The file is created by [`ConfigArtifact::write`] and removed on drop, whichever way the
/// owning call exits. A failed removal is logged and otherwise ignored.
#[derive(Debug)]
pub struct ConfigArtifact {
	path: PathBuf,
}
impl ConfigArtifact {
	/// Writes `contents` to `path`, replacing any previous file.
	///
	/// A partially written file is removed before the error is returned.
	pub fn write(path: PathBuf, contents: &[u8]) -> Result<Self, ArtifactError> {
		let artifact = Self { path };
		let io_err = |source| ArtifactError::Io { path: artifact.path.clone(), source };
		let mut file = File::create(&artifact.path).map_err(io_err)?;

		file.write_all(contents).map_err(io_err)?;
		file.sync_all().map_err(io_err)?;

		Ok(artifact)
	}

	/// Location of the artifact.
	pub fn path(&self) -> &Path {
		&self.path
	}
}
impl Drop for ConfigArtifact {
	fn drop(&mut self) {
		match fs::remove_file(&self.path) {
			Ok(()) => {},
			Err(e) if e.kind() == ErrorKind::NotFound => {},
			Err(e) => {
				tracing::warn!(
					path = %self.path.display(),
					error = %e,
					"Unable to delete configuration artifact."
				);
			},
		}
	}
}

/// Appends a random alphanumeric suffix to the file stem of `name`.
pub(crate) fn unique_name(name: &str) -> String {
	let suffix: String =
		rand::rng().sample_iter(Alphanumeric).take(UNIQUE_SUFFIX_LEN).map(char::from).collect();

	match name.rsplit_once('.') {
		Some((stem, ext)) if !stem.is_empty() => format!("{stem}-{suffix}.{ext}"),
		_ => format!("{name}-{suffix}"),
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn artifact_is_removed_on_drop() {
		let dir = tempfile::tempdir().expect("Temporary directory should be created.");
		let path = dir.path().join("auth_config.json");
		let artifact = ConfigArtifact::write(path.clone(), b"{\"client_id\":\"x\"}")
			.expect("Artifact should be written.");

		let written = fs::read(artifact.path()).expect("Artifact should be readable.");

		assert_eq!(written, b"{\"client_id\":\"x\"}");

		drop(artifact);

		assert!(!path.exists(), "Artifact must be removed once dropped.");
	}

	#[test]
	fn failed_write_leaves_no_file_behind() {
		let dir = tempfile::tempdir().expect("Temporary directory should be created.");
		let path = dir.path().join("missing").join("auth_config.json");
		let err = ConfigArtifact::write(path.clone(), b"{}")
			.expect_err("Writing into a missing directory must fail.");

		assert!(matches!(err, ArtifactError::Io { .. }));
		assert!(!path.exists());
	}

	#[test]
	fn already_removed_artifacts_drop_quietly() {
		let dir = tempfile::tempdir().expect("Temporary directory should be created.");
		let artifact = ConfigArtifact::write(dir.path().join("auth_config.json"), b"{}")
			.expect("Artifact should be written.");

		fs::remove_file(artifact.path()).expect("Artifact should be removable.");
	}

	#[test]
	fn unique_names_keep_the_extension() {
		let lhs = unique_name("auth_config.json");
		let rhs = unique_name("auth_config.json");

		assert!(lhs.starts_with("auth_config-"));
		assert!(lhs.ends_with(".json"));
		assert_eq!(lhs.len(), "auth_config-.json".len() + UNIQUE_SUFFIX_LEN);
		assert_ne!(lhs, rhs);
		assert!(unique_name("config").starts_with("config-"));
	}
}
