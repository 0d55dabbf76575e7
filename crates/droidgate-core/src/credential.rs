//! Credential storage — the locally provisioned hashed secret.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use md5::{Digest, Md5};
use serde::Deserialize;

use crate::error::{Error, Result};

/// The persisted credential: a single pre-hashed secret.
#[derive(Debug, Clone, Deserialize)]
pub struct Credential {
    /// MD5 hex digest of the device password.
    pub password: String,
}

/// Read-only handle on the credential file.
///
/// The file is re-read on every `load`, so replacing it takes effect
/// immediately and invalidates previously issued tokens.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and parse the credential file.
    pub fn load(&self) -> Result<Credential> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::CredentialMissing,
            _ => Error::Io(e),
        })?;
        serde_json::from_str(&raw).map_err(|e| Error::CredentialMalformed(e.to_string()))
    }
}

/// MD5 hex digest of a submitted password.
///
/// MD5 is fixed by the persisted credential format, which predates this
/// server; the digest is an identity check, not a password-storage scheme.
pub fn password_digest(password: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_matches_known_vector() {
        assert_eq!(
            password_digest("123abcdef"),
            "90b1ed029bf05fc99c5d6b1a7675bbad"
        );
    }

    #[test]
    fn load_missing_file_is_credential_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("credential.json"));
        assert!(matches!(store.load(), Err(Error::CredentialMissing)));
    }

    #[test]
    fn load_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credential.json");
        std::fs::write(&path, "not json").unwrap();

        let store = CredentialStore::new(path);
        assert!(matches!(store.load(), Err(Error::CredentialMalformed(_))));
    }

    #[test]
    fn load_rejects_missing_password_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credential.json");
        std::fs::write(&path, r#"{"user":"nobody"}"#).unwrap();

        let store = CredentialStore::new(path);
        assert!(matches!(store.load(), Err(Error::CredentialMalformed(_))));
    }

    #[test]
    fn load_parses_credential() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credential.json");
        std::fs::write(
            &path,
            r#"{"password":"90b1ed029bf05fc99c5d6b1a7675bbad"}"#,
        )
        .unwrap();

        let store = CredentialStore::new(path);
        let credential = store.load().unwrap();
        assert_eq!(credential.password, "90b1ed029bf05fc99c5d6b1a7675bbad");
    }
}
