use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;
use crate::session::Credentials;

const DEFAULT_KEYRING_SERVICE: &str = "cohort-cli";
const KEYRING_USER: &str = "session";
const CREDENTIALS_FILE_NAME: &str = "credentials";
const TOKEN_ENV: &str = "COHORT_AUTH__TOKEN";

/// Keychain entry for the session. `COHORT_KEYRING_SERVICE` swaps the service
/// name so tests never touch a real login.
fn keyring_entry() -> Option<keyring::Entry> {
    let service = std::env::var("COHORT_KEYRING_SERVICE")
        .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string());
    keyring::Entry::new(&service, KEYRING_USER)
        .inspect_err(|error| tracing::debug!(%error, "keyring unavailable"))
        .ok()
}

fn keyring_credentials() -> Option<Credentials> {
    keyring_entry()?
        .get_password()
        .ok()
        .and_then(|content| Credentials::parse(&content))
}

fn env_credentials() -> Option<Credentials> {
    std::env::var(TOKEN_ENV)
        .ok()
        .and_then(|token| Credentials::parse(&token))
}

fn file_credentials() -> Option<Credentials> {
    credentials_path().ok().and_then(|path| load_file(&path))
}

/// Persist a session in the OS keychain, or in `~/.cohort/credentials` when the
/// keychain refuses it.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if neither store accepts the credentials.
pub fn store(credentials: &Credentials) -> Result<(), AuthError> {
    let serialized = serde_json::to_string(credentials)
        .map_err(|e| AuthError::TokenStoreError(format!("serialize credentials: {e}")))?;

    let saved = keyring_entry().is_some_and(|entry| {
        entry
            .set_password(&serialized)
            .inspect_err(|error| tracing::warn!(%error, "keyring store failed; using credentials file"))
            .is_ok()
    });
    if saved {
        return Ok(());
    }
    store_file(&credentials_path()?, &serialized)
}

/// Stored credentials, checked in order: keychain, `COHORT_AUTH__TOKEN`, credentials file.
#[must_use]
pub fn load() -> Option<Credentials> {
    keyring_credentials()
        .or_else(env_credentials)
        .or_else(file_credentials)
}

/// Forget the session everywhere it may be stored.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    if let Some(entry) = keyring_entry() {
        let _ = entry.delete_credential();
    }
    delete_file(&credentials_path()?)
}

/// Where [`load`] would find credentials: `keyring`, `env` or `file`.
#[must_use]
pub fn detect_token_source() -> Option<String> {
    let source = if keyring_credentials().is_some() {
        "keyring"
    } else if env_credentials().is_some() {
        "env"
    } else if file_credentials().is_some() {
        "file"
    } else {
        return None;
    };
    Some(source.to_string())
}

fn credentials_path() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|h| h.join(".cohort").join(CREDENTIALS_FILE_NAME))
        .ok_or_else(|| {
            AuthError::TokenStoreError("no home directory for ~/.cohort/credentials".into())
        })
}

fn store_file(path: &Path, content: &str) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!(dir = %parent.display(), error = %e, "cannot restrict credentials dir");
            }
        }
    }
    fs::write(path, content)
        .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}

fn load_file(path: &Path) -> Option<Credentials> {
    fs::read_to_string(path)
        .ok()
        .and_then(|content| Credentials::parse(&content))
}

fn delete_file(path: &Path) -> Result<(), AuthError> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| {
            AuthError::TokenStoreError(format!("remove {}: {e}", path.display()))
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Credentials {
        Credentials {
            access_token: "a.b.c".into(),
            refresh_token: Some("refresh-1".into()),
        }
    }

    #[test]
    fn credentials_path_is_under_home() {
        let path = credentials_path().expect("should resolve");
        assert!(path.ends_with(".cohort/credentials"));
    }

    #[test]
    fn file_store_load_delete_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("nested").join("credentials");
        let content = serde_json::to_string(&sample()).expect("serialize");

        store_file(&path, &content).expect("store");
        assert_eq!(load_file(&path), Some(sample()));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).expect("metadata").permissions().mode() & 0o777;
            assert_eq!(mode, 0o600, "credentials file should be 0600");
        }

        delete_file(&path).expect("delete");
        assert!(!path.exists());
        delete_file(&path).expect("deleting a missing file is fine");
    }

    #[test]
    fn load_file_ignores_empty_content() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("credentials");
        fs::write(&path, "   \n  ").expect("write");
        assert!(load_file(&path).is_none(), "whitespace-only should return None");
    }
}
