use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Cost used when hashing new passwords
pub const DEFAULT_HASH_COST: u32 = bcrypt::DEFAULT_COST;

/// Username to bcrypt hash, read from a toml file of the form
///
/// ```toml
/// admin = "$2b$12$..."
/// ```
///
/// The file is re-read on every authentication, so edits take
///  effect without a restart. It is never written by the server.
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

    /// A missing file holds no users.
    pub async fn load(&self) -> Result<HashMap<String, String>, CredentialsError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "credentials file missing");
                return Ok(HashMap::new());
            }
            Err(e) => return Err(e.into()),
        };
        let users = toml::from_str(&raw)?;
        Ok(users)
    }

    /// Check `password` against the stored hash for `username`.
    ///
    /// Unknown users fail closed and are indistinguishable from a
    ///  wrong password to the caller. A malformed file or hash is
    ///  an error, not a failed sign in.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, CredentialsError> {
        let mut users = self.load().await?;
        let Some(hash) = users.remove(username) else {
            tracing::debug!(username, "unknown user");
            return Ok(false);
        };

        // keep bcrypt off the async workers
        let password = password.to_string();
        let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| CredentialsError::Verification(e.to_string()))??;

        Ok(verified)
    }
}

/// Hash `password` for storing in the credentials file
pub fn hash_password(password: &str, cost: u32) -> Result<String, CredentialsError> {
    Ok(bcrypt::hash(password, cost)?)
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    #[error("failed to read credentials: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed credentials file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("password verification failed: {0}")]
    Verification(String),
}
