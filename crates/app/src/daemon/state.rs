use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use common::prelude::{CredentialStore, DocumentStore, StoreError};

use super::config::Config;

/// Shortest master secret the cookie key can be derived from
pub const MIN_SESSION_SECRET_LEN: usize = 32;

/// Main service state, cloned into every request
#[derive(Clone)]
pub struct State {
    store: DocumentStore,
    credentials: CredentialStore,
    cookie_key: Key,
}

impl State {
    pub async fn from_config(config: &Config) -> Result<Self, StateSetupError> {
        // 1. Setup document store
        let store = DocumentStore::open(&config.data_dir).await?;
        tracing::info!("Document store: {}", store.root().display());

        // 2. Setup credentials, read lazily on each sign in
        if !config.users_path.exists() {
            tracing::warn!(
                "Credentials file {} does not exist, nobody will be able to sign in",
                config.users_path.display()
            );
        }
        let credentials = CredentialStore::new(&config.users_path);

        // 3. Setup session signing key
        let cookie_key = match config.session_secret {
            Some(ref secret) => {
                if secret.len() < MIN_SESSION_SECRET_LEN {
                    return Err(StateSetupError::SessionSecretTooShort);
                }
                Key::derive_from(secret.as_bytes())
            }
            None => {
                tracing::warn!("No session secret configured, sessions will not survive a restart");
                Key::generate()
            }
        };

        Ok(Self {
            store,
            credentials,
            cookie_key,
        })
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }
}

impl FromRef<State> for Key {
    fn from_ref(state: &State) -> Self {
        state.cookie_key.clone()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateSetupError {
    #[error("Document store error: {0}")]
    DocumentStore(#[from] StoreError),
    #[error("Session secret must be at least 32 bytes")]
    SessionSecretTooShort,
}
