use clap::Args;

use common::credentials::DEFAULT_HASH_COST;
use common::prelude::{hash_password, CredentialsError};

/// Print a bcrypt hash to paste into the users file
#[derive(Args, Debug, Clone)]
pub struct HashPassword {
    /// Password to hash
    pub password: String,

    /// bcrypt cost factor
    #[arg(long, default_value_t = DEFAULT_HASH_COST)]
    pub cost: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum HashPasswordError {
    #[error("hashing failed: {0}")]
    Failed(#[from] CredentialsError),
}

#[async_trait::async_trait]
impl crate::op::Op for HashPassword {
    type Error = HashPasswordError;
    type Output = String;

    async fn execute(&self, _ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let password = self.password.clone();
        let cost = self.cost;
        let hash = tokio::task::spawn_blocking(move || hash_password(&password, cost))
            .await
            .map_err(|e| CredentialsError::Verification(e.to_string()))??;
        Ok(hash)
    }
}
