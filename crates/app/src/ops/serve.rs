use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Args;

use cms::daemon::process::ServiceError;
use cms::{spawn_service, ServiceConfig};

use crate::state::AppState;

#[derive(Args, Debug, Clone)]
pub struct Serve {
    /// Override the configured listen address
    #[arg(long)]
    pub listen_addr: Option<SocketAddr>,

    /// Override the configured document directory
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Override the configured credentials file
    #[arg(long = "users")]
    pub users_path: Option<PathBuf>,

    /// Default log level, RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,
}

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("state error: {0}")]
    StateError(#[from] crate::state::StateError),

    #[error("service failed: {0}")]
    Failed(#[from] ServiceError),
}

#[async_trait::async_trait]
impl crate::op::Op for Serve {
    type Error = ServeError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let state = AppState::load(ctx.config_path.clone())?;

        let config = ServiceConfig {
            listen_addr: self.listen_addr.unwrap_or(state.config.listen_addr),
            data_dir: self.data_dir.clone().unwrap_or_else(|| state.data_dir()),
            users_path: self.users_path.clone().unwrap_or_else(|| state.users_path()),
            session_secret: state.config.session_secret.clone(),
            log_level: self.log_level,
            log_dir: state.log_dir(),
        };

        spawn_service(&config).await?;
        Ok("cms stopped".to_string())
    }
}
