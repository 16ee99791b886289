use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Args;

use crate::state::{AppConfig, AppState};

#[derive(Args, Debug, Clone)]
pub struct Init {
    /// HTML server listen address (default: 0.0.0.0:4567)
    #[arg(long)]
    pub listen_addr: Option<SocketAddr>,

    /// Document directory (default: <config path>/data)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Directory for log files (logs to stdout only if not set)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("init failed: {0}")]
    StateFailed(#[from] crate::state::StateError),
}

#[async_trait::async_trait]
impl crate::op::Op for Init {
    type Error = InitError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            listen_addr: self.listen_addr.unwrap_or(defaults.listen_addr),
            data_dir: self.data_dir.clone().unwrap_or(defaults.data_dir),
            log_dir: self.log_dir.clone(),
            ..defaults
        };

        let state = AppState::init(ctx.config_path.clone(), Some(config))?;

        let output = format!(
            "Initialized cms directory at: {}\n\
             - Config: {}\n\
             - Documents: {}\n\
             - Users: {}\n\
             - Listen address: {}\n\
             Add a user with `cms hash-password <password>` and an entry in the users file.",
            state.cms_dir.display(),
            state.config_path.display(),
            state.data_dir().display(),
            state.users_path().display(),
            state.config.listen_addr,
        );

        Ok(output)
    }
}
