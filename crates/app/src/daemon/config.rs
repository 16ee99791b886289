use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Port the HTML server listens on unless configured otherwise
pub const DEFAULT_PORT: u16 = 4567;

#[derive(Debug, Clone)]
pub struct Config {
    // http server configuration
    /// address for the HTML server to listen on
    pub listen_addr: SocketAddr,

    // document configuration
    /// directory holding every document, created if missing
    pub data_dir: PathBuf,
    /// toml file mapping usernames to bcrypt hashes
    pub users_path: PathBuf,

    // session configuration
    /// master secret for signing session cookies (at least 32 bytes).
    ///  if not set a random key is generated and sessions
    ///  are lost on restart
    pub session_secret: Option<String>,

    // logging
    pub log_level: tracing::Level,
    /// Directory for log files (optional, logs to stdout only if not set)
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)), DEFAULT_PORT),
            data_dir: PathBuf::from("data"),
            users_path: PathBuf::from("users.toml"),
            session_secret: None,
            log_level: tracing::Level::INFO,
            log_dir: None,
        }
    }
}
