use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use axum_extra::extract::cookie::Key;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use cms::daemon::config::DEFAULT_PORT;

pub const APP_NAME: &str = "cms";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const USERS_FILE_NAME: &str = "users.toml";
pub const DATA_DIR_NAME: &str = "data";

const USERS_FILE_HEADER: &str = "\
# username = \"bcrypt hash\"
# generate a hash with `cms hash-password <password>`
";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the HTML server listens on
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,
    /// Document directory, relative paths resolve against the cms directory
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Credentials file, relative paths resolve against the cms directory
    #[serde(default = "default_users_path")]
    pub users_path: PathBuf,
    /// Master secret for session cookies, at least 32 bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_secret: Option<String>,
    /// Directory for daily rolling log files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT)
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DATA_DIR_NAME)
}

fn default_users_path() -> PathBuf {
    PathBuf::from(USERS_FILE_NAME)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            data_dir: default_data_dir(),
            users_path: default_users_path(),
            session_secret: None,
            log_dir: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Path to the cms directory (~/.cms)
    pub cms_dir: PathBuf,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Loaded configuration
    pub config: AppConfig,
}

impl AppState {
    /// Get the cms directory path (custom or default ~/.cms)
    pub fn cms_dir(custom_path: Option<PathBuf>) -> Result<PathBuf, StateError> {
        if let Some(path) = custom_path {
            return Ok(path);
        }

        let home = dirs::home_dir().ok_or(StateError::NoHomeDirectory)?;
        Ok(home.join(format!(".{}", APP_NAME)))
    }

    /// Initialize a new cms directory with an empty document
    ///  directory, an empty credentials file and a config
    ///  carrying a freshly generated session secret.
    pub fn init(custom_path: Option<PathBuf>, config: Option<AppConfig>) -> Result<Self, StateError> {
        let cms_dir = Self::cms_dir(custom_path)?;

        if cms_dir.join(CONFIG_FILE_NAME).exists() {
            return Err(StateError::AlreadyInitialized);
        }

        fs::create_dir_all(&cms_dir)?;

        let mut config = config.unwrap_or_default();
        if config.session_secret.is_none() {
            config.session_secret = Some(generate_session_secret());
        }

        let state = Self {
            config_path: cms_dir.join(CONFIG_FILE_NAME),
            cms_dir,
            config,
        };

        fs::create_dir_all(state.data_dir())?;

        let users_path = state.users_path();
        if !users_path.exists() {
            fs::write(&users_path, USERS_FILE_HEADER)?;
        }

        let config_toml = toml::to_string_pretty(&state.config)?;
        fs::write(&state.config_path, config_toml)?;

        Ok(state)
    }

    /// Load existing state from the cms directory
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self, StateError> {
        let cms_dir = Self::cms_dir(custom_path)?;

        if !cms_dir.exists() {
            return Err(StateError::NotInitialized);
        }

        let config_path = cms_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Err(StateError::MissingFile(CONFIG_FILE_NAME.to_string()));
        }

        let config_toml = fs::read_to_string(&config_path)?;
        let config: AppConfig = toml::from_str(&config_toml)?;

        Ok(Self {
            cms_dir,
            config_path,
            config,
        })
    }

    pub fn data_dir(&self) -> PathBuf {
        self.resolve(&self.config.data_dir)
    }

    pub fn users_path(&self) -> PathBuf {
        self.resolve(&self.config.users_path)
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.config.log_dir.as_deref().map(|dir| self.resolve(dir))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cms_dir.join(path)
        }
    }
}

/// 64 random bytes from the cookie key generator, base64 encoded
fn generate_session_secret() -> String {
    URL_SAFE_NO_PAD.encode(Key::generate().master())
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("cms directory not initialized. Run 'cms init' first")]
    NotInitialized,

    #[error("cms directory already initialized")]
    AlreadyInitialized,

    #[error("no home directory found")]
    NoHomeDirectory,

    #[error("missing required file: {0}")]
    MissingFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}
