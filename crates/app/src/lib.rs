// Library exports for the cms binary and integration tests

// Service modules (HTTP server, state, process bootstrap)
pub mod daemon;
pub mod version;

// Re-export key types for convenience
pub use daemon::http_server;
pub use daemon::spawn_service;
pub use daemon::ServiceConfig;
pub use daemon::ServiceState;
pub use version::build_info;
