/// Database configuration and connection management
pub mod database;

/// HTTP server configuration loading from config.toml
pub mod server;
