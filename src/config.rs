//! # Configuration Management
//!
//! This module handles loading configuration from environment variables.
//! Configuration is read once at startup and then handed to the components
//! that need it through [`crate::state::AppState`].
//!
//! ## Environment Variables
//! - `HOST`: Server bind address (default: 127.0.0.1)
//! - `PORT`: Server port (default: 4000)
//! - `DATABASE_URL`: SQLite database connection string
//! - `STATIC_DIR`: Directory served under `/static/`
//! - `SESSION_LIFETIME_HOURS`: Inactivity lifetime of a session (default: 12)
//! - `SECURE_COOKIES`: Whether the session cookie carries the `Secure` flag (default: true)
//! - `DEBUG`: Show error detail in 500 responses (default: false)

use anyhow::{Context, Result};
use std::env;

/// Application configuration
///
/// All fields are public for easy access from other modules.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host/IP address to bind to
    /// Examples: "127.0.0.1" (localhost only), "0.0.0.0" (all interfaces)
    pub host: String,

    /// Server port number (1-65535)
    pub port: u16,

    /// SQLite database connection URL
    /// Format: "sqlite:filename.db?mode=rwc"
    /// The "mode=rwc" means: read, write, create if not exists
    pub database_url: String,

    /// Directory holding CSS and other static assets
    pub static_dir: String,

    /// How long a session survives without activity, in hours
    pub session_lifetime_hours: i64,

    /// Send the session cookie over HTTPS only
    ///
    /// Browsers refuse to send `Secure` cookies over plain HTTP, so local
    /// development without TLS needs this turned off.
    pub secure_cookies: bool,

    /// Send the underlying error in 500 response bodies instead of only the
    /// status text. Development only.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 4000,
            database_url: "sqlite:snippetbox.db?mode=rwc".to_string(),
            static_dir: "./ui/static".to_string(),
            session_lifetime_hours: 12,
            secure_cookies: true,
            debug: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads variables from .env file (if present) using dotenvy
    /// 2. Reads each configuration value from environment
    /// 3. Falls back to the defaults if variables aren't set
    /// 4. Returns an error if parsing fails (e.g., invalid port number)
    ///
    /// ## Example .env file
    /// ```text
    /// HOST=127.0.0.1
    /// PORT=4000
    /// DATABASE_URL=sqlite:snippetbox.db?mode=rwc
    /// SECURE_COOKIES=false
    /// ```
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (dotenvy doesn't error if file missing)
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        Ok(Config {
            host: env::var("HOST").unwrap_or(defaults.host),

            port: match env::var("PORT") {
                Ok(port) => port.parse().context("PORT must be a number between 1 and 65535")?,
                Err(_) => defaults.port,
            },

            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),

            static_dir: env::var("STATIC_DIR").unwrap_or(defaults.static_dir),

            session_lifetime_hours: match env::var("SESSION_LIFETIME_HOURS") {
                Ok(hours) => hours
                    .parse()
                    .context("SESSION_LIFETIME_HOURS must be a whole number of hours")?,
                Err(_) => defaults.session_lifetime_hours,
            },

            secure_cookies: match env::var("SECURE_COOKIES") {
                Ok(flag) => flag
                    .parse()
                    .context("SECURE_COOKIES must be either true or false")?,
                Err(_) => defaults.secure_cookies,
            },

            debug: match env::var("DEBUG") {
                Ok(flag) => flag.parse().context("DEBUG must be either true or false")?,
                Err(_) => defaults.debug,
            },
        })
    }

    /// Get the socket address to bind the server to
    ///
    /// Combines host and port into a format suitable for TCP binding.
    /// Example: "127.0.0.1:4000"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
