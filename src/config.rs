//! Server configuration.
//!
//! Every setting can come from a command line flag or an environment
//! variable, flags taking precedence:
//! - `RESPONDER_HOST` - Interface to bind (default: `127.0.0.1`)
//! - `RESPONDER_PORT` - Port for the HTTP API (default: `3009`)
//! - `RESPONDER_STORAGE` - Path of the question document (default: `questions.json`)

use std::path::PathBuf;

use clap::Args;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3009;
pub const DEFAULT_STORAGE_PATH: &str = "questions.json";

/// Location of the question document.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct StorageArgs {
    /// Path of the JSON document holding all questions
    #[arg(short = 's', long = "storage", env = "RESPONDER_STORAGE", default_value = DEFAULT_STORAGE_PATH)]
    pub path: PathBuf,
}

impl Default for StorageArgs {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}

/// Everything needed to start the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, env = "RESPONDER_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port for HTTP API
    #[arg(short, long, env = "RESPONDER_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[command(flatten)]
    pub storage: StorageArgs,
}

impl ServerConfig {
    /// Socket address in `host:port` form, ready for `TcpListener::bind`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            storage: StorageArgs::default(),
        }
    }
}
