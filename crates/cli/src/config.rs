//! Command line configuration

use std::{path::PathBuf, sync::Arc};

use clap::{Args, ValueEnum};
use inventrak_app::{
    api::{ApiConfig, DEFAULT_BASE_URL},
    context::AppContext,
    session::FileSessionStore,
};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level or filter directives (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub(crate) log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub(crate) log_format: LogFormat,
}

/// Settings shared by every command.
#[derive(Debug, Args)]
pub(crate) struct Config {
    /// Inventory backend address
    #[arg(long, env = "INVENTRAK_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub(crate) api_url: String,

    /// Session file, defaults to `inventrak/session.json` in the user data directory
    #[arg(long, env = "INVENTRAK_SESSION_FILE", global = true)]
    pub(crate) session_file: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) logging: LoggingConfig,
}

impl Config {
    /// Backend connection settings.
    pub(crate) fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_url.clone(),
        }
    }

    /// Store holding the session between runs.
    pub(crate) fn session_store(&self) -> FileSessionStore {
        self.session_file
            .as_ref()
            .map_or_else(FileSessionStore::default, FileSessionStore::new)
    }

    /// Connects to the backend and restores the saved session.
    pub(crate) fn context(&self) -> AppContext {
        AppContext::connect(self.api_config(), Arc::new(self.session_store()))
    }
}
