//! # Runtime Configuration
//!
//! Resolves where jokes are stored, which API to call, and the retry cap.
//! Precedence: command-line flag, then environment variable, then default.
//!
//! | Setting            | Flag             | Environment                | Default                      |
//! |--------------------|------------------|----------------------------|------------------------------|
//! | storage file       | `--storage`      | `CHUCK_STORAGE_PATH`       | `<data dir>/chuck/storage.json` |
//! | API base URL       | `--api-url`      | `CHUCK_API_URL`            | `https://api.chucknorris.io` |
//! | request timeout    |                  | `CHUCK_TIMEOUT_SECS`       | 10                           |
//! | fetch attempts     | `--max-attempts` | `CHUCK_MAX_FETCH_ATTEMPTS` | 10                           |

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Args;

use chuck_app::{AppContext, DEFAULT_MAX_FETCH_ATTEMPTS};
use chuck_client::{ChuckApiConfig, ChuckClient, ConfigError};
use chuck_store::FileKeyValueStore;

/// Flags shared by every subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct GlobalArgs {
    /// Storage file holding the saved jokes.
    #[arg(long, global = true, value_name = "PATH")]
    pub storage: Option<PathBuf>,

    /// Base URL of the jokes API.
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Maximum fetches per "fetch" when the API keeps returning saved jokes.
    #[arg(long, global = true, value_name = "N")]
    pub max_attempts: Option<u32>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub storage_path: PathBuf,
    pub api: ChuckApiConfig,
    pub max_fetch_attempts: u32,
}

impl CliConfig {
    /// Resolve settings from flags, falling back to the environment.
    pub fn resolve(args: &GlobalArgs) -> Result<Self, ConfigError> {
        let mut api = ChuckApiConfig::from_env()?;
        if let Some(raw) = &args.api_url {
            api = api.with_base_url(raw)?;
        }

        let storage_path = match &args.storage {
            Some(path) => path.clone(),
            None => std::env::var_os("CHUCK_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(FileKeyValueStore::default_path),
        };

        let max_fetch_attempts = match args.max_attempts {
            Some(n) => n,
            None => attempts_from_env()?,
        };

        Ok(Self {
            storage_path,
            api,
            max_fetch_attempts,
        })
    }

    /// Build the application context: a file-backed store and the HTTP
    /// joke source.
    pub fn into_context(self) -> anyhow::Result<AppContext> {
        tracing::debug!(
            storage = %self.storage_path.display(),
            api = %self.api.base_url,
            max_fetch_attempts = self.max_fetch_attempts,
            "building application context"
        );
        let client = ChuckClient::new(self.api).context("failed to build HTTP client")?;
        let store = FileKeyValueStore::new(self.storage_path);
        Ok(AppContext::new(Arc::new(store), Arc::new(client))
            .with_max_fetch_attempts(self.max_fetch_attempts))
    }
}

fn attempts_from_env() -> Result<u32, ConfigError> {
    match std::env::var("CHUCK_MAX_FETCH_ATTEMPTS") {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            ConfigError::InvalidNumber("CHUCK_MAX_FETCH_ATTEMPTS".to_string(), raw)
        }),
        Err(_) => Ok(DEFAULT_MAX_FETCH_ATTEMPTS),
    }
}
