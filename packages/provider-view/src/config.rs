use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, ViewError};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
pub const DEFAULT_NOTIFICATION_MS: u64 = 5000;

/// View configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    /// Rows per page. Fixed for the lifetime of a session.
    pub items_per_page: usize,
    /// How long a notification stays up before it is dismissed automatically.
    pub notification_duration: Duration,
    /// JSON file holding the provider records. `None` uses the built-in sample set.
    pub data_path: Option<PathBuf>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            notification_duration: Duration::from_millis(DEFAULT_NOTIFICATION_MS),
            data_path: None,
        }
    }
}

impl ViewConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let items_per_page = match var("PROVIDERS_PAGE_SIZE") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                ViewError::Config(format!("PROVIDERS_PAGE_SIZE must be a number, got {raw:?}"))
            })?,
            None => DEFAULT_ITEMS_PER_PAGE,
        };

        let notification_ms = match var("PROVIDERS_TOAST_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ViewError::Config(format!("PROVIDERS_TOAST_MS must be a number, got {raw:?}"))
            })?,
            None => DEFAULT_NOTIFICATION_MS,
        };

        let data_path = var("PROVIDERS_DATA")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        let config = Self {
            items_per_page,
            notification_duration: Duration::from_millis(notification_ms),
            data_path,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.items_per_page == 0 {
            return Err(ViewError::Config(
                "items per page must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
