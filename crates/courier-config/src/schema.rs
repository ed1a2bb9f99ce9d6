//! Configuration schema: window, layout chrome, polling cadence, storage.

use std::path::PathBuf;

use courier_common::ConfigError;
use serde::{Deserialize, Serialize};

/// Main window size and behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial window width in logical pixels.
    pub width: u32,
    /// Initial window height in logical pixels.
    pub height: u32,
    /// Static window title.
    pub title: String,
    /// Maximize the window on first show.
    pub maximize: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 670,
            title: "Courier".into(),
            maximize: true,
        }
    }
}

/// Fixed chrome reserved around the provider views.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of the side menu strip reserved on the left edge, in pixels.
    pub side_menu_width: u32,
    /// Height of an optional strip reserved along the top edge, in pixels.
    /// Zero disables it.
    pub top_strip_height: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            side_menu_width: 250,
            top_strip_height: 0,
        }
    }
}

/// Cadence of the unread poller and the page-load automation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Interval between unread probe ticks, in milliseconds.
    pub unread_interval_ms: u64,
    /// Settle delay between a view's first page load and script injection,
    /// in milliseconds.
    pub inject_settle_ms: u64,
    /// Zoom factor applied to each view after its first page load.
    pub page_zoom: f64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            unread_interval_ms: 1000,
            inject_settle_ms: 2000,
            page_zoom: 0.9,
        }
    }
}

/// Where the account store and per-account partitions live.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Override for the data directory. Defaults to the platform data dir
    /// (`~/.local/share/courier` on Linux).
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolve the data directory, honoring the override.
    pub fn data_dir(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|d| d.join("courier"))
            .ok_or_else(|| ConfigError::ParseError("could not determine data directory".into()))
    }

    /// Root directory for per-account browsing partitions.
    pub fn partitions_dir(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.data_dir()?.join("partitions"))
    }

    /// Path of the persisted account registry.
    pub fn accounts_path(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.data_dir()?.join("accounts.json"))
    }
}

/// Top-level Courier configuration.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CourierConfig {
    pub window: WindowConfig,
    pub layout: LayoutConfig,
    pub polling: PollingConfig,
    pub storage: StorageConfig,
}

// =============================================================================
// Tests
// =============================================================================
