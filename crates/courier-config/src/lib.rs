//! Courier configuration system.
//!
//! TOML-based configuration with full validation. All sections use sensible
//! defaults so partial configs work out of the box.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{default_config_path, load_from_path};
pub use schema::CourierConfig;

use courier_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creating a default if
/// none exists. Out-of-range values are warned about during loading but the
/// parsed config is kept — a bad polling interval must not throw away the
/// user's window size and storage settings.
pub fn load_config() -> Result<CourierConfig, ConfigError> {
    loader::load_default()
}
