//! Range checks for loaded configs.

use courier_common::ConfigError;

use crate::schema::CourierConfig;

/// Validate a loaded config. Returns the first violation found.
pub fn validate(config: &CourierConfig) -> Result<(), ConfigError> {
    if config.window.width == 0 || config.window.height == 0 {
        return Err(ConfigError::ValidationError(
            "window dimensions must be non-zero".into(),
        ));
    }

    if config.layout.side_menu_width >= config.window.width {
        return Err(ConfigError::ValidationError(format!(
            "side_menu_width ({}) must be smaller than window width ({})",
            config.layout.side_menu_width, config.window.width
        )));
    }

    if config.polling.unread_interval_ms < 100 {
        return Err(ConfigError::ValidationError(format!(
            "unread_interval_ms ({}) below minimum of 100",
            config.polling.unread_interval_ms
        )));
    }

    if config.polling.inject_settle_ms > 60_000 {
        return Err(ConfigError::ValidationError(format!(
            "inject_settle_ms ({}) above maximum of 60000",
            config.polling.inject_settle_ms
        )));
    }

    if !(0.25..=5.0).contains(&config.polling.page_zoom) {
        return Err(ConfigError::ValidationError(format!(
            "page_zoom ({}) outside valid range 0.25-5.0",
            config.polling.page_zoom
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&CourierConfig::default()).is_ok());
    }

    #[test]
    fn rejects_zero_window() {
        let mut config = CourierConfig::default();
        config.window.width = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn rejects_side_menu_wider_than_window() {
        let mut config = CourierConfig::default();
        config.layout.side_menu_width = config.window.width;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn rejects_too_fast_polling() {
        let mut config = CourierConfig::default();
        config.polling.unread_interval_ms = 10;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn rejects_excessive_settle_delay() {
        let mut config = CourierConfig::default();
        config.polling.inject_settle_ms = 120_000;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn rejects_out_of_range_zoom() {
        let mut config = CourierConfig::default();
        config.polling.page_zoom = 0.1;
        assert!(validate(&config).is_err());
        config.polling.page_zoom = 10.0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn accepts_boundary_values() {
        let mut config = CourierConfig::default();
        config.polling.unread_interval_ms = 100;
        config.polling.inject_settle_ms = 60_000;
        config.polling.page_zoom = 0.25;
        assert!(validate(&config).is_ok());
        config.polling.page_zoom = 5.0;
        assert!(validate(&config).is_ok());
    }
}
