//! Graceful shutdown: stop the poller, then release the surfaces.

use courier_common::Event;

use super::core::CourierApp;

impl CourierApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Stop the unread poller (no tick may run against a surface that is
    ///    being torn down)
    /// 2. Release all session surfaces
    /// 3. Announce shutdown to bus subscribers
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        // 1. Stop the unread poller
        self.poller.stop();

        // 2. Release all session surfaces
        if let Some(pool) = &mut self.pool {
            pool.teardown_all();
        }

        // 3. Announce shutdown
        self.bus.publish(Event::Shutdown);

        self.should_exit = true;
        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use courier_config::CourierConfig;
    use courier_providers::AccountRegistry;

    use crate::app_state::CourierApp;

    fn fresh_app(dir: &tempfile::TempDir) -> CourierApp {
        let registry = AccountRegistry::load(dir.path().join("accounts.json")).unwrap();
        CourierApp::new(CourierConfig::default(), registry)
    }

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = fresh_app(&dir);

        app.shutdown();

        assert!(app.pool.is_none());
        assert!(!app.poller.is_running());
        assert!(app.should_exit);
    }

    #[test]
    fn shutdown_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = fresh_app(&dir);

        app.shutdown();
        app.shutdown(); // second call must not panic

        assert!(!app.poller.is_running());
    }

    #[test]
    fn shutdown_announces_on_the_bus() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = fresh_app(&dir);
        let mut rx = app.bus.subscribe();

        app.shutdown();

        assert!(matches!(
            rx.try_recv().unwrap(),
            courier_common::Event::Shutdown
        ));
    }
}
