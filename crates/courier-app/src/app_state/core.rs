//! CourierApp struct definition and constructor.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use winit::window::Window;

use courier_common::EventBus;
use courier_config::CourierConfig;
use courier_providers::AccountRegistry;
use courier_webview::{UnreadPoller, ViewPool, WrySurfaceFactory};

/// Top-level application state.
pub struct CourierApp {
    pub(super) config: CourierConfig,
    pub(super) registry: Arc<Mutex<AccountRegistry>>,
    pub(super) bus: Arc<EventBus>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Provider views (created once the window exists)
    pub(super) pool: Option<ViewPool<WrySurfaceFactory<Arc<Window>>>>,
    pub(super) poller: UnreadPoller,

    // Whether the app should exit
    pub(super) should_exit: bool,
}

impl CourierApp {
    pub fn new(config: CourierConfig, registry: AccountRegistry) -> Self {
        let bus = Arc::new(EventBus::new(256));
        let poller = UnreadPoller::new(
            Duration::from_millis(config.polling.unread_interval_ms),
            Arc::clone(&bus),
        );
        Self {
            config,
            registry: Arc::new(Mutex::new(registry)),
            bus,
            window: None,
            pool: None,
            poller,
            should_exit: false,
        }
    }

}
