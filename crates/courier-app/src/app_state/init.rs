//! Window creation and view pool setup.

use std::sync::Arc;
use std::time::Duration;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use courier_common::Rect;
use courier_webview::{events, PoolSettings, ViewPool, WrySurfaceFactory};

use super::core::CourierApp;

impl CourierApp {
    /// Create the window, build the view pool, preload every registered
    /// account hidden, and start the unread poller.
    /// Returns `false` if initialization failed and the event loop should
    /// exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(&self.config.window.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ))
            .with_maximized(self.config.window.maximize);

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let partitions_root = match self.config.storage.partitions_dir() {
            Ok(path) => path,
            Err(e) => {
                tracing::error!("Cannot resolve partitions directory: {e}");
                return false;
            }
        };

        let sink = events::new_sink();
        let factory = WrySurfaceFactory::new(
            Arc::clone(&window),
            Arc::clone(&sink),
            partitions_root,
        );

        let settings = PoolSettings {
            side_menu_width: self.config.layout.side_menu_width as f64,
            top_strip_height: self.config.layout.top_strip_height as f64,
            inject_settle: Duration::from_millis(self.config.polling.inject_settle_ms),
            page_zoom: self.config.polling.page_zoom,
        };
        let mut pool = ViewPool::new(factory, Arc::clone(&self.registry), settings, sink);

        let size = window.inner_size();
        pool.update_all_bounds(Rect {
            x: 0.0,
            y: 0.0,
            width: size.width as f64,
            height: size.height as f64,
        });

        // Warm every registered account's view in the background.
        let accounts = self.registry.lock().unwrap().list().to_vec();
        pool.preload_all(&accounts);

        self.window = Some(window);
        self.pool = Some(pool);
        self.poller.start();

        tracing::info!("Window and view pool initialized");
        true
    }
}
