//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use courier_common::Rect;

use super::core::CourierApp;
use super::dispatch::Request;

impl ApplicationHandler<Request> for CourierApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_view_bounds();
                }
            }

            WindowEvent::Moved(_) => {
                self.sync_view_bounds();
            }

            _ => {}
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, request: Request) {
        tracing::debug!(?request, "transport request");
        let response = self.handle_request(request);
        if !response.success {
            tracing::warn!(error = ?response.error, "transport request failed");
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl CourierApp {
    /// Reapply the host content area to every view, visible or not.
    fn sync_view_bounds(&mut self) {
        let Some(window) = &self.window else { return };
        let Some(pool) = &mut self.pool else { return };

        let size = window.inner_size();
        pool.update_all_bounds(Rect {
            x: 0.0,
            y: 0.0,
            width: size.width as f64,
            height: size.height as f64,
        });
    }
}
