//! The cooperative schedule: drain surface events, fire timers, sleep.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use courier_webview::SurfaceEvent;

use super::core::CourierApp;
use super::types::POLL_INTERVAL;

impl CourierApp {
    /// Run one round of polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        self.process_surface_events(now);

        if let Some(pool) = &mut self.pool {
            pool.fire_due_injections(now);
            self.poller.poll(pool, now);
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(now + POLL_INTERVAL));
    }

    /// Apply completions queued by the surfaces since the last wake-up.
    fn process_surface_events(&mut self, now: Instant) {
        let Some(pool) = &mut self.pool else { return };

        for event in pool.drain_events() {
            match event {
                SurfaceEvent::PageLoad {
                    account_id,
                    state,
                    url,
                } => {
                    tracing::debug!(account_id = %account_id, ?state, url = %url, "page load");
                    pool.handle_page_load(&account_id, state, now);
                }
                SurfaceEvent::ProbeCompleted { account_id, unread } => {
                    self.poller.handle_result(account_id, unread);
                }
                SurfaceEvent::ProbeFailed { account_id, reason } => {
                    self.poller.handle_failure(&account_id, &reason);
                }
            }
        }
    }
}
