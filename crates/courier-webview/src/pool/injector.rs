//! One-shot page-load automation.
//!
//! When a view finishes its first page load, the pool marks it consumed and
//! arms a delayed injection of the provider's on-load script. The settle
//! delay lets the page's own scripts finish mounting first. One shot per
//! view lifetime: later reloads see the consumed flag and do nothing, so
//! side effects like auto-clicking a "keep me signed in" toggle cannot
//! repeat.

use std::time::{Duration, Instant};

use courier_common::AccountId;
use tracing::{debug, warn};

use crate::events::PageLoadState;
use crate::surface::{Surface, SurfaceFactory};

use super::ViewPool;

pub(crate) struct PendingInjection {
    pub(crate) account_id: AccountId,
    pub(crate) script: &'static str,
    pub(crate) due: Instant,
}

/// Schedules on-load scripts after a settle delay.
pub struct AutomationInjector {
    settle: Duration,
    pending: Vec<PendingInjection>,
}

impl AutomationInjector {
    pub fn new(settle: Duration) -> Self {
        Self {
            settle,
            pending: Vec::new(),
        }
    }

    /// Schedule a script to run `settle` from `now`.
    pub(crate) fn arm(&mut self, account_id: AccountId, script: &'static str, now: Instant) {
        debug!(
            account_id = %account_id,
            settle_ms = self.settle.as_millis() as u64,
            "automation armed"
        );
        self.pending.push(PendingInjection {
            account_id,
            script,
            due: now + self.settle,
        });
    }

    /// Remove and return every injection whose settle delay has elapsed.
    pub(crate) fn take_due(&mut self, now: Instant) -> Vec<PendingInjection> {
        let mut due = Vec::new();
        let mut remaining = Vec::new();
        for pending in self.pending.drain(..) {
            if pending.due <= now {
                due.push(pending);
            } else {
                remaining.push(pending);
            }
        }
        self.pending = remaining;
        due
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub(crate) fn clear(&mut self) {
        self.pending.clear();
    }
}

impl<F: SurfaceFactory> ViewPool<F> {
    /// Apply a page-load event from a view.
    ///
    /// The first `Finished` load consumes the one-shot: the consumed flag is
    /// set before anything fires, the configured page zoom is applied, and
    /// the provider's on-load script (if any) is armed on the injector.
    pub fn handle_page_load(&mut self, account_id: &AccountId, state: PageLoadState, now: Instant) {
        let Some(entry) = self.entries.get_mut(account_id) else {
            return;
        };

        if state != PageLoadState::Finished {
            return;
        }

        if entry.injected {
            debug!(account_id = %account_id, "page reloaded after automation, not re-arming");
            return;
        }
        entry.injected = true;

        if let Err(e) = entry.surface.zoom(self.settings.page_zoom) {
            warn!(account_id = %account_id, error = %e, "failed to apply page zoom");
        }

        if let Some(script) = entry.provider.on_load_script {
            self.injector.arm(account_id.clone(), script, now);
        }
    }

    /// Run every injection whose settle delay has elapsed. Failures are
    /// logged and otherwise ignored; they change no view state.
    pub fn fire_due_injections(&mut self, now: Instant) {
        for pending in self.injector.take_due(now) {
            let Some(entry) = self.entries.get(&pending.account_id) else {
                continue;
            };
            match entry.surface.evaluate_script(pending.script) {
                Ok(()) => debug!(account_id = %pending.account_id, "automation injected"),
                Err(e) => {
                    warn!(
                        account_id = %pending.account_id,
                        error = %e,
                        "automation injection failed"
                    );
                }
            }
        }
    }

    /// How many injections are waiting out their settle delay.
    pub fn pending_injections(&self) -> usize {
        self.injector.pending_len()
    }
}

// =============================================================================
// TESTS
// =============================================================================
