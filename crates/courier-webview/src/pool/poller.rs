//! The unread poller.
//!
//! A single logical timer that, each tick, asks every live view to evaluate
//! its provider's unread probe. Requests are issued without awaiting any
//! result — a slow or hung view delays only itself, bounded by next-tick
//! replacement. Results come back through the surface event sink; the
//! poller's flag map de-duplicates them so observers only see transitions.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use courier_common::{AccountId, Event, EventBus};
use tracing::{debug, info};

use crate::surface::{Surface, SurfaceFactory};

use super::ViewPool;

/// Periodic unread-state detection across all live views.
pub struct UnreadPoller {
    interval: Duration,
    running: bool,
    last_tick: Option<Instant>,
    /// Last known unread flag per account — the single source of truth for
    /// de-duplication. Entries live until process shutdown.
    flags: HashMap<AccountId, bool>,
    bus: Arc<EventBus>,
}

impl UnreadPoller {
    pub fn new(interval: Duration, bus: Arc<EventBus>) -> Self {
        Self {
            interval,
            running: false,
            last_tick: None,
            flags: HashMap::new(),
            bus,
        }
    }

    /// Start the poller. Idempotent — a second call while running is a
    /// no-op, so exactly one logical timer is ever active.
    pub fn start(&mut self) {
        if self.running {
            debug!("unread poller already running");
            return;
        }
        self.running = true;
        self.last_tick = None;
        info!(interval_ms = self.interval.as_millis() as u64, "unread poller started");
    }

    /// Stop the poller. Idempotent; safe to call when already stopped.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        info!("unread poller stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Last known unread flag for an account, if any probe has succeeded.
    pub fn flag(&self, account_id: &AccountId) -> Option<bool> {
        self.flags.get(account_id).copied()
    }

    /// Fire a tick when the interval has elapsed. Called eagerly by the
    /// host loop; cancellation is this flag check, not preemption.
    pub fn poll<F: SurfaceFactory>(&mut self, pool: &ViewPool<F>, now: Instant) {
        if !self.running {
            return;
        }
        let due = match self.last_tick {
            None => true,
            Some(t) => now.duration_since(t) >= self.interval,
        };
        if !due {
            return;
        }
        self.last_tick = Some(now);
        self.tick(pool);
    }

    /// Issue a probe request for every live view, without awaiting results.
    /// Views whose provider defines no probe report "no unread" directly.
    pub fn tick<F: SurfaceFactory>(&mut self, pool: &ViewPool<F>) {
        let mut probeless = Vec::new();
        for (account_id, entry) in pool.iter_entries() {
            match entry.provider.unread_probe {
                Some(probe) => {
                    if let Err(e) = entry.surface.request_probe(probe) {
                        // Contained to this view; the next tick tries again.
                        debug!(account_id = %account_id, error = %e, "probe request failed");
                    }
                }
                None => probeless.push(account_id.clone()),
            }
        }
        for account_id in probeless {
            self.handle_result(account_id, false);
        }
    }

    /// Apply a completed probe. Updates the flag map and publishes
    /// `unread_changed` only on transition; the first result for an account
    /// is compared against an implicit `false`.
    pub fn handle_result(&mut self, account_id: AccountId, unread: bool) {
        let previous = self.flags.get(&account_id).copied().unwrap_or(false);
        self.flags.insert(account_id.clone(), unread);

        if unread != previous {
            info!(account_id = %account_id, unread, "unread state changed");
            self.bus.publish(Event::UnreadChanged { account_id, unread });
        }
    }

    /// A probe failed. Prior state is left untouched and nothing is
    /// published — a transient failure must never look like a transition.
    pub fn handle_failure(&self, account_id: &AccountId, reason: &str) {
        debug!(account_id = %account_id, reason, "probe failed");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn poller() -> (UnreadPoller, tokio::sync::broadcast::Receiver<Event>) {
        let bus = Arc::new(EventBus::new(64));
        let rx = bus.subscribe();
        (UnreadPoller::new(Duration::from_millis(1000), bus), rx)
    }

    fn drain_unread(rx: &mut tokio::sync::broadcast::Receiver<Event>) -> Vec<(AccountId, bool)> {
        let mut out = Vec::new();
        while let Ok(event) = rx.try_recv() {
            if let Event::UnreadChanged { account_id, unread } = event {
                out.push((account_id, unread));
            }
        }
        out
    }

    #[test]
    fn start_is_idempotent() {
        let (mut poller, _rx) = poller();
        poller.start();
        poller.start();
        assert!(poller.is_running());
    }

    #[test]
    fn stop_is_idempotent() {
        let (mut poller, _rx) = poller();
        poller.stop();
        poller.start();
        poller.stop();
        poller.stop();
        assert!(!poller.is_running());
    }

    #[test]
    fn events_fire_only_on_transitions() {
        let (mut poller, mut rx) = poller();
        let account = AccountId::from("acct-1");

        for unread in [false, false, true, true, false] {
            poller.handle_result(account.clone(), unread);
        }

        let events = drain_unread(&mut rx);
        assert_eq!(
            events,
            vec![(account.clone(), true), (account.clone(), false)]
        );
    }

    #[test]
    fn first_false_result_records_without_event() {
        let (mut poller, mut rx) = poller();
        let account = AccountId::from("acct-1");

        poller.handle_result(account.clone(), false);

        assert_eq!(poller.flag(&account), Some(false));
        assert!(drain_unread(&mut rx).is_empty());
    }

    #[test]
    fn first_true_result_fires_event() {
        let (mut poller, mut rx) = poller();
        let account = AccountId::from("acct-1");

        poller.handle_result(account.clone(), true);

        assert_eq!(poller.flag(&account), Some(true));
        assert_eq!(drain_unread(&mut rx), vec![(account, true)]);
    }

    #[test]
    fn failure_leaves_state_untouched() {
        let (mut poller, mut rx) = poller();
        let account = AccountId::from("acct-1");

        poller.handle_result(account.clone(), true);
        drain_unread(&mut rx);

        poller.handle_failure(&account, "view not loaded");
        assert_eq!(poller.flag(&account), Some(true));
        assert!(drain_unread(&mut rx).is_empty());
    }

    #[test]
    fn accounts_are_tracked_independently() {
        let (mut poller, mut rx) = poller();
        let a = AccountId::from("acct-a");
        let b = AccountId::from("acct-b");

        poller.handle_result(a.clone(), true);
        poller.handle_result(b.clone(), false);
        poller.handle_result(a.clone(), true);
        poller.handle_result(b.clone(), true);

        let events = drain_unread(&mut rx);
        assert_eq!(events, vec![(a, true), (b, true)]);
    }
}
