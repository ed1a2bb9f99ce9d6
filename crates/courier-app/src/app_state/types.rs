//! Internal constants for the app state module.

use std::time::Duration;

/// How often the control loop wakes to drain surface events, fire due
/// injections, and give the unread poller a chance to tick.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(100);
