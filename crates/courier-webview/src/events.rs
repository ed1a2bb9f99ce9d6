//! Surface event types.
//!
//! Each surface executes its content asynchronously; completions are pushed
//! into a shared sink and drained on the control thread, so pool state is
//! only ever mutated from one place.

use std::sync::{Arc, Mutex};

use courier_common::AccountId;
use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a session surface.
#[derive(Debug, Clone)]
pub enum SurfaceEvent {
    /// Page load state changed. Carries the URL.
    PageLoad {
        account_id: AccountId,
        state: PageLoadState,
        url: String,
    },
    /// An unread probe completed with a boolean result.
    ProbeCompleted { account_id: AccountId, unread: bool },
    /// An unread probe could not produce a result (script error, view not
    /// loaded yet). The poller leaves prior state untouched.
    ProbeFailed { account_id: AccountId, reason: String },
}

/// Shared sink surfaces push into and the control thread drains.
pub type SurfaceEventSink = Arc<Mutex<Vec<SurfaceEvent>>>;

/// Create an empty event sink.
pub fn new_sink() -> SurfaceEventSink {
    Arc::new(Mutex::new(Vec::new()))
}
