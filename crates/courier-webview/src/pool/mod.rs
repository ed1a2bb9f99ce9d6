//! The session surface pool and its satellites.
//!
//! `ViewPool` owns every live surface, keyed by account id. All mutations
//! happen on the control thread; surface completions arrive through the
//! shared event sink and are applied when the host loop drains it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use courier_common::{AccountId, Rect};
use courier_providers::{AccountRegistry, ProviderType};

use crate::events::{SurfaceEvent, SurfaceEventSink};
use crate::surface::{Surface, SurfaceFactory};

mod injector;
mod layout;
mod lifecycle;
mod poller;
mod visibility;


pub use injector::AutomationInjector;
pub use layout::view_bounds;
pub use poller::UnreadPoller;

/// Tunables the pool reads from config.
#[derive(Debug, Clone, Copy)]
pub struct PoolSettings {
    /// Width of the side menu strip reserved on the left edge.
    pub side_menu_width: f64,
    /// Height of the optional strip reserved along the top edge.
    pub top_strip_height: f64,
    /// Settle delay between a view's first page load and script injection.
    pub inject_settle: Duration,
    /// Zoom factor applied after the first page load.
    pub page_zoom: f64,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            side_menu_width: 250.0,
            top_strip_height: 0.0,
            inject_settle: Duration::from_millis(2000),
            page_zoom: 0.9,
        }
    }
}

/// One account's live view state.
pub(crate) struct SessionEntry<S: Surface> {
    pub(crate) surface: S,
    pub(crate) provider: &'static ProviderType,
    pub(crate) visible: bool,
    /// Whether the one-shot page-load automation has been consumed. Set when
    /// the first finished load arms the injector, never cleared.
    pub(crate) injected: bool,
}

/// Owns one isolated surface per registered account.
///
/// Entries are created lazily and kept warm for the process lifetime:
/// deleting an account hides its view but does not tear it down, so
/// re-adding the provider skips the expensive cold navigation. The only
/// destructive path is [`ViewPool::teardown_all`] at shutdown.
pub struct ViewPool<F: SurfaceFactory> {
    factory: F,
    registry: Arc<Mutex<AccountRegistry>>,
    entries: HashMap<AccountId, SessionEntry<F::Surface>>,
    visible_account: Option<AccountId>,
    host_rect: Rect,
    settings: PoolSettings,
    injector: AutomationInjector,
    events: SurfaceEventSink,
}

impl<F: SurfaceFactory> ViewPool<F> {
    pub fn new(
        factory: F,
        registry: Arc<Mutex<AccountRegistry>>,
        settings: PoolSettings,
        events: SurfaceEventSink,
    ) -> Self {
        Self {
            factory,
            registry,
            entries: HashMap::new(),
            visible_account: None,
            host_rect: Rect::default(),
            settings,
            injector: AutomationInjector::new(settings.inject_settle),
            events,
        }
    }

    /// How many views are alive.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Whether a view exists for this account.
    pub fn contains(&self, account_id: &AccountId) -> bool {
        self.entries.contains_key(account_id)
    }

    /// Whether this account's view is currently visible. `false` when no
    /// view exists.
    pub fn is_visible(&self, account_id: &AccountId) -> bool {
        self.entries
            .get(account_id)
            .map(|e| e.visible)
            .unwrap_or(false)
    }

    /// Whether this account's one-shot automation has been consumed.
    pub fn is_injected(&self, account_id: &AccountId) -> bool {
        self.entries
            .get(account_id)
            .map(|e| e.injected)
            .unwrap_or(false)
    }

    /// The single foreground account, if any.
    pub fn visible_account(&self) -> Option<&AccountId> {
        self.visible_account.as_ref()
    }

    /// Ids of all live views.
    pub fn account_ids(&self) -> Vec<AccountId> {
        self.entries.keys().cloned().collect()
    }

    /// Drain all pending surface events.
    pub fn drain_events(&self) -> Vec<SurfaceEvent> {
        let mut events = self.events.lock().unwrap();
        std::mem::take(&mut *events)
    }

    pub(crate) fn iter_entries(
        &self,
    ) -> impl Iterator<Item = (&AccountId, &SessionEntry<F::Surface>)> {
        self.entries.iter()
    }
}
