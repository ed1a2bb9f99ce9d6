//! View creation, preload, and shutdown teardown.

use courier_common::AccountId;
use courier_providers::{catalog, Account};
use tracing::{error, info, warn};

use crate::surface::{Surface, SurfaceConfig, SurfaceFactory};

use super::{layout, SessionEntry, ViewPool};

impl<F: SurfaceFactory> ViewPool<F> {
    /// Create the view for an account if it does not exist yet.
    ///
    /// Idempotent: an existing view returns immediately — no re-creation,
    /// no bounds reset, no re-navigation. A dangling account or provider
    /// type reference is logged and skipped, never fatal.
    pub fn ensure(&mut self, account_id: &AccountId, initially_visible: bool) {
        if self.entries.contains_key(account_id) {
            return;
        }

        let account = {
            let registry = self.registry.lock().unwrap();
            registry.get(account_id).cloned()
        };
        let Some(account) = account else {
            warn!(account_id = %account_id, "ensure: account not in registry");
            return;
        };

        let Some(provider) = catalog::get(&account.provider_type_id) else {
            warn!(
                account_id = %account_id,
                provider = %account.provider_type_id,
                "ensure: unknown provider type"
            );
            return;
        };

        let config = SurfaceConfig {
            url: provider.entry_url.to_string(),
            user_agent: provider.user_agent.map(str::to_string),
            partition: format!("account-{account_id}"),
        };

        let surface = match self.factory.create(account_id, &config) {
            Ok(surface) => surface,
            Err(e) => {
                error!(account_id = %account_id, error = %e, "failed to create surface");
                return;
            }
        };

        let bounds = layout::view_bounds(self.host_rect, &self.settings);
        if let Err(e) = surface.set_bounds(bounds) {
            warn!(account_id = %account_id, error = %e, "failed to set initial bounds");
        }
        if let Err(e) = surface.set_visible(initially_visible) {
            warn!(account_id = %account_id, error = %e, "failed to set initial visibility");
        }

        self.entries.insert(
            account_id.clone(),
            SessionEntry {
                surface,
                provider,
                visible: initially_visible,
                injected: false,
            },
        );

        info!(
            account_id = %account_id,
            provider = provider.id,
            visible = initially_visible,
            "session surface created"
        );
    }

    /// Create hidden views for every given account, tolerating individual
    /// failures — one bad account must not abort the remaining preloads.
    pub fn preload_all(&mut self, accounts: &[Account]) {
        for account in accounts {
            self.ensure(&account.id, false);
        }
        info!(count = self.entries.len(), "preload complete");
    }

    /// Release every surface. The only destructive path; called once at
    /// process shutdown, after the poller has stopped.
    pub fn teardown_all(&mut self) {
        let count = self.entries.len();
        self.injector.clear();
        self.visible_account = None;
        self.entries.clear();
        info!(count, "all session surfaces released");
    }
}
