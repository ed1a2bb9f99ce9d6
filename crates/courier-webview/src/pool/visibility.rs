//! Show/hide and the single foreground account.

use courier_common::AccountId;
use tracing::{debug, warn};

use crate::surface::{Surface, SurfaceFactory};

use super::ViewPool;

impl<F: SurfaceFactory> ViewPool<F> {
    /// Bring an account's view to the foreground. No-op when no view exists.
    pub fn show(&mut self, account_id: &AccountId) {
        let Some(entry) = self.entries.get_mut(account_id) else {
            debug!(account_id = %account_id, "show: no view for account");
            return;
        };

        if let Err(e) = entry.surface.set_visible(true) {
            warn!(account_id = %account_id, error = %e, "failed to show view");
            return;
        }
        entry.visible = true;
        self.visible_account = Some(account_id.clone());
        debug!(account_id = %account_id, "view shown");
    }

    /// Hide an account's view. Clears the foreground marker when it pointed
    /// at this account. The view stays alive — hiding is how account
    /// deletion keeps the session warm for a fast re-add.
    pub fn hide(&mut self, account_id: &AccountId) {
        let Some(entry) = self.entries.get_mut(account_id) else {
            debug!(account_id = %account_id, "hide: no view for account");
            return;
        };

        if let Err(e) = entry.surface.set_visible(false) {
            warn!(account_id = %account_id, error = %e, "failed to hide view");
            return;
        }
        entry.visible = false;
        if self.visible_account.as_ref() == Some(account_id) {
            self.visible_account = None;
        }
        debug!(account_id = %account_id, "view hidden");
    }
}
