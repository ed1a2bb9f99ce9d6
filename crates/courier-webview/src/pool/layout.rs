//! Geometry of provider views within the host window.
//!
//! Views fill the host content area minus the fixed chrome strips. Hidden
//! views get the same bounds as visible ones so they render instantly when
//! shown.

use courier_common::Rect;
use tracing::warn;

use crate::surface::{Surface, SurfaceFactory};

use super::{PoolSettings, ViewPool};

/// The rectangle a provider view occupies for a given host content area.
pub fn view_bounds(host: Rect, settings: &PoolSettings) -> Rect {
    Rect {
        x: host.x + settings.side_menu_width,
        y: host.y + settings.top_strip_height,
        width: (host.width - settings.side_menu_width).max(0.0),
        height: (host.height - settings.top_strip_height).max(0.0),
    }
}

impl<F: SurfaceFactory> ViewPool<F> {
    /// Recompute every live view's bounds against a new host content area.
    ///
    /// Applied to all views regardless of visibility. Idempotent: calling
    /// again with unchanged geometry has no observable effect, so resize and
    /// move handlers call it eagerly instead of diffing.
    pub fn update_all_bounds(&mut self, host: Rect) {
        self.host_rect = host;
        let bounds = view_bounds(host, &self.settings);

        for (account_id, entry) in &self.entries {
            if let Err(e) = entry.surface.set_bounds(bounds) {
                warn!(account_id = %account_id, error = %e, "failed to update view bounds");
            }
        }
    }

    /// The last host content area this pool saw.
    pub fn host_rect(&self) -> Rect {
        self.host_rect
    }
}

// =============================================================================
// TESTS
// =============================================================================
