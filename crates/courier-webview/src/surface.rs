//! The surface seam: what the pool needs from an embedded browser view.
//!
//! Production surfaces wrap `wry` (see `wry_backend`); tests substitute a
//! scriptable fake. The pool only ever talks to these traits.

use courier_common::{AccountId, Rect};

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("surface backend error: {0}")]
    Backend(String),

    #[error("script evaluation error: {0}")]
    Script(String),
}

/// Everything needed to create one account's surface.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// URL to start loading immediately.
    pub url: String,
    /// Custom user agent, when the provider type requires one.
    pub user_agent: Option<String>,
    /// Storage partition name. Deterministic per account, so a restart
    /// reattaches the same cookie/storage partition.
    pub partition: String,
}

/// A live, isolated rendering surface backing one account.
///
/// All methods are issued from the control thread; the surface executes its
/// content on its own schedule and reports completions through the shared
/// event sink it was created with.
pub trait Surface {
    /// Position + size within the host window.
    fn set_bounds(&self, bounds: Rect) -> Result<(), SurfaceError>;

    fn set_visible(&self, visible: bool) -> Result<(), SurfaceError>;

    /// Fire-and-forget script evaluation. Completion is not observed.
    fn evaluate_script(&self, js: &str) -> Result<(), SurfaceError>;

    /// Fire-and-forget probe evaluation. The boolean result — or the
    /// failure — arrives later as a `SurfaceEvent` through the sink.
    fn request_probe(&self, probe: &str) -> Result<(), SurfaceError>;

    /// Page zoom factor.
    fn zoom(&self, scale: f64) -> Result<(), SurfaceError>;
}

/// Creates surfaces attached to the host window.
pub trait SurfaceFactory {
    type Surface: Surface;

    fn create(
        &mut self,
        account_id: &AccountId,
        config: &SurfaceConfig,
    ) -> Result<Self::Surface, SurfaceError>;
}
