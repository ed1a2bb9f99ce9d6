//! Provider view management.
//!
//! Owns the lifecycle of per-account embedded webviews:
//! - One isolated surface per account (own cookie/storage partition)
//! - Warm views: hidden on account deletion, never destroyed early
//! - Geometry kept in sync with the host window minus the side menu strip
//! - A periodic unread poller that probes every view without blocking on any
//! - One-shot page-load automation per view
//!
//! The pool is generic over a [`surface::SurfaceFactory`] so its behavior is
//! testable without a display; `wry_backend` is the production factory.

pub mod events;
pub mod pool;
pub mod surface;
pub mod wry_backend;

pub use events::{PageLoadState, SurfaceEvent, SurfaceEventSink};
pub use pool::{AutomationInjector, PoolSettings, UnreadPoller, ViewPool};
pub use surface::{Surface, SurfaceConfig, SurfaceError, SurfaceFactory};
pub use wry_backend::WrySurfaceFactory;
