//! Provider metadata and account registry.
//!
//! - `catalog` is the static table of supported messaging providers:
//!   entry URL, icon, optional user agent, and the per-provider scripts
//!   (unread probe, one-shot page-load automation).
//! - `registry` is the persisted list of user-registered accounts, each a
//!   `(provider type, label)` pair with a stable id.

pub mod catalog;
pub mod registry;

pub use catalog::ProviderType;
pub use registry::{Account, AccountRegistry};
