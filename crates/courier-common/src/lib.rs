pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, CourierError, RegistryError};
pub use events::{Event, EventBus};
pub use id::{new_id, AccountId};
pub use types::Rect;

pub type Result<T> = std::result::Result<T, CourierError>;
