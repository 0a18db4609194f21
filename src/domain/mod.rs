//! Order domain: the entity, its wire message and backend variants.

pub mod backend;
pub mod error;
pub mod message;
pub mod order;

pub use backend::{QueueKind, StoreKind};
pub use message::OrderMessage;
pub use order::{Order, OrderId, ProductPartition, OPEN_STATUS, SOURCE_PLACEHOLDER};
