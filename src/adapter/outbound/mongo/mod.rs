//! MongoDB adapter (also serves CosmosDB's MongoDB API).

pub mod store;
pub mod target;

pub use store::MongoOrderStore;
pub use target::MongoTarget;
