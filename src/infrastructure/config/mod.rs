//! Infrastructure configuration modules.

pub mod environment;
pub mod logging;
pub mod queue;
pub mod settings;
pub mod store;
pub mod telemetry;

pub use environment::Environment;
pub use settings::Config;
