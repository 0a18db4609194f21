//! Application services orchestrating domain logic over ports.

pub mod capture;
pub mod telemetry;

pub use capture::{CaptureSettings, OrderCapture};
pub use telemetry::Telemetry;
