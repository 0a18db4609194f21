//! Application Insights telemetry adapter.

pub mod client;
pub mod envelope;

pub use client::AppInsights;
