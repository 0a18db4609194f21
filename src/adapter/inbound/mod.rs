//! Inbound adapters: the surfaces that drive the application.

pub mod cli;
