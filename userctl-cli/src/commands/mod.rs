//! Command implementations for userctl

pub mod serve;

pub use serve::run_serve;
