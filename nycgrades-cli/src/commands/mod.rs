//! Command implementations for the nycgrades CLI

pub mod serve;

pub use serve::run_serve;
