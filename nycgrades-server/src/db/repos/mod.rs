//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - One connection per call, borrowed from a [`ConnectionProvider`](super::ConnectionProvider)
//! - Statements built by [`query`](super::query), never inline
//! - Errors propagate unchanged after the connection is released

pub mod restaurants;

pub use restaurants::RestaurantRepo;
