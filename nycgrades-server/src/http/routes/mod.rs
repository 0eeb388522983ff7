//! Route handlers organized by resource

pub mod cuisines;
pub mod health;
pub mod restaurants;
