//! Routes
//!
//! Route handlers organized by functionality.

pub mod charts;
pub mod health;
pub mod page;
pub mod summary;
