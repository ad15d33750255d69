//! Command implementations.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial module structure

pub mod lists;
pub mod names;
pub mod screen;
