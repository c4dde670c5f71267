//! Common utilities for the Trellis layout engine.
//!
//! This crate provides shared infrastructure used by all layout components:
//! - **Warning System** - deduplicated reporting of rejected input and
//!   degraded layout through the `log` facade

pub mod warning;

pub use warning::{clear_warnings, warn_once, was_warned};
