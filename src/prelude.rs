//! Prelude module for trip_calendar crate.
//!
//! Re-exports the derive macros from derive_more used across the crate.

#[allow(unused_imports)]
pub use derive_more::{Deref, Display, Into};
