//! Guildhall Server - SpacetimeDB Module
//!
//! Persistent-progression game backend running as a SpacetimeDB module.
//! All durable state lives in tables; every player operation is a
//! reducer, so each start/claim runs as one serialized transaction and
//! clients are thin renderers subscribing to the public tables.

mod convert;
mod reducers;
mod seed;
mod tables;

pub use reducers::*;
pub use tables::*;
