//! Ports Layer
//!
//! Defines the seams the filter depends on:
//! - `KeyedHasher` - the keyed hash that maps items to counter slots
//! - `KeySource` - where fresh hash keys come from

pub mod outbound;

pub use outbound::{KeySource, KeyedHasher};
