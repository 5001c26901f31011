//! Test doubles for running the validator without real randomness.
//!
//! Scripted random sources force check outcomes and adjustments; the
//! document helpers build descriptors without touching the filesystem.


pub use documents::*;
pub use random::*;
