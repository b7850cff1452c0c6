//! Core types for the raypatrol dynamic patrol simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the coordinate and tick identifiers shared by every other crate, the
//! two-point interpolation used to tween the agent between cells, and the
//! FNV-1a fingerprint used by determinism checks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod hash;
pub mod id;
pub mod interp;

pub use hash::Fingerprint;
pub use id::{Cell, TickId};
pub use interp::{interpolate, lerp, phase_fraction, to_pixels};
