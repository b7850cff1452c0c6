//! Spatial data structures for raypatrol.
//!
//! This crate defines the immutable passability [`Grid`] the agent patrols
//! and the [`CrossWindow`] neighbourhood the patrol step scans.
//!
//! # Maps
//!
//! Grids are usually built from a map literal via [`Grid::parse`], one
//! line per row, `#` for walls and `.` for floor. The grid never changes
//! after construction.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod window;

pub use error::GridError;
pub use grid::{Grid, Passability, FLOOR, WALL};
pub use window::CrossWindow;
