//! raypatrol: a dynamic patrol simulation.
//!
//! A single agent walks a fixed grid map, always stepping to the
//! neighbouring cell it has visited least recently. There is no route and
//! no pathfinding graph; the patrol emerges from a per-cell
//! ticks-since-visit counter.
//!
//! This is the facade crate that re-exports the public API from all
//! raypatrol sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use raypatrol::prelude::*;
//!
//! let map = "
//!     #...#
//!     #.#..
//!     .....
//! ";
//! let config = PatrolConfig::from_map(map, Cell::new(1, 0))
//!     .unwrap()
//!     .with_step_interval(4);
//! let mut world = PatrolWorld::new(config).unwrap();
//!
//! for _ in 0..40 {
//!     if let StepOutcome::Committed { from, to, .. } = world.advance_tick() {
//!         assert_eq!(from.manhattan(to), 1);
//!     }
//!     let (_x, _y) = world.interpolated_position();
//! }
//! assert_eq!(world.current_tick(), TickId(40));
//! assert_eq!(world.metrics().steps, 10);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `patrol-core` | `Cell`, `TickId`, interpolation, fingerprints |
//! | [`space`] | `patrol-space` | `Grid`, map parsing, `CrossWindow` |
//! | [`engine`] | `patrol-engine` | Weight field, patrol step, `PatrolWorld` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: cells, tick ids, interpolation (`patrol-core`).
pub use patrol_core as types;

/// Grids, map literals, and scan windows (`patrol-space`).
pub use patrol_space as space;

/// Weight field, step function, and world driver (`patrol-engine`).
pub use patrol_engine as engine;

/// Common imports for working with raypatrol.
///
/// ```rust
/// use raypatrol::prelude::*;
/// ```
pub mod prelude {
    pub use patrol_core::{interpolate, lerp, Cell, TickId};
    pub use patrol_engine::{
        advance_tick, initialize, interpolated_position, AgentState, ConfigError, PatrolConfig,
        PatrolWorld, StepMetrics, StepOutcome, WeightField, DEFAULT_STEP_INTERVAL, MAX_WEIGHT,
    };
    pub use patrol_space::{Grid, GridError, Passability};
}
