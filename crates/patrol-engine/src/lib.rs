//! Patrol engine: the weight field, the step function, and the tick driver.
//!
//! Every passable cell carries an 8-bit counter of ticks since the agent
//! last stood on it. Each logical step saturate-increments every counter,
//! zeroes the agent's own cell, and moves the agent to the neighbour in its
//! cross-shaped window with the highest counter. Between steps the agent is
//! tweened across a configurable number of display frames.
//!
//! [`PatrolWorld`] owns the whole simulation context. The free functions in
//! [`step`] expose the same three operations over caller-owned state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod config;
pub mod metrics;
pub mod select;
pub mod step;
pub mod weights;
pub mod world;

pub use agent::AgentState;
pub use config::{ConfigError, PatrolConfig, DEFAULT_STEP_INTERVAL};
pub use metrics::StepMetrics;
pub use select::{next_cell, select, Selection};
pub use step::{advance_tick, initialize, interpolated_position, patrol_step, StepOutcome};
pub use weights::{WeightField, MAX_WEIGHT};
pub use world::PatrolWorld;
