//! Patrol configuration, validation, and error types.
//!
//! [`PatrolConfig`] is the builder input for a [`PatrolWorld`](crate::PatrolWorld).
//! [`validate()`](PatrolConfig::validate) checks the start-up preconditions;
//! the world constructor runs it before building any state.

use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;

use patrol_core::Cell;
use patrol_space::{Grid, GridError};

/// Display frames per logical step when none is configured.
pub const DEFAULT_STEP_INTERVAL: u32 = 5;

// ── ConfigError ────────────────────────────────────────────────────

/// Start-up precondition violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The map could not be built.
    Grid(GridError),
    /// Every cell of the grid is blocked.
    NoPassableCells,
    /// The start cell lies outside the grid.
    StartOutOfBounds {
        /// The requested start.
        start: Cell,
        /// Grid rows.
        rows: u32,
        /// Grid columns.
        cols: u32,
    },
    /// The start cell is a wall.
    StartBlocked {
        /// The requested start.
        start: Cell,
    },
    /// `step_interval` is zero.
    ZeroStepInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::NoPassableCells => write!(f, "grid has no passable cells"),
            Self::StartOutOfBounds { start, rows, cols } => {
                write!(f, "start {start} outside {cols}x{rows} grid")
            }
            Self::StartBlocked { start } => write!(f, "start {start} is a wall"),
            Self::ZeroStepInterval => write!(f, "step_interval must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Check that `start` is a usable starting cell on `grid`.
pub(crate) fn validate_start(grid: &Grid, start: Cell) -> Result<(), ConfigError> {
    if grid.passable_count() == 0 {
        return Err(ConfigError::NoPassableCells);
    }
    if !grid.contains(start) {
        return Err(ConfigError::StartOutOfBounds {
            start,
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }
    if !grid.is_passable(start) {
        return Err(ConfigError::StartBlocked { start });
    }
    Ok(())
}

/// Check a raw frame count.
pub(crate) fn validate_interval(step_interval: u32) -> Result<NonZeroU32, ConfigError> {
    NonZeroU32::new(step_interval).ok_or(ConfigError::ZeroStepInterval)
}

// ── PatrolConfig ───────────────────────────────────────────────────

/// Everything needed to start a patrol.
#[derive(Clone, Debug)]
pub struct PatrolConfig {
    /// The map. Immutable for the life of the world.
    pub grid: Grid,
    /// The agent's starting cell. Must be passable.
    pub start: Cell,
    /// Display frames per logical step. Must be at least 1.
    pub step_interval: u32,
}

impl PatrolConfig {
    /// Config with the [`DEFAULT_STEP_INTERVAL`].
    pub fn new(grid: Grid, start: Cell) -> Self {
        Self {
            grid,
            start,
            step_interval: DEFAULT_STEP_INTERVAL,
        }
    }

    /// Parse a map literal and build a config from it.
    pub fn from_map(map: &str, start: Cell) -> Result<Self, ConfigError> {
        Ok(Self::new(Grid::parse(map)?, start))
    }

    /// Override the step interval.
    pub fn with_step_interval(mut self, step_interval: u32) -> Self {
        self.step_interval = step_interval;
        self
    }

    /// Check all start-up preconditions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_start(&self.grid, self.start)?;
        validate_interval(self.step_interval)?;
        Ok(())
    }
}
