//! Failure taxonomy reported by worm operations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::MINIMAL_RADIUS;

/// Actions that consume action points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Stepping along the facing direction.
    Move,
    /// Rotating in place.
    Turn,
    /// Launching along a ballistic trajectory.
    Jump,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move => write!(f, "move"),
            Self::Turn => write!(f, "turn"),
            Self::Jump => write!(f, "jump"),
        }
    }
}

/// Reasons a worm rejects a construction, query or mutation.
///
/// A rejected operation never leaves the worm partially updated.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum WormError {
    /// The radius is below the lower bound or not finite.
    #[error("radius {0} must be a finite value of at least {min} m", min = MINIMAL_RADIUS)]
    InvalidRadius(f64),
    /// The name does not satisfy the identifier rule.
    #[error("`{0}` is not a valid worm name")]
    InvalidName(String),
    /// A coordinate or angle is not finite.
    #[error("{0} is not a finite number")]
    InvalidNumber(f64),
    /// A movement was requested with a negative number of steps.
    #[error("step count {0} is negative")]
    InvalidStepCount(i64),
    /// The worm lacks the action points, or the orientation, for the action.
    #[error("worm cannot {0} in its current state")]
    CannotAct(Action),
}

impl WormError {
    /// Returns the fieldless category of the error.
    #[must_use]
    pub const fn kind(&self) -> WormErrorKind {
        match self {
            Self::InvalidRadius(_) => WormErrorKind::InvalidRadius,
            Self::InvalidName(_) => WormErrorKind::InvalidName,
            Self::InvalidNumber(_) => WormErrorKind::InvalidNumber,
            Self::InvalidStepCount(_) => WormErrorKind::InvalidStepCount,
            Self::CannotAct(_) => WormErrorKind::CannotAct,
        }
    }
}

/// Category of a [`WormError`] without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WormErrorKind {
    /// See [`WormError::InvalidRadius`].
    InvalidRadius,
    /// See [`WormError::InvalidName`].
    InvalidName,
    /// See [`WormError::InvalidNumber`].
    InvalidNumber,
    /// See [`WormError::InvalidStepCount`].
    InvalidStepCount,
    /// See [`WormError::CannotAct`].
    CannotAct,
}
