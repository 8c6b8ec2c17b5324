#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts for a single worm in a side-view artillery game.
//!
//! A [`Worm`] is a circular body with a position, a facing direction, a size
//! and an energy budget expressed in action points. Its mass and action point
//! capacity follow from the radius. Every mutation validates its input first
//! and either succeeds completely or leaves the worm untouched, so the
//! invariants documented on [`Worm`] hold between any two calls.
//!
//! Adapters drive the worm either directly or by submitting [`Command`]
//! values to [`apply`], which reports the outcome as an [`Event`].

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

mod angle;
mod command;
mod error;
mod name;

pub use angle::normalize;
pub use command::{apply, Command, Event};
pub use error::{Action, WormError, WormErrorKind};
pub use name::is_valid_name;

/// Smallest radius, in metres, a worm may have.
pub const MINIMAL_RADIUS: f64 = 0.25;

/// Homogeneous density of a worm body in kg/m³.
pub const DENSITY: f64 = 1062.0;

/// Standard gravitational acceleration in m/s².
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Weight applied to the vertical component of a step's cost.
pub const VERTICAL_STEP_WEIGHT: f64 = 4.0;

/// Action points a full circle is worth when pricing turns.
///
/// Only the shorter arc is ever charged, so the most expensive turn costs
/// half of this.
pub const TURN_COST_PER_CIRCLE: f64 = 60.0;

/// Newtons of jump force contributed by each remaining action point.
pub const JUMP_FORCE_PER_ACTION_POINT: f64 = 5.0;

/// Point in the side-view plane measured in metres.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    /// Creates a new position from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Vertical coordinate, growing upwards.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }
}

/// A single worm and its energy budget.
///
/// Invariants upheld after every operation:
///
/// * `radius >= MINIMAL_RADIUS`
/// * `0 <= direction < 2π`
/// * `action_points <= max_action_points`
/// * the name satisfies [`is_valid_name`]
/// * position, direction and radius are finite
#[derive(Clone, Debug, PartialEq)]
pub struct Worm {
    name: String,
    x: f64,
    y: f64,
    direction: f64,
    radius: f64,
    action_points: u64,
}

impl Worm {
    /// Creates a fully charged worm.
    ///
    /// The direction is normalised into `[0, 2π)` before it is stored.
    pub fn new(
        name: impl Into<String>,
        radius: f64,
        direction: f64,
        x: f64,
        y: f64,
    ) -> Result<Self, WormError> {
        let name = name.into();
        check_radius(radius)?;
        check_name(&name)?;
        check_finite(direction)?;
        check_finite(x)?;
        check_finite(y)?;

        let mut worm = Self {
            name,
            x,
            y,
            direction: normalize(direction),
            radius,
            action_points: 0,
        };
        worm.action_points = worm.max_action_points();
        Ok(worm)
    }

    /// Name of the worm.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Horizontal coordinate in metres.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Vertical coordinate in metres.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Current position of the worm's centre.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Facing angle in radians within `[0, 2π)`.
    #[must_use]
    pub const fn direction(&self) -> f64 {
        self.direction
    }

    /// Body radius in metres.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Lower bound every worm's radius respects.
    #[must_use]
    pub const fn minimal_radius(&self) -> f64 {
        MINIMAL_RADIUS
    }

    /// Mass in kilograms of a homogeneous sphere with the worm's radius.
    #[must_use]
    pub fn mass(&self) -> f64 {
        mass_of(self.radius)
    }

    /// Action points currently available.
    #[must_use]
    pub const fn action_points(&self) -> u64 {
        self.action_points
    }

    /// Capacity of the energy budget, the mass rounded to the nearest integer.
    #[must_use]
    pub fn max_action_points(&self) -> u64 {
        capacity_of(self.radius)
    }

    /// Renames the worm.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), WormError> {
        let name = name.into();
        check_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Moves the worm horizontally.
    pub fn set_x(&mut self, x: f64) -> Result<(), WormError> {
        check_finite(x)?;
        self.x = x;
        Ok(())
    }

    /// Moves the worm vertically.
    pub fn set_y(&mut self, y: f64) -> Result<(), WormError> {
        check_finite(y)?;
        self.y = y;
        Ok(())
    }

    /// Points the worm at `direction`, normalised into `[0, 2π)`.
    pub fn set_direction(&mut self, direction: f64) -> Result<(), WormError> {
        check_finite(direction)?;
        self.direction = normalize(direction);
        Ok(())
    }

    /// Resizes the worm.
    ///
    /// Mass and capacity follow the new radius. When the capacity shrinks
    /// below the current action points, the action points are clamped to it;
    /// growing never grants extra points.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), WormError> {
        check_radius(radius)?;
        self.radius = radius;
        self.action_points = self.action_points.min(self.max_action_points());
        Ok(())
    }

    /// Action points charged for moving `steps` steps in the facing direction.
    ///
    /// Each step costs `ceil(|cos θ| + |4 sin θ|)`, so vertical movement is
    /// up to four times as expensive as horizontal movement. Costs that do not
    /// fit in a `u64` saturate.
    pub fn move_cost(&self, steps: i64) -> Result<u64, WormError> {
        let steps = u64::try_from(steps).map_err(|_| WormError::InvalidStepCount(steps))?;
        let per_step = (self.direction.cos().abs()
            + (VERTICAL_STEP_WEIGHT * self.direction.sin()).abs())
        .ceil() as u64;
        Ok(steps.saturating_mul(per_step))
    }

    /// Reports whether the worm can afford to move `steps` steps.
    pub fn can_move(&self, steps: i64) -> Result<bool, WormError> {
        Ok(self.action_points >= self.move_cost(steps)?)
    }

    /// Moves `steps` steps of one radius each along the facing direction.
    pub fn active_move(&mut self, steps: i64) -> Result<(), WormError> {
        let cost = self.move_cost(steps)?;
        if self.action_points < cost {
            return Err(WormError::CannotAct(Action::Move));
        }

        let distance = steps as f64 * self.radius;
        let x = self.x + distance * self.direction.cos();
        let y = self.y + distance * self.direction.sin();
        check_finite(x)?;
        check_finite(y)?;

        self.x = x;
        self.y = y;
        self.action_points -= cost;
        Ok(())
    }

    /// Action points charged for turning by `angle` radians.
    ///
    /// Only the shorter arc is charged, so turning by `-θ` and `2π - θ` cost
    /// the same. A turn onto the same heading is free. Returns `None` for a
    /// non-finite angle.
    #[must_use]
    pub fn turn_cost(angle: f64) -> Option<u64> {
        if !angle.is_finite() {
            return None;
        }
        let representative = normalize(angle);
        let effective = if representative <= PI {
            representative
        } else {
            TAU - representative
        };
        Some((TURN_COST_PER_CIRCLE / (TAU / effective)).ceil() as u64)
    }

    /// Reports whether the worm can afford to turn by `angle` radians.
    #[must_use]
    pub fn can_turn(&self, angle: f64) -> bool {
        Self::turn_cost(angle).is_some_and(|cost| self.action_points >= cost)
    }

    /// Turns the worm by `angle` radians.
    pub fn active_turn(&mut self, angle: f64) -> Result<(), WormError> {
        let cost = Self::turn_cost(angle).ok_or(WormError::InvalidNumber(angle))?;
        if self.action_points < cost {
            return Err(WormError::CannotAct(Action::Turn));
        }

        self.direction = normalize(self.direction + angle);
        self.action_points -= cost;
        Ok(())
    }

    /// Reports whether the worm faces the upper half-plane and may jump.
    #[must_use]
    pub fn can_jump(&self) -> bool {
        self.direction <= PI
    }

    /// Launch speed in m/s.
    ///
    /// The worm pushes off with `5 * action_points + mass * g` newtons for
    /// half a second.
    #[must_use]
    pub fn initial_velocity(&self) -> f64 {
        let mass = self.mass();
        let force = JUMP_FORCE_PER_ACTION_POINT * self.action_points as f64
            + mass * STANDARD_GRAVITY;
        force / mass / 2.0
    }

    /// Signed horizontal distance covered by a jump from the current state.
    #[must_use]
    pub fn jump_distance(&self) -> f64 {
        self.initial_velocity().powi(2) * (2.0 * self.direction).sin() / STANDARD_GRAVITY
    }

    /// Time of flight, in seconds, until the worm lands at its launch height.
    #[must_use]
    pub fn jump_time(&self) -> f64 {
        (self.jump_distance() / (self.initial_velocity() * self.direction.cos())).abs()
    }

    /// Position of the worm `time` seconds into a jump from the current state.
    #[must_use]
    pub fn jump_step(&self, time: f64) -> Position {
        let velocity = self.initial_velocity();
        Position::new(
            self.x + velocity * self.direction.cos() * time,
            self.y + velocity * self.direction.sin() * time
                - 0.5 * STANDARD_GRAVITY * time.powi(2),
        )
    }

    /// Jumps, landing at the launch height and spending every action point.
    pub fn jump(&mut self) -> Result<(), WormError> {
        if !self.can_jump() {
            return Err(WormError::CannotAct(Action::Jump));
        }

        let landing = self.jump_step(self.jump_time()).x();
        check_finite(landing)?;

        self.x = landing;
        self.action_points = 0;
        Ok(())
    }

    /// Captures a plain-data copy of the worm for reporting.
    #[must_use]
    pub fn snapshot(&self) -> WormSnapshot {
        WormSnapshot {
            name: self.name.clone(),
            x: self.x,
            y: self.y,
            direction: self.direction,
            radius: self.radius,
            mass: self.mass(),
            action_points: self.action_points,
            max_action_points: self.max_action_points(),
        }
    }
}

/// Immutable representation of a worm's state used for reporting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WormSnapshot {
    /// Name of the worm.
    pub name: String,
    /// Horizontal coordinate in metres.
    pub x: f64,
    /// Vertical coordinate in metres.
    pub y: f64,
    /// Facing angle in radians.
    pub direction: f64,
    /// Body radius in metres.
    pub radius: f64,
    /// Mass in kilograms.
    pub mass: f64,
    /// Action points available.
    pub action_points: u64,
    /// Capacity of the energy budget.
    pub max_action_points: u64,
}

fn mass_of(radius: f64) -> f64 {
    DENSITY * (4.0 / 3.0) * PI * radius.powi(3)
}

// Saturates for radii whose mass exceeds u64::MAX.
fn capacity_of(radius: f64) -> u64 {
    mass_of(radius).round() as u64
}

fn check_radius(radius: f64) -> Result<(), WormError> {
    if radius.is_finite() && radius >= MINIMAL_RADIUS {
        Ok(())
    } else {
        Err(WormError::InvalidRadius(radius))
    }
}

fn check_name(name: &str) -> Result<(), WormError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(WormError::InvalidName(name.to_owned()))
    }
}

fn check_finite(value: f64) -> Result<(), WormError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WormError::InvalidNumber(value))
    }
}
