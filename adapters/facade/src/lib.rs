#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Delegation layer that exposes worms through a single failure type.
//!
//! Every call is forwarded to [`Worm`]. Failures are re-surfaced as
//! [`ModelError`], which keeps the category of the underlying [`WormError`]
//! so callers can still tell an invalid step count apart from a refusal.

use worms_core::{Worm, WormError, WormErrorKind};

/// Uniform failure reported by the facade.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ModelError {
    kind: WormErrorKind,
    message: String,
}

impl ModelError {
    /// Category of the entity failure that caused this error.
    #[must_use]
    pub const fn kind(&self) -> WormErrorKind {
        self.kind
    }

    /// Human-readable description of the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<WormError> for ModelError {
    fn from(error: WormError) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

/// Stateless entry point that forwards calls to worms.
#[derive(Clone, Copy, Debug, Default)]
pub struct Facade;

impl Facade {
    /// Creates a fully charged worm.
    pub fn create_worm(
        &self,
        x: f64,
        y: f64,
        direction: f64,
        radius: f64,
        name: &str,
    ) -> Result<Worm, ModelError> {
        Ok(Worm::new(name, radius, direction, x, y)?)
    }

    /// Reports whether the worm can afford `steps` steps.
    ///
    /// A negative step count is an error rather than a `false` answer.
    pub fn can_move(&self, worm: &Worm, steps: i64) -> Result<bool, ModelError> {
        Ok(worm.can_move(steps)?)
    }

    /// Moves the worm `steps` steps along its facing direction.
    pub fn move_worm(&self, worm: &mut Worm, steps: i64) -> Result<(), ModelError> {
        Ok(worm.active_move(steps)?)
    }

    /// Reports whether the worm can afford to turn by `angle` radians.
    #[must_use]
    pub fn can_turn(&self, worm: &Worm, angle: f64) -> bool {
        worm.can_turn(angle)
    }

    /// Turns the worm by `angle` radians.
    pub fn turn(&self, worm: &mut Worm, angle: f64) -> Result<(), ModelError> {
        Ok(worm.active_turn(angle)?)
    }

    /// Makes the worm jump.
    pub fn jump(&self, worm: &mut Worm) -> Result<(), ModelError> {
        Ok(worm.jump()?)
    }

    /// Time of flight of a jump from the worm's current state.
    #[must_use]
    pub fn jump_time(&self, worm: &Worm) -> f64 {
        worm.jump_time()
    }

    /// Coordinates of the worm `time` seconds into a jump.
    #[must_use]
    pub fn jump_step(&self, worm: &Worm, time: f64) -> [f64; 2] {
        let position = worm.jump_step(time);
        [position.x(), position.y()]
    }

    /// Horizontal coordinate of the worm.
    #[must_use]
    pub fn x(&self, worm: &Worm) -> f64 {
        worm.x()
    }

    /// Vertical coordinate of the worm.
    #[must_use]
    pub fn y(&self, worm: &Worm) -> f64 {
        worm.y()
    }

    /// Facing angle of the worm.
    #[must_use]
    pub fn orientation(&self, worm: &Worm) -> f64 {
        worm.direction()
    }

    /// Radius of the worm.
    #[must_use]
    pub fn radius(&self, worm: &Worm) -> f64 {
        worm.radius()
    }

    /// Resizes the worm.
    pub fn set_radius(&self, worm: &mut Worm, radius: f64) -> Result<(), ModelError> {
        Ok(worm.set_radius(radius)?)
    }

    /// Smallest radius the worm may have.
    #[must_use]
    pub fn minimal_radius(&self, worm: &Worm) -> f64 {
        worm.minimal_radius()
    }

    /// Action points the worm has left.
    #[must_use]
    pub fn action_points(&self, worm: &Worm) -> u64 {
        worm.action_points()
    }

    /// Action point capacity of the worm.
    #[must_use]
    pub fn max_action_points(&self, worm: &Worm) -> u64 {
        worm.max_action_points()
    }

    /// Name of the worm.
    #[must_use]
    pub fn name<'worm>(&self, worm: &'worm Worm) -> &'worm str {
        worm.name()
    }

    /// Renames the worm.
    pub fn rename(&self, worm: &mut Worm, name: &str) -> Result<(), ModelError> {
        Ok(worm.set_name(name)?)
    }

    /// Mass of the worm.
    #[must_use]
    pub fn mass(&self, worm: &Worm) -> f64 {
        worm.mass()
    }
}
