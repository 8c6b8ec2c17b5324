use serde::Serialize;
use worms_core::{Event, Position, Worm, WormSnapshot};

/// Derived physics of a worm that has not acted yet.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct Inspection {
    /// State of the inspected worm.
    pub(crate) worm: WormSnapshot,
    /// Whether the worm faces the upper half-plane.
    pub(crate) can_jump: bool,
    /// Time of flight, present only when the worm can jump.
    pub(crate) jump_time: Option<f64>,
    /// Landing point, present only when the worm can jump.
    pub(crate) landing: Option<Position>,
}

impl Inspection {
    /// Inspects the provided worm without mutating it.
    pub(crate) fn of(worm: &Worm) -> Self {
        let can_jump = worm.can_jump();
        let jump_time = can_jump.then(|| worm.jump_time());
        Self {
            worm: worm.snapshot(),
            can_jump,
            jump_time,
            landing: jump_time.map(|time| worm.jump_step(time)),
        }
    }

    /// Renders the inspection as human-readable lines.
    pub(crate) fn describe(&self) -> String {
        let mut lines = vec![describe_state(&self.worm)];
        lines.push(format!("mass: {:.3} kg", self.worm.mass));
        match (self.jump_time, self.landing) {
            (Some(time), Some(landing)) if self.can_jump => lines.push(format!(
                "jump: {time:.6} s, lands at ({:.6}, {:.6})",
                landing.x(),
                landing.y()
            )),
            _ => lines.push("jump: facing downwards, cannot jump".to_owned()),
        }
        lines.join("\n")
    }
}

/// Renders the worm's state on a single line.
pub(crate) fn describe_state(snapshot: &WormSnapshot) -> String {
    format!(
        "{} at ({:.6}, {:.6}) facing {:.6} rad, radius {} m, {}/{} AP",
        snapshot.name,
        snapshot.x,
        snapshot.y,
        snapshot.direction,
        snapshot.radius,
        snapshot.action_points,
        snapshot.max_action_points
    )
}

/// Renders a single event on one line.
pub(crate) fn describe_event(event: &Event) -> String {
    match event {
        Event::Moved { from, to, cost } => format!(
            "moved from ({:.6}, {:.6}) to ({:.6}, {:.6}) for {cost} AP",
            from.x(),
            from.y(),
            to.x(),
            to.y()
        ),
        Event::Turned { from, to, cost } => {
            format!("turned from {from:.6} to {to:.6} rad for {cost} AP")
        }
        Event::Jumped {
            from,
            to,
            duration,
            cost,
        } => format!(
            "jumped from ({:.6}, {:.6}) to ({:.6}, {:.6}) in {duration:.6} s for {cost} AP",
            from.x(),
            from.y(),
            to.x(),
            to.y()
        ),
        Event::Renamed { from, to } => format!("renamed from {from} to {to}"),
        Event::Resized {
            from,
            to,
            max_action_points,
            action_points,
        } => format!("resized from {from} m to {to} m, {action_points}/{max_action_points} AP"),
        Event::Rejected { command, reason } => format!("rejected {command:?}: {reason}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worms_core::{Command, WormError};

    #[test]
    fn inspection_omits_jump_when_facing_down() {
        let worm = Worm::new("Jeroen", 0.5, 4.0, 2.0, 1.75).expect("valid worm");
        let inspection = Inspection::of(&worm);
        assert!(!inspection.can_jump);
        assert_eq!(inspection.jump_time, None);
        assert!(inspection.describe().ends_with("cannot jump"));
    }

    #[test]
    fn inspection_reports_landing_point() {
        let worm = Worm::new("Rocky", 2.0, 3.045, 0.0, 0.0).expect("valid worm");
        let inspection = Inspection::of(&worm);
        let landing = inspection.landing.expect("can jump");
        assert!((landing.x() + 1.073_007_217).abs() < 1e-9);
        assert!(landing.y().abs() < 1e-9);
    }

    #[test]
    fn rejected_event_names_reason() {
        let line = describe_event(&Event::Rejected {
            command: Command::Move { steps: -1 },
            reason: WormError::InvalidStepCount(-1),
        });
        assert_eq!(
            line,
            "rejected Move { steps: -1 }: step count -1 is negative"
        );
    }
}
