//! Command surface that drives a worm and reports outcomes as events.

use serde::{Deserialize, Serialize};

use crate::{Position, Worm, WormError};

/// Commands that express every permissible worm mutation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Command {
    /// Requests a move of the given number of steps along the facing direction.
    Move {
        /// Number of steps, each one radius long.
        steps: i64,
    },
    /// Requests a turn by the given angle.
    Turn {
        /// Angle in radians, counter-clockwise.
        angle: f64,
    },
    /// Requests a jump that spends every remaining action point.
    Jump,
    /// Requests a new name.
    Rename {
        /// Name to adopt.
        name: String,
    },
    /// Requests a new body radius.
    Resize {
        /// Radius in metres.
        radius: f64,
    },
}

/// Events reported after processing a command.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Confirms that the worm moved.
    Moved {
        /// Position before the move.
        from: Position,
        /// Position after the move.
        to: Position,
        /// Action points spent.
        cost: u64,
    },
    /// Confirms that the worm turned.
    Turned {
        /// Direction before the turn.
        from: f64,
        /// Direction after the turn.
        to: f64,
        /// Action points spent.
        cost: u64,
    },
    /// Confirms that the worm jumped and landed.
    Jumped {
        /// Launch position.
        from: Position,
        /// Landing position.
        to: Position,
        /// Time of flight in seconds.
        duration: f64,
        /// Action points spent, always the whole remaining budget.
        cost: u64,
    },
    /// Confirms that the worm was renamed.
    Renamed {
        /// Previous name.
        from: String,
        /// New name.
        to: String,
    },
    /// Confirms that the worm was resized.
    Resized {
        /// Previous radius.
        from: f64,
        /// New radius.
        to: f64,
        /// Capacity derived from the new radius.
        max_action_points: u64,
        /// Action points left after clamping to the new capacity.
        action_points: u64,
    },
    /// Reports that the worm rejected a command and was left unchanged.
    Rejected {
        /// Command that was rejected.
        command: Command,
        /// Specific reason the command failed.
        reason: WormError,
    },
}

/// Executes `command` against `worm`, pushing exactly one event.
pub fn apply(worm: &mut Worm, command: Command, out_events: &mut Vec<Event>) {
    match execute(worm, &command) {
        Ok(event) => {
            log::debug!("{} applied {command:?}", worm.name());
            out_events.push(event);
        }
        Err(reason) => {
            log::warn!("{} rejected {command:?}: {reason}", worm.name());
            out_events.push(Event::Rejected { command, reason });
        }
    }
}

fn execute(worm: &mut Worm, command: &Command) -> Result<Event, WormError> {
    let points_before = worm.action_points();
    match command {
        Command::Move { steps } => {
            let from = worm.position();
            worm.active_move(*steps)?;
            Ok(Event::Moved {
                from,
                to: worm.position(),
                cost: points_before - worm.action_points(),
            })
        }
        Command::Turn { angle } => {
            let from = worm.direction();
            worm.active_turn(*angle)?;
            Ok(Event::Turned {
                from,
                to: worm.direction(),
                cost: points_before - worm.action_points(),
            })
        }
        Command::Jump => {
            let from = worm.position();
            let duration = worm.jump_time();
            worm.jump()?;
            Ok(Event::Jumped {
                from,
                to: worm.position(),
                duration,
                cost: points_before,
            })
        }
        Command::Rename { name } => {
            let from = worm.name().to_owned();
            worm.set_name(name.as_str())?;
            Ok(Event::Renamed {
                from,
                to: name.clone(),
            })
        }
        Command::Resize { radius } => {
            let from = worm.radius();
            worm.set_radius(*radius)?;
            Ok(Event::Resized {
                from,
                to: *radius,
                max_action_points: worm.max_action_points(),
                action_points: worm.action_points(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, WormErrorKind};

    fn rocky() -> Worm {
        Worm::new("Rocky", 2.0, 3.045, 0.0, 0.0).expect("valid worm")
    }

    #[test]
    fn move_reports_spent_points() {
        let mut worm = rocky();
        let mut events = Vec::new();
        apply(&mut worm, Command::Move { steps: 5 }, &mut events);

        assert_eq!(events.len(), 1);
        match &events[0] {
            Event::Moved { from, to, cost } => {
                assert_eq!(*from, Position::new(0.0, 0.0));
                assert_eq!(*to, worm.position());
                assert_eq!(*cost, 10);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn rejection_carries_command_and_reason() {
        let mut worm = rocky();
        let mut events = Vec::new();
        apply(&mut worm, Command::Move { steps: -5 }, &mut events);

        assert_eq!(
            events,
            vec![Event::Rejected {
                command: Command::Move { steps: -5 },
                reason: WormError::InvalidStepCount(-5),
            }]
        );
        assert_eq!(worm, rocky());
    }

    #[test]
    fn jump_spends_whole_budget() {
        let mut worm = rocky();
        let mut events = Vec::new();
        apply(&mut worm, Command::Jump, &mut events);
        apply(&mut worm, Command::Jump, &mut events);

        match &events[0] {
            Event::Jumped { from, to, cost, .. } => {
                assert_eq!(*cost, 35_588);
                assert_eq!(from.y(), to.y());
            }
            other => panic!("unexpected event: {other:?}"),
        }
        match &events[1] {
            Event::Jumped { cost, duration, .. } => {
                assert_eq!(*cost, 0);
                assert!(*duration > 0.0);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn turn_past_budget_is_rejected() {
        let mut worm = Worm::new("Tiny", 0.25, 0.0, 0.0, 0.0).expect("valid worm");
        let mut events = Vec::new();
        for _ in 0..3 {
            apply(&mut worm, Command::Turn { angle: 3.0 }, &mut events);
        }

        let rejected: Vec<_> = events
            .iter()
            .filter_map(|event| match event {
                Event::Rejected { reason, .. } => Some(reason.kind()),
                _ => None,
            })
            .collect();
        assert_eq!(rejected, vec![WormErrorKind::CannotAct]);
        assert_eq!(worm.action_points(), 70 - 29 - 29);
    }

    #[test]
    fn rename_and_resize_report_new_state() {
        let mut worm = rocky();
        let mut events = Vec::new();
        apply(
            &mut worm,
            Command::Rename {
                name: "Rocky Two".to_owned(),
            },
            &mut events,
        );
        apply(&mut worm, Command::Resize { radius: 1.0 }, &mut events);

        assert_eq!(
            events[0],
            Event::Renamed {
                from: "Rocky".to_owned(),
                to: "Rocky Two".to_owned(),
            }
        );
        assert_eq!(
            events[1],
            Event::Resized {
                from: 2.0,
                to: 1.0,
                max_action_points: 4_448,
                action_points: 4_448,
            }
        );
    }

    #[test]
    fn jump_facing_down_is_rejected() {
        let mut worm = Worm::new("Jeroen", 0.5, 4.0, 2.0, 1.75).expect("valid worm");
        let mut events = Vec::new();
        apply(&mut worm, Command::Jump, &mut events);

        assert_eq!(
            events,
            vec![Event::Rejected {
                command: Command::Jump,
                reason: WormError::CannotAct(Action::Jump),
            }]
        );
    }
}
