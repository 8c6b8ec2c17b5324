use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use worms_core::{Command, Worm};
use worms_facade::Facade;

const SUPPORTED_SCENARIO_VERSION: u32 = 1;

/// Worm description and the commands to run against it.
#[derive(Debug, Deserialize)]
pub(crate) struct Scenario {
    version: u32,
    worm: WormParams,
    #[serde(default)]
    actions: Vec<Command>,
}

/// Construction parameters for the scenario's worm.
#[derive(Debug, Deserialize)]
pub(crate) struct WormParams {
    name: String,
    radius: f64,
    direction: f64,
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
}

impl Scenario {
    /// Loads and validates a scenario from a TOML file.
    pub(crate) fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario at {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("invalid scenario at {}", path.display()))
    }

    /// Parses a scenario from TOML contents.
    pub(crate) fn parse(contents: &str) -> Result<Self> {
        let scenario: Self =
            toml::from_str(contents).context("failed to parse scenario toml contents")?;
        if scenario.version != SUPPORTED_SCENARIO_VERSION {
            bail!(
                "unsupported scenario version {}; expected {}",
                scenario.version,
                SUPPORTED_SCENARIO_VERSION
            );
        }
        Ok(scenario)
    }

    /// Commands to apply, in order.
    pub(crate) fn actions(&self) -> &[Command] {
        &self.actions
    }

    /// Creates the scenario's worm through the facade.
    pub(crate) fn spawn(&self, facade: &Facade) -> Result<Worm> {
        let params = &self.worm;
        facade
            .create_worm(params.x, params.y, params.direction, params.radius, &params.name)
            .with_context(|| format!("cannot create worm `{}`", params.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_worm_and_actions() {
        let scenario = Scenario::parse(
            r#"
            version = 1

            [worm]
            name = "Rocky"
            radius = 2.0
            direction = 3.045

            [[actions]]
            kind = "move"
            steps = 5

            [[actions]]
            kind = "turn"
            angle = 1.5

            [[actions]]
            kind = "jump"
            "#,
        )
        .expect("scenario parses");

        assert_eq!(
            scenario.actions().to_vec(),
            vec![
                Command::Move { steps: 5 },
                Command::Turn { angle: 1.5 },
                Command::Jump,
            ]
        );
        let worm = scenario.spawn(&Facade).expect("valid worm");
        assert_eq!(worm.name(), "Rocky");
        assert_eq!(worm.x(), 0.0);
    }

    #[test]
    fn parse_rejects_unknown_version() {
        let error = Scenario::parse(
            r#"
            version = 2

            [worm]
            name = "Rocky"
            radius = 2.0
            direction = 0.0
            "#,
        )
        .expect_err("version 2 is unsupported");
        assert!(error.to_string().contains("unsupported scenario version 2"));
    }

    #[test]
    fn parse_rejects_unknown_action() {
        let result = Scenario::parse(
            r#"
            version = 1

            [worm]
            name = "Rocky"
            radius = 2.0
            direction = 0.0

            [[actions]]
            kind = "fly"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn spawn_reports_invalid_worm() {
        let scenario = Scenario::parse(
            r#"
            version = 1

            [worm]
            name = "joske"
            radius = 2.0
            direction = 0.0
            "#,
        )
        .expect("scenario parses");

        let error = scenario.spawn(&Facade).expect_err("lowercase name");
        assert_eq!(error.to_string(), "cannot create worm `joske`");
        assert!(format!("{error:#}").contains("not a valid worm name"));
    }
}
