//! Paddock configuration for the demo binary, read from TOML.
//!
//! Every key is optional:
//!
//! ```toml
//! circuits = ["monaco", "monza"]
//! manufacturer = "Ferrari"
//! team = "mercedes"
//! race_status = "SAFETY_CAR"
//! json = false
//!
//! [setup]
//! front_wing_angle = 6
//! tyre_pressure_psi = 22.5
//!
//! [setup.engine]
//! mode = "Qualifying"
//! torque_map = [500, 600]
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::abstract_factory::Team;
use crate::builder::Circuit;
use crate::error::{ConfigError, PatternError};
use crate::factory::EngineFactory;
use crate::prototype::CarSetup;
use crate::singleton::RaceStatus;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaddockConfig {
    pub circuits: Vec<String>,
    pub manufacturer: String,
    pub team: String,
    pub race_status: String,
    pub json: bool,
    pub setup: CarSetup,
}

impl Default for PaddockConfig {
    fn default() -> Self {
        Self {
            circuits: vec!["monaco".to_string(), "monza".to_string()],
            manufacturer: "Ferrari".to_string(),
            team: "mercedes".to_string(),
            race_status: RaceStatus::Green.to_string(),
            json: false,
            setup: CarSetup::default(),
        }
    }
}

/// A configuration whose names have all been resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PaddockPlan {
    pub circuits: Vec<Circuit>,
    pub manufacturer: String,
    pub team: Team,
    pub race_status: RaceStatus,
    pub json: bool,
    pub setup: CarSetup,
}

impl PaddockConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("loading paddock config from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(self) -> Result<PaddockPlan, ConfigError> {
        let circuits = self
            .circuits
            .iter()
            .map(|name| name.parse::<Circuit>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| ConfigError::invalid("circuits", err))?;

        let factory = EngineFactory::new();
        if !factory.manufacturers().any(|name| name == self.manufacturer) {
            return Err(ConfigError::invalid(
                "manufacturer",
                PatternError::UnknownManufacturer(self.manufacturer),
            ));
        }

        let team = self
            .team
            .parse::<Team>()
            .map_err(|err| ConfigError::invalid("team", err))?;
        let race_status = self
            .race_status
            .parse::<RaceStatus>()
            .map_err(|err| ConfigError::invalid("race_status", err))?;

        Ok(PaddockPlan {
            circuits,
            manufacturer: self.manufacturer,
            team,
            race_status,
            json: self.json,
            setup: self.setup,
        })
    }
}
