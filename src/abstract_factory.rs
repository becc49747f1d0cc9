//! Abstract Factory: each team factory produces a matching power unit family.
//!
//! Client code only sees [`TeamFactory`], so swapping Ferrari for Mercedes
//! never mixes an ICE from one supplier with an ERS from the other.
//!
//! ```compile_fail
//! use f1_creational_patterns::abstract_factory::TeamFactory;
//!
//! let factory: TeamFactory = TeamFactory;
//! ```
//!
//! The parts are abstract too; a bare ICE is not something you can build:
//!
//! ```compile_fail
//! use f1_creational_patterns::abstract_factory::{Ers, Ice};
//!
//! let ice = Ice::default();
//! let ers = Ers::default();
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::PatternError;

/// Internal combustion engine.
pub trait Ice {
    fn start(&self) -> String;
}

/// Energy recovery system.
pub trait Ers {
    fn recover_energy(&self) -> String;
}

pub trait TeamFactory {
    fn create_ice(&self) -> Box<dyn Ice>;
    fn create_ers(&self) -> Box<dyn Ers>;
}

// ============================================================================
// Ferrari family
// ============================================================================

#[derive(Debug)]
pub struct FerrariIce;

impl Ice for FerrariIce {
    fn start(&self) -> String {
        "Ferrari ICE roaring to life!".to_string()
    }
}

#[derive(Debug)]
pub struct FerrariErs;

impl Ers for FerrariErs {
    fn recover_energy(&self) -> String {
        "Ferrari ERS recovering heat energy!".to_string()
    }
}

#[derive(Debug, Default)]
pub struct FerrariFactory;

impl TeamFactory for FerrariFactory {
    fn create_ice(&self) -> Box<dyn Ice> {
        Box::new(FerrariIce)
    }

    fn create_ers(&self) -> Box<dyn Ers> {
        Box::new(FerrariErs)
    }
}

// ============================================================================
// Mercedes family
// ============================================================================

#[derive(Debug)]
pub struct MercedesIce;

impl Ice for MercedesIce {
    fn start(&self) -> String {
        "Mercedes ICE purring smoothly!".to_string()
    }
}

#[derive(Debug)]
pub struct MercedesErs;

impl Ers for MercedesErs {
    fn recover_energy(&self) -> String {
        "Mercedes ERS recovering kinetic energy!".to_string()
    }
}

#[derive(Debug, Default)]
pub struct MercedesFactory;

impl TeamFactory for MercedesFactory {
    fn create_ice(&self) -> Box<dyn Ice> {
        Box::new(MercedesIce)
    }

    fn create_ers(&self) -> Box<dyn Ers> {
        Box::new(MercedesErs)
    }
}

// ============================================================================
// Client
// ============================================================================

pub struct PowerUnit {
    pub ice: Box<dyn Ice>,
    pub ers: Box<dyn Ers>,
}

impl PowerUnit {
    /// Start the ICE and run the ERS, returning what each reports.
    pub fn fire_up(&self) -> (String, String) {
        (self.ice.start(), self.ers.recover_energy())
    }
}

pub fn assemble_power_unit(factory: &dyn TeamFactory) -> PowerUnit {
    debug!("assembling power unit");
    PowerUnit {
        ice: factory.create_ice(),
        ers: factory.create_ers(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Ferrari,
    Mercedes,
}

impl Team {
    pub fn factory(self) -> Box<dyn TeamFactory> {
        match self {
            Team::Ferrari => Box::new(FerrariFactory),
            Team::Mercedes => Box::new(MercedesFactory),
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Ferrari => write!(f, "Ferrari"),
            Team::Mercedes => write!(f, "Mercedes"),
        }
    }
}

impl FromStr for Team {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ferrari" => Ok(Team::Ferrari),
            "mercedes" => Ok(Team::Mercedes),
            _ => Err(PatternError::UnknownTeam(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ferrari_family_integrity() {
        let factory = FerrariFactory;

        assert!(factory.create_ice().start().contains("Ferrari"));
        // Ferrari is known for heat recovery
        assert!(factory.create_ers().recover_energy().contains("heat"));
    }

    #[test]
    fn test_mercedes_family_integrity() {
        let factory = MercedesFactory;

        assert!(factory.create_ice().start().contains("Mercedes"));
        assert!(factory.create_ers().recover_energy().contains("kinetic"));
    }

    #[test]
    fn test_client_decoupling() {
        let (sound, battery) = assemble_power_unit(&FerrariFactory).fire_up();
        assert!(sound.contains("Ferrari"));
        assert!(battery.contains("heat"));

        let (sound, battery) = assemble_power_unit(&MercedesFactory).fire_up();
        assert!(sound.contains("Mercedes"));
        assert!(battery.contains("kinetic"));
    }

    #[test]
    fn test_families_never_mix() {
        for team in [Team::Ferrari, Team::Mercedes] {
            let (sound, battery) = assemble_power_unit(team.factory().as_ref()).fire_up();
            let brand = team.to_string();
            assert!(sound.starts_with(&brand));
            assert!(battery.starts_with(&brand));
        }
    }

    #[test]
    fn test_team_from_str() {
        assert_eq!("Mercedes".parse::<Team>(), Ok(Team::Mercedes));
        assert_eq!("ferrari".parse::<Team>(), Ok(Team::Ferrari));
        assert!("Williams".parse::<Team>().is_err());
    }
}
