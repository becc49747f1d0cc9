//! Factory Method: one creation method picks an [`Engine`] by manufacturer.
//!
//! ```compile_fail
//! use f1_creational_patterns::factory::Engine;
//!
//! let engine = Engine::default();
//! ```

use std::collections::BTreeMap;

use log::debug;

use crate::error::PatternError;

pub trait Engine {
    fn start(&self) -> String;
    fn stop(&self) -> String;
    fn spec(&self) -> String;
}

#[derive(Debug, Default)]
pub struct FerrariEngine;

impl Engine for FerrariEngine {
    fn start(&self) -> String {
        "Bwoah! V6 sounds".to_string()
    }

    fn stop(&self) -> String {
        "Ferrari engine stopped.".to_string()
    }

    fn spec(&self) -> String {
        "Ferrari Engine: 3.0L V6, 620 HP".to_string()
    }
}

#[derive(Debug, Default)]
pub struct MercedesEngine;

impl Engine for MercedesEngine {
    fn start(&self) -> String {
        "Hummm! V6 sounds".to_string()
    }

    fn stop(&self) -> String {
        "Mercedes engine stopped.".to_string()
    }

    fn spec(&self) -> String {
        "Mercedes Engine: 4.0L V6, 603 HP".to_string()
    }
}

type EngineCtor = fn() -> Box<dyn Engine>;

fn ferrari() -> Box<dyn Engine> {
    Box::new(FerrariEngine)
}

fn mercedes() -> Box<dyn Engine> {
    Box::new(MercedesEngine)
}

/// Looks engines up by exact manufacturer name ("Ferrari", "Mercedes").
pub struct EngineFactory {
    engines: BTreeMap<&'static str, EngineCtor>,
}

impl EngineFactory {
    pub fn new() -> Self {
        let mut engines: BTreeMap<&'static str, EngineCtor> = BTreeMap::new();
        engines.insert("Ferrari", ferrari);
        engines.insert("Mercedes", mercedes);
        Self { engines }
    }

    pub fn get_engine(&self, manufacturer: &str) -> Result<Box<dyn Engine>, PatternError> {
        let ctor = self
            .engines
            .get(manufacturer)
            .ok_or_else(|| PatternError::UnknownManufacturer(manufacturer.to_string()))?;
        debug!("engine factory: building {manufacturer} engine");
        Ok(ctor())
    }

    pub fn manufacturers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.engines.keys().copied()
    }
}

impl Default for EngineFactory {
    fn default() -> Self {
        Self::new()
    }
}
