//! Prototype Pattern: start a teammate's setup from a copy of an existing one.
//!
//! Cloning in Rust is already a deep copy for owned data, so the prototype
//! trait is a thin, named wrapper over [`Clone`]. A type that cannot be
//! cloned cannot act as a prototype:
//!
//! ```compile_fail
//! use f1_creational_patterns::prototype::Prototype;
//!
//! struct PitBoardSketch;
//!
//! impl Prototype for PitBoardSketch {}
//! ```
//!
//! and the trait itself is never a value you can hold:
//!
//! ```compile_fail
//! use f1_creational_patterns::prototype::Prototype;
//!
//! fn any_setup(setup: Box<dyn Prototype>) {}
//! ```

use serde::{Deserialize, Serialize};

pub trait Prototype: Clone {
    /// An independent copy; nothing reachable from it is shared with `self`.
    fn clone_prototype(&self) -> Self {
        self.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfiguration {
    pub mode: String,
    pub torque_map: Vec<i32>,
}

impl EngineConfiguration {
    pub fn new(mode: impl Into<String>, torque_map: Vec<i32>) -> Self {
        Self {
            mode: mode.into(),
            torque_map,
        }
    }
}

impl Default for EngineConfiguration {
    fn default() -> Self {
        Self::new("Race", vec![100, 200, 300])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarSetup {
    pub front_wing_angle: i32,
    pub tyre_pressure_psi: f64,
    #[serde(default)]
    pub engine: EngineConfiguration,
}

impl CarSetup {
    pub fn new(front_wing_angle: i32, tyre_pressure_psi: f64, engine: EngineConfiguration) -> Self {
        Self {
            front_wing_angle,
            tyre_pressure_psi,
            engine,
        }
    }

    /// Clone this setup with the engine switched to a different mode.
    pub fn with_engine_mode(&self, mode: impl Into<String>) -> Self {
        let mut setup = self.clone_prototype();
        setup.engine.mode = mode.into();
        setup
    }

    /// A fuel saving copy: engine in "Save" mode, first torque step cut to a fifth.
    pub fn detuned(&self) -> Self {
        let mut setup = self.with_engine_mode("Save");
        if let Some(first) = setup.engine.torque_map.first_mut() {
            *first /= 5;
        }
        setup
    }
}

impl Default for CarSetup {
    fn default() -> Self {
        Self::new(4, 21.0, EngineConfiguration::default())
    }
}

impl Prototype for CarSetup {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cloning_creates_new_object() {
        let original = CarSetup::new(4, 21.0, EngineConfiguration::new("Race", vec![100, 200, 300]));
        let cloned = original.clone_prototype();

        assert!(!std::ptr::eq(&original, &cloned));
        assert!(!std::ptr::eq(
            original.engine.torque_map.as_ptr(),
            cloned.engine.torque_map.as_ptr()
        ));
        assert_eq!(original, cloned);
    }

    #[test]
    fn test_deep_copy_independence() {
        let hamilton = CarSetup::new(6, 22.5, EngineConfiguration::new("Qualifying", vec![500, 600]));
        let mut russell = hamilton.clone_prototype();

        russell.engine.mode = "Save".to_string();
        russell.engine.torque_map[0] = 100;

        assert_eq!(hamilton.engine.mode, "Qualifying");
        assert_eq!(hamilton.engine.torque_map[0], 500);
        assert_eq!(russell.engine.mode, "Save");
    }

    #[test]
    fn test_independent_primitive_modification() {
        let setup_a = CarSetup::new(5, 20.0, EngineConfiguration::new("Race", vec![1, 2]));
        let mut setup_b = setup_a.clone_prototype();

        setup_b.front_wing_angle = 10;

        assert_eq!(setup_a.front_wing_angle, 5);
        assert_eq!(setup_b.front_wing_angle, 10);
    }

    #[test]
    fn test_with_engine_mode_leaves_original() {
        let base = CarSetup::default();
        let quali = base.with_engine_mode("Qualifying");

        assert_eq!(base.engine.mode, "Race");
        assert_eq!(quali.engine.mode, "Qualifying");
        assert_eq!(quali.engine.torque_map, base.engine.torque_map);
    }

    #[test]
    fn test_detuned_leaves_lead_setup_when_already_saving() {
        let lead = CarSetup::new(6, 22.5, EngineConfiguration::new("Save", vec![500, 600]));
        let snapshot = lead.clone();

        let teammate = lead.detuned();

        assert_eq!(lead, snapshot);
        assert_eq!(teammate.engine.mode, lead.engine.mode);
        assert_eq!(teammate.engine.torque_map, vec![100, 600]);
    }

    #[test]
    fn test_detuned_with_empty_torque_map() {
        let lead = CarSetup::new(4, 21.0, EngineConfiguration::new("Race", Vec::new()));
        let teammate = lead.detuned();

        assert_eq!(teammate.engine.mode, "Save");
        assert!(teammate.engine.torque_map.is_empty());
    }
}
