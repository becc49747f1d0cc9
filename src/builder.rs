//! Builder Pattern: stepwise assembly of an [`F1Car`].
//!
//! A [`RaceEngineer`] drives any [`CarBuilder`] through a fixed sequence of
//! steps. The concrete builders only decide *which* parts go on the car; the
//! order of assembly lives in the engineer.
//!
//! `CarBuilder` is a trait, so there is nothing to instantiate on its own:
//!
//! ```compile_fail
//! use f1_creational_patterns::builder::CarBuilder;
//!
//! let builder = CarBuilder::new();
//! ```
//!
//! and a builder that skips one of the required steps is rejected as well:
//!
//! ```compile_fail
//! use f1_creational_patterns::builder::{CarBuilder, F1Car};
//!
//! struct HalfBuilder {
//!     car: F1Car,
//! }
//!
//! impl CarBuilder for HalfBuilder {
//!     fn car_mut(&mut self) -> &mut F1Car {
//!         &mut self.car
//!     }
//!
//!     fn build_chassis(&mut self) {
//!         self.car.set_chassis("Garage Monocoque");
//!     }
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::Serialize;

use crate::error::PatternError;

/// Power unit fitted by every builder unless it says otherwise.
pub const DEFAULT_ENGINE: &str = "V6 Turbo";

const SPECS_HEADER: &str = "--- F1 Car Configuration ---";
const SPECS_FOOTER: &str = "---------------------------";

// ============================================================================
// Product
// ============================================================================

/// A car configuration. Every part starts out unset.
///
/// The wings are only ever fitted as a pair through [`F1Car::set_wings`], so a
/// car never ends up with a front wing from one package and no rear wing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct F1Car {
    chassis: Option<String>,
    engine: Option<String>,
    front_wing: Option<String>,
    rear_wing: Option<String>,
    tires: Option<String>,
}

impl F1Car {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fully specified car, mostly useful for displaying known values.
    pub fn with_parts(
        chassis: impl Into<String>,
        engine: impl Into<String>,
        front_wing: impl Into<String>,
        rear_wing: impl Into<String>,
        tires: impl Into<String>,
    ) -> Self {
        Self {
            chassis: Some(chassis.into()),
            engine: Some(engine.into()),
            front_wing: Some(front_wing.into()),
            rear_wing: Some(rear_wing.into()),
            tires: Some(tires.into()),
        }
    }

    pub fn chassis(&self) -> Option<&str> {
        self.chassis.as_deref()
    }

    pub fn engine(&self) -> Option<&str> {
        self.engine.as_deref()
    }

    pub fn front_wing(&self) -> Option<&str> {
        self.front_wing.as_deref()
    }

    pub fn rear_wing(&self) -> Option<&str> {
        self.rear_wing.as_deref()
    }

    pub fn tires(&self) -> Option<&str> {
        self.tires.as_deref()
    }

    pub fn set_chassis(&mut self, chassis: impl Into<String>) {
        self.chassis = Some(chassis.into());
    }

    pub fn set_engine(&mut self, engine: impl Into<String>) {
        self.engine = Some(engine.into());
    }

    pub fn set_wings(&mut self, front: impl Into<String>, rear: impl Into<String>) {
        self.front_wing = Some(front.into());
        self.rear_wing = Some(rear.into());
    }

    pub fn set_tires(&mut self, tires: impl Into<String>) {
        self.tires = Some(tires.into());
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn is_complete(&self) -> bool {
        self.chassis.is_some()
            && self.engine.is_some()
            && self.front_wing.is_some()
            && self.rear_wing.is_some()
            && self.tires.is_some()
    }

    /// Print the configuration sheet to stdout.
    pub fn show_specs(&self) {
        println!("{self}");
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn part(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("None")
}

impl fmt::Display for F1Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SPECS_HEADER}")?;
        writeln!(f, "Chassis:    {}", part(&self.chassis))?;
        writeln!(f, "Engine:     {}", part(&self.engine))?;
        writeln!(f, "Front Wing: {}", part(&self.front_wing))?;
        writeln!(f, "Rear Wing:  {}", part(&self.rear_wing))?;
        writeln!(f, "Tires:      {}", part(&self.tires))?;
        write!(f, "{SPECS_FOOTER}")
    }
}

// ============================================================================
// Builder abstraction
// ============================================================================

/// Assembles one [`F1Car`] at a time.
///
/// Implementors hold the car under construction and expose it through
/// [`CarBuilder::car_mut`]; resetting, the shared engine step and handing the
/// result over are provided here.
pub trait CarBuilder {
    fn car_mut(&mut self) -> &mut F1Car;

    /// Throw away whatever is on the stand and start from a bare car.
    fn reset(&mut self) {
        *self.car_mut() = F1Car::new();
    }

    fn build_chassis(&mut self);

    fn build_engine(&mut self) {
        self.car_mut().set_engine(DEFAULT_ENGINE);
    }

    /// Fit the front and rear wing of one aero package.
    fn build_wings(&mut self);

    fn build_tires(&mut self);

    /// Hand over the assembled car. The builder holds a bare car again as soon
    /// as this returns.
    fn get_result(&mut self) -> F1Car {
        std::mem::take(self.car_mut())
    }
}

// ============================================================================
// Concrete builders
// ============================================================================

/// High downforce setup for slow, tight street circuits.
#[derive(Debug, Default)]
pub struct MonacoBuilder {
    car: F1Car,
}

impl MonacoBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CarBuilder for MonacoBuilder {
    fn car_mut(&mut self) -> &mut F1Car {
        &mut self.car
    }

    fn build_chassis(&mut self) {
        self.car.set_chassis("Monaco Carbon Monocoque");
    }

    fn build_wings(&mut self) {
        self.car
            .set_wings("High Downforce Front Wing", "High Downforce Rear Wing");
    }

    fn build_tires(&mut self) {
        self.car.set_tires("Soft Tires");
    }
}

/// Low drag setup for the long straights of Monza.
#[derive(Debug, Default)]
pub struct MonzaBuilder {
    car: F1Car,
}

impl MonzaBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CarBuilder for MonzaBuilder {
    fn car_mut(&mut self) -> &mut F1Car {
        &mut self.car
    }

    fn build_chassis(&mut self) {
        self.car.set_chassis("Monza Carbon Monocoque");
    }

    fn build_wings(&mut self) {
        self.car.set_wings("Low Drag Front Wing", "Low Drag Rear Wing");
    }

    fn build_tires(&mut self) {
        self.car.set_tires("Hard Tires");
    }
}

// ============================================================================
// Circuit presets
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Circuit {
    Monaco,
    Monza,
}

impl Circuit {
    pub const ALL: [Circuit; 2] = [Circuit::Monaco, Circuit::Monza];

    /// The builder carrying this circuit's preset.
    pub fn builder(self) -> Box<dyn CarBuilder> {
        match self {
            Circuit::Monaco => Box::new(MonacoBuilder::new()),
            Circuit::Monza => Box::new(MonzaBuilder::new()),
        }
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Circuit::Monaco => write!(f, "Monaco"),
            Circuit::Monza => write!(f, "Monza"),
        }
    }
}

impl FromStr for Circuit {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monaco" => Ok(Circuit::Monaco),
            "monza" => Ok(Circuit::Monza),
            _ => Err(PatternError::UnknownCircuit(s.to_string())),
        }
    }
}

// ============================================================================
// Director
// ============================================================================

/// Runs the assembly sequence on whatever builder it is handed.
#[derive(Debug, Default, Clone, Copy)]
pub struct RaceEngineer;

impl RaceEngineer {
    pub fn new() -> Self {
        Self
    }

    /// Reset, then chassis, engine, wings and tires, in that order.
    ///
    /// The reset always runs so nothing left over from an earlier, unfinished
    /// job ends up on the new car.
    pub fn construct_car(&self, builder: &mut dyn CarBuilder) {
        debug!("race engineer: starting full build");
        builder.reset();
        builder.build_chassis();
        builder.build_engine();
        builder.build_wings();
        builder.build_tires();
        debug!("race engineer: build sequence complete");
    }

    pub fn build_car(&self, builder: &mut dyn CarBuilder) -> F1Car {
        self.construct_car(builder);
        builder.get_result()
    }
}

// ============================================================================
// Tests
// ============================================================================
