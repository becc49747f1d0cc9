//! # Creational Design Patterns, Formula 1 edition
//!
//! Each module shows one classic creational pattern on a small F1 example,
//! expressed the way Rust would write it rather than with class hierarchies.
//!
//! ## Patterns Covered
//!
//! 1. **Builder** ([`builder`])
//!    - Trait with required steps plus shared default steps
//!    - Director running a fixed assembly order over `&mut dyn CarBuilder`
//!    - Reset-on-retrieve with `std::mem::take`
//!
//! 2. **Factory Method** ([`factory`])
//!    - Lookup table from manufacturer name to constructor
//!    - Unknown names reported through `Result`
//!
//! 3. **Abstract Factory** ([`abstract_factory`])
//!    - Families of trait objects that always match
//!
//! 4. **Prototype** ([`prototype`])
//!    - Deep copies through `Clone`
//!
//! 5. **Singleton** ([`singleton`])
//!    - `OnceLock` for one-time initialization, `Mutex` for shared state
//!
//! "Abstract" types are traits, so trying to instantiate one is a compile
//! error rather than a runtime failure; each pattern module's docs carry
//! `compile_fail` examples showing it.
//!
//! ## Running the Demo
//!
//! ```bash
//! cargo run --bin paddock
//! RUST_LOG=debug cargo run --bin paddock -- paddock.toml
//! ```

pub mod abstract_factory;
pub mod builder;
pub mod config;
pub mod error;
pub mod factory;
pub mod prototype;
pub mod singleton;

pub use builder::{CarBuilder, Circuit, F1Car, MonacoBuilder, MonzaBuilder, RaceEngineer};
pub use error::{ConfigError, PatternError};
