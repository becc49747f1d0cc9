//! Walks through every creational pattern in the crate.
//!
//! Run with: cargo run --bin paddock [-- path/to/paddock.toml]

use std::env;
use std::error::Error;

use colored::Colorize;
use env_logger::{Builder, Env};

use f1_creational_patterns::abstract_factory::assemble_power_unit;
use f1_creational_patterns::config::{PaddockConfig, PaddockPlan};
use f1_creational_patterns::factory::EngineFactory;
use f1_creational_patterns::prototype::Prototype;
use f1_creational_patterns::singleton::{RaceControl, RaceStatus};
use f1_creational_patterns::RaceEngineer;

fn heading(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold().cyan());
}

fn builder_demo(plan: &PaddockPlan) -> Result<(), Box<dyn Error>> {
    heading("Builder Pattern");
    let engineer = RaceEngineer::new();
    for circuit in &plan.circuits {
        let mut builder = circuit.builder();
        let car = engineer.build_car(builder.as_mut());
        println!("{} {}", "Setup for".dimmed(), circuit.to_string().yellow());
        if plan.json {
            println!("{}", car.to_json()?);
        } else {
            car.show_specs();
        }
    }
    Ok(())
}

fn factory_demo(plan: &PaddockPlan) -> Result<(), Box<dyn Error>> {
    heading("Factory Method");
    let engine = EngineFactory::new().get_engine(&plan.manufacturer)?;
    println!("  {}", engine.spec());
    println!("  {}", engine.start());
    println!("  {}", engine.stop());
    Ok(())
}

fn abstract_factory_demo(plan: &PaddockPlan) {
    heading("Abstract Factory");
    let factory = plan.team.factory();
    let (sound, battery) = assemble_power_unit(factory.as_ref()).fire_up();
    println!("  {} power unit:", plan.team.to_string().yellow());
    println!("    {sound}");
    println!("    {battery}");
}

fn prototype_demo(plan: &PaddockPlan) {
    heading("Prototype Pattern");
    let lead = &plan.setup;
    let snapshot = lead.clone_prototype();
    let teammate = lead.detuned();

    println!("  Lead driver:  {:?}", lead.engine);
    println!("  Teammate:     {:?}", teammate.engine);
    println!(
        "  Lead setup untouched: {}",
        (*lead == snapshot).to_string().green()
    );
}

fn singleton_demo(plan: &PaddockPlan) {
    heading("Singleton Pattern");
    let control = RaceControl::instance();
    println!("  Initial status: {}", control.status());

    control.set_status(plan.race_status);
    let status = RaceControl::instance().status();
    let flag = match status {
        RaceStatus::Green => status.to_string().green(),
        RaceStatus::Yellow | RaceStatus::SafetyCar => status.to_string().yellow(),
        RaceStatus::Red => status.to_string().red(),
    };
    println!("  Status seen through a second handle: {flag}");
    println!(
        "  Same instance: {}",
        std::ptr::eq(control, RaceControl::instance())
    );

    if let Err(err) = control.update_status("PURPLE") {
        println!("  Rejected flag: {}", err.to_string().red());
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match env::args().nth(1) {
        Some(path) => PaddockConfig::load(path)?,
        None => PaddockConfig::default(),
    };
    let plan = config.validate()?;
    log::info!("paddock plan: {} circuit(s), team {}", plan.circuits.len(), plan.team);

    println!("{}", "Creational Patterns in the Paddock".bold());
    println!("{}", "==================================".bold());

    builder_demo(&plan)?;
    factory_demo(&plan)?;
    abstract_factory_demo(&plan);
    prototype_demo(&plan);
    singleton_demo(&plan);

    Ok(())
}
