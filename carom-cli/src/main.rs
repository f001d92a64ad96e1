use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use carom_core::diagnostics::format_scenario_error;
use carom_core::runtime::Simulation;
use carom_core::scenario::parse_scenario;
use carom_core::telemetry::sample;
use carom_core::validate_scenario;
use eframe::egui;

mod lab_app;
mod report;

#[derive(Parser)]
#[command(name = "carom")]
#[command(about = "Carom - an interactive 1-D two-body collision lab", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario headless and print the collision report
    Run {
        /// Path to the scenario file
        file: PathBuf,
        /// Override the scenario's step count
        #[arg(long)]
        steps: Option<u32>,
        /// Override the scenario's step size in seconds
        #[arg(long)]
        dt: Option<f32>,
        /// Print one telemetry line per step
        #[arg(long)]
        trace: bool,
    },
    /// Open the interactive lab
    Lab {
        /// Scenario file to load and watch (built-in elastic preset when omitted)
        file: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            file,
            steps,
            dt,
            trace,
        } => run_file(&file, steps, dt, trace),
        Commands::Lab { file } => open_lab(file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_file(
    file: &PathBuf,
    steps: Option<u32>,
    dt: Option<f32>,
    trace: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = fs::read_to_string(file)?;
    let mut scenario = parse_scenario(&source).map_err(|e| format_scenario_error(&e, &source))?;

    // Command-line overrides win over the scenario's simulate line and
    // are validated with it
    scenario.apply_overrides(dt, steps);

    let diagnostics = validate_scenario(&scenario);
    for diagnostic in diagnostics.iter() {
        eprintln!("{}", diagnostic);
    }
    if diagnostics.has_errors() {
        return Err("scenario failed validation".into());
    }

    let (left, right) = scenario.to_bodies();
    let mut sim = Simulation::new(scenario.track, left, right);
    let initial = sample(&sim.world());

    for _ in 0..scenario.schedule.steps {
        sim.step(scenario.schedule.dt, scenario.restitution);
        if trace {
            let s = sample(&sim.world());
            println!(
                "t={:.3}  v1={:+.3}  v2={:+.3}  p={:+.3}  ke={:.3}",
                s.time, s.v1, s.v2, s.total_momentum, s.total_kinetic_energy
            );
        }
    }

    let world = sim.world();
    println!(
        "final: t={:.3} s  left at {:.3} m ({:+.3} m/s)  right at {:.3} m ({:+.3} m/s)",
        world.elapsed,
        world.left.position,
        world.left.velocity,
        world.right.position,
        world.right.velocity
    );
    println!();
    println!(
        "{}",
        report::collision_report(&initial, &sample(&world), scenario.restitution)
    );

    Ok(())
}

fn open_lab(file: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1080.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "carom lab",
        native_options,
        Box::new(move |cc| Ok(Box::new(lab_app::LabApp::new(file, cc)))),
    )?;

    Ok(())
}
