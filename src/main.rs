//! Acid-Base Solutions - Entry point
//!
//! Headless diagnostics for the solution model.
//!
//! CLI Usage:
//!   cargo run                                  # Pure water readings
//!   cargo run -- --solution weak-acid          # Default weak acid
//!   cargo run -- --solution weak-base -c 0.1 -s 1e-5 --json

use anyhow::{bail, Context, Result};
use acid_base_solutions::{config::Parameters, model::SolutionsModel, SolutionKind};

/// Simulated time the pH paper is left to float after dipping
const FLOAT_SECONDS: f32 = 1.0;
/// Frame length used to step the float animation
const FRAME_SECONDS: f32 = 1.0 / 60.0;

/// Command line options
struct Args {
    solution: SolutionKind,
    concentration: Option<f64>,
    strength: Option<f64>,
    json: bool,
}

/// Apply the requested solution, dip every tool and print the readings
fn run_diagnostics(args: &Args) -> Result<()> {
    let params = Parameters::load_or_default();
    let mut model = SolutionsModel::new(&params).context("building solution model")?;

    model
        .set_solution_kind(args.solution)
        .with_context(|| format!("selecting {}", args.solution))?;
    if let Some(concentration) = args.concentration {
        model
            .set_concentration(concentration)
            .context("setting concentration")?;
    }
    if let Some(strength) = args.strength {
        model.set_strength(strength).context("setting strength")?;
    }

    model.dip_ph_paper();
    model.dip_probes();

    let frames = (FLOAT_SECONDS / FRAME_SECONDS).round() as usize;
    for _ in 0..frames {
        model.step(FRAME_SECONDS);
    }
    log::debug!("stepped {} frames", frames);

    let snapshot = model.snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("=== Acid-Base Solutions - Diagnostics ===\n");
        println!("{}", snapshot.summary());
    }
    Ok(())
}

fn parse_args() -> Result<Args> {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args {
        solution: SolutionKind::Water,
        concentration: None,
        strength: None,
        json: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--solution" | "-k" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    bail!("--solution needs a value");
                };
                parsed.solution = value.parse().map_err(anyhow::Error::msg)?;
            }
            "-c" | "--concentration" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    bail!("--concentration needs a value");
                };
                parsed.concentration = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid concentration {value:?}"))?,
                );
            }
            "-s" | "--strength" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    bail!("--strength needs a value");
                };
                parsed.strength = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid strength {value:?}"))?,
                );
            }
            "--json" => parsed.json = true,
            "--help" | "-h" => {
                println!("Acid-Base Solutions");
                println!();
                println!("Usage: acid-base-solutions [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --solution, -k KIND     water, strong-acid, weak-acid, strong-base, weak-base");
                println!("  -c, --concentration C   Initial concentration in mol/L (1e-3 .. 1)");
                println!("  -s, --strength K        Ka or Kb of a weak solute (1e-10 .. 1e2)");
                println!("  --json                  Print the snapshot as JSON");
                println!("  --help, -h              Show this help");
                std::process::exit(0);
            }
            other => log::warn!("ignoring unknown argument {other:?}"),
        }
        i += 1;
    }

    Ok(parsed)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args()?;
    log::info!("Acid-Base Solutions diagnostics: {}", args.solution);
    run_diagnostics(&args)
}
