//! boundary-cli — dry-run tool for boundary-core
//!
//! Runs boundary overlay operations against the headless recording engine
//! and prints every map call they cause, followed by the boundaries left on
//! the map. Handy for checking what a page will ask the map engine to do.
//!
//! Usage examples
//! --------------
//!
//! - Show the effective configuration
//!   $ boundary-cli config
//!   $ boundary-cli --config map.json config
//!
//! - Load a boundary, twice, to see the replacement
//!   $ boundary-cli load '610604;610607' --fill-color '#00ff00' --repeat 2
//!
//! - Replay a script of operations
//!   $ boundary-cli replay session.json
//!   $ boundary-cli --no-districts replay --detached session.json
//!
//! Logging
//! -------
//!
//! `-v` enables debug logs of the manager's decisions on stderr. `RUST_LOG`
//! takes precedence when set.
mod args;
mod script;

use crate::args::{CliArgs, Commands};
use crate::script::{parse_script, Session, Step, StepOutcome, DEFAULT_SURFACE};
use anyhow::Context;
use boundary_core::MapConfig;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose {
        "boundary_core=debug,boundary_cli=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_outcome(step: &Step, outcome: &StepOutcome) {
    println!("> {step}");
    if outcome.calls.is_empty() && outcome.error.is_none() {
        println!("    (no map calls)");
    }
    for call in &outcome.calls {
        println!("    {call}");
    }
    if let Some(err) = &outcome.error {
        println!("    error: {err}");
    }
}

fn print_summary(session: &Session) {
    let summary = session.summary();
    if !session.manager().is_ready() {
        println!("Map not initialized.");
    } else if summary.is_empty() {
        println!("No boundaries on the map.");
    } else {
        println!("Boundaries on the map ({}):", summary.len());
        for line in summary {
            println!("  {line}");
        }
    }
}

fn run_steps(session: &mut Session, steps: &[Step]) -> usize {
    let mut failures = 0;
    for step in steps {
        let outcome = session.apply(step);
        if outcome.error.is_some() {
            failures += 1;
        }
        print_outcome(step, &outcome);
    }
    failures
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => MapConfig::from_path(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => MapConfig::default(),
    };
    if args.no_districts {
        config.districts.clear();
    }
    tracing::debug!(
        districts = config.districts.len(),
        boundary = ?config.boundary_geocodes,
        "configuration loaded"
    );

    let ready = Step::Ready {
        surface: DEFAULT_SURFACE.to_string(),
    };

    match args.command {
        Commands::Config => {
            println!("{}", config.to_json_pretty()?);
        }

        Commands::Load {
            geocode,
            style,
            repeat,
        } => {
            let load = Step::Load {
                geocode: geocode.into(),
                options: style.to_options(),
            };
            let mut steps = vec![ready];
            steps.extend(std::iter::repeat(load).take(repeat as usize));

            let mut session = Session::new(config);
            let failures = run_steps(&mut session, &steps);
            println!();
            print_summary(&session);
            if failures > 0 {
                anyhow::bail!("{failures} step(s) failed");
            }
        }

        Commands::Replay { script, detached } => {
            let text = std::fs::read_to_string(&script)
                .with_context(|| format!("reading script {}", script.display()))?;
            let parsed = parse_script(&text)
                .with_context(|| format!("parsing script {}", script.display()))?;

            let mut steps = Vec::with_capacity(parsed.len() + 1);
            if !detached {
                steps.push(ready);
            }
            steps.extend(parsed);

            let mut session = Session::new(config);
            let failures = run_steps(&mut session, &steps);
            println!();
            print_summary(&session);
            if failures > 0 {
                anyhow::bail!("{failures} step(s) failed");
            }
        }
    }

    Ok(())
}
