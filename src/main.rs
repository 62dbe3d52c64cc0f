//! Monty Hall simulator CLI.
//!
//! Usage:
//!   montyhall [OPTIONS]
//!
//! Examples:
//!   montyhall                      # 100 trials, 3 doors, always switch
//!   montyhall -l 10 -t 100000      # 10 doors
//!   montyhall -t 100000 -c false   # never switch
//!
//! Diagnostics go to stderr and follow `RUST_LOG` (default `warn`).

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use montyhall::build_info;
use montyhall::simulator::{run_simulation, SimConfig};
use montyhall::SimError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Monte Carlo simulation of the Monty Hall puzzle
#[derive(Parser, Debug)]
#[command(name = "montyhall")]
#[command(version = build_info::LONG_VERSION)]
struct Args {
    /// Number of doors per trial
    #[arg(short, long, default_value_t = 3)]
    length: usize,

    /// Number of trials to run
    #[arg(short, long, default_value_t = 100)]
    times: u64,

    /// Switch to the other remaining door after the host's reveal
    #[arg(
        short,
        long,
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true",
        overrides_with = "no_change"
    )]
    change: bool,

    /// Keep the first pick after the host's reveal
    #[arg(long, overrides_with = "change")]
    no_change: bool,
}

impl From<&Args> for SimConfig {
    fn from(args: &Args) -> Self {
        SimConfig::new(args.length, args.times, args.change && !args.no_change)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = SimConfig::from(&args);
    match run_simulation(&config, &mut rand::thread_rng()) {
        Ok(report) => {
            print!("{}", report.to_text());
            ExitCode::SUCCESS
        }
        Err(SimError::Config(err)) => Args::command()
            .error(ErrorKind::ValueValidation, err)
            .exit(),
        Err(err) => {
            tracing::error!(%err, "simulation aborted");
            ExitCode::FAILURE
        }
    }
}
