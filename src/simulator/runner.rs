//! Main simulation runner.
//!
//! Trials share nothing but the draw source, which is consumed in sequence.
//! Outcomes are folded into a [`TrialTally`] as they arrive.

use super::config::SimConfig;
use super::report::SimReport;
use crate::error::Result;
use crate::trial::{play_trial, DoorDraw, RngDraw, TrialOutcome};
use rand::Rng;
use tracing::{debug, error};

/// Running counts for a simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TrialTally {
    pub trials: u64,
    pub wins: u64,
    pub first_pick_hits: u64,
}

impl TrialTally {
    fn record(&mut self, outcome: TrialOutcome) {
        self.trials += 1;
        if outcome.won {
            self.wins += 1;
        }
        if outcome.first_pick_correct {
            self.first_pick_hits += 1;
        }
    }
}

/// Run the full simulation with `rng` and return a report.
pub fn run_simulation<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> Result<SimReport> {
    run_with_draw(config, &mut RngDraw(rng))
}

/// Run the full simulation drawing door indices from `draw`.
///
/// The configuration is validated before the first trial. The first invariant
/// violation aborts the run.
pub fn run_with_draw(config: &SimConfig, draw: &mut impl DoorDraw) -> Result<SimReport> {
    config.validate()?;
    debug!(
        doors = config.doors,
        trials = config.trials,
        switch = config.switch,
        "starting simulation"
    );

    let mut tally = TrialTally::default();
    for trial_idx in 0..config.trials {
        let outcome = play_trial(config.doors, config.switch, draw).inspect_err(|err| {
            error!(trial = trial_idx, %err, "trial aborted");
        })?;
        tally.record(outcome);
    }

    let report = SimReport::from_tally(config, &tally);
    debug!(
        wins = report.wins,
        first_pick_hits = report.first_pick_hits,
        observed = report.win_rate,
        expected = report.expected_win_rate,
        "simulation finished"
    );

    Ok(report)
}

/// Win rate over `trial_count` trials of `door_count` doors, using the thread RNG.
pub fn run(door_count: usize, trial_count: u64, switch: bool) -> Result<f64> {
    let config = SimConfig::new(door_count, trial_count, switch);
    run_simulation(&config, &mut rand::thread_rng()).map(|report| report.win_rate)
}
