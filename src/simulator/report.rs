//! Simulation report generation.

use super::config::SimConfig;
use super::runner::TrialTally;
use crate::trial::expected_win_rate;
use serde::Serialize;

const SEPARATOR: &str = "=====================================================================";

/// Aggregated results of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimReport {
    pub doors: usize,
    pub trials: u64,
    pub switch: bool,

    pub wins: u64,
    /// Trials whose initial pick was already the prize
    pub first_pick_hits: u64,

    /// Fraction of trials won, in `[0, 1]`
    pub win_rate: f64,
    /// What the puzzle predicts for this door count and policy
    pub expected_win_rate: f64,
}

impl SimReport {
    /// Build a report from a finished tally. `config` must already be validated.
    pub(crate) fn from_tally(config: &SimConfig, tally: &TrialTally) -> Self {
        debug_assert!(tally.trials > 0, "report built from an empty tally");
        let trials = tally.trials as f64;

        Self {
            doors: config.doors,
            trials: tally.trials,
            switch: config.switch,
            wins: tally.wins,
            first_pick_hits: tally.first_pick_hits,
            win_rate: tally.wins as f64 / trials,
            expected_win_rate: expected_win_rate(config.doors, config.switch),
        }
    }

    pub fn losses(&self) -> u64 {
        self.trials - self.wins
    }

    pub fn win_rate_percent(&self) -> f64 {
        self.win_rate * 100.0
    }

    /// Render the console report: separators around a condition and a result line.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str(SEPARATOR);
        report.push_str("\n\n");
        report.push_str(&format!(
            "Condition: doors: {}, trials: {}, switch after reveal: {}\n",
            self.doors,
            self.trials,
            if self.switch { "yes" } else { "no" }
        ));
        report.push_str(&format!(
            "Result: win rate {:.2}%\n",
            self.win_rate_percent()
        ));
        report.push('\n');
        report.push_str(SEPARATOR);
        report.push('\n');

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
