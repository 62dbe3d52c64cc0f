//! Stage functions for a trial.
//!
//! Each stage consumes the door set of the previous one and returns a new one:
//! generate → pick → eliminate → (switch) → resolve.

use super::types::{Door, DoorDraw, RngDraw, TrialOutcome};
use crate::error::{ConfigError, InvariantViolation, Result};
use rand::Rng;

/// Builds `count` unchosen doors with the prize behind one uniformly drawn index.
pub fn generate_doors(count: usize, draw: &mut impl DoorDraw) -> Vec<Door> {
    let prize = draw.draw(count);
    (0..count).map(|i| Door::new(i == prize)).collect()
}

/// Marks one uniformly drawn door as the player's pick. May land on the prize.
pub fn pick_door(doors: Vec<Door>, draw: &mut impl DoorDraw) -> Vec<Door> {
    let pick = draw.draw(doors.len());
    doors
        .into_iter()
        .enumerate()
        .map(|(i, door)| if i == pick { door.chosen() } else { door })
        .collect()
}

/// Host reveals every loser except one, leaving the prize and one loser.
///
/// If the player holds the prize, the surviving loser is drawn uniformly from
/// all losers. Otherwise the player's own door is the surviving loser.
pub fn eliminate(
    doors: Vec<Door>,
    draw: &mut impl DoorDraw,
) -> Result<Vec<Door>, InvariantViolation> {
    let holds_prize = doors.iter().any(|d| d.is_prize && d.is_chosen);

    let survivors: Vec<Door> = if holds_prize {
        let losers: Vec<usize> = doors
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_loser())
            .map(|(i, _)| i)
            .collect();
        let kept = if losers.is_empty() {
            None
        } else {
            Some(losers[draw.draw(losers.len())])
        };

        doors
            .into_iter()
            .enumerate()
            .filter(|(i, d)| d.is_prize || Some(*i) == kept)
            .map(|(_, d)| d)
            .collect()
    } else {
        doors
            .into_iter()
            .filter(|d| d.is_prize || d.is_chosen)
            .collect()
    };

    if survivors.len() != 2 {
        return Err(InvariantViolation::SurvivorCount {
            actual: survivors.len(),
        });
    }
    let prizes = survivors.iter().filter(|d| d.is_prize).count();
    if prizes != 1 {
        return Err(InvariantViolation::PrizeCount { actual: prizes });
    }

    Ok(survivors)
}

/// Moves the pick to the other survivor.
pub fn switch_pick(doors: Vec<Door>) -> Vec<Door> {
    doors.into_iter().map(Door::toggled).collect()
}

pub fn resolve(doors: &[Door]) -> Result<bool, InvariantViolation> {
    doors
        .iter()
        .find(|d| d.is_chosen)
        .map(|d| d.is_prize)
        .ok_or(InvariantViolation::UnresolvedPick)
}

/// Plays one full trial, reporting whether the first pick was already correct.
///
/// A single door is necessarily the prize and necessarily picked, so
/// elimination is skipped and the trial is won whatever `switch` says.
pub fn play_trial(
    door_count: usize,
    switch: bool,
    draw: &mut impl DoorDraw,
) -> Result<TrialOutcome> {
    if door_count == 0 {
        return Err(ConfigError::NoDoors.into());
    }

    let doors = generate_doors(door_count, draw);
    if doors.len() != door_count {
        return Err(InvariantViolation::DoorCountMismatch {
            expected: door_count,
            actual: doors.len(),
        }
        .into());
    }

    let doors = pick_door(doors, draw);
    let first_pick_correct = doors.iter().any(|d| d.is_prize && d.is_chosen);

    if door_count == 1 {
        return Ok(TrialOutcome {
            won: true,
            first_pick_correct,
        });
    }

    let mut doors = eliminate(doors, draw)?;
    if switch {
        doors = switch_pick(doors);
    }

    Ok(TrialOutcome {
        won: resolve(&doors)?,
        first_pick_correct,
    })
}

/// Plays one trial with `rng` and returns whether it was won.
pub fn run_trial<R: Rng + ?Sized>(door_count: usize, switch: bool, rng: &mut R) -> Result<bool> {
    play_trial(door_count, switch, &mut RngDraw(rng)).map(|outcome| outcome.won)
}

/// Win rate the puzzle predicts for `door_count` doors.
pub fn expected_win_rate(door_count: usize, switch: bool) -> f64 {
    match door_count {
        0 => 0.0,
        1 => 1.0,
        n if switch => (n - 1) as f64 / n as f64,
        n => 1.0 / n as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;
    use std::collections::VecDeque;

    /// Replays a fixed list of indices.
    struct Scripted(VecDeque<usize>);

    impl Scripted {
        fn new(indices: &[usize]) -> Self {
            Self(indices.iter().copied().collect())
        }
    }

    impl DoorDraw for Scripted {
        fn draw(&mut self, upper: usize) -> usize {
            let index = self.0.pop_front().expect("script exhausted");
            assert!(index < upper, "scripted {index} out of range {upper}");
            index
        }
    }

    fn doors(spec: &[(bool, bool)]) -> Vec<Door> {
        spec.iter()
            .map(|&(is_chosen, is_prize)| Door {
                is_chosen,
                is_prize,
            })
            .collect()
    }

    #[test]
    fn test_generate_places_single_prize() {
        let generated = generate_doors(5, &mut Scripted::new(&[3]));
        assert_eq!(generated.len(), 5);
        assert!(generated[3].is_prize);
        assert_eq!(generated.iter().filter(|d| d.is_prize).count(), 1);
        assert!(generated.iter().all(|d| !d.is_chosen));
    }

    #[test]
    fn test_pick_marks_one_door() {
        let generated = generate_doors(4, &mut Scripted::new(&[0]));
        let picked = pick_door(generated, &mut Scripted::new(&[2]));
        assert!(picked[2].is_chosen);
        assert_eq!(picked.iter().filter(|d| d.is_chosen).count(), 1);
    }

    #[test]
    fn test_eliminate_keeps_drawn_loser_when_holding_prize() {
        // prize and pick on door 1, losers are [0, 2, 3, 4]; draw index 2 -> door 3
        let set = doors(&[
            (false, false),
            (true, true),
            (false, false),
            (false, false),
            (false, false),
        ]);
        let survivors = eliminate(set, &mut Scripted::new(&[2])).unwrap();
        assert_eq!(survivors.len(), 2);
        assert!(survivors[0].is_prize && survivors[0].is_chosen);
        assert!(survivors[1].is_loser() && !survivors[1].is_chosen);
    }

    #[test]
    fn test_eliminate_keeps_pick_when_holding_loser() {
        let set = doors(&[(false, false), (false, true), (true, false), (false, false)]);
        // no draw needed in this branch
        let survivors = eliminate(set, &mut Scripted::new(&[])).unwrap();
        assert_eq!(survivors, vec![Door::new(true), Door::new(false).chosen()]);
    }

    #[test]
    fn test_eliminate_two_doors_is_noop() {
        let set = doors(&[(true, true), (false, false)]);
        let survivors = eliminate(set.clone(), &mut Scripted::new(&[0])).unwrap();
        assert_eq!(survivors, set);
    }

    #[test]
    fn test_eliminate_rejects_duplicate_prize() {
        let set = doors(&[(true, true), (false, true)]);
        let err = eliminate(set, &mut Scripted::new(&[])).unwrap_err();
        assert_eq!(err, InvariantViolation::PrizeCount { actual: 2 });
    }

    #[test]
    fn test_eliminate_rejects_missing_prize() {
        let set = doors(&[(true, false), (false, false), (false, false)]);
        let err = eliminate(set, &mut Scripted::new(&[])).unwrap_err();
        assert_eq!(err, InvariantViolation::SurvivorCount { actual: 1 });
    }

    #[test]
    fn test_resolve_without_pick_fails() {
        let set = doors(&[(false, true), (false, false)]);
        assert_eq!(resolve(&set), Err(InvariantViolation::UnresolvedPick));
    }

    #[test]
    fn test_switch_moves_pick() {
        let switched = switch_pick(doors(&[(true, false), (false, true)]));
        assert!(resolve(&switched).unwrap());
    }

    #[test]
    fn test_stay_on_prize_wins() {
        // prize 0, pick 0, surviving loser index 1
        let outcome = play_trial(3, false, &mut Scripted::new(&[0, 0, 1])).unwrap();
        assert!(outcome.won);
        assert!(outcome.first_pick_correct);
    }

    #[test]
    fn test_switch_from_prize_loses() {
        let outcome = play_trial(3, true, &mut Scripted::new(&[0, 0, 0])).unwrap();
        assert!(!outcome.won);
    }

    #[test]
    fn test_switch_from_loser_wins() {
        let outcome = play_trial(3, true, &mut Scripted::new(&[0, 2])).unwrap();
        assert!(outcome.won);
        assert!(!outcome.first_pick_correct);
    }

    #[test]
    fn test_stay_on_loser_loses() {
        let outcome = play_trial(3, false, &mut Scripted::new(&[1, 0])).unwrap();
        assert!(!outcome.won);
    }

    #[test]
    fn test_single_door_always_wins() {
        for switch in [true, false] {
            let outcome = play_trial(1, switch, &mut Scripted::new(&[0, 0])).unwrap();
            assert!(outcome.won);
            assert!(outcome.first_pick_correct);
        }
    }

    #[test]
    fn test_zero_doors_is_config_error() {
        let result = play_trial(0, true, &mut Scripted::new(&[]));
        assert!(matches!(result, Err(SimError::Config(ConfigError::NoDoors))));
    }

    #[test]
    fn test_expected_win_rate() {
        assert!((expected_win_rate(3, true) - 2.0 / 3.0).abs() < 1e-12);
        assert!((expected_win_rate(3, false) - 1.0 / 3.0).abs() < 1e-12);
        assert!((expected_win_rate(10, true) - 0.9).abs() < 1e-12);
        assert_eq!(expected_win_rate(2, true), 0.5);
        assert_eq!(expected_win_rate(1, true), 1.0);
        assert_eq!(expected_win_rate(1, false), 1.0);
    }
}
