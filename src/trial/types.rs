use rand::Rng;
use serde::Serialize;

/// One door in a trial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Door {
    /// Currently held by the player
    pub is_chosen: bool,
    /// Hides the prize. Exactly one door per trial has this set.
    pub is_prize: bool,
}

impl Door {
    pub fn new(is_prize: bool) -> Self {
        Self {
            is_chosen: false,
            is_prize,
        }
    }

    pub fn chosen(self) -> Self {
        Self {
            is_chosen: true,
            ..self
        }
    }

    pub fn toggled(self) -> Self {
        Self {
            is_chosen: !self.is_chosen,
            ..self
        }
    }

    pub fn is_loser(&self) -> bool {
        !self.is_prize
    }
}

/// Outcome of a single trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrialOutcome {
    /// The finally held door hides the prize
    pub won: bool,
    /// The initial pick was already the prize
    pub first_pick_correct: bool,
}

/// Source of uniform door indices.
pub trait DoorDraw {
    /// Returns an index in `[0, upper)`. Callers never pass zero.
    fn draw(&mut self, upper: usize) -> usize;
}

/// Adapts any [`Rng`] into a [`DoorDraw`].
pub struct RngDraw<'a, R: Rng + ?Sized>(pub &'a mut R);

impl<R: Rng + ?Sized> DoorDraw for RngDraw<'_, R> {
    fn draw(&mut self, upper: usize) -> usize {
        self.0.gen_range(0..upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_toggle_flips_only_choice() {
        let door = Door::new(true).chosen();
        let flipped = door.toggled();
        assert!(!flipped.is_chosen);
        assert!(flipped.is_prize);
    }

    #[test]
    fn test_rng_draw_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut draw = RngDraw(&mut rng);
        for upper in 1..20 {
            for _ in 0..50 {
                assert!(draw.draw(upper) < upper);
            }
        }
    }
}
