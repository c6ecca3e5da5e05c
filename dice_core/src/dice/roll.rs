//! Rolling - uniform draws that replace the last roll result

use super::Dice;
use rand::Rng;

impl Dice {
    /// Roll every die and return the per-die results
    ///
    /// Uses the thread-local RNG. The result replaces `previous`.
    pub fn roll(&mut self) -> &[u32] {
        let mut rng = rand::thread_rng();
        self.roll_with(&mut rng)
    }

    /// Roll with a provided RNG (for deterministic testing)
    ///
    /// Draws `count` values uniformly from `1..=sides`, in order. A 0-sided
    /// die yields 0 without consuming randomness.
    pub fn roll_with(&mut self, rng: &mut impl Rng) -> &[u32] {
        let sides = self.sides;
        let rolls: Vec<u32> = (0..self.count).map(|_| draw(sides, &mut *rng)).collect();

        tracing::trace!(dice = %self, ?rolls, "rolled dice");
        self.previous = rolls;
        &self.previous
    }

    /// Roll every die and return the total
    ///
    /// `previous` still receives the full per-die results.
    pub fn roll_sum(&mut self) -> u64 {
        let mut rng = rand::thread_rng();
        self.roll_sum_with(&mut rng)
    }

    /// Roll with a provided RNG and return the total
    pub fn roll_sum_with(&mut self, rng: &mut impl Rng) -> u64 {
        self.roll_with(rng);
        self.previous_sum()
    }
}

/// Draw a single die face
fn draw(sides: u32, rng: &mut impl Rng) -> u32 {
    if sides == 0 {
        return 0;
    }
    rng.gen_range(1..=sides)
}
