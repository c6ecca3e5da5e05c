//! Roll simulation utilities

use crate::dice::Dice;
use crate::math::DiceMath;
use rand::Rng;

/// Statistics gathered from rolling one Dice repeatedly
#[derive(Debug, Clone, PartialEq)]
pub struct RollSimulation {
    pub trials: u32,
    pub total: u64,
    pub lowest_seen: Option<u64>,
    pub highest_seen: Option<u64>,
}

impl RollSimulation {
    /// Roll `dice` `trials` times and record the totals
    ///
    /// The dice is left holding the result of the final trial.
    pub fn run(dice: &mut Dice, trials: u32, rng: &mut impl Rng) -> Self {
        let mut result = RollSimulation {
            trials,
            total: 0,
            lowest_seen: None,
            highest_seen: None,
        };

        for _ in 0..trials {
            let sum = dice.roll_sum_with(rng);
            result.total += sum;
            result.lowest_seen = Some(result.lowest_seen.map_or(sum, |low| low.min(sum)));
            result.highest_seen = Some(result.highest_seen.map_or(sum, |high| high.max(sum)));
        }

        tracing::debug!(%dice, trials, mean = result.mean(), "simulation finished");
        result
    }

    /// Mean total per trial
    pub fn mean(&self) -> f64 {
        if self.trials > 0 {
            self.total as f64 / self.trials as f64
        } else {
            0.0
        }
    }

    /// Whether the mean is within `tolerance` of `expected`
    pub fn within(&self, expected: f64, tolerance: f64) -> bool {
        (self.mean() - expected).abs() <= tolerance
    }

    /// Whether every observed total fell inside the dice's possible range
    pub fn within_bounds(&self, dice: &Dice) -> bool {
        let low_ok = self.lowest_seen.map_or(true, |low| low >= DiceMath::min(dice));
        let high_ok = self.highest_seen.map_or(true, |high| high <= DiceMath::max(dice));
        low_ok && high_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_mean_near_average() {
        let mut dice = Dice::new(6, 2).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);

        let result = RollSimulation::run(&mut dice, 20_000, &mut rng);

        assert_eq!(result.trials, 20_000);
        assert!(result.within(DiceMath::average(&dice), 0.1));
        assert!(result.within_bounds(&dice));
        assert_eq!(dice.previous().len(), 2);
    }

    #[test]
    fn test_extremes_reached() {
        let mut dice = Dice::new(4, 1).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);

        let result = RollSimulation::run(&mut dice, 1_000, &mut rng);

        assert_eq!(result.lowest_seen, Some(DiceMath::min(&dice)));
        assert_eq!(result.highest_seen, Some(DiceMath::max(&dice)));
    }

    #[test]
    fn test_no_trials() {
        let mut dice = Dice::default();
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);

        let result = RollSimulation::run(&mut dice, 0, &mut rng);

        assert_eq!(result.mean(), 0.0);
        assert_eq!(result.lowest_seen, None);
        assert!(dice.previous().is_empty());
    }

    #[test]
    fn test_zero_sided_simulation() {
        let mut dice = Dice::new(0, 3).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);

        let result = RollSimulation::run(&mut dice, 50, &mut rng);

        assert_eq!(result.total, 0);
        assert!(result.within(DiceMath::average(&dice), f64::EPSILON));
    }
}
