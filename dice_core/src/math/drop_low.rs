//! Drop-lowest rolls (e.g. 4d6 keep the best three)

use super::DiceMath;
use crate::dice::Dice;
use crate::error::{DiceError, Result};
use rand::Rng;

/// Number of die discarded when no count is given
pub const DEFAULT_DROP: u32 = 1;

impl DiceMath {
    /// Roll the dice and discard the `lowest` smallest results
    ///
    /// Fails with `InvalidArgument` if `lowest` is negative. If `lowest` is
    /// at least the die count, nothing is rolled and the result is empty.
    pub fn roll_drop_low(dice: &mut Dice, lowest: i64) -> Result<Vec<u32>> {
        let mut rng = rand::thread_rng();
        Self::roll_drop_low_with(dice, lowest, &mut rng)
    }

    /// Drop-lowest roll with a provided RNG (for deterministic testing)
    pub fn roll_drop_low_with(
        dice: &mut Dice,
        lowest: i64,
        rng: &mut impl Rng,
    ) -> Result<Vec<u32>> {
        let lowest = u32::try_from(lowest).map_err(|_| {
            DiceError::invalid(format!(
                "lowest must be 0 or a positive integer. Received value: {}",
                lowest
            ))
        })?;
        Ok(Self::roll_dropping(dice, lowest, rng))
    }

    /// Roll the dice and discard the single lowest result
    pub fn roll_drop_lowest(dice: &mut Dice) -> Vec<u32> {
        let mut rng = rand::thread_rng();
        Self::roll_dropping(dice, DEFAULT_DROP, &mut rng)
    }

    pub(crate) fn roll_dropping(dice: &mut Dice, lowest: u32, rng: &mut impl Rng) -> Vec<u32> {
        if lowest >= dice.count() {
            tracing::debug!(%dice, lowest, "drop count covers every die, not rolling");
            return Vec::new();
        }

        let rolls = dice.roll_with(rng);
        drop_lowest(rolls, lowest as usize)
    }
}

/// Copy `rolls` and remove the `lowest` smallest values
///
/// Each pass removes the first occurrence of the current minimum. The
/// remaining values keep their relative order.
pub fn drop_lowest(rolls: &[u32], lowest: usize) -> Vec<u32> {
    let mut kept = rolls.to_vec();
    for _ in 0..lowest {
        let Some((index, _)) = kept.iter().enumerate().min_by_key(|&(_, &value)| value) else {
            break;
        };
        kept.remove(index);
    }
    kept
}
