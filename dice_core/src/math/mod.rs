//! DiceMath - Statistics and roll variants computed over a Dice
//!
//! All functions are stateless. The closed-form values assume each die is
//! uniform over `1..=sides`; a 0-sided die contributes nothing.

mod drop_low;

pub use drop_low::{drop_lowest, DEFAULT_DROP};

use crate::dice::Dice;

/// Stateless helper operating on `Dice`
#[derive(Debug, Clone, Copy, Default)]
pub struct DiceMath;

impl DiceMath {
    /// Expected total of one roll: `count * (sides / 2 + 0.5)`
    pub fn average(dice: &Dice) -> f64 {
        if dice.sides() == 0 {
            return 0.0;
        }
        f64::from(dice.count()) * (f64::from(dice.sides()) / 2.0 + 0.5)
    }

    /// Highest possible total: every die shows its top face
    pub fn max(dice: &Dice) -> u64 {
        if dice.sides() == 0 {
            return 0;
        }
        u64::from(dice.count()) * u64::from(dice.sides())
    }

    /// Lowest possible total: every die shows 1
    pub fn min(dice: &Dice) -> u64 {
        if dice.sides() == 0 {
            return 0;
        }
        u64::from(dice.count())
    }
}
