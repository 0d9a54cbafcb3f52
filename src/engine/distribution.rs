// ============================================================================
// Distribution
// Splits an amount into parts whose minor units sum exactly to the original
// ============================================================================

use crate::domain::{config, Currency, Settings};
use crate::numeric::{CurrencyError, CurrencyResult};

impl Currency {
    /// Split into `count` parts under the process-wide settings.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `count` is zero.
    pub fn distribute(self, count: usize) -> CurrencyResult<Vec<Self>> {
        self.distribute_with(count, &config::settings())
    }

    /// Split proportionally to `ratios` under the process-wide settings.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `ratios` is empty or sums to zero.
    pub fn allocate(self, ratios: &[u64]) -> CurrencyResult<Vec<Self>> {
        self.allocate_with(ratios, &config::settings())
    }

    /// Split into `count` parts.
    ///
    /// The amount is first rounded to the precision in `settings`, like the
    /// receiver of any arithmetic operation; the parts carry that precision.
    ///
    /// Every part gets the even share (rounded toward zero); leftover minor
    /// units go one each to the first parts, in the direction of the
    /// original sign.
    ///
    /// ```text
    ///  1.00 / 3 -> [ 0.34,  0.33,  0.33]
    /// -1.99 / 2 -> [-1.00, -0.99]
    /// ```
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `count` is zero.
    pub fn distribute_with(self, count: usize, settings: &Settings) -> CurrencyResult<Vec<Self>> {
        if count == 0 {
            return Err(CurrencyError::DivisionByZero);
        }

        let amount = self.normalized(settings)?;
        let value = amount.int_value() as i128;
        let parts = count as i128;

        // Integer division truncates: floor for positives, ceil for negatives
        let split = value / parts;
        let pennies = (value - split * parts).unsigned_abs();
        let step = if value >= 0 { 1 } else { -1 };

        let distribution = (0..count)
            .map(|index| {
                let extra = if (index as u128) < pennies { step } else { 0 };
                // |split| + 1 <= |value| whenever a penny is handed out
                Currency::from_raw((split + extra) as i64, amount.precision())
            })
            .collect();

        Ok(distribution)
    }

    /// Split proportionally to `ratios`, rounded to `settings` precision first.
    ///
    /// Each part gets `value × ratio / Σratios` rounded toward zero; leftover
    /// minor units go one each to the first parts with a non-zero ratio.
    ///
    /// ```text
    /// 100.00 by [1, 2, 0] -> [33.34, 66.66, 0.00]
    /// ```
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `ratios` is empty or sums to zero.
    pub fn allocate_with(self, ratios: &[u64], settings: &Settings) -> CurrencyResult<Vec<Self>> {
        let total = ratios
            .iter()
            .try_fold(0u128, |acc, ratio| acc.checked_add(*ratio as u128))
            .ok_or(CurrencyError::Overflow)?;
        if total == 0 {
            return Err(CurrencyError::DivisionByZero);
        }
        let total = i128::try_from(total).map_err(|_| CurrencyError::Overflow)?;

        let amount = self.normalized(settings)?;
        let value = amount.int_value() as i128;

        // allocation = (value * ratio) / total, i128 keeps the product exact
        let mut shares: Vec<i128> = ratios
            .iter()
            .map(|ratio| value * (*ratio as i128) / total)
            .collect();

        let allocated: i128 = shares.iter().sum();
        let mut pennies = (value - allocated).unsigned_abs();
        let step = if value >= 0 { 1 } else { -1 };

        for (share, ratio) in shares.iter_mut().zip(ratios) {
            if pennies == 0 {
                break;
            }
            if *ratio > 0 {
                *share += step;
                pennies -= 1;
            }
        }

        // Every share lies between zero and the original value
        Ok(shares
            .into_iter()
            .map(|share| Currency::from_raw(share as i64, amount.precision()))
            .collect())
    }
}
