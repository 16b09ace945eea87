//! Grundkosten / Verbrauchskosten split of a heating pool.

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::AllocationConfigError;
use abrechnung_shared::types::round_money;

/// Validated living-space / consumption split in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSplit {
    living_space_percent: Decimal,
    consumption_percent: Decimal,
}

/// A pool divided by [`CostSplit::split_pool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolSplit {
    /// Grundkosten, allocated by living space.
    pub base: Decimal,
    /// Verbrauchskosten, allocated by consumption.
    pub consumption: Decimal,
}

impl CostSplit {
    /// Creates a split.
    ///
    /// # Errors
    ///
    /// Returns `AllocationConfigError::InvalidSplit` unless both shares lie in
    /// `[0, 100]` and sum to exactly 100.
    pub fn new(
        living_space_percent: Decimal,
        consumption_percent: Decimal,
    ) -> Result<Self, AllocationConfigError> {
        let hundred = Decimal::ONE_HUNDRED;
        let in_range = |p: Decimal| p >= Decimal::ZERO && p <= hundred;
        if !in_range(living_space_percent)
            || !in_range(consumption_percent)
            || living_space_percent + consumption_percent != hundred
        {
            return Err(AllocationConfigError::InvalidSplit {
                living_space: living_space_percent,
                consumption: consumption_percent,
            });
        }
        Ok(Self {
            living_space_percent,
            consumption_percent,
        })
    }

    /// Living-space share in percent.
    #[must_use]
    pub const fn living_space_percent(&self) -> Decimal {
        self.living_space_percent
    }

    /// Consumption share in percent.
    #[must_use]
    pub const fn consumption_percent(&self) -> Decimal {
        self.consumption_percent
    }

    /// Splits `total` so that `base + consumption == total` exactly.
    ///
    /// `base` is rounded to cents and `consumption` takes the remainder.
    #[must_use]
    pub fn split_pool(&self, total: Decimal) -> PoolSplit {
        let base = round_money(total * self.living_space_percent / Decimal::ONE_HUNDRED);
        PoolSplit {
            base,
            consumption: total - base,
        }
    }
}

impl Default for CostSplit {
    fn default() -> Self {
        Self {
            living_space_percent: Decimal::from(30),
            consumption_percent: Decimal::from(70),
        }
    }
}
