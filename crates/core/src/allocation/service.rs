//! Allocation service.

use rust_decimal::Decimal;

use super::error::{AllocationConfigError, Denominator};
use super::key::AllocationKey;
use abrechnung_shared::types::round_money;

/// Facts about the target unit needed by every allocation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationBasis {
    /// Unit living space in m².
    pub unit_living_space: Decimal,
    /// Property living space in m².
    pub total_living_space: Decimal,
    /// Days the unit was occupied; `None` when not tracked.
    pub occupied_days: Option<u32>,
    /// Days in the billing period.
    pub period_days: u32,
    /// Units in the property.
    pub unit_count: usize,
    /// Unit consumption of the medium the cost refers to.
    pub unit_consumption: Decimal,
    /// Building consumption of the same medium.
    pub total_consumption: Decimal,
}

impl AllocationBasis {
    /// Occupied fraction of the period, `1` without day tracking.
    #[must_use]
    pub fn time_fraction(&self) -> Decimal {
        match self.occupied_days {
            Some(days) if self.period_days > 0 => {
                (Decimal::from(days) / Decimal::from(self.period_days)).min(Decimal::ONE)
            }
            _ => Decimal::ONE,
        }
    }
}

/// Pro-rata allocators. All results are rounded to cents.
pub struct AllocationService;

impl AllocationService {
    /// `total × unit_m² / property_m²`.
    ///
    /// # Errors
    ///
    /// Returns `ZeroDenominator(TotalLivingSpace)` if `property_m2` is zero.
    pub fn by_living_space(
        total: Decimal,
        unit_m2: Decimal,
        property_m2: Decimal,
    ) -> Result<Decimal, AllocationConfigError> {
        if property_m2.is_zero() {
            return Err(AllocationConfigError::ZeroDenominator(
                Denominator::TotalLivingSpace,
            ));
        }
        ratio(total, unit_m2, property_m2)
    }

    /// `total × occupied_days / period_days`; the full amount when days are not tracked.
    ///
    /// # Errors
    ///
    /// Returns `ZeroDenominator(PeriodDays)` if `period_days` is zero.
    pub fn by_occupancy_days(
        total: Decimal,
        occupied_days: Option<u32>,
        period_days: u32,
    ) -> Result<Decimal, AllocationConfigError> {
        if period_days == 0 {
            return Err(AllocationConfigError::ZeroDenominator(Denominator::PeriodDays));
        }
        let days = occupied_days.unwrap_or(period_days);
        ratio(total, Decimal::from(days), Decimal::from(period_days))
    }

    /// `total / unit_count`.
    ///
    /// # Errors
    ///
    /// Returns `ZeroDenominator(UnitCount)` if `unit_count` is zero.
    pub fn per_unit(total: Decimal, unit_count: usize) -> Result<Decimal, AllocationConfigError> {
        if unit_count == 0 {
            return Err(AllocationConfigError::ZeroDenominator(Denominator::UnitCount));
        }
        ratio(total, Decimal::ONE, Decimal::from(unit_count))
    }

    /// `total × unit_consumption / total_consumption`.
    ///
    /// # Errors
    ///
    /// Returns `ZeroDenominator(TotalConsumption)` if `total_consumption` is zero.
    pub fn by_consumption(
        total: Decimal,
        unit_consumption: Decimal,
        total_consumption: Decimal,
    ) -> Result<Decimal, AllocationConfigError> {
        if total_consumption.is_zero() {
            return Err(AllocationConfigError::ZeroDenominator(
                Denominator::TotalConsumption,
            ));
        }
        ratio(total, unit_consumption, total_consumption)
    }

    /// The 365/365 ratio: the whole amount.
    #[must_use]
    pub fn full_period(total: Decimal) -> Decimal {
        round_money(total)
    }

    /// Dispatches on `key`. Unknown keys fall back to [`Self::full_period`].
    ///
    /// # Errors
    ///
    /// Propagates the zero-denominator error of the selected allocator.
    pub fn share(
        key: &AllocationKey,
        total: Decimal,
        basis: &AllocationBasis,
    ) -> Result<Decimal, AllocationConfigError> {
        match key {
            AllocationKey::LivingSpace => {
                Self::by_living_space(total, basis.unit_living_space, basis.total_living_space)
            }
            AllocationKey::OccupancyDays => {
                Self::by_occupancy_days(total, basis.occupied_days, basis.period_days)
            }
            AllocationKey::PerUnit => Self::per_unit(total, basis.unit_count),
            AllocationKey::Consumption => {
                Self::by_consumption(total, basis.unit_consumption, basis.total_consumption)
            }
            AllocationKey::Unknown(_) => Ok(Self::full_period(total)),
        }
    }
}

/// `total × numerator / denominator` in cents; the caller has rejected a zero denominator.
fn ratio(
    total: Decimal,
    numerator: Decimal,
    denominator: Decimal,
) -> Result<Decimal, AllocationConfigError> {
    total
        .checked_mul(numerator)
        .and_then(|product| product.checked_div(denominator))
        .map(round_money)
        .ok_or(AllocationConfigError::Overflow {
            total,
            numerator,
            denominator,
        })
}
