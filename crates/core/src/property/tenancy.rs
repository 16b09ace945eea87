//! Prepayment and tenant facts for one unit.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{Contract, Contractor};
use crate::period::{BillingPeriod, overlap_months};

/// Contracts whose prepayments count towards this period.
///
/// Only contracts with a known end date on or before the period end qualify.
/// Open-ended contracts are skipped even when current, so a running tenancy
/// contributes no prepayment.
pub fn eligible_contracts<'a>(
    contracts: &'a [Contract],
    period: &BillingPeriod,
) -> impl Iterator<Item = (&'a Contract, NaiveDate)> + 'a {
    let period_end = period.end_date;
    contracts.iter().filter_map(move |contract| {
        contract
            .rental_end_date
            .filter(|end| *end <= period_end)
            .map(|end| (contract, end))
    })
}

/// Σ months of overlap × monthly `additional_costs_amount` over eligible contracts.
#[must_use]
pub fn expected_prepayment(contracts: &[Contract], period: &BillingPeriod) -> Decimal {
    eligible_contracts(contracts, period)
        .map(|(contract, end)| {
            let months = overlap_months(contract.rental_start_date, end, period);
            contract.additional_costs_amount * Decimal::from(months)
        })
        .sum()
}

/// Tenant-facing facts of one unit in one period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenancySummary {
    /// Tenants whose contract touches the period, in contract order.
    pub contractors: Vec<Contractor>,
    /// Earliest tenancy start within the period.
    pub occupancy_start: Option<NaiveDate>,
    /// Latest tenancy end within the period.
    pub occupancy_end: Option<NaiveDate>,
}

impl TenancySummary {
    /// Collects the tenants of `contracts` that overlap `period`.
    ///
    /// Unknown contractor IDs are skipped and duplicates listed once.
    #[must_use]
    pub fn collect(
        contracts: &[Contract],
        contractors: &[Contractor],
        period: &BillingPeriod,
    ) -> Self {
        let mut found: Vec<Contractor> = Vec::new();
        let mut occupancy_start: Option<NaiveDate> = None;
        let mut occupancy_end: Option<NaiveDate> = None;

        for contract in contracts.iter().filter(|c| overlaps(c, period)) {
            let start = contract.rental_start_date.max(period.start_date);
            occupancy_start = Some(occupancy_start.map_or(start, |s| s.min(start)));
            let end = contract
                .rental_end_date
                .map_or(period.end_date, |end| end.min(period.end_date));
            occupancy_end = Some(occupancy_end.map_or(end, |e| e.max(end)));

            for contractor_id in &contract.contractor_ids {
                if found.iter().any(|c| c.id == *contractor_id) {
                    continue;
                }
                if let Some(contractor) = contractors.iter().find(|c| c.id == *contractor_id) {
                    found.push(contractor.clone());
                }
            }
        }

        Self {
            contractors: found,
            occupancy_start,
            occupancy_end,
        }
    }

    /// Tenant names joined for the cover page.
    #[must_use]
    pub fn joined_names(&self) -> String {
        self.contractors
            .iter()
            .map(Contractor::full_name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn overlaps(contract: &Contract, period: &BillingPeriod) -> bool {
    contract.rental_start_date <= period.end_date
        && contract
            .rental_end_date
            .is_none_or(|end| end >= period.start_date)
}
