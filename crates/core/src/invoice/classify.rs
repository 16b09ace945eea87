//! Cost-type classification.

use serde::Serialize;

use super::types::Invoice;

/// Pool a device-rental invoice is tagged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RentalPool {
    /// Heizung.
    Heating,
    /// Warmwasser.
    WarmWater,
}

/// Where an invoice goes on the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CostPool {
    /// Fuel / heat energy purchase.
    Energy,
    /// Additional heating operating costs.
    Operating,
    /// Metering devices and metering service.
    Metering,
    /// Device rental tagged to a heating pool.
    DeviceRental(RentalPool),
    /// Cold water and wastewater.
    ColdWater,
    /// Internal test bookings.
    Ignored,
    /// Unknown cost type.
    Unclassified,
}

impl CostPool {
    /// True for pools distributed outside the heating split.
    #[must_use]
    pub const fn is_separately_distributed(self) -> bool {
        matches!(self, Self::Metering | Self::DeviceRental(_) | Self::ColdWater)
    }
}

/// Lower-cases and replaces whitespace with `_`.
#[must_use]
pub fn normalize_cost_type(cost_type: &str) -> String {
    cost_type
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Classifies a raw cost type.
#[must_use]
pub fn classify_cost_type(cost_type: &str) -> CostPool {
    match normalize_cost_type(cost_type).as_str() {
        "fuel_costs" | "brennstoffkosten" => CostPool::Energy,
        "operating_current" | "maintenance_costs" | "chimney_sweep_costs"
        | "other_operating_costs" => CostPool::Operating,
        "metering_device_rental" | "metering_service_costs" => CostPool::Metering,
        "heating_device_rental" => CostPool::DeviceRental(RentalPool::Heating),
        "warm_water_device_rental" => CostPool::DeviceRental(RentalPool::WarmWater),
        "cold_water" | "cold_water_device_rental" | "abwasser" | "cold_water_billing" => {
            CostPool::ColdWater
        }
        "heidi_systems_sd" | "test_cost" | "test_archived" => CostPool::Ignored,
        _ => CostPool::Unclassified,
    }
}

/// An energy invoice is the price-brake credit when negative or labelled "Preisbremse".
#[must_use]
pub fn is_energy_relief(invoice: &Invoice) -> bool {
    (invoice.total_amount.is_sign_negative() && !invoice.total_amount.is_zero())
        || invoice
            .purpose
            .as_deref()
            .is_some_and(|p| p.to_lowercase().contains("preisbremse"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("fuel_costs", CostPool::Energy)]
    #[case("Brennstoffkosten", CostPool::Energy)]
    #[case("chimney sweep costs", CostPool::Operating)]
    #[case("metering_service_costs", CostPool::Metering)]
    #[case("heating_device_rental", CostPool::DeviceRental(RentalPool::Heating))]
    #[case("warm_water_device_rental", CostPool::DeviceRental(RentalPool::WarmWater))]
    #[case("Abwasser", CostPool::ColdWater)]
    #[case("test_cost", CostPool::Ignored)]
    #[case("gartenpflege", CostPool::Unclassified)]
    fn test_classify(#[case] cost_type: &str, #[case] expected: CostPool) {
        assert_eq!(classify_cost_type(cost_type), expected);
    }

    #[rstest]
    #[case(CostPool::Metering, true)]
    #[case(CostPool::DeviceRental(RentalPool::Heating), true)]
    #[case(CostPool::ColdWater, true)]
    #[case(CostPool::Energy, false)]
    #[case(CostPool::Operating, false)]
    #[case(CostPool::Unclassified, false)]
    #[case(CostPool::Ignored, false)]
    fn test_separately_distributed(#[case] pool: CostPool, #[case] expected: bool) {
        assert_eq!(pool.is_separately_distributed(), expected);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_cost_type(" Cold Water\tBilling "), "cold_water_billing");
    }
}
