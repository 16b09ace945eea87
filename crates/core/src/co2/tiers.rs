//! The CO2KostAufG tier table.

use rust_decimal::Decimal;
use serde::Serialize;

/// One emission band with its tenant / landlord shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Co2Tier {
    /// Inclusive lower bound in kg CO2/m²/a.
    pub min_kg_per_m2: u32,
    /// Exclusive upper bound; `None` for the last band.
    pub max_kg_per_m2: Option<u32>,
    /// Tenant share in percent.
    pub tenant_percent: u32,
    /// Landlord share in percent.
    pub landlord_percent: u32,
}

const fn tier(min: u32, max: Option<u32>, tenant: u32) -> Co2Tier {
    Co2Tier {
        min_kg_per_m2: min,
        max_kg_per_m2: max,
        tenant_percent: tenant,
        landlord_percent: 100 - tenant,
    }
}

/// Ascending, gap-free bands starting at 0.
pub static CO2_TIERS: [Co2Tier; 10] = [
    tier(0, Some(12), 100),
    tier(12, Some(17), 90),
    tier(17, Some(22), 80),
    tier(22, Some(27), 70),
    tier(27, Some(32), 60),
    tier(32, Some(37), 50),
    tier(37, Some(42), 40),
    tier(42, Some(47), 30),
    tier(47, Some(52), 20),
    tier(52, None, 5),
];

impl Co2Tier {
    /// True if `emission_per_m2` falls into this band.
    #[must_use]
    pub fn contains(&self, emission_per_m2: Decimal) -> bool {
        emission_per_m2 >= Decimal::from(self.min_kg_per_m2)
            && self
                .max_kg_per_m2
                .is_none_or(|max| emission_per_m2 < Decimal::from(max))
    }

    /// Label of the band in the classification table.
    #[must_use]
    pub fn range_label(&self) -> String {
        match (self.min_kg_per_m2, self.max_kg_per_m2) {
            (0, Some(max)) => format!("< {max} kg/m²/a"),
            (min, Some(max)) => format!("{min} bis < {max}"),
            (min, None) => format!("≥ {min}"),
        }
    }
}

/// Index into [`CO2_TIERS`] of the band containing `emission_per_m2`.
///
/// Negative emissions are clamped into the first band.
#[must_use]
pub fn classify(emission_per_m2: Decimal) -> usize {
    let emission = emission_per_m2.max(Decimal::ZERO);
    CO2_TIERS
        .iter()
        .position(|tier| tier.contains(emission))
        .unwrap_or(CO2_TIERS.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), 0)]
    #[case(dec!(11.99), 0)]
    #[case(dec!(12), 1)]
    #[case(dec!(15), 1)]
    #[case(dec!(16.99), 1)]
    #[case(dec!(17), 2)]
    #[case(dec!(51.99), 8)]
    #[case(dec!(52), 9)]
    #[case(dec!(480), 9)]
    #[case(dec!(-3), 0)]
    fn test_classify(#[case] emission: Decimal, #[case] expected: usize) {
        assert_eq!(classify(emission), expected);
    }

    #[test]
    fn test_shares() {
        assert_eq!(CO2_TIERS[1].tenant_percent, 90);
        assert_eq!(CO2_TIERS[1].landlord_percent, 10);
        assert_eq!(CO2_TIERS[9].tenant_percent, 5);
        assert_eq!(CO2_TIERS[9].landlord_percent, 95);
    }

    #[test]
    fn test_range_labels() {
        assert_eq!(CO2_TIERS[0].range_label(), "< 12 kg/m²/a");
        assert_eq!(CO2_TIERS[1].range_label(), "12 bis < 17");
        assert_eq!(CO2_TIERS[9].range_label(), "≥ 52");
    }
}
