//! Cold-water invoice subtypes.

use serde::Serialize;

use crate::invoice::{Invoice, normalize_cost_type};

/// What a cold-water rate is divided by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RateBasis {
    /// Building cold-water volume.
    CubicMetre,
    /// Number of units (Nutzeinheiten).
    UsageUnit,
}

impl RateBasis {
    /// Quantity unit label.
    #[must_use]
    pub const fn unit_label(self) -> &'static str {
        match self {
            Self::CubicMetre => "m³",
            Self::UsageUnit => "Nutzeinh.",
        }
    }

    /// Rate unit label.
    #[must_use]
    pub const fn rate_label(self) -> &'static str {
        match self {
            Self::CubicMetre => "€/m³",
            Self::UsageUnit => "€/Nutzeinh.",
        }
    }
}

/// Cold-water line types on the Kaltwasser page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ColdWaterSubtype {
    /// Fresh water.
    Kaltwasser,
    /// Wastewater.
    Abwasser,
    /// Meter rental.
    Geraetemiete,
    /// Billing service.
    Abrechnung,
}

impl ColdWaterSubtype {
    /// Classifies an invoice by cost type, purpose and document name.
    #[must_use]
    pub fn of(invoice: &Invoice) -> Self {
        let combined = format!(
            "{} {} {}",
            normalize_cost_type(&invoice.cost_type),
            invoice.purpose.as_deref().unwrap_or_default(),
            invoice.label.as_deref().unwrap_or_default()
        )
        .to_lowercase();

        if combined.contains("abwasser") || combined.contains("sewage") {
            Self::Abwasser
        } else if ["gerätemiete", "geratemiete", "device_rental", "miete"]
            .iter()
            .any(|needle| combined.contains(needle))
        {
            Self::Geraetemiete
        } else if combined.contains("abrechnung") || combined.contains("billing") {
            Self::Abrechnung
        } else {
            Self::Kaltwasser
        }
    }

    /// Line label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Kaltwasser => "Kaltwasser",
            Self::Abwasser => "Abwasser Gesamt",
            Self::Geraetemiete => "Gerätemiete Kaltwasser",
            Self::Abrechnung => "Abrechnung Kaltwasser",
        }
    }

    /// Rate basis.
    #[must_use]
    pub const fn basis(self) -> RateBasis {
        match self {
            Self::Abrechnung => RateBasis::UsageUnit,
            Self::Kaltwasser | Self::Abwasser | Self::Geraetemiete => RateBasis::CubicMetre,
        }
    }

    /// Displayed rate decimals.
    #[must_use]
    pub const fn rate_decimals(self) -> u32 {
        match self.basis() {
            RateBasis::CubicMetre => 6,
            RateBasis::UsageUnit => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abrechnung_shared::types::InvoiceId;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn invoice(cost_type: &str, purpose: Option<&str>) -> Invoice {
        Invoice {
            id: InvoiceId::new(),
            cost_type: cost_type.into(),
            total_amount: Decimal::ONE,
            invoice_date: None,
            label: None,
            purpose: purpose.map(str::to_string),
            energy_kwh: None,
            co2_cost: None,
            cost_category_id: None,
        }
    }

    #[rstest]
    #[case("cold_water", None, ColdWaterSubtype::Kaltwasser)]
    #[case("abwasser", None, ColdWaterSubtype::Abwasser)]
    #[case("cold_water", Some("Abwasser 2023"), ColdWaterSubtype::Abwasser)]
    #[case("cold_water_device_rental", None, ColdWaterSubtype::Geraetemiete)]
    #[case("cold_water_billing", None, ColdWaterSubtype::Abrechnung)]
    #[case("cold_water", Some("Gerätemiete Wasserzähler"), ColdWaterSubtype::Geraetemiete)]
    fn test_subtype(
        #[case] cost_type: &str,
        #[case] purpose: Option<&str>,
        #[case] expected: ColdWaterSubtype,
    ) {
        assert_eq!(ColdWaterSubtype::of(&invoice(cost_type, purpose)), expected);
    }

    #[test]
    fn test_billing_is_per_usage_unit() {
        assert_eq!(ColdWaterSubtype::Abrechnung.basis(), RateBasis::UsageUnit);
        assert_eq!(ColdWaterSubtype::Abrechnung.rate_decimals(), 2);
        assert_eq!(ColdWaterSubtype::Abwasser.rate_decimals(), 6);
    }
}
