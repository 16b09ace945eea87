//! Allocation keys (Umlageschlüssel).

use serde::{Deserialize, Serialize};

/// How a cost category is spread across units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AllocationKey {
    /// By living space ("m² Wohnfläche").
    LivingSpace,
    /// By occupied days ("Nutzungstage").
    OccupancyDays,
    /// Flat split per unit ("Wohneinheiten").
    PerUnit,
    /// By measured consumption ("Verbrauch").
    Consumption,
    /// Any label the engine does not know.
    Unknown(String),
}

impl AllocationKey {
    /// Parses a stored allocation-key label.
    ///
    /// Matching ignores case and surrounding whitespace.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        match normalized.as_str() {
            "m² wohnfläche" | "m2 wohnfläche" | "wohnfläche" | "living_space" => Self::LivingSpace,
            "nutzungstage" | "occupancy_days" => Self::OccupancyDays,
            "wohneinheiten" | "flat-per-unit" | "per_unit" => Self::PerUnit,
            "verbrauch" | "consumption" => Self::Consumption,
            _ => Self::Unknown(label.trim().to_string()),
        }
    }

    /// German label printed on statements.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::LivingSpace => "m² Wohnfläche",
            Self::OccupancyDays => "Nutzungstage",
            Self::PerUnit => "Wohneinheiten",
            Self::Consumption => "Verbrauch",
            Self::Unknown(label) => label,
        }
    }
}
