//! Invoice record types.

use abrechnung_shared::types::{CostCategoryId, InvoiceId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single billed cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Invoice ID.
    pub id: InvoiceId,
    /// Raw cost type, e.g. "fuel_costs" or "Abwasser".
    pub cost_type: String,
    /// Gross amount in euro. Negative for credits.
    pub total_amount: Decimal,
    /// Invoice date.
    #[serde(default)]
    pub invoice_date: Option<NaiveDate>,
    /// Document name.
    #[serde(default)]
    pub label: Option<String>,
    /// Purpose text.
    #[serde(default)]
    pub purpose: Option<String>,
    /// Delivered energy in kWh (energy invoices only).
    #[serde(default)]
    pub energy_kwh: Option<Decimal>,
    /// CO2 levy contained in the amount (energy invoices only).
    #[serde(default)]
    pub co2_cost: Option<Decimal>,
    /// Explicit cost category.
    #[serde(default)]
    pub cost_category_id: Option<CostCategoryId>,
}

impl Invoice {
    /// Document name, purpose, or a generated "Rechnung …" label.
    #[must_use]
    pub fn display_label(&self) -> String {
        non_blank(self.label.as_deref())
            .or_else(|| non_blank(self.purpose.as_deref()))
            .map_or_else(
                || {
                    let id = self.id.to_string();
                    format!("Rechnung {}", id.get(..8).unwrap_or(&id))
                },
                str::to_string,
            )
    }

    /// Purpose first, then document name, then `fallback`.
    #[must_use]
    pub fn item_label(&self, fallback: &str) -> String {
        non_blank(self.purpose.as_deref())
            .or_else(|| non_blank(self.label.as_deref()))
            .unwrap_or(fallback)
            .to_string()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// A cost category with its allocation key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostCategory {
    /// Category ID.
    pub id: CostCategoryId,
    /// Cost type this category applies to.
    pub cost_type: String,
    /// Display name.
    pub name: String,
    /// Allocation-key label, e.g. "m² Wohnfläche".
    pub allocation_key: String,
}
