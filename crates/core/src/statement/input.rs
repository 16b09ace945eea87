//! Statement input snapshot.

use abrechnung_shared::types::{DocumentId, UnitId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::pages::DocumentKind;
use crate::invoice::{CostCategory, Invoice};
use crate::period::BillingPeriod;
use crate::property::{Contract, Contractor, Owner, Property, Unit};
use crate::readings::MeterSeries;

/// Document-level split override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationConfig {
    /// Grundkosten share in percent.
    pub living_space_share_percent: Decimal,
    /// Verbrauchskosten share in percent.
    pub consumption_dependent_percent: Decimal,
}

/// The document being generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMeta {
    /// Document ID.
    pub id: DocumentId,
    /// Statement type.
    #[serde(default)]
    pub kind: DocumentKind,
    /// Creation date printed on the cover.
    pub created_at: NaiveDate,
    /// Unit the document is for; defaults to the first unit.
    #[serde(default)]
    pub unit_id: Option<UnitId>,
}

/// Everything one statement is computed from.
///
/// The record lists are read-only snapshots fetched by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementInput {
    /// Document being generated.
    pub document: DocumentMeta,
    /// Billing period.
    #[serde(default)]
    pub billing_period: Option<BillingPeriod>,
    /// The building.
    #[serde(default)]
    pub property: Option<Property>,
    /// Property owner / landlord.
    #[serde(default)]
    pub owner: Option<Owner>,
    /// All units of the property.
    #[serde(default)]
    pub units: Vec<Unit>,
    /// Contracts of all units.
    #[serde(default)]
    pub contracts: Vec<Contract>,
    /// Tenants referenced by contracts.
    #[serde(default)]
    pub contractors: Vec<Contractor>,
    /// Invoices of the period.
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    /// Cost categories.
    #[serde(default)]
    pub cost_categories: Vec<CostCategory>,
    /// Meter series of all units and building meters.
    #[serde(default)]
    pub meter_series: Vec<MeterSeries>,
    /// Overrides the configured Grundkosten / Verbrauchskosten split.
    #[serde(default)]
    pub allocation_config: Option<AllocationConfig>,
}

impl StatementInput {
    /// The document's unit, or the first unit.
    #[must_use]
    pub fn target_unit_id(&self) -> Option<UnitId> {
        self.document
            .unit_id
            .or_else(|| self.units.first().map(|unit| unit.id))
    }
}
