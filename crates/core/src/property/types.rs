//! Property record types.

use abrechnung_shared::types::{ContractId, ContractorId, PropertyId, UnitId, UserId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A building (Objekt).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Property ID.
    pub id: PropertyId,
    /// Street and house number.
    pub street: String,
    /// Postal code.
    pub zip: String,
    /// Total heated living space of the building in m².
    pub total_living_space_m2: Decimal,
    /// Energy carrier, e.g. "Fernwärme" or "Gas".
    #[serde(default)]
    pub energy_carrier: Option<String>,
}

/// A rentable unit (Lokal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    /// Unit ID.
    pub id: UnitId,
    /// Owning property.
    pub property_id: PropertyId,
    /// Display label, e.g. "WE 12".
    #[serde(default)]
    pub label: Option<String>,
    /// Living space in m².
    pub living_space_m2: Decimal,
    /// Usage type, e.g. "Wohnung" or "Gewerbe".
    #[serde(default)]
    pub usage_type: Option<String>,
    /// Days the unit was occupied within the billing period, when tracked.
    #[serde(default)]
    pub occupied_days: Option<u32>,
}

/// A rental contract on one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// Contract ID.
    pub id: ContractId,
    /// Rented unit.
    pub unit_id: UnitId,
    /// First day of the tenancy.
    pub rental_start_date: NaiveDate,
    /// Last day of the tenancy; `None` for open-ended contracts.
    #[serde(default)]
    pub rental_end_date: Option<NaiveDate>,
    /// Monthly cold rent.
    #[serde(default)]
    pub cold_rent_amount: Decimal,
    /// Monthly prepayment on utility costs.
    #[serde(default)]
    pub additional_costs_amount: Decimal,
    /// Whether this is the unit's current tenancy.
    #[serde(default)]
    pub is_current: bool,
    /// Co-signing tenants.
    #[serde(default)]
    pub contractor_ids: Vec<ContractorId>,
}

/// A tenant person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contractor {
    /// Contractor ID.
    pub id: ContractorId,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Date of birth.
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// E-mail address.
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
}

/// The landlord issuing the statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    /// User ID.
    pub id: UserId,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
}

impl Contractor {
    /// "First Last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Unit {
    /// Label for display, falling back to the unit ID.
    #[must_use]
    pub fn display_label(&self) -> String {
        self.label.clone().unwrap_or_else(|| self.id.to_string())
    }
}
