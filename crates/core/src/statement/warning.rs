//! Non-fatal data inconsistencies attached to a statement.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use crate::readings::Medium;

/// A data problem the engine worked around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DataInconsistencyWarning {
    /// A cost category names an allocation key the engine does not know.
    /// The invoice was charged in full.
    UnknownAllocationKey {
        /// Invoice cost type.
        cost_type: String,
        /// Unrecognised key.
        key: String,
    },

    /// No cost category matches the invoice; shown as "Unbekannt" and charged in full.
    MissingCostCategory {
        /// Invoice cost type.
        cost_type: String,
    },

    /// The cost type matches no pool; booked under "Sonstige".
    UnknownCostType {
        /// Raw cost type.
        cost_type: String,
    },

    /// A rate would divide by zero consumption and was published as 0.
    ZeroConsumption {
        /// Medium without metered consumption.
        medium: Medium,
    },

    /// Neither invoices nor readings name the delivered energy.
    MissingEnergyQuantity,

    /// No energy invoice states a CO2 levy.
    MissingCo2Cost,

    /// An internal consistency check failed.
    ReconciliationMismatch {
        /// Check name.
        check: String,
        /// Expected value.
        expected: Decimal,
        /// Computed value.
        actual: Decimal,
    },
}

/// Warnings in discovery order. Every warning is logged when recorded.
#[derive(Debug, Default)]
pub(crate) struct Warnings(Vec<DataInconsistencyWarning>);

impl Warnings {
    pub(crate) fn push(&mut self, warning: DataInconsistencyWarning) {
        warn!(warning = ?warning, "Data inconsistency");
        if !self.0.contains(&warning) {
            self.0.push(warning);
        }
    }

    pub(crate) fn into_vec(self) -> Vec<DataInconsistencyWarning> {
        self.0
    }
}
