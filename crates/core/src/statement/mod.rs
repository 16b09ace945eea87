//! Statement model builder.
//!
//! Turns one input snapshot into the six-page statement consumed by the
//! preview and print renderers:
//! - Deckblatt (cover and operating-cost settlement)
//! - Gesamtabrechnung (building pools, Heizung / Warmwasser derivation)
//! - Kaltwasser (cold-water rates)
//! - Einzelabrechnung (unit breakdown)
//! - CO2-Kosten (CO2KostAufG split)
//! - Energieverbrauch (energy summary)

pub mod builder;
pub mod error;
pub mod identifiers;
pub mod input;
pub mod pages;
pub mod types;
pub mod warning;

mod sections;
mod settlement;
mod validation;


pub use builder::StatementBuilder;
pub use error::{MissingInputError, StatementError};
pub use identifiers::ReferenceCodes;
pub use input::{AllocationConfig, DocumentMeta, StatementInput};
pub use pages::{DocumentKind, DocumentPage, PageRef, RenderTarget, layout};
pub use types::*;
pub use warning::DataInconsistencyWarning;
