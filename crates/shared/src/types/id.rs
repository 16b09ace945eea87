//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `UnitId` where a `PropertyId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }

            /// Returns the raw UUID bytes.
            #[must_use]
            pub const fn as_bytes(&self) -> &[u8; 16] {
                self.0.as_bytes()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(PropertyId, "Unique identifier for a building (Objekt).");
typed_id!(UnitId, "Unique identifier for a rental unit (Lokal).");
typed_id!(ContractId, "Unique identifier for a rental contract.");
typed_id!(ContractorId, "Unique identifier for a tenant (contractor).");
typed_id!(InvoiceId, "Unique identifier for an invoice line.");
typed_id!(CostCategoryId, "Unique identifier for a cost category.");
typed_id!(DocumentId, "Unique identifier for a billing document.");
typed_id!(UserId, "Unique identifier for the landlord account.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_id_roundtrips_through_string() {
        let id = UnitId::new();
        let parsed = UnitId::from_str(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_typed_id_rejects_garbage() {
        assert!(PropertyId::from_str("not-a-uuid").is_err());
    }

    #[test]
    fn test_typed_id_wraps_uuid() {
        let uuid = Uuid::nil();
        let id = ContractId::from_uuid(uuid);
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
        assert_eq!(id.into_inner(), uuid);
        assert_eq!(id.as_bytes(), &[0u8; 16]);
    }
}
