//! Reference codes printed on the cover page.
//!
//! Codes are derived from entity IDs with SHA-256, so regenerating a
//! statement yields the same numbers. They are references, not secrets.

use abrechnung_shared::types::{DocumentId, PropertyId, UnitId, UserId};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Cover-page reference codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceCodes {
    /// 8 digits.
    pub property_number: String,
    /// "H" + 7 digits.
    pub heidi_customer_number: String,
    /// 10 digits.
    pub user_number: String,
    /// 8 upper-case hex characters.
    pub security_code: String,
}

impl ReferenceCodes {
    /// Derives all codes. Without an owner the property stands in for the customer.
    #[must_use]
    pub fn derive(
        property_id: PropertyId,
        owner_id: Option<UserId>,
        unit_id: UnitId,
        document_id: DocumentId,
    ) -> Self {
        let customer: &[u8] = owner_id
            .as_ref()
            .map_or(property_id.as_bytes().as_slice(), |id| id.as_bytes().as_slice());

        let property_number = digits(&digest(b"property", &[property_id.as_bytes()]), 8);
        let heidi_customer_number = format!("H{}", digits(&digest(b"customer", &[customer]), 7));
        let user_number = digits(
            &digest(b"user", &[customer, unit_id.as_bytes(), document_id.as_bytes()]),
            10,
        );
        let security_code = digest(b"security", &[customer, document_id.as_bytes()])
            .iter()
            .take(4)
            .map(|b| format!("{b:02X}"))
            .collect();

        Self {
            property_number,
            heidi_customer_number,
            user_number,
            security_code,
        }
    }
}

fn digest(tag: &[u8], parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(tag);
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// The first eight hash bytes reduced to `width` zero-padded decimal digits.
fn digits(hash: &[u8; 32], width: u32) -> String {
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&hash[..8]);
    let value = u64::from_be_bytes(prefix) % 10u64.pow(width);
    format!("{value:0width$}", width = width as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn ids() -> (PropertyId, UserId, UnitId, DocumentId) {
        (
            PropertyId::from_uuid(Uuid::from_u128(1)),
            UserId::from_uuid(Uuid::from_u128(2)),
            UnitId::from_uuid(Uuid::from_u128(3)),
            DocumentId::from_uuid(Uuid::from_u128(4)),
        )
    }

    #[test]
    fn test_code_formats() {
        let (property, owner, unit, doc) = ids();
        let codes = ReferenceCodes::derive(property, Some(owner), unit, doc);

        assert_eq!(codes.property_number.len(), 8);
        assert!(codes.property_number.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(codes.heidi_customer_number.len(), 8);
        assert!(codes.heidi_customer_number.starts_with('H'));
        assert_eq!(codes.user_number.len(), 10);
        assert!(codes.user_number.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(codes.security_code.len(), 8);
        assert!(
            codes
                .security_code
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        );
    }

    #[test]
    fn test_codes_are_deterministic() {
        let (property, owner, unit, doc) = ids();
        assert_eq!(
            ReferenceCodes::derive(property, Some(owner), unit, doc),
            ReferenceCodes::derive(property, Some(owner), unit, doc)
        );
    }

    #[test]
    fn test_property_stands_in_for_missing_owner() {
        let (property, owner, unit, doc) = ids();
        let without_owner = ReferenceCodes::derive(property, None, unit, doc);
        let with_owner = ReferenceCodes::derive(property, Some(owner), unit, doc);

        assert_eq!(without_owner.property_number, with_owner.property_number);
        assert_ne!(without_owner.heidi_customer_number, with_owner.heidi_customer_number);
        assert_eq!(without_owner.heidi_customer_number.len(), 8);
        assert_eq!(without_owner.user_number.len(), 10);
    }

    #[test]
    fn test_user_number_differs_per_unit() {
        let (property, owner, unit, doc) = ids();
        let other = UnitId::from_uuid(Uuid::from_u128(5));
        assert_ne!(
            ReferenceCodes::derive(property, Some(owner), unit, doc).user_number,
            ReferenceCodes::derive(property, Some(owner), other, doc).user_number
        );
    }
}
