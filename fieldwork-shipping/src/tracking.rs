use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A shipment tracking identifier: `SHP` followed by 8 uppercase
/// alphanumeric characters.
///
/// Generated client-side before insertion, so the identifier is known and
/// shown to the user even if the insert later fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingNumber(String);

impl TrackingNumber {
    /// Generate a fresh tracking number from a random UUID.
    pub fn generate() -> Self {
        let tail: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(8)
            .collect();
        Self(format!("SHP{}", tail.to_uppercase()))
    }

    /// Validate an existing identifier against the `SHP[A-Z0-9]{8}` shape.
    pub fn parse(raw: &str) -> Option<Self> {
        let tail = raw.strip_prefix("SHP")?;
        if tail.len() == 8
            && tail
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_numbers_match_the_pattern() {
        for _ in 0..100 {
            let tracking = TrackingNumber::generate();
            assert!(
                TrackingNumber::parse(tracking.as_str()).is_some(),
                "bad tracking number: {tracking}"
            );
        }
    }

    #[test]
    fn parse_rejects_wrong_shapes() {
        assert!(TrackingNumber::parse("SHP1234567").is_none()); // too short
        assert!(TrackingNumber::parse("SHP123456789").is_none()); // too long
        assert!(TrackingNumber::parse("ABC12345678").is_none()); // wrong prefix
        assert!(TrackingNumber::parse("SHPabcd1234").is_none()); // lowercase
        assert!(TrackingNumber::parse("SHPAB12CD34").is_some());
    }

    #[test]
    fn serializes_as_a_bare_string() {
        let tracking = TrackingNumber::parse("SHPAB12CD34").unwrap();
        assert_eq!(
            serde_json::to_string(&tracking).unwrap(),
            "\"SHPAB12CD34\""
        );
    }
}
