//! # Validated String Newtypes
//!
//! Newtype wrappers for the pattern-constrained string fields of the
//! civic-transparency records. The inner `String` is private; the only
//! construction paths are the validating `new()` constructors and serde
//! deserialization (routed through `TryFrom<String>`), so a held value
//! is always well-formed. You cannot pass a topic where a dedup hash is
//! expected.
//!
//! The checks here are byte-for-byte the same constraints the schema
//! documents declare; hand-rolled character checks keep this leaf crate
//! free of a regex dependency for a handful of fixed patterns.

use serde::{Deserialize, Serialize};

use crate::error::CtError;

/// Subject of a series: a non-empty token of at most 200 characters,
/// e.g. a hashtag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Topic(String);

impl Topic {
    /// Validate and wrap a topic string.
    ///
    /// # Errors
    ///
    /// Rejects empty strings and strings longer than 200 characters.
    pub fn new(s: impl Into<String>) -> Result<Self, CtError> {
        let s = s.into();
        let chars = s.chars().count();
        if chars == 0 {
            return Err(CtError::invalid("topic", "must not be empty"));
        }
        if chars > 200 {
            return Err(CtError::invalid(
                "topic",
                format!("length {chars} exceeds maximum of 200"),
            ));
        }
        Ok(Self(s))
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Lowercase hex content fingerprint, exactly 64 characters.
///
/// A fingerprint for duplicate clustering, never raw content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DedupHash(String);

impl DedupHash {
    /// Validate and wrap a dedup hash.
    ///
    /// # Errors
    ///
    /// Rejects strings that are not exactly 64 lowercase hex characters.
    pub fn new(s: impl Into<String>) -> Result<Self, CtError> {
        let s = s.into();
        if s.len() != 64 {
            return Err(CtError::invalid(
                "dedup_hash",
                format!("expected 64 hex characters, got {}", s.len()),
            ));
        }
        if !s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)) {
            return Err(CtError::invalid(
                "dedup_hash",
                "must contain only lowercase hex characters",
            ));
        }
        Ok(Self(s))
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Coarse geographic hint: ISO 3166 country code with optional region
/// subdivision, e.g. `US` or `US-CA`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OriginHint(String);

impl OriginHint {
    /// Validate and wrap an origin hint.
    ///
    /// # Errors
    ///
    /// Rejects strings not matching `^[A-Z]{2}(-[A-Z0-9]{1,3})?$`.
    pub fn new(s: impl Into<String>) -> Result<Self, CtError> {
        let s = s.into();
        if !Self::matches_pattern(&s) {
            return Err(CtError::invalid(
                "origin_hint",
                format!("{s:?} does not match COUNTRY or COUNTRY-REGION form"),
            ));
        }
        Ok(Self(s))
    }

    fn matches_pattern(s: &str) -> bool {
        let bytes = s.as_bytes();
        if bytes.len() < 2 || !bytes[..2].iter().all(u8::is_ascii_uppercase) {
            return false;
        }
        match &bytes[2..] {
            [] => true,
            [b'-', region @ ..] => {
                (1..=3).contains(&region.len())
                    && region
                        .iter()
                        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
            }
            _ => false,
        }
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two-letter country portion of the hint.
    pub fn country(&self) -> &str {
        &self.0[..2]
    }

    /// The region subdivision, if present.
    pub fn region(&self) -> Option<&str> {
        self.0.get(3..)
    }
}

/// Stable lowercase identifier: leading lowercase alphanumeric, then
/// lowercase alphanumerics or hyphens, at most 64 characters. Used for
/// run ids and scenario names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Validate and wrap an identifier.
    ///
    /// # Errors
    ///
    /// Rejects strings not matching `^[a-z0-9][a-z0-9-]{0,63}$`.
    pub fn new(s: impl Into<String>) -> Result<Self, CtError> {
        let s = s.into();
        if !Self::matches_pattern(&s) {
            return Err(CtError::invalid(
                "slug",
                format!("{s:?} is not a lowercase identifier of at most 64 characters"),
            ));
        }
        Ok(Self(s))
    }

    fn matches_pattern(s: &str) -> bool {
        let bytes = s.as_bytes();
        let Some((first, rest)) = bytes.split_first() else {
            return false;
        };
        bytes.len() <= 64
            && (first.is_ascii_lowercase() || first.is_ascii_digit())
            && rest
                .iter()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Version of the normative schema package, `MAJOR.MINOR.PATCH`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SchemaVersion(String);

impl SchemaVersion {
    /// Validate and wrap a version string.
    ///
    /// # Errors
    ///
    /// Rejects strings that are not three dot-separated digit groups.
    pub fn new(s: impl Into<String>) -> Result<Self, CtError> {
        let s = s.into();
        if !Self::matches_pattern(&s) {
            return Err(CtError::invalid(
                "schema_version",
                format!("{s:?} is not MAJOR.MINOR.PATCH"),
            ));
        }
        Ok(Self(s))
    }

    fn matches_pattern(s: &str) -> bool {
        let parts: Vec<&str> = s.split('.').collect();
        parts.len() == 3
            && parts
                .iter()
                .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_newtype_conversions {
    ($ty:ident) => {
        impl TryFrom<String> for $ty {
            type Error = CtError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$ty> for String {
            fn from(v: $ty) -> String {
                v.0
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_newtype_conversions!(Topic);
string_newtype_conversions!(DedupHash);
string_newtype_conversions!(OriginHint);
string_newtype_conversions!(Slug);
string_newtype_conversions!(SchemaVersion);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_topic_accepts_hashtag() {
        let t = Topic::new("#TestTopic").unwrap();
        assert_eq!(t.as_str(), "#TestTopic");
    }

    #[test]
    fn test_topic_rejects_empty() {
        assert!(Topic::new("").is_err());
    }

    #[test]
    fn test_topic_rejects_over_200_chars() {
        assert!(Topic::new("x".repeat(200)).is_ok());
        assert!(Topic::new("x".repeat(201)).is_err());
    }

    #[test]
    fn test_topic_length_counts_chars_not_bytes() {
        // 200 multibyte characters is within bounds even at 600 bytes.
        assert!(Topic::new("\u{00e9}".repeat(200)).is_ok());
    }

    #[test]
    fn test_dedup_hash_accepts_64_hex() {
        let h = DedupHash::new("a".repeat(64)).unwrap();
        assert_eq!(h.as_str().len(), 64);
    }

    #[test]
    fn test_dedup_hash_rejects_wrong_length() {
        assert!(DedupHash::new("a1b2c3d4").is_err());
        assert!(DedupHash::new("a".repeat(63)).is_err());
        assert!(DedupHash::new("a".repeat(65)).is_err());
        assert!(DedupHash::new("").is_err());
    }

    #[test]
    fn test_dedup_hash_rejects_non_hex() {
        assert!(DedupHash::new("g".repeat(64)).is_err());
        assert!(DedupHash::new("A".repeat(64)).is_err()); // uppercase
        assert!(DedupHash::new(format!("{}!", "a".repeat(63))).is_err());
    }

    #[test]
    fn test_origin_hint_forms() {
        assert!(OriginHint::new("US").is_ok());
        assert!(OriginHint::new("US-CA").is_ok());
        assert!(OriginHint::new("DE-BY").is_ok());
        assert!(OriginHint::new("GB-ENG").is_ok());
        assert!(OriginHint::new("US-06").is_ok());
    }

    #[test]
    fn test_origin_hint_rejects_malformed() {
        assert!(OriginHint::new("us").is_err());
        assert!(OriginHint::new("USA").is_err());
        assert!(OriginHint::new("U").is_err());
        assert!(OriginHint::new("US-").is_err());
        assert!(OriginHint::new("US-CALI").is_err());
        assert!(OriginHint::new("US_CA").is_err());
        assert!(OriginHint::new("").is_err());
    }

    #[test]
    fn test_origin_hint_accessors() {
        let h = OriginHint::new("US-CA").unwrap();
        assert_eq!(h.country(), "US");
        assert_eq!(h.region(), Some("CA"));
        let bare = OriginHint::new("US").unwrap();
        assert_eq!(bare.region(), None);
    }

    #[test]
    fn test_slug_forms() {
        assert!(Slug::new("run-2026-02-07a").is_ok());
        assert!(Slug::new("burst-baseline").is_ok());
        assert!(Slug::new("0").is_ok());
        assert!(Slug::new("a".repeat(64)).is_ok());
    }

    #[test]
    fn test_slug_rejects_malformed() {
        assert!(Slug::new("").is_err());
        assert!(Slug::new("-leading-hyphen").is_err());
        assert!(Slug::new("Run With Spaces").is_err());
        assert!(Slug::new("UPPER").is_err());
        assert!(Slug::new("under_score").is_err());
        assert!(Slug::new("a".repeat(65)).is_err());
    }

    #[test]
    fn test_schema_version_forms() {
        assert!(SchemaVersion::new("1.2.0").is_ok());
        assert!(SchemaVersion::new("0.0.1").is_ok());
        assert!(SchemaVersion::new("10.20.30").is_ok());
    }

    #[test]
    fn test_schema_version_rejects_malformed() {
        assert!(SchemaVersion::new("1.2").is_err());
        assert!(SchemaVersion::new("1.2.3.4").is_err());
        assert!(SchemaVersion::new("1.2.x").is_err());
        assert!(SchemaVersion::new("v1.2.3").is_err());
        assert!(SchemaVersion::new("1..3").is_err());
        assert!(SchemaVersion::new("").is_err());
    }

    #[test]
    fn test_serde_rejects_invalid() {
        assert!(serde_json::from_str::<DedupHash>("\"tooshort\"").is_err());
        assert!(serde_json::from_str::<OriginHint>("\"us-ca\"").is_err());
        assert!(serde_json::from_str::<Topic>("\"\"").is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let h = DedupHash::new("0123456789abcdef".repeat(4)).unwrap();
        let json = serde_json::to_string(&h).unwrap();
        let back: DedupHash = serde_json::from_str(&json).unwrap();
        assert_eq!(h, back);
    }

    proptest! {
        #[test]
        fn prop_dedup_hash_accepts_any_64_hex(s in "[a-f0-9]{64}") {
            prop_assert!(DedupHash::new(s).is_ok());
        }

        #[test]
        fn prop_dedup_hash_rejects_other_lengths(s in "[a-f0-9]{0,63}") {
            prop_assert!(DedupHash::new(s).is_err());
        }

        #[test]
        fn prop_origin_hint_accepts_pattern(s in "[A-Z]{2}(-[A-Z0-9]{1,3})?") {
            prop_assert!(OriginHint::new(s).is_ok());
        }
    }
}
