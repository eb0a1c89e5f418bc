//! # Categorical Vocabularies — Single Source of Truth
//!
//! One Rust enum per categorical dimension of the civic-transparency
//! schemas. Each enum is the ONE definition used everywhere: as a
//! `ProvenanceTag` field, as a distribution-map key inside `Series`
//! points, and in tests. Every `match` on these enums is exhaustive,
//! so adding a vocabulary value forces every consumer to handle it at
//! compile time.
//!
//! The serde string form of every variant is byte-identical to the
//! literal in the corresponding `enum` list of the schema documents —
//! `as_str()`, `FromStr`, and serde all agree. The per-enum
//! `test_serde_format_matches_as_str` tests pin this.
//!
//! ## Privacy Invariant
//!
//! All vocabularies are deliberately coarse. `AcctAgeBucket` carries an
//! age range, never a creation timestamp; `ClientFamily` carries a client
//! class, never a user-agent string.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CtError;

/// Coarse account-age bucket at posting time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AcctAgeBucket {
    /// Account created within the last 7 days.
    #[serde(rename = "0-7d")]
    Days0To7,
    /// Account created 8 to 30 days ago.
    #[serde(rename = "8-30d")]
    Days8To30,
    /// Account created 1 to 6 months ago.
    #[serde(rename = "1-6m")]
    Months1To6,
    /// Account created 6 to 24 months ago.
    #[serde(rename = "6-24m")]
    Months6To24,
    /// Account older than 24 months.
    #[serde(rename = "24m+")]
    Over24Months,
}

impl AcctAgeBucket {
    /// All buckets in schema declaration order.
    pub fn all() -> &'static [AcctAgeBucket] {
        &[
            Self::Days0To7,
            Self::Days8To30,
            Self::Months1To6,
            Self::Months6To24,
            Self::Over24Months,
        ]
    }

    /// The schema literal for this bucket.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Days0To7 => "0-7d",
            Self::Days8To30 => "8-30d",
            Self::Months1To6 => "1-6m",
            Self::Months6To24 => "6-24m",
            Self::Over24Months => "24m+",
        }
    }
}

impl std::fmt::Display for AcctAgeBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AcctAgeBucket {
    type Err = CtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0-7d" => Ok(Self::Days0To7),
            "8-30d" => Ok(Self::Days8To30),
            "1-6m" => Ok(Self::Months1To6),
            "6-24m" => Ok(Self::Months6To24),
            "24m+" => Ok(Self::Over24Months),
            other => Err(CtError::invalid(
                "acct_age_bucket",
                format!("unknown value: {other:?}"),
            )),
        }
    }
}

/// Declared or inferred account class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcctType {
    /// Individual human account.
    Person,
    /// Company, NGO, campaign, or other organization.
    Organization,
    /// Government body, public agency, or similar institution.
    Institution,
    /// Self-declared automated account.
    Bot,
    /// Class could not be determined.
    Unknown,
}

impl AcctType {
    /// All account types in schema declaration order.
    pub fn all() -> &'static [AcctType] {
        &[
            Self::Person,
            Self::Organization,
            Self::Institution,
            Self::Bot,
            Self::Unknown,
        ]
    }

    /// The schema literal for this account type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Organization => "organization",
            Self::Institution => "institution",
            Self::Bot => "bot",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for AcctType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AcctType {
    type Err = CtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "person" => Ok(Self::Person),
            "organization" => Ok(Self::Organization),
            "institution" => Ok(Self::Institution),
            "bot" => Ok(Self::Bot),
            "unknown" => Ok(Self::Unknown),
            other => Err(CtError::invalid(
                "acct_type",
                format!("unknown value: {other:?}"),
            )),
        }
    }
}

/// How a post was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutomationFlag {
    /// Composed and published by a human in the moment.
    Manual,
    /// Queued by a human, published by a scheduler.
    Scheduled,
    /// Produced without human involvement per post.
    Automated,
    /// Production mode could not be determined.
    Unknown,
}

impl AutomationFlag {
    /// All automation flags in schema declaration order.
    pub fn all() -> &'static [AutomationFlag] {
        &[Self::Manual, Self::Scheduled, Self::Automated, Self::Unknown]
    }

    /// The schema literal for this flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Scheduled => "scheduled",
            Self::Automated => "automated",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for AutomationFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AutomationFlag {
    type Err = CtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual" => Ok(Self::Manual),
            "scheduled" => Ok(Self::Scheduled),
            "automated" => Ok(Self::Automated),
            "unknown" => Ok(Self::Unknown),
            other => Err(CtError::invalid(
                "automation_flag",
                format!("unknown value: {other:?}"),
            )),
        }
    }
}

/// Structural type of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostKind {
    /// Standalone post.
    Original,
    /// Reply to another post.
    Reply,
    /// Reshare without commentary.
    Repost,
    /// Reshare with added commentary.
    Quote,
}

impl PostKind {
    /// All post kinds in schema declaration order.
    pub fn all() -> &'static [PostKind] {
        &[Self::Original, Self::Reply, Self::Repost, Self::Quote]
    }

    /// The schema literal for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Reply => "reply",
            Self::Repost => "repost",
            Self::Quote => "quote",
        }
    }
}

impl std::fmt::Display for PostKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostKind {
    type Err = CtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "original" => Ok(Self::Original),
            "reply" => Ok(Self::Reply),
            "repost" => Ok(Self::Repost),
            "quote" => Ok(Self::Quote),
            other => Err(CtError::invalid(
                "post_kind",
                format!("unknown value: {other:?}"),
            )),
        }
    }
}

/// Posting client class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientFamily {
    /// First-party web client.
    Web,
    /// First-party mobile client.
    Mobile,
    /// First-party desktop client.
    Desktop,
    /// Third-party API client.
    Api,
    /// Client class could not be determined.
    Unknown,
}

impl ClientFamily {
    /// All client families in schema declaration order.
    pub fn all() -> &'static [ClientFamily] {
        &[Self::Web, Self::Mobile, Self::Desktop, Self::Api, Self::Unknown]
    }

    /// The schema literal for this family.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
            Self::Api => "api",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ClientFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientFamily {
    type Err = CtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web" => Ok(Self::Web),
            "mobile" => Ok(Self::Mobile),
            "desktop" => Ok(Self::Desktop),
            "api" => Ok(Self::Api),
            "unknown" => Ok(Self::Unknown),
            other => Err(CtError::invalid(
                "client_family",
                format!("unknown value: {other:?}"),
            )),
        }
    }
}

/// Whether and how attached media carried provenance attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaProvenance {
    /// Media carried C2PA provenance credentials.
    C2paPresent,
    /// Only a content hash was available for the media.
    HashOnly,
    /// No media, or media with no provenance signal.
    None,
}

impl MediaProvenance {
    /// All media provenance states in schema declaration order.
    pub fn all() -> &'static [MediaProvenance] {
        &[Self::C2paPresent, Self::HashOnly, Self::None]
    }

    /// The schema literal for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::C2paPresent => "c2pa_present",
            Self::HashOnly => "hash_only",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for MediaProvenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaProvenance {
    type Err = CtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c2pa_present" => Ok(Self::C2paPresent),
            "hash_only" => Ok(Self::HashOnly),
            "none" => Ok(Self::None),
            other => Err(CtError::invalid(
                "media_provenance",
                format!("unknown value: {other:?}"),
            )),
        }
    }
}

/// Bucket width of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Interval {
    /// One-minute buckets.
    #[serde(rename = "minute")]
    Minute,
    /// Five-minute buckets.
    #[serde(rename = "5-minute")]
    FiveMinute,
    /// Fifteen-minute buckets.
    #[serde(rename = "15-minute")]
    FifteenMinute,
    /// One-hour buckets.
    #[serde(rename = "hour")]
    Hour,
}

impl Interval {
    /// All intervals in schema declaration order.
    pub fn all() -> &'static [Interval] {
        &[Self::Minute, Self::FiveMinute, Self::FifteenMinute, Self::Hour]
    }

    /// The schema literal for this interval.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::FiveMinute => "5-minute",
            Self::FifteenMinute => "15-minute",
            Self::Hour => "hour",
        }
    }

    /// Bucket width in seconds.
    pub fn seconds(&self) -> u64 {
        match self {
            Self::Minute => 60,
            Self::FiveMinute => 300,
            Self::FifteenMinute => 900,
            Self::Hour => 3600,
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = CtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minute" => Ok(Self::Minute),
            "5-minute" => Ok(Self::FiveMinute),
            "15-minute" => Ok(Self::FifteenMinute),
            "hour" => Ok(Self::Hour),
            other => Err(CtError::invalid(
                "interval",
                format!("unknown value: {other:?}"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each vocabulary must agree across as_str, FromStr, and serde.
    // A macro keeps the grid readable; the assertions are the same for
    // every enum.
    macro_rules! vocab_contract {
        ($name:ident, $ty:ty) => {
            mod $name {
                use crate::vocab::*;

                #[test]
                fn test_as_str_roundtrip() {
                    for v in <$ty>::all() {
                        let parsed: $ty = v.as_str().parse().unwrap();
                        assert_eq!(*v, parsed);
                    }
                }

                #[test]
                fn test_serde_format_matches_as_str() {
                    for v in <$ty>::all() {
                        let json = serde_json::to_string(v).unwrap();
                        assert_eq!(json, format!("\"{}\"", v.as_str()));
                        let back: $ty = serde_json::from_str(&json).unwrap();
                        assert_eq!(*v, back);
                    }
                }

                #[test]
                fn test_all_unique() {
                    let mut seen = std::collections::HashSet::new();
                    for v in <$ty>::all() {
                        assert!(seen.insert(v.as_str()), "duplicate literal: {v}");
                    }
                }

                #[test]
                fn test_from_str_invalid() {
                    assert!("wizard".parse::<$ty>().is_err());
                    assert!("".parse::<$ty>().is_err());
                }
            }
        };
    }

    vocab_contract!(acct_age_bucket, AcctAgeBucket);
    vocab_contract!(acct_type, AcctType);
    vocab_contract!(automation_flag, AutomationFlag);
    vocab_contract!(post_kind, PostKind);
    vocab_contract!(client_family, ClientFamily);
    vocab_contract!(media_provenance, MediaProvenance);
    vocab_contract!(interval, Interval);

    #[test]
    fn test_case_sensitive() {
        assert!("Person".parse::<AcctType>().is_err());
        assert!("MANUAL".parse::<AutomationFlag>().is_err());
    }

    #[test]
    fn test_interval_seconds() {
        assert_eq!(Interval::Minute.seconds(), 60);
        assert_eq!(Interval::FiveMinute.seconds(), 300);
        assert_eq!(Interval::FifteenMinute.seconds(), 900);
        assert_eq!(Interval::Hour.seconds(), 3600);
    }

    #[test]
    fn test_vocab_sizes() {
        assert_eq!(AcctAgeBucket::all().len(), 5);
        assert_eq!(AcctType::all().len(), 5);
        assert_eq!(AutomationFlag::all().len(), 4);
        assert_eq!(PostKind::all().len(), 4);
        assert_eq!(ClientFamily::all().len(), 5);
        assert_eq!(MediaProvenance::all().len(), 3);
        assert_eq!(Interval::all().len(), 4);
    }
}
