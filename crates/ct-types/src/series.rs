//! # Series & Point
//!
//! A time-bucketed aggregation of posts about one topic. Each point is
//! one bucket of aggregate counters plus optional distribution maps
//! keyed by the `ProvenanceTag` vocabularies.
//!
//! Chronological ordering of `points` is a producer obligation the
//! schema deliberately does not enforce — consumers that depend on it
//! should check [`Series::points_are_chronological`] at the boundary.
//!
//! Mirrors `series.schema.json`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use ct_core::{AcctType, AutomationFlag, ClientFamily, Interval, Timestamp, Topic};

use crate::record::Record;

/// One bucket of aggregates. Nested in [`Series`]; validated as part of
/// the whole series document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Point {
    /// Start of the bucket.
    pub timestamp: Timestamp,
    /// Number of posts observed in the bucket.
    #[serde(deserialize_with = "crate::num::uint")]
    pub count: u64,
    /// Fraction of posts that are reshares, if computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reshare_ratio: Option<f64>,
    /// Post counts per account type.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::num::opt_uint_map"
    )]
    pub acct_type_mix: Option<BTreeMap<AcctType, u64>>,
    /// Post counts per automation flag.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::num::opt_uint_map"
    )]
    pub automation_mix: Option<BTreeMap<AutomationFlag, u64>>,
    /// Post counts per client family.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::num::opt_uint_map"
    )]
    pub client_mix: Option<BTreeMap<ClientFamily, u64>>,
}

/// Time-bucketed aggregation of posts about one topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Series {
    /// Subject of the series.
    pub topic: Topic,
    /// Moment the series was produced.
    pub generated_at: Timestamp,
    /// Bucket width for every point.
    pub interval: Interval,
    /// Ordered sequence of buckets. May be empty.
    pub points: Vec<Point>,
}

impl Record for Series {
    const TYPE_NAME: &'static str = "series";
}

impl Series {
    /// True if `points` is sorted by bucket timestamp, strictly
    /// ascending. An expectation on producers, not a validated
    /// invariant; empty and single-point series are trivially ordered.
    pub fn points_are_chronological(&self) -> bool {
        self.points
            .windows(2)
            .all(|pair| pair[0].timestamp < pair[1].timestamp)
    }

    /// Total post count across all points.
    pub fn total_count(&self) -> u64 {
        self.points.iter().map(|p| p.count).sum()
    }
}
