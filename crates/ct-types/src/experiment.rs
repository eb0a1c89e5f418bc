//! # Experiment Records — Meta, Run, Scenario
//!
//! Flat records describing how a transparency dataset was produced.
//! Same machinery as the telemetry records, no new patterns.

use serde::{Deserialize, Serialize};

use ct_core::{SchemaVersion, Slug, Timestamp, Topic};

use crate::record::Record;

/// Provenance of a generated dataset. Mirrors `meta.schema.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Meta {
    /// Version of the normative schema package the dataset conforms to.
    pub schema_version: SchemaVersion,
    /// Name and version of the producing tool.
    pub generated_by: String,
    /// Dataset creation time.
    pub created_at: Timestamp,
    /// Optional human-readable note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Record for Meta {
    const TYPE_NAME: &'static str = "meta";
}

/// One execution of a scenario. Mirrors `run.schema.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Run {
    /// Stable lowercase identifier for the run.
    pub run_id: Slug,
    /// Name of the scenario this run executed.
    pub scenario: String,
    /// Run start.
    pub started_at: Timestamp,
    /// Run completion, if the run finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
    /// Seed used for stochastic generation, for reproducibility.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::num::opt_uint"
    )]
    pub seed: Option<u64>,
}

impl Record for Run {
    const TYPE_NAME: &'static str = "run";
}

/// Declarative description of an experiment. Mirrors `scenario.schema.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Stable lowercase identifier for the scenario.
    pub name: Slug,
    /// Subject to observe.
    pub topic: Topic,
    /// Optional human-readable summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Observation window length in minutes.
    #[serde(deserialize_with = "crate::num::uint32")]
    pub duration_minutes: u32,
}

impl Record for Scenario {
    const TYPE_NAME: &'static str = "scenario";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_meta_roundtrip() {
        let meta = Meta::from_value(json!({
            "schema_version": "1.2.0",
            "generated_by": "ct-sim 0.4.1",
            "created_at": "2026-02-07T00:00:00Z",
        }))
        .unwrap();
        assert_eq!(Meta::from_json(&meta.to_json().unwrap()).unwrap(), meta);
    }

    #[test]
    fn test_meta_rejects_loose_version() {
        let err = Meta::from_value(json!({
            "schema_version": "1.2",
            "generated_by": "ct-sim",
            "created_at": "2026-02-07T00:00:00Z",
        }))
        .unwrap_err();
        match err {
            ct_schema::SchemaError::Invalid { report, .. } => {
                assert_eq!(report.errors()[0].path, "schema_version");
            }
            other => panic!("expected Invalid, got: {other}"),
        }
    }

    #[test]
    fn test_run_with_optional_fields() {
        let run = Run::from_value(json!({
            "run_id": "run-2026-02-07a",
            "scenario": "burst-baseline",
            "started_at": "2026-02-07T00:00:00Z",
            "completed_at": "2026-02-07T01:00:00Z",
            "seed": 42,
        }))
        .unwrap();
        assert_eq!(run.seed, Some(42));
        assert!(run.completed_at.unwrap() > run.started_at);
    }

    #[test]
    fn test_run_marks_completion_via_updates() {
        let run = Run::from_value(json!({
            "run_id": "run-1",
            "scenario": "burst-baseline",
            "started_at": "2026-02-07T00:00:00Z",
        }))
        .unwrap();
        assert!(run.completed_at.is_none());
        let done = run
            .with_updates(json!({"completed_at": "2026-02-07T01:00:00Z"}))
            .unwrap();
        assert!(done.completed_at.is_some());
        assert_eq!(done.run_id, run.run_id);
    }

    #[test]
    fn test_run_id_is_validated_at_every_door() {
        // The schema pattern and the Slug newtype enforce the same
        // constraint; serde deserialization alone cannot produce a
        // malformed identifier either.
        assert!(serde_json::from_str::<ct_core::Slug>("\"Run With Spaces\"").is_err());
        let err = Run::from_value(json!({
            "run_id": "Run With Spaces",
            "scenario": "s",
            "started_at": "2026-02-07T00:00:00Z",
        }))
        .unwrap_err();
        assert!(matches!(err, ct_schema::SchemaError::Invalid { .. }));
    }

    #[test]
    fn test_integral_float_seed_and_duration_accepted() {
        let run = Run::from_value(json!({
            "run_id": "run-1",
            "scenario": "burst-baseline",
            "started_at": "2026-02-07T00:00:00Z",
            "seed": 42.0,
        }))
        .unwrap();
        assert_eq!(run.seed, Some(42));

        let scenario = Scenario::from_value(json!({
            "name": "burst-baseline",
            "topic": "#TestTopic",
            "duration_minutes": 60.0,
        }))
        .unwrap();
        assert_eq!(scenario.duration_minutes, 60);
    }

    #[test]
    fn test_scenario_requires_positive_duration() {
        let err = Scenario::from_value(json!({
            "name": "burst-baseline",
            "topic": "#TestTopic",
            "duration_minutes": 0,
        }))
        .unwrap_err();
        assert!(matches!(err, ct_schema::SchemaError::Invalid { .. }));
    }
}
