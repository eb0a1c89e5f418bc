//! # ct-types — Civic-Transparency Record Types
//!
//! The typed public surface of the data model: [`ProvenanceTag`],
//! [`Series`] (with nested [`Point`]), and the experiment records
//! [`Meta`], [`Run`], [`Scenario`]. Every type implements the
//! [`Record`] trait: schema-checked construction (`from_value`,
//! `from_json`), canonical serialization (`to_mapping`, `to_json`,
//! `to_json_pretty`), and validated copy-with-updates.
//!
//! ## Validation Is the Only Door
//!
//! `from_value` and `from_json` validate against the bundled schema
//! registry before decoding; `with_updates` re-validates the merged
//! whole. Batch callers should expect some fraction of real-world
//! inputs to fail and route rejects to a quarantine path — acceptance
//! is all-or-nothing per record, and the [`ct_schema::ValidationReport`]
//! lists every violation at once.
//!
//! ## Example
//!
//! ```
//! use ct_types::{ProvenanceTag, Record};
//!
//! let tag = ProvenanceTag::from_json(r#"{
//!     "acct_age_bucket": "1-6m",
//!     "acct_type": "person",
//!     "automation_flag": "manual",
//!     "post_kind": "original",
//!     "client_family": "mobile",
//!     "media_provenance": "hash_only",
//!     "dedup_hash": "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef"
//! }"#)?;
//! assert_eq!(tag.acct_type, ct_types::AcctType::Person);
//! let round_tripped = ProvenanceTag::from_json(&tag.to_json()?)?;
//! assert_eq!(round_tripped, tag);
//! # Ok::<(), ct_schema::SchemaError>(())
//! ```

pub mod experiment;
mod num;
pub mod provenance_tag;
pub mod record;
pub mod series;

pub use experiment::{Meta, Run, Scenario};
pub use provenance_tag::ProvenanceTag;
pub use record::Record;
pub use series::{Point, Series};

// Re-export the vocabulary and field types so most callers need only
// this crate.
pub use ct_core::{
    AcctAgeBucket, AcctType, AutomationFlag, ClientFamily, DedupHash, Interval, MediaProvenance,
    OriginHint, PostKind, SchemaVersion, Slug, Timestamp, Topic,
};
pub use ct_schema::{ConstraintKind, FieldError, SchemaError, ValidationReport};
