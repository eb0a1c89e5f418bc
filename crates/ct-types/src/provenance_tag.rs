//! # ProvenanceTag
//!
//! Privacy-preserving provenance metadata for a single post. Every field
//! is a coarse bucket, a categorical value from a closed vocabulary, or
//! a content fingerprint — the type cannot represent a raw timestamp,
//! user identifier, or content excerpt.
//!
//! Mirrors `provenance_tag.schema.json`; field declaration order below
//! matches the schema so canonical output needs no reordering.

use serde::{Deserialize, Serialize};

use ct_core::{
    AcctAgeBucket, AcctType, AutomationFlag, ClientFamily, DedupHash, MediaProvenance, OriginHint,
    PostKind,
};

use crate::record::Record;

/// Provenance metadata for one post. Closed record: unknown fields are
/// rejected at validation and again by serde as defense in depth.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProvenanceTag {
    /// Coarse account-age bucket at posting time.
    pub acct_age_bucket: AcctAgeBucket,
    /// Declared or inferred account class.
    pub acct_type: AcctType,
    /// How the post was produced.
    pub automation_flag: AutomationFlag,
    /// Structural type of the post.
    pub post_kind: PostKind,
    /// Posting client class.
    pub client_family: ClientFamily,
    /// Whether attached media carried provenance attribution.
    pub media_provenance: MediaProvenance,
    /// Content fingerprint for duplicate clustering.
    pub dedup_hash: DedupHash,
    /// Coarse geographic hint, if disclosed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_hint: Option<OriginHint>,
    /// Declared automation origin, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_source: Option<String>,
}

impl Record for ProvenanceTag {
    const TYPE_NAME: &'static str = "provenance_tag";
}
