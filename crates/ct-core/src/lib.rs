//! # ct-core — Foundational Types for the Civic-Transparency Data Model
//!
//! Leaf crate of the workspace: the type-system primitives shared by the
//! schema validator (`ct-schema`) and the record types (`ct-types`). It
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One enum per categorical vocabulary.** `AcctType`, `AutomationFlag`,
//!    `PostKind`, and the rest are each defined exactly once, with serde
//!    string forms byte-identical to the schema `enum` literals. Exhaustive
//!    `match` everywhere; adding a value forces every consumer to handle it.
//!
//! 2. **Validated newtypes for pattern fields.** `Topic`, `DedupHash`,
//!    `OriginHint`, `Slug`, and `SchemaVersion` have private inners and
//!    validating constructors; a held value is always well-formed. No bare
//!    strings for constrained fields.
//!
//! 3. **Normalized timestamps.** `Timestamp` accepts any explicit RFC 3339
//!    offset and normalizes to UTC at seconds precision, so record equality
//!    and canonical JSON output never depend on the producer's timezone.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ct-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod fields;
pub mod temporal;
pub mod vocab;

// Re-export primary types for ergonomic imports.
pub use error::CtError;
pub use fields::{DedupHash, OriginHint, SchemaVersion, Slug, Topic};
pub use temporal::Timestamp;
pub use vocab::{
    AcctAgeBucket, AcctType, AutomationFlag, ClientFamily, Interval, MediaProvenance, PostKind,
};
