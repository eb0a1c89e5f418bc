//! # ct-schema — Schema Registry & Structured Validation
//!
//! Runtime JSON Schema validation (Draft 2020-12) for the
//! civic-transparency records, backed by the `jsonschema` crate.
//!
//! ## Registry (`registry`)
//!
//! [`SchemaRegistry`] loads the five record schemas — bundled copies via
//! [`SchemaRegistry::bundled`], or a directory of `*.schema.json` files
//! via [`SchemaRegistry::from_dir`] — compiles one validator per record
//! type up front, and resolves cross-schema `$ref` URIs locally. A
//! process-wide bundled registry is available through [`registry()`].
//! Construction fails closed: one broken schema document means no
//! registry at all.
//!
//! ## Structured Errors (`validate`)
//!
//! Validation is a trust boundary. Non-conforming documents are rejected
//! with an exhaustive [`ValidationReport`]: one [`FieldError`] per
//! violation, carrying the dotted field path, the [`ConstraintKind`],
//! the offending value, and a message. Callers decide whether to
//! discard, quarantine, or log — per-record acceptance is all-or-nothing.
//!
//! ## Policy (`policy`)
//!
//! Record schemas must be closed (`additionalProperties: false`);
//! [`audit_closed_record`] checks a schema document against that policy
//! before it is trusted.

pub mod policy;
pub mod registry;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use policy::{audit_closed_record, PolicyFinding};
pub use registry::{registry, SchemaRegistry, RECORD_TYPES};
pub use validate::{ConstraintKind, FieldError, SchemaError, ValidationReport};
