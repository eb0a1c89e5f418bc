//! # Structured Validation Errors
//!
//! The error taxonomy surfaced to callers when a record fails validation,
//! and the mapping from raw `jsonschema` crate violations into it.
//!
//! ## Contract
//!
//! Validation is exhaustive, never fail-fast: every violation in a
//! document is collected into one [`ValidationReport`] so a caller can
//! fix all input errors in a single pass. Each [`FieldError`] carries
//! the dotted field path (`points[3].acct_type`), the violated
//! constraint kind, the offending value, and a human-readable message.
//!
//! ## Taxonomy
//!
//! - [`ConstraintKind::MissingField`] — required field absent.
//! - [`ConstraintKind::UnknownField`] — field not declared by the schema.
//!   Record schemas are closed; extra fields are rejected, one error per
//!   extra field.
//! - [`ConstraintKind::TypeMismatch`] — value is the wrong JSON type, a
//!   fractional number where an integer is required, or a non-RFC 3339
//!   string where a timestamp is required. Never silently coerced.
//! - [`ConstraintKind::ConstraintViolation`] — correctly typed value
//!   failing an enum, pattern, range, or length constraint.
//!
//! Schema-load failures are not per-record errors; they surface as
//! [`SchemaError::SchemaLoad`] at registry construction and fail closed.

use std::fmt;

use jsonschema::error::ValidationErrorKind;
use jsonschema::ValidationError;
use serde_json::Value;
use thiserror::Error;

/// Error surfaced by the schema registry and record constructors.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The document did not conform to its record schema.
    #[error("validation failed for '{type_name}':\n{report}")]
    Invalid {
        /// Record type the document was validated against.
        type_name: String,
        /// All collected violations.
        report: ValidationReport,
    },

    /// A schema document could not be loaded, parsed, or compiled.
    /// Fatal at registry construction; never a per-record error.
    #[error("schema load failure for '{schema_name}': {reason}")]
    SchemaLoad {
        /// Schema filename or identifier.
        schema_name: String,
        /// Why the schema could not be loaded.
        reason: String,
    },

    /// A validated record could not be encoded to JSON. Indicates a bug
    /// in the record definitions rather than bad input.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error reading a schema directory.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// The kind of constraint a field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// Required field absent from the document.
    MissingField,
    /// Field present in the document but not declared by the schema.
    UnknownField,
    /// Value could not be read as the field's declared type.
    TypeMismatch,
    /// Value has the right type but fails an enum/pattern/range/length
    /// constraint.
    ConstraintViolation,
}

impl ConstraintKind {
    /// Stable identifier for the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::UnknownField => "unknown_field",
            Self::TypeMismatch => "type_mismatch",
            Self::ConstraintViolation => "constraint_violation",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single violation with structured context.
#[derive(Debug, Clone)]
pub struct FieldError {
    /// Dotted path to the violating field, with indices for sequence
    /// elements (`points[3].acct_type`). Empty for document-level errors.
    pub path: String,
    /// Which constraint was violated.
    pub kind: ConstraintKind,
    /// The offending value as found in the document. `Null` for missing
    /// fields.
    pub value: Value,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "  (root) [{}]: {}", self.kind, self.message)
        } else {
            write!(f, "  {} [{}]: {}", self.path, self.kind, self.message)
        }
    }
}

/// All violations collected for one document.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Build a report from collected errors.
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// A report holding a single error.
    pub fn single(error: FieldError) -> Self {
        Self { errors: vec![error] }
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// All violations, in document order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<FieldError> {
        self.errors
    }

    /// Violations recorded against one field path.
    pub fn for_path<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a FieldError> {
        self.errors.iter().filter(move |e| e.path == path)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

/// Convert a JSON Pointer (`/points/0/count`) into the dotted path form
/// used in reports (`points[0].count`).
///
/// Digit-only segments always render as `[index]`. An all-digit map key
/// would be indistinguishable from an array index, so the grammar
/// requires that no record schema declare one; today every map key is
/// an enum literal and every property name contains a letter. Revisit
/// the rendering before adding a schema that breaks that rule.
pub(crate) fn dotted_path(pointer: &str) -> String {
    let mut out = String::new();
    for segment in pointer.split('/').skip(1) {
        let segment = segment.replace("~1", "/").replace("~0", "~");
        if segment.bytes().all(|b| b.is_ascii_digit()) && !segment.is_empty() {
            out.push('[');
            out.push_str(&segment);
            out.push(']');
        } else {
            if !out.is_empty() {
                out.push('.');
            }
            out.push_str(&segment);
        }
    }
    out
}

/// Append a property name to a dotted path.
fn join_field(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{base}.{name}")
    }
}

/// Map one raw `jsonschema` violation into structured field errors.
///
/// `required` and `additionalProperties` violations are reported by the
/// crate once per object with the field names embedded in the error kind;
/// they are expanded here into one [`FieldError`] per field so that a
/// document with one extra field yields exactly one `UnknownField` error
/// on that field's own path.
pub(crate) fn classify_violation(err: ValidationError<'_>) -> Vec<FieldError> {
    let base = dotted_path(&err.instance_path.to_string());
    let message = err.to_string();
    let instance = err.instance.clone().into_owned();

    match &err.kind {
        ValidationErrorKind::Required { property } => {
            let name = property
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| property.to_string());
            vec![FieldError {
                path: join_field(&base, &name),
                kind: ConstraintKind::MissingField,
                value: Value::Null,
                message,
            }]
        }
        ValidationErrorKind::AdditionalProperties { unexpected }
        | ValidationErrorKind::UnevaluatedProperties { unexpected } => unexpected
            .iter()
            .map(|name| FieldError {
                path: join_field(&base, name),
                kind: ConstraintKind::UnknownField,
                value: instance.get(name).cloned().unwrap_or(Value::Null),
                message: format!("field `{name}` is not declared by the schema"),
            })
            .collect(),
        ValidationErrorKind::Type { .. } => vec![FieldError {
            path: base,
            kind: ConstraintKind::TypeMismatch,
            value: instance,
            message,
        }],
        // A malformed timestamp is a type error, not a range error: the
        // field's semantic type is "instant", and the string failed to
        // parse as one.
        ValidationErrorKind::Format { format } if format == "date-time" => vec![FieldError {
            path: base,
            kind: ConstraintKind::TypeMismatch,
            value: instance,
            message,
        }],
        _ => vec![FieldError {
            path: base,
            kind: ConstraintKind::ConstraintViolation,
            value: instance,
            message,
        }],
    }
}
