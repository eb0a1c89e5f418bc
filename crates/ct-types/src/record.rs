//! # The `Record` Capability Trait
//!
//! One uniform surface for every civic-transparency record type:
//! schema-checked construction from a mapping or JSON text, canonical
//! serialization back out, and validated copy-with-updates. Composition
//! over a shared registry — each record type supplies only its
//! `TYPE_NAME`; the default methods do the rest.
//!
//! ## Lifecycle
//!
//! Records are constructed once, through validation, and are immutable
//! values afterwards. The only mutation-shaped operation is
//! [`Record::with_updates`], which produces a NEW record by merging
//! field overrides into the canonical mapping and re-validating the
//! whole result — an update that breaks any constraint is rejected, not
//! partially applied.
//!
//! ## Canonical Form
//!
//! [`Record::to_mapping`] and the JSON encoders are deterministic: keys
//! in schema declaration order (struct declaration order matches the
//! schemas; `serde_json`'s `preserve_order` feature keeps merged
//! mappings stable), enums as their literal strings, timestamps in UTC
//! with `Z` suffix, absent optional fields omitted rather than null.
//!
//! Round-trip law: `R::from_json(&r.to_json()?)? == r` for every valid
//! record `r`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use ct_schema::{registry, ConstraintKind, FieldError, SchemaError, ValidationReport};

/// A validated, immutable civic-transparency record.
pub trait Record: Serialize + DeserializeOwned + PartialEq + Sized {
    /// Record type name; `<TYPE_NAME>.schema.json` is the schema document.
    const TYPE_NAME: &'static str;

    /// Validate a parsed JSON mapping and construct the record.
    ///
    /// Validation is exhaustive: all violations are reported together.
    /// Decoding runs only after the schema check passes, so a returned
    /// record always conforms.
    ///
    /// # Errors
    ///
    /// [`SchemaError::Invalid`] with the full violation report, or
    /// [`SchemaError::SchemaLoad`] if the bundled registry failed to
    /// load (fatal, process-wide).
    fn from_value(value: Value) -> Result<Self, SchemaError> {
        registry()?.validate(Self::TYPE_NAME, &value)?;
        serde_json::from_value(value).map_err(|e| {
            SchemaError::Serialization(format!(
                "decode after validation failed for '{}': {e}",
                Self::TYPE_NAME
            ))
        })
    }

    /// Parse JSON text, then validate and construct.
    ///
    /// Malformed JSON surfaces as a root-level
    /// [`ConstraintKind::TypeMismatch`] in the report, so callers have a
    /// single error channel for bad input.
    fn from_json(text: &str) -> Result<Self, SchemaError> {
        let value: Value = serde_json::from_str(text).map_err(|e| SchemaError::Invalid {
            type_name: Self::TYPE_NAME.to_string(),
            report: ValidationReport::single(FieldError {
                path: String::new(),
                kind: ConstraintKind::TypeMismatch,
                value: Value::Null,
                message: format!("malformed JSON: {e}"),
            }),
        })?;
        Self::from_value(value)
    }

    /// The canonical JSON-ready mapping for this record.
    fn to_mapping(&self) -> Result<Value, SchemaError> {
        serde_json::to_value(self).map_err(|e| SchemaError::Serialization(e.to_string()))
    }

    /// Compact canonical JSON encoding.
    fn to_json(&self) -> Result<String, SchemaError> {
        serde_json::to_string(self).map_err(|e| SchemaError::Serialization(e.to_string()))
    }

    /// Indented canonical JSON encoding. Same key order as [`to_json`],
    /// whitespace only.
    ///
    /// [`to_json`]: Record::to_json
    fn to_json_pretty(&self) -> Result<String, SchemaError> {
        serde_json::to_string_pretty(self).map_err(|e| SchemaError::Serialization(e.to_string()))
    }

    /// Copy with named fields replaced, re-validated as a whole.
    ///
    /// `updates` must be a JSON object. A `null` value removes the field
    /// (valid only for optional fields — removal of a required field
    /// fails validation like any other violation). An empty update
    /// returns a record equal to the original.
    fn with_updates(&self, updates: Value) -> Result<Self, SchemaError> {
        let Value::Object(updates) = updates else {
            return Err(SchemaError::Invalid {
                type_name: Self::TYPE_NAME.to_string(),
                report: ValidationReport::single(FieldError {
                    path: String::new(),
                    kind: ConstraintKind::TypeMismatch,
                    value: updates,
                    message: "updates must be a JSON object".to_string(),
                }),
            });
        };

        let mut mapping = self.to_mapping()?;
        let Some(fields) = mapping.as_object_mut() else {
            return Err(SchemaError::Serialization(format!(
                "record '{}' did not serialize to an object",
                Self::TYPE_NAME
            )));
        };
        for (name, value) in updates {
            if value.is_null() {
                fields.remove(&name);
            } else {
                fields.insert(name, value);
            }
        }
        Self::from_value(mapping)
    }
}
