//! # Schema Registry
//!
//! Loads the civic-transparency JSON Schema documents (Draft 2020-12),
//! compiles one validator per record type at construction time, and
//! resolves cross-schema `$ref` URIs against the loaded set so no
//! network access ever happens.
//!
//! ## Fail Closed
//!
//! Every schema must load, parse, and compile before a registry is
//! handed out. A broken schema document is a [`SchemaError::SchemaLoad`]
//! at construction — there is no registry that can validate some types
//! but not others.
//!
//! ## Loading
//!
//! - [`SchemaRegistry::bundled()`] — the schema documents shipped with
//!   this workspace, embedded at compile time. No I/O.
//! - [`SchemaRegistry::from_dir()`] — read `*.schema.json` files from a
//!   directory, for validating against a newer or patched schema set.
//! - [`registry()`] — process-wide bundled registry behind a `OnceLock`;
//!   loaded once, shared immutably, safe for concurrent readers.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use jsonschema::{Draft, Retrieve, Uri, Validator};
use serde_json::Value;

use crate::validate::{classify_violation, SchemaError, ValidationReport};

/// URI prefix under which the schema documents publish their `$id`s.
/// Cross-schema `$ref`s use the same prefix or bare filenames.
const SCHEMA_URI_PREFIX: &str = "https://schemas.civic-transparency.org/ct/";

/// The record types this registry knows, in schema declaration order.
pub const RECORD_TYPES: &[&str] = &["provenance_tag", "series", "meta", "run", "scenario"];

/// Schema documents shipped with the workspace, embedded at compile time.
pub(crate) const BUNDLED_SCHEMAS: &[(&str, &str)] = &[
    (
        "provenance_tag.schema.json",
        include_str!("../../../schemas/provenance_tag.schema.json"),
    ),
    (
        "series.schema.json",
        include_str!("../../../schemas/series.schema.json"),
    ),
    (
        "meta.schema.json",
        include_str!("../../../schemas/meta.schema.json"),
    ),
    (
        "run.schema.json",
        include_str!("../../../schemas/run.schema.json"),
    ),
    (
        "scenario.schema.json",
        include_str!("../../../schemas/scenario.schema.json"),
    ),
];

/// Resolves `$ref` URIs to schemas already loaded in memory.
///
/// All references are served from the registry's own document set;
/// unknown URIs are an error rather than a network fetch or a
/// silently-permissive fallback.
#[derive(Debug, Clone)]
struct LocalSchemaRetriever {
    schemas_by_uri: HashMap<String, Value>,
}

impl Retrieve for LocalSchemaRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri_str = uri.as_str();

        if let Some(value) = self.schemas_by_uri.get(uri_str) {
            return Ok(value.clone());
        }

        // Relative $refs may reach us as bare or prefix-resolved filenames.
        let filename = uri_str.rsplit('/').next().unwrap_or(uri_str);
        if let Some(value) = self.schemas_by_uri.get(filename) {
            return Ok(value.clone());
        }

        Err(format!("unresolved schema reference: {uri_str}").into())
    }
}

/// A set of compiled record-schema validators.
///
/// ## Thread Safety
///
/// Compiled validators are `Send + Sync`; a registry can be shared
/// freely across threads. Validation itself is pure and lock-free.
#[derive(Debug)]
pub struct SchemaRegistry {
    /// Parsed schema documents by filename.
    schemas: HashMap<String, Value>,
    /// Compiled validators by record type name.
    validators: HashMap<String, Validator>,
}

impl SchemaRegistry {
    /// Build a registry from the schema documents embedded in this crate.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::SchemaLoad`] if an embedded document fails
    /// to parse or compile — a packaging defect, not a caller error.
    pub fn bundled() -> Result<Self, SchemaError> {
        let mut schemas = HashMap::new();
        for (name, text) in BUNDLED_SCHEMAS {
            let value: Value =
                serde_json::from_str(text).map_err(|e| SchemaError::SchemaLoad {
                    schema_name: (*name).to_string(),
                    reason: format!("invalid JSON: {e}"),
                })?;
            schemas.insert((*name).to_string(), value);
        }
        Self::compile(schemas)
    }

    /// Build a registry by loading every `*.schema.json` file from a
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::SchemaLoad`] if the directory cannot be
    /// read, any schema file is not valid JSON, any record type's schema
    /// is absent, or any schema fails to compile.
    pub fn from_dir(schema_dir: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let schema_dir = schema_dir.as_ref();
        let mut schemas = HashMap::new();

        let entries =
            std::fs::read_dir(schema_dir).map_err(|e| SchemaError::SchemaLoad {
                schema_name: schema_dir.display().to_string(),
                reason: format!("cannot read schema directory: {e}"),
            })?;

        for entry in entries {
            let path = entry?.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !name.ends_with(".schema.json") {
                continue;
            }
            let content = std::fs::read_to_string(&path)?;
            let value: Value =
                serde_json::from_str(&content).map_err(|e| SchemaError::SchemaLoad {
                    schema_name: name.to_string(),
                    reason: format!("invalid JSON: {e}"),
                })?;
            schemas.insert(name.to_string(), value);
        }

        Self::compile(schemas)
    }

    /// Compile one validator per record type, with every loaded schema
    /// registered for `$ref` resolution.
    fn compile(schemas: HashMap<String, Value>) -> Result<Self, SchemaError> {
        let mut schemas_by_uri = HashMap::new();
        for (filename, value) in &schemas {
            schemas_by_uri.insert(format!("{SCHEMA_URI_PREFIX}{filename}"), value.clone());
            schemas_by_uri.insert(filename.clone(), value.clone());
            if let Some(id) = value.get("$id").and_then(Value::as_str) {
                schemas_by_uri.insert(id.to_string(), value.clone());
            }
        }

        let mut validators = HashMap::new();
        for type_name in RECORD_TYPES {
            let schema_name = format!("{type_name}.schema.json");
            let schema_value =
                schemas.get(&schema_name).ok_or_else(|| SchemaError::SchemaLoad {
                    schema_name: schema_name.clone(),
                    reason: "schema document not loaded".to_string(),
                })?;

            let validator = jsonschema::options()
                .with_draft(Draft::Draft202012)
                .should_validate_formats(true)
                .with_retriever(LocalSchemaRetriever {
                    schemas_by_uri: schemas_by_uri.clone(),
                })
                .build(schema_value)
                .map_err(|e| SchemaError::SchemaLoad {
                    schema_name: schema_name.clone(),
                    reason: format!("schema failed to compile: {e}"),
                })?;

            validators.insert((*type_name).to_string(), validator);
        }

        tracing::debug!(
            schemas = schemas.len(),
            validators = validators.len(),
            "schema registry compiled"
        );

        Ok(Self { schemas, validators })
    }

    /// Number of loaded schema documents.
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    /// Names of all loaded schema documents, sorted.
    pub fn schema_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Look up a loaded schema document by filename.
    pub fn get_schema(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Validate a parsed JSON value against a record type's schema.
    ///
    /// Collects every violation in the document; see
    /// [`crate::validate`] for the taxonomy.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Invalid`] with the full report if the
    /// document does not conform, or [`SchemaError::SchemaLoad`] if
    /// `type_name` is not a known record type.
    pub fn validate(&self, type_name: &str, instance: &Value) -> Result<(), SchemaError> {
        let validator =
            self.validators.get(type_name).ok_or_else(|| SchemaError::SchemaLoad {
                schema_name: format!("{type_name}.schema.json"),
                reason: "unknown record type".to_string(),
            })?;

        let errors: Vec<_> = validator
            .iter_errors(instance)
            .flat_map(classify_violation)
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::Invalid {
                type_name: type_name.to_string(),
                report: ValidationReport::new(errors),
            })
        }
    }
}

/// Process-wide registry over the bundled schema documents.
///
/// Loaded on first use and shared for the life of the process. Concurrent
/// first callers are serialized by the `OnceLock`; everyone sees the same
/// compiled registry. If the bundled documents fail to compile, every
/// call reports the failure — validation never proceeds against a
/// partially loaded registry.
pub fn registry() -> Result<&'static SchemaRegistry, SchemaError> {
    static REGISTRY: OnceLock<Result<SchemaRegistry, SchemaError>> = OnceLock::new();
    REGISTRY
        .get_or_init(SchemaRegistry::bundled)
        .as_ref()
        .map_err(|e| SchemaError::SchemaLoad {
            schema_name: "bundled".to_string(),
            reason: e.to_string(),
        })
}
