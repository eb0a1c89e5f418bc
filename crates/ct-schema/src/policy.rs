//! # Schema Policy — Closed Records
//!
//! Every civic-transparency record schema must declare
//! `additionalProperties: false` at the record envelope and at every
//! nested object that represents a record (the `point` definition inside
//! the series schema). Distribution maps are the one exception: their
//! `additionalProperties` is a value schema, which restricts rather than
//! admits arbitrary fields, and their key set is constrained by
//! `propertyNames`.
//!
//! ## Privacy Invariant
//!
//! Closed records are how the data model stays privacy-preserving under
//! schema evolution: a producer cannot smuggle a raw timestamp, user
//! identifier, or content excerpt through an undeclared field — strict
//! validation drops the whole record instead.
//!
//! The audit here runs over parsed schema documents, so a patched or
//! locally modified schema set can be checked before a registry built
//! from it is trusted.

use serde_json::Value;

/// A location where a record schema fails the closed-record policy.
#[derive(Debug, Clone)]
pub struct PolicyFinding {
    /// JSON Pointer to the offending object schema.
    pub json_path: String,
    /// Current `additionalProperties` setting, rendered for the report.
    pub current_value: String,
}

impl std::fmt::Display for PolicyFinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "  {}: additionalProperties is {} (record schemas must be closed)",
            self.json_path, self.current_value
        )
    }
}

/// Audit one schema document for the closed-record policy.
///
/// Walks the document and checks every object schema that declares
/// `properties` — the record envelope and any `$defs` records. An object
/// whose `additionalProperties` is a schema (not a boolean) is treated
/// as a constrained map and passes.
pub fn audit_closed_record(schema: &Value) -> Vec<PolicyFinding> {
    let mut findings = Vec::new();
    walk(schema, "", &mut findings);
    findings
}

fn walk(node: &Value, path: &str, findings: &mut Vec<PolicyFinding>) {
    let Some(obj) = node.as_object() else {
        return;
    };

    if obj.contains_key("properties") {
        match obj.get("additionalProperties") {
            Some(Value::Bool(false)) => {}
            Some(Value::Object(_)) => {} // constrained map, not an open record
            Some(other) => findings.push(PolicyFinding {
                json_path: format!("{path}/additionalProperties"),
                current_value: other.to_string(),
            }),
            None => findings.push(PolicyFinding {
                json_path: format!("{path}/additionalProperties"),
                current_value: "absent (defaults to true)".to_string(),
            }),
        }
    }

    for key in ["$defs", "properties"] {
        if let Some(children) = obj.get(key).and_then(Value::as_object) {
            for (name, child) in children {
                walk(child, &format!("{path}/{key}/{name}"), findings);
            }
        }
    }
    if let Some(items) = obj.get("items") {
        walk(items, &format!("{path}/items"), findings);
    }
}
