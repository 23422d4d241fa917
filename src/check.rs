//! Acceptance checks for built schemas.
//!
//! Each kind has an output contract expressed as a JSON Schema: the keys
//! search engines need for a rich result, with ISO datetimes where a full
//! timestamp is expected. Checks collect every mismatch instead of stopping
//! at the first.

use serde::Serialize;
use serde_json::{json, Value};

use crate::builders::build_schema_from_state;
use crate::error::{CheckError, CheckIssue};
use crate::samples::sample_params;
use crate::types::{SchemaKind, SCHEMA_CONTEXT};

const ISO_DATETIME: &str =
    r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}(:\d{2}(\.\d+)?)?(Z|[+-]\d{2}:\d{2})$";

/// The JSON Schema a built object of `kind` must satisfy.
///
/// Every kind shares the `@context`/`@type` requirement; unrecognized kinds
/// get nothing more.
pub fn contract_for(kind: &SchemaKind) -> Value {
    let common = json!({
        "type": "object",
        "required": ["@context", "@type"],
        "properties": {
            "@context": { "const": SCHEMA_CONTEXT },
            "@type": { "type": "string", "minLength": 1 }
        }
    });

    match kind_contract(kind) {
        Some(specific) => json!({ "allOf": [common, specific] }),
        None => common,
    }
}

fn kind_contract(kind: &SchemaKind) -> Option<Value> {
    let text = json!({ "type": "string", "minLength": 1 });
    let datetime = json!({ "type": "string", "pattern": ISO_DATETIME });
    let object = json!({ "type": "object" });
    let non_empty_array = json!({ "type": "array", "minItems": 1 });
    let one_or_many = json!({ "type": ["string", "array"] });

    let contract = match kind {
        SchemaKind::Article => json!({
            "required": ["headline", "author", "datePublished"],
            "properties": {
                "headline": text,
                "author": {
                    "type": "object",
                    "required": ["name"],
                    "properties": { "name": text }
                },
                "datePublished": datetime,
                "dateModified": datetime
            }
        }),
        SchemaKind::Product => json!({
            "required": ["name", "offers"],
            "properties": {
                "name": text,
                "offers": { "type": ["object", "array"] }
            }
        }),
        SchemaKind::Event => json!({
            "required": ["name", "startDate", "location"],
            "properties": {
                "name": text,
                "startDate": datetime,
                "endDate": datetime,
                "location": { "type": ["object", "array"] }
            }
        }),
        SchemaKind::LocalBusiness => json!({
            "required": ["name", "address"],
            "properties": { "name": text, "address": object }
        }),
        SchemaKind::Organization => json!({
            "required": ["name", "url"],
            "properties": { "name": text, "url": text }
        }),
        SchemaKind::JobPosting => json!({
            "required": ["title", "description", "datePosted", "hiringOrganization"],
            "properties": {
                "title": text,
                "description": text,
                "datePosted": text,
                "hiringOrganization": object
            }
        }),
        SchemaKind::HowTo => json!({
            "required": ["name", "step"],
            "properties": { "name": text, "step": non_empty_array }
        }),
        SchemaKind::Recipe => json!({
            "required": ["name", "recipeIngredient"],
            "properties": { "name": text, "recipeIngredient": one_or_many }
        }),
        SchemaKind::Video => json!({
            "required": ["name", "thumbnailUrl", "uploadDate"],
            "properties": {
                "name": text,
                "thumbnailUrl": one_or_many,
                "uploadDate": text
            }
        }),
        SchemaKind::Person => json!({
            "required": ["name"],
            "properties": { "name": text }
        }),
        SchemaKind::FaqPage => json!({
            "required": ["mainEntity"],
            "properties": { "mainEntity": non_empty_array }
        }),
        SchemaKind::Breadcrumb => json!({
            "required": ["itemListElement"],
            "properties": { "itemListElement": non_empty_array }
        }),
        SchemaKind::WebSite => json!({
            "required": ["name", "url"],
            "properties": { "name": text, "url": text }
        }),
        SchemaKind::Other(_) => return None,
    };

    Some(contract)
}

/// Check a built schema against the contract for `kind`.
///
/// # Errors
///
/// Returns `CheckError::Failed` with every mismatch found, or
/// `CheckError::InvalidContract` if the contract itself does not compile.
pub fn check_schema(kind: &SchemaKind, schema: &Value) -> Result<(), CheckError> {
    let validator =
        jsonschema::validator_for(&contract_for(kind)).map_err(|e| CheckError::InvalidContract {
            kind: kind.to_string(),
            message: e.to_string(),
        })?;

    let issues: Vec<CheckIssue> = validator
        .iter_errors(schema)
        .map(|e| CheckIssue {
            path: e.instance_path.to_string(),
            message: e.to_string(),
        })
        .collect();

    if issues.is_empty() {
        Ok(())
    } else {
        Err(CheckError::Failed {
            kind: kind.to_string(),
            issues,
        })
    }
}

/// Outcome of running one sample through build and check.
#[derive(Debug, Clone, Serialize)]
pub struct SelfTestEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub passed: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<CheckIssue>,
}

/// Per-kind results of [`self_test`].
#[derive(Debug, Clone, Serialize)]
pub struct SelfTestReport {
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<SelfTestEntry>,
}

impl SelfTestReport {
    pub fn is_ok(&self) -> bool {
        self.failed == 0
    }
}

/// Build every kind's sample and check the output against its contract.
pub fn self_test() -> SelfTestReport {
    let results: Vec<SelfTestEntry> = SchemaKind::ALL
        .iter()
        .map(|kind| {
            let schema = build_schema_from_state(&sample_params(kind));
            let issues = match check_schema(kind, &schema) {
                Ok(()) => Vec::new(),
                Err(CheckError::Failed { issues, .. }) => issues,
                Err(e @ CheckError::InvalidContract { .. }) => vec![CheckIssue {
                    path: String::new(),
                    message: e.to_string(),
                }],
            };
            SelfTestEntry {
                kind: kind.to_string(),
                passed: issues.is_empty(),
                issues,
            }
        })
        .collect();

    let passed = results.iter().filter(|r| r.passed).count();
    SelfTestReport {
        passed,
        failed: results.len() - passed,
        results,
    }
}
