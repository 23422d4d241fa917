//! Form state to JSON-LD mapping.
//!
//! One mapper per [`SchemaKind`]; [`build_schema_from_state`] picks the mapper
//! and compacts whatever it produced. Mappers never fail: missing or malformed
//! input just leaves properties out.
//!
//! Each mapper names its *structural* fields, the inputs it folds into nested
//! or computed properties. Every other present field is copied onto the root
//! as-is, so form fields without special handling still reach the output.

mod article;
mod breadcrumb;
mod business;
mod event;
mod faq;
mod howto;
mod job_posting;
mod person;
mod product;
mod recipe;
mod video;
mod website;

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::nodes::node_value;
use crate::normalize::{compact, non_empty, one_or_many, split_list};
use crate::types::{BuildParams, SchemaKind, SCHEMA_CONTEXT};

pub use event::combine_date_time;
pub use job_posting::{education_credential, months_of_experience};

/// Build a schema.org JSON-LD object from one input bundle.
///
/// The result always carries `@context` and `@type` and never contains a
/// `null`, blank string or empty array at any depth. Unrecognized kinds get
/// every present field copied onto the root unmapped.
///
/// # Example
///
/// ```
/// use schema_builder::{build_schema_from_state, BuildParams, SchemaKind};
/// use serde_json::json;
///
/// let params = BuildParams::new(SchemaKind::parse("UnknownThing")).field("foo", "bar");
/// assert_eq!(
///     build_schema_from_state(&params),
///     json!({ "@context": "https://schema.org", "@type": "UnknownThing", "foo": "bar" })
/// );
/// ```
pub fn build_schema_from_state(params: &BuildParams) -> Value {
    debug!(kind = %params.kind, fields = params.fields.len(), "building schema");

    let draft = match &params.kind {
        SchemaKind::Article => article::build(params),
        SchemaKind::Breadcrumb => breadcrumb::build(params),
        SchemaKind::FaqPage => faq::build(params),
        SchemaKind::Person => person::build(params),
        SchemaKind::Product => product::build(params),
        SchemaKind::Event => event::build(params),
        SchemaKind::LocalBusiness => business::build_local_business(params),
        SchemaKind::Organization => business::build_organization(params),
        SchemaKind::JobPosting => job_posting::build(params),
        SchemaKind::HowTo => howto::build(params),
        SchemaKind::Recipe => recipe::build(params),
        SchemaKind::Video => video::build(params),
        SchemaKind::WebSite => website::build(params),
        SchemaKind::Other(tag) => fallback(tag, params),
    };

    compact(&draft.into_value())
}

fn fallback(tag: &str, params: &BuildParams) -> Draft {
    let mut draft = Draft::new(tag);
    draft.pass_through(&Fields::new(&params.fields), &[]);
    draft
}

/// Read-only view over the flat form fields with empty-means-absent lookups.
#[derive(Clone, Copy)]
pub(crate) struct Fields<'a> {
    map: &'a BTreeMap<String, String>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(map: &'a BTreeMap<String, String>) -> Self {
        Self { map }
    }

    /// Trimmed value, `None` when missing or blank.
    pub(crate) fn get(&self, key: &str) -> Option<&'a str> {
        self.map.get(key).and_then(|v| non_empty(v))
    }

    /// Trimmed value, `""` when missing.
    pub(crate) fn raw(&self, key: &str) -> &'a str {
        self.get(key).unwrap_or("")
    }

    /// First present value among `keys`.
    pub(crate) fn first(&self, keys: &[&str]) -> Option<&'a str> {
        keys.iter().find_map(|key| self.get(key))
    }

    pub(crate) fn any(&self, keys: &[&str]) -> bool {
        keys.iter().any(|key| self.get(key).is_some())
    }

    fn iter(self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.map
            .iter()
            .filter_map(|(key, value)| non_empty(value).map(|v| (key.as_str(), v)))
    }
}

/// Root object under construction.
pub(crate) struct Draft {
    map: Map<String, Value>,
}

impl Draft {
    pub(crate) fn new(schema_type: &str) -> Self {
        let mut map = Map::new();
        map.insert("@context".to_string(), Value::from(SCHEMA_CONTEXT));
        map.insert("@type".to_string(), Value::from(schema_type));
        Self { map }
    }

    /// Copy every present field that is not structural.
    pub(crate) fn pass_through(&mut self, fields: &Fields<'_>, structural: &[&str]) {
        for (key, value) in fields.iter() {
            if is_reserved(key) || structural.contains(&key) {
                continue;
            }
            self.map.insert(key.to_string(), Value::from(value));
        }
    }

    pub(crate) fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.map.insert(key.to_string(), value.into());
    }

    pub(crate) fn set_opt<V: Into<Value>>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    pub(crate) fn set_node<T: Serialize>(&mut self, key: &str, node: Option<T>) {
        if let Some(node) = node {
            self.set(key, node_value(&node));
        }
    }

    /// Set a list-valued property: omitted, scalar or array by item count.
    pub(crate) fn set_list(&mut self, key: &str, items: Vec<Value>) {
        self.set_opt(key, one_or_many(items));
    }

    /// Set a property that is always an array when present.
    pub(crate) fn set_array(&mut self, key: &str, items: Vec<Value>) {
        if !items.is_empty() {
            self.set(key, Value::Array(items));
        }
    }

    pub(crate) fn into_value(self) -> Value {
        Value::Object(self.map)
    }
}

/// Keys owned by [`Draft::new`]; input can never override them.
pub(crate) fn is_reserved(key: &str) -> bool {
    matches!(key, "@context" | "@type")
}

/// Structured repeater items win over the legacy comma/newline string field.
pub(crate) fn structured_or_flat<S: AsRef<str>>(structured: &[S], fields: &Fields<'_>, key: &str) -> Vec<Value> {
    let items: Vec<Value> = structured
        .iter()
        .filter_map(|s| non_empty(s.as_ref()))
        .map(Value::from)
        .collect();

    if !items.is_empty() {
        return items;
    }

    split_list(fields.raw(key)).into_iter().map(Value::from).collect()
}
