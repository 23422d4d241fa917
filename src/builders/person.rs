use serde_json::{json, Value};

use super::{Draft, Fields};
use crate::nodes::{NamedNode, PostalAddress};
use crate::normalize::{non_empty, normalize_date, normalize_url, split_list};
use crate::types::BuildParams;

const STRUCTURAL: &[&str] = &[
    "streetAddress",
    "addressLocality",
    "addressRegion",
    "postalCode",
    "addressCountry",
    "sameAs",
    "knowsLanguage",
    "knowsAbout",
    "worksFor",
    "birthDate",
    "url",
    "image",
];

pub(super) fn build(params: &BuildParams) -> Draft {
    let fields = Fields::new(&params.fields);
    let mut draft = Draft::new("Person");
    draft.pass_through(&fields, STRUCTURAL);

    draft.set_opt("url", normalize_url(fields.raw("url")));
    draft.set_opt("image", normalize_url(fields.raw("image")));
    draft.set_opt("birthDate", normalize_date(fields.raw("birthDate")));
    draft.set_node("worksFor", NamedNode::new("", "Organization", fields.raw("worksFor")));
    draft.set_node(
        "address",
        PostalAddress::new(
            fields.raw("streetAddress"),
            fields.raw("addressLocality"),
            fields.raw("addressRegion"),
            fields.raw("postalCode"),
            fields.raw("addressCountry"),
        ),
    );

    draft.set_list("sameAs", same_as(params, &fields));

    let alumni: Vec<Value> = params
        .education
        .iter()
        .filter_map(|school| {
            let name = non_empty(&school.name)?;
            Some(json!({
                "@type": "EducationalOrganization",
                "name": name,
                "url": normalize_url(&school.url),
            }))
        })
        .collect();
    draft.set_list("alumniOf", alumni);

    draft.set_list("knowsLanguage", comma_values(fields.raw("knowsLanguage")));
    draft.set_list("knowsAbout", comma_values(fields.raw("knowsAbout")));

    draft
}

/// Profile URLs from the repeater, else the legacy `sameAs` text field.
pub(super) fn same_as(params: &BuildParams, fields: &Fields<'_>) -> Vec<Value> {
    let structured: Vec<Value> = params
        .social_profiles
        .iter()
        .filter_map(|profile| normalize_url(&profile.url))
        .map(Value::from)
        .collect();

    if !structured.is_empty() {
        return structured;
    }

    split_list(fields.raw("sameAs"))
        .iter()
        .filter_map(|url| normalize_url(url))
        .map(Value::from)
        .collect()
}

fn comma_values(text: &str) -> Vec<Value> {
    split_list(text).into_iter().map(Value::from).collect()
}
