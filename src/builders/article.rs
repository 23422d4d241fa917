use serde_json::{json, Value};

use super::{structured_or_flat, Draft, Fields};
use crate::nodes::{node_value, ImageObject, NamedNode};
use crate::normalize::is_date_only;
use crate::types::BuildParams;

const STRUCTURAL: &[&str] = &[
    "articleType",
    "authorName",
    "author",
    "authorUrl",
    "authorType",
    "images",
    "image",
    "publisherName",
    "publisherLogo",
    "datePublished",
    "dateModified",
];

pub(super) fn build(params: &BuildParams) -> Draft {
    let fields = Fields::new(&params.fields);
    let mut draft = Draft::new(fields.get("articleType").unwrap_or("Article"));
    draft.pass_through(&fields, STRUCTURAL);

    // The url only makes sense next to an author.
    let author = fields.first(&["authorName", "author"]).and_then(|name| {
        NamedNode::new(fields.raw("authorType"), "Person", name)
            .map(|node| node.with_url(fields.raw("authorUrl")))
    });
    draft.set_node("author", author);

    let mut images = structured_or_flat(&params.images, &fields, "images");
    if images.is_empty() {
        images = structured_or_flat::<&str>(&[], &fields, "image");
    }
    draft.set_list("image", images);

    if fields.any(&["publisherName", "publisherLogo"]) {
        let logo = ImageObject::new(fields.raw("publisherLogo"));
        draft.set(
            "publisher",
            json!({
                "@type": "Organization",
                "name": fields.raw("publisherName"),
                "logo": logo.as_ref().map(node_value).unwrap_or(Value::Null),
            }),
        );
    }

    draft.set_opt("datePublished", fields.get("datePublished").map(utc_datetime));
    draft.set_opt("dateModified", fields.get("dateModified").map(utc_datetime));

    draft
}

/// Date-only values get a midnight UTC time; anything else passes through.
fn utc_datetime(value: &str) -> String {
    if is_date_only(value) {
        format!("{}T00:00:00Z", value)
    } else {
        value.to_string()
    }
}
