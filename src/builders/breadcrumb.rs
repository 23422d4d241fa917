use serde_json::{json, Value};

use super::{Draft, Fields};
use crate::normalize::non_empty;
use crate::types::{BreadcrumbItem, BuildParams};

const STRUCTURAL: &[&str] = &["itemList"];

pub(super) fn build(params: &BuildParams) -> Draft {
    let fields = Fields::new(&params.fields);
    let mut draft = Draft::new("BreadcrumbList");
    draft.pass_through(&fields, STRUCTURAL);

    let has_structured = params
        .breadcrumbs
        .iter()
        .any(|b| non_empty(&b.name).is_some() || non_empty(&b.url).is_some());

    let crumbs = if has_structured {
        params.breadcrumbs.clone()
    } else {
        parse_item_list(fields.raw("itemList"))
    };

    let items: Vec<Value> = crumbs
        .iter()
        .filter_map(|crumb| Some((non_empty(&crumb.name), non_empty(&crumb.url)?)))
        .enumerate()
        .map(|(i, (name, url))| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": name,
                "item": url,
            })
        })
        .collect();

    draft.set_array("itemListElement", items);
    draft
}

/// One crumb per line, `name|url`.
fn parse_item_list(text: &str) -> Vec<BreadcrumbItem> {
    text.lines()
        .filter_map(non_empty)
        .map(|line| {
            let (name, url) = line.split_once('|').unwrap_or((line, ""));
            BreadcrumbItem {
                name: name.trim().to_string(),
                url: url.trim().to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::{build_schema_from_state, BreadcrumbItem, BuildParams, SchemaKind};
    use serde_json::json;

    fn crumb(name: &str, url: &str) -> BreadcrumbItem {
        BreadcrumbItem {
            name: name.into(),
            url: url.into(),
        }
    }

    #[test]
    fn items_without_url_are_dropped() {
        let mut params = BuildParams::new(SchemaKind::Breadcrumb);
        params.breadcrumbs = vec![crumb("Home", "https://x.com/"), crumb("Orphan", "")];

        let schema = build_schema_from_state(&params);
        assert_eq!(
            schema["itemListElement"],
            json!([{ "@type": "ListItem", "position": 1, "name": "Home", "item": "https://x.com/" }])
        );
    }

    #[test]
    fn positions_follow_filtered_order() {
        let mut params = BuildParams::new(SchemaKind::Breadcrumb);
        params.breadcrumbs = vec![
            crumb("Dropped", ""),
            crumb("Home", "https://x.com/"),
            crumb("Blog", "https://x.com/blog"),
        ];

        let schema = build_schema_from_state(&params);
        let items = schema["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["position"], 2);
        assert_eq!(items[1]["name"], "Blog");
    }

    #[test]
    fn falls_back_to_item_list_text() {
        let params = BuildParams::new(SchemaKind::Breadcrumb).field(
            "itemList",
            "Home | https://x.com/\nNo url here\n\nDocs|https://x.com/docs",
        );

        let schema = build_schema_from_state(&params);
        let items = schema["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["name"], "Home");
        assert_eq!(items[1]["item"], "https://x.com/docs");
        assert!(schema.get("itemList").is_none());
    }

    #[test]
    fn blank_structured_rows_do_not_shadow_the_text_field() {
        let mut params =
            BuildParams::new(SchemaKind::Breadcrumb).field("itemList", "Home|https://x.com/");
        params.breadcrumbs = vec![crumb("", "")];

        let schema = build_schema_from_state(&params);
        assert_eq!(schema["itemListElement"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn nothing_to_list() {
        let schema = build_schema_from_state(&BuildParams::new(SchemaKind::Breadcrumb));
        assert!(schema.get("itemListElement").is_none());
    }
}
