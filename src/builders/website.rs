use serde_json::json;

use super::{Draft, Fields};
use crate::normalize::normalize_url;
use crate::types::BuildParams;

const STRUCTURAL: &[&str] = &["url", "searchUrlTemplate", "queryParam"];

const DEFAULT_QUERY_PARAM: &str = "search_term_string";

pub(super) fn build(params: &BuildParams) -> Draft {
    let fields = Fields::new(&params.fields);
    let mut draft = Draft::new("WebSite");
    draft.pass_through(&fields, STRUCTURAL);

    draft.set_opt("url", normalize_url(fields.raw("url")));

    // Sitelinks searchbox.
    if let Some(template) = fields.get("searchUrlTemplate") {
        let param = fields.get("queryParam").unwrap_or(DEFAULT_QUERY_PARAM);
        draft.set(
            "potentialAction",
            json!({
                "@type": "SearchAction",
                "target": { "@type": "EntryPoint", "urlTemplate": template },
                "query-input": format!("required name={}", param),
            }),
        );
    }

    draft
}
