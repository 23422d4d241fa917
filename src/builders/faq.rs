use serde_json::{json, Value};

use super::{Draft, Fields};
use crate::normalize::non_empty;
use crate::types::BuildParams;

pub(super) fn build(params: &BuildParams) -> Draft {
    let fields = Fields::new(&params.fields);
    let mut draft = Draft::new("FAQPage");
    draft.pass_through(&fields, &[]);

    // Only the structured repeater feeds mainEntity.
    let questions: Vec<Value> = params
        .faq_items
        .iter()
        .filter_map(|item| Some((non_empty(&item.question)?, non_empty(&item.answer)?)))
        .map(|(question, answer)| {
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": { "@type": "Answer", "text": answer },
            })
        })
        .collect();

    draft.set_array("mainEntity", questions);
    draft
}
