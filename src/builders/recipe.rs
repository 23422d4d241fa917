use serde_json::{json, Value};

use super::{structured_or_flat, Draft, Fields};
use crate::nodes::{AggregateRating, NamedNode};
use crate::normalize::{minutes_duration, split_lines};
use crate::types::BuildParams;

const STRUCTURAL: &[&str] = &[
    "image",
    "authorName",
    "author",
    "prepTime",
    "cookTime",
    "totalTime",
    "recipeIngredient",
    "recipeInstructions",
    "calories",
    "ratingValue",
    "reviewCount",
];

pub(super) fn build(params: &BuildParams) -> Draft {
    let fields = Fields::new(&params.fields);
    let mut draft = Draft::new("Recipe");
    draft.pass_through(&fields, STRUCTURAL);

    draft.set_list("image", structured_or_flat(&params.images, &fields, "image"));
    draft.set_node(
        "author",
        fields
            .first(&["authorName", "author"])
            .and_then(|name| NamedNode::new("", "Person", name)),
    );

    for key in ["prepTime", "cookTime", "totalTime"] {
        draft.set_opt(key, minutes_duration(fields.raw(key)));
    }

    let ingredients: Vec<Value> = split_lines(fields.raw("recipeIngredient"))
        .into_iter()
        .map(Value::from)
        .collect();
    draft.set_list("recipeIngredient", ingredients);

    let instructions: Vec<Value> = split_lines(fields.raw("recipeInstructions"))
        .into_iter()
        .map(|text| json!({ "@type": "HowToStep", "text": text }))
        .collect();
    draft.set_array("recipeInstructions", instructions);

    if let Some(calories) = fields.get("calories") {
        draft.set(
            "nutrition",
            json!({ "@type": "NutritionInformation", "calories": calories }),
        );
    }

    draft.set_node(
        "aggregateRating",
        AggregateRating::new(fields.raw("ratingValue"), fields.raw("reviewCount")),
    );

    draft
}
