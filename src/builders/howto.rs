use serde_json::{json, Value};

use super::{structured_or_flat, Draft, Fields};
use crate::nodes::{node_value, MonetaryAmount};
use crate::normalize::{minutes_duration, non_empty, normalize_url, number_value, split_lines};
use crate::types::BuildParams;

const STRUCTURAL: &[&str] = &[
    "totalTime",
    "estimatedCost",
    "estimatedCostCurrency",
    "tool",
    "tools",
    "supply",
    "supplies",
    "steps",
    "image",
];

pub(super) fn build(params: &BuildParams) -> Draft {
    let fields = Fields::new(&params.fields);
    let mut draft = Draft::new("HowTo");
    draft.pass_through(&fields, STRUCTURAL);

    draft.set_opt("totalTime", minutes_duration(fields.raw("totalTime")));
    draft.set_opt("image", normalize_url(fields.raw("image")));

    if let Some(cost) = fields.get("estimatedCost") {
        let value = match fields.get("estimatedCostCurrency") {
            Some(currency) => {
                let amount = number_value(cost).unwrap_or_else(|| Value::from(cost));
                node_value(&MonetaryAmount::new(currency, amount))
            }
            None => Value::from(cost),
        };
        draft.set("estimatedCost", value);
    }

    let tool_key = if fields.get("tool").is_some() { "tool" } else { "tools" };
    draft.set_list(
        "tool",
        wrap_named("HowToTool", structured_or_flat(&params.how_to_tools, &fields, tool_key)),
    );

    let supply_key = if fields.get("supply").is_some() { "supply" } else { "supplies" };
    draft.set_list(
        "supply",
        wrap_named(
            "HowToSupply",
            structured_or_flat(&params.how_to_supplies, &fields, supply_key),
        ),
    );

    draft.set_array("step", steps(params, &fields));

    draft
}

fn wrap_named(kind: &str, names: Vec<Value>) -> Vec<Value> {
    names
        .into_iter()
        .map(|name| json!({ "@type": kind, "name": name }))
        .collect()
}

fn steps(params: &BuildParams, fields: &Fields<'_>) -> Vec<Value> {
    let structured: Vec<Value> = params
        .how_to_steps
        .iter()
        .filter_map(|step| {
            let text = non_empty(&step.text)?;
            Some(json!({
                "@type": "HowToStep",
                "name": non_empty(&step.name),
                "text": text,
                "url": normalize_url(&step.url),
                "image": normalize_url(&step.image),
            }))
        })
        .collect();

    if !structured.is_empty() {
        return structured;
    }

    split_lines(fields.raw("steps"))
        .into_iter()
        .map(|text| json!({ "@type": "HowToStep", "text": text }))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::{build_schema_from_state, BuildParams, HowToStepItem, SchemaKind};
    use serde_json::json;

    fn howto() -> BuildParams {
        BuildParams::new(SchemaKind::HowTo).field("name", "Brew coffee")
    }

    #[test]
    fn total_time_wrapping() {
        let schema = build_schema_from_state(&howto().field("totalTime", "15"));
        assert_eq!(schema["totalTime"], "PT15M");

        let schema = build_schema_from_state(&howto().field("totalTime", "PT1H30M"));
        assert_eq!(schema["totalTime"], "PT1H30M");
    }

    #[test]
    fn estimated_cost_needs_currency_to_be_monetary() {
        let schema = build_schema_from_state(
            &howto()
                .field("estimatedCost", "20")
                .field("estimatedCostCurrency", "USD"),
        );
        assert_eq!(
            schema["estimatedCost"],
            json!({ "@type": "MonetaryAmount", "currency": "USD", "value": 20 })
        );

        let schema = build_schema_from_state(&howto().field("estimatedCost", "about 20 dollars"));
        assert_eq!(schema["estimatedCost"], "about 20 dollars");
    }

    #[test]
    fn tools_and_supplies() {
        let mut params = howto().field("tool", "Kettle, Grinder").field("supply", "Beans");
        let schema = build_schema_from_state(&params);

        assert_eq!(
            schema["tool"],
            json!([
                { "@type": "HowToTool", "name": "Kettle" },
                { "@type": "HowToTool", "name": "Grinder" }
            ])
        );
        assert_eq!(schema["supply"], json!({ "@type": "HowToSupply", "name": "Beans" }));

        params.how_to_tools = vec!["French press".into()];
        let schema = build_schema_from_state(&params);
        assert_eq!(schema["tool"], json!({ "@type": "HowToTool", "name": "French press" }));
    }

    #[test]
    fn structured_steps_win_and_need_text() {
        let mut params = howto().field("steps", "Boil water\nGrind beans");
        let schema = build_schema_from_state(&params);
        assert_eq!(
            schema["step"],
            json!([
                { "@type": "HowToStep", "text": "Boil water" },
                { "@type": "HowToStep", "text": "Grind beans" }
            ])
        );

        params.how_to_steps = vec![
            HowToStepItem {
                name: "Boil".into(),
                text: "Boil 500ml of water".into(),
                ..HowToStepItem::default()
            },
            HowToStepItem {
                name: "Empty".into(),
                ..HowToStepItem::default()
            },
        ];
        let schema = build_schema_from_state(&params);
        assert_eq!(
            schema["step"],
            json!([{ "@type": "HowToStep", "name": "Boil", "text": "Boil 500ml of water" }])
        );
        assert!(schema.get("steps").is_none());
    }
}
