//! Product mapping: offers, ratings and reviews fold into nested nodes and the
//! flat helper fields never reach the root.

use serde_json::{json, Value};

use super::{structured_or_flat, Draft, Fields};
use crate::nodes::{node_value, AggregateRating, NamedNode};
use crate::normalize::{normalize_date, normalize_url, number_value, schema_enum_url};
use crate::types::BuildParams;

const STRUCTURAL: &[&str] = &[
    "offerType",
    "price",
    "currency",
    "priceCurrency",
    "availability",
    "itemCondition",
    "priceValidUntil",
    "offerUrl",
    "sellerName",
    "lowPrice",
    "highPrice",
    "offerCount",
    "ratingValue",
    "reviewCount",
    "ratingCount",
    "bestRating",
    "worstRating",
    "brand",
    "image",
    "reviewAuthor",
    "reviewBody",
    "reviewRating",
];

/// Which offer node a product carries. The two are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OfferKind {
    Single,
    Aggregate,
}

impl OfferKind {
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("AggregateOffer") => OfferKind::Aggregate,
            _ => OfferKind::Single,
        }
    }
}

pub(super) fn build(params: &BuildParams) -> Draft {
    let fields = Fields::new(&params.fields);
    let mut draft = Draft::new("Product");
    draft.pass_through(&fields, STRUCTURAL);

    draft.set_list("image", structured_or_flat(&params.images, &fields, "image"));
    draft.set_node("brand", NamedNode::new("", "Brand", fields.raw("brand")));
    draft.set_opt("offers", offer(&fields));
    draft.set_node(
        "aggregateRating",
        AggregateRating::new(fields.raw("ratingValue"), fields.raw("reviewCount")).map(|rating| {
            rating.with_bounds(
                fields.raw("ratingCount"),
                fields.raw("bestRating"),
                fields.raw("worstRating"),
            )
        }),
    );
    draft.set_opt("review", review(&fields));

    draft
}

fn offer(fields: &Fields<'_>) -> Option<Value> {
    let currency = fields.first(&["currency", "priceCurrency"]);

    match OfferKind::parse(fields.get("offerType")) {
        OfferKind::Aggregate => {
            let low = number_value(fields.raw("lowPrice"));
            let high = number_value(fields.raw("highPrice"));
            if low.is_none() && high.is_none() {
                return None;
            }
            Some(json!({
                "@type": "AggregateOffer",
                "lowPrice": low,
                "highPrice": high,
                "offerCount": number_value(fields.raw("offerCount")),
                "priceCurrency": currency,
            }))
        }
        OfferKind::Single => {
            let price = number_value(fields.raw("price"))?;
            Some(json!({
                "@type": "Offer",
                "price": price,
                "priceCurrency": currency,
                "availability": schema_enum_url(fields.raw("availability")),
                "itemCondition": schema_enum_url(fields.raw("itemCondition")),
                "priceValidUntil": normalize_date(fields.raw("priceValidUntil")),
                "url": normalize_url(fields.raw("offerUrl")),
                "seller": NamedNode::new("", "Organization", fields.raw("sellerName"))
                    .as_ref()
                    .map(node_value),
            }))
        }
    }
}

fn review(fields: &Fields<'_>) -> Option<Value> {
    if !fields.any(&["reviewBody", "reviewRating"]) {
        return None;
    }

    let rating = number_value(fields.raw("reviewRating"))
        .map(|value| json!({ "@type": "Rating", "ratingValue": value }));

    Some(json!({
        "@type": "Review",
        "reviewBody": fields.get("reviewBody"),
        "reviewRating": rating,
        "author": NamedNode::new("", "Person", fields.raw("reviewAuthor"))
            .as_ref()
            .map(node_value),
    }))
}

#[cfg(test)]
mod tests {
    use crate::{build_schema_from_state, BuildParams, SchemaKind};
    use serde_json::json;

    fn product() -> BuildParams {
        BuildParams::new(SchemaKind::Product).field("name", "Widget")
    }

    #[test]
    fn single_offer() {
        let schema = build_schema_from_state(
            &product()
                .field("price", "19.99")
                .field("currency", "USD")
                .field("availability", "InStock")
                .field("priceValidUntil", "2026-12-31"),
        );

        assert_eq!(
            schema["offers"],
            json!({
                "@type": "Offer",
                "price": 19.99,
                "priceCurrency": "USD",
                "availability": "https://schema.org/InStock",
                "priceValidUntil": "2026-12-31"
            })
        );
    }

    #[test]
    fn helper_fields_never_leak_onto_root() {
        let schema = build_schema_from_state(
            &product()
                .field("price", "10")
                .field("currency", "EUR")
                .field("ratingValue", "4")
                .field("offerType", "Offer"),
        );

        for key in ["price", "currency", "ratingValue", "offerType"] {
            assert!(schema.get(key).is_none(), "{} leaked onto root", key);
        }
        assert_eq!(schema["name"], "Widget");
    }

    #[test]
    fn aggregate_offer_excludes_price() {
        let schema = build_schema_from_state(
            &product()
                .field("offerType", "AggregateOffer")
                .field("price", "15")
                .field("lowPrice", "10")
                .field("highPrice", "20")
                .field("offerCount", "3"),
        );

        assert_eq!(schema["offers"]["@type"], "AggregateOffer");
        assert_eq!(schema["offers"]["lowPrice"], 10);
        assert_eq!(schema["offers"]["highPrice"], 20);
        assert!(schema["offers"].get("price").is_none());
    }

    #[test]
    fn single_offer_excludes_low_price() {
        let schema = build_schema_from_state(
            &product()
                .field("offerType", "Offer")
                .field("price", "15")
                .field("lowPrice", "10"),
        );
        assert!(schema["offers"].get("lowPrice").is_none());
        assert_eq!(schema["offers"]["price"], 15);
    }

    #[test]
    fn offer_needs_a_numeric_price() {
        let schema = build_schema_from_state(&product().field("price", "free").field("currency", "USD"));
        assert!(schema.get("offers").is_none());
    }

    #[test]
    fn rating_brand_and_review() {
        let schema = build_schema_from_state(
            &product()
                .field("ratingValue", "4.6")
                .field("reviewCount", "89")
                .field("brand", "Acme")
                .field("reviewBody", "Solid.")
                .field("reviewRating", "5")
                .field("reviewAuthor", "Kim"),
        );

        assert_eq!(
            schema["aggregateRating"],
            json!({ "@type": "AggregateRating", "ratingValue": 4.6, "reviewCount": 89 })
        );
        assert_eq!(schema["brand"], json!({ "@type": "Brand", "name": "Acme" }));
        assert_eq!(
            schema["review"],
            json!({
                "@type": "Review",
                "reviewBody": "Solid.",
                "reviewRating": { "@type": "Rating", "ratingValue": 5 },
                "author": { "@type": "Person", "name": "Kim" }
            })
        );
    }
}
