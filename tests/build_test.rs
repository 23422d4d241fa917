//! Integration tests for schema building.

use serde_json::{json, Value};
use schema_builder::{
    build_schema_from_state, check_schema, collapse_day_ranges, normalize_days_to_codes,
    sample_params, BreadcrumbItem, BuildParams, FaqItem, OpeningHoursRow, SchemaKind,
    SocialProfile,
};

fn assert_compacted(value: &Value, path: &str) {
    match value {
        Value::Null => panic!("null at {}", path),
        Value::String(s) => assert!(!s.trim().is_empty(), "blank string at {}", path),
        Value::Array(items) => {
            assert!(!items.is_empty(), "empty array at {}", path);
            for (i, item) in items.iter().enumerate() {
                assert_compacted(item, &format!("{}/{}", path, i));
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                assert_compacted(item, &format!("{}/{}", path, key));
            }
        }
        _ => {}
    }
}

fn is_iso_utc(value: &Value) -> bool {
    let s = value.as_str().unwrap_or("");
    let b = s.as_bytes();
    s.len() == 20
        && b[4] == b'-'
        && b[7] == b'-'
        && b[10] == b'T'
        && b[13] == b':'
        && b[16] == b':'
        && b[19] == b'Z'
        && b.iter()
            .enumerate()
            .filter(|(i, _)| ![4, 7, 10, 13, 16, 19].contains(i))
            .all(|(_, c)| c.is_ascii_digit())
}

// === Whole-pipeline properties ===

mod properties {
    use super::*;

    #[test]
    fn deterministic() {
        for kind in SchemaKind::ALL.iter() {
            let params = sample_params(kind);
            assert_eq!(build_schema_from_state(&params), build_schema_from_state(&params));
        }
    }

    #[test]
    fn samples_are_compacted() {
        for kind in SchemaKind::ALL.iter() {
            let schema = build_schema_from_state(&sample_params(kind));
            assert_compacted(&schema, "");
            assert_eq!(schema["@context"], "https://schema.org");
            assert!(schema["@type"].is_string());
        }
    }

    #[test]
    fn blank_input_is_compacted() {
        for kind in SchemaKind::ALL.iter() {
            let mut params = BuildParams::new(kind.clone())
                .field("name", "   ")
                .field("url", "")
                .field("sameAs", "\n\n");
            params.images = vec![String::new(), " ".into()];
            params.breadcrumbs = vec![BreadcrumbItem::default()];
            params.faq_items = vec![FaqItem::default()];
            params.opening_hours = vec![OpeningHoursRow::default()];

            let schema = build_schema_from_state(&params);
            assert_compacted(&schema, "");
            assert!(schema.get("@type").is_some(), "{}", kind);
        }
    }

    #[test]
    fn context_only_on_root() {
        let schema = build_schema_from_state(&sample_params(&SchemaKind::Organization));
        assert!(schema["contactPoint"][0].get("@context").is_none());
    }

    #[test]
    fn every_sample_passes_its_check() {
        for kind in SchemaKind::ALL.iter() {
            let schema = build_schema_from_state(&sample_params(kind));
            assert!(check_schema(kind, &schema).is_ok(), "{}", kind);
        }
    }
}

// === List collapsing ===

mod list_collapsing {
    use super::*;

    #[test]
    fn article_images() {
        let mut params = BuildParams::new(SchemaKind::Article);
        assert!(build_schema_from_state(&params).get("image").is_none());

        params.images = vec!["https://x.com/a.jpg".into()];
        assert_eq!(build_schema_from_state(&params)["image"], "https://x.com/a.jpg");

        params.images.push("https://x.com/b.jpg".into());
        assert_eq!(
            build_schema_from_state(&params)["image"],
            json!(["https://x.com/a.jpg", "https://x.com/b.jpg"])
        );
    }

    #[test]
    fn structured_same_as_wins_over_flat() {
        let mut params = BuildParams::new(SchemaKind::Person)
            .field("name", "Ada")
            .field("sameAs", "https://a.example\nhttps://b.example");
        assert_eq!(
            build_schema_from_state(&params)["sameAs"],
            json!(["https://a.example", "https://b.example"])
        );

        params.social_profiles = vec![SocialProfile {
            platform: "GitHub".into(),
            url: "https://github.com/ada".into(),
        }];
        assert_eq!(build_schema_from_state(&params)["sameAs"], "https://github.com/ada");
    }

    #[test]
    fn how_to_tools_and_supplies() {
        let mut params = BuildParams::new(SchemaKind::HowTo).field("name", "Fix a bike");
        params.how_to_tools = vec!["Wrench".into()];
        params.how_to_supplies = vec!["Oil".into(), "Rag".into()];

        let schema = build_schema_from_state(&params);
        assert_eq!(schema["tool"], json!({ "@type": "HowToTool", "name": "Wrench" }));
        assert_eq!(schema["supply"].as_array().map(Vec::len), Some(2));
    }
}

// === Documented scenarios ===

mod scenarios {
    use super::*;

    #[test]
    fn day_range_collapsing() {
        assert_eq!(
            collapse_day_ranges(&normalize_days_to_codes("Monday, Tuesday, Wednesday, Friday")),
            vec!["Mo-We", "Fr"]
        );
    }

    #[test]
    fn article_end_to_end() {
        let params = BuildParams::new(SchemaKind::Article)
            .field("articleType", "BlogPosting")
            .field("authorName", "Jane Doe")
            .field("authorUrl", "https://example.com/author/jane-doe")
            .field("authorType", "Person")
            .field("datePublished", "2025-11-25")
            .field("dateModified", "2025-11-29");

        let schema = build_schema_from_state(&params);

        assert_eq!(schema["@type"], "BlogPosting");
        assert_eq!(schema["author"]["name"], "Jane Doe");
        assert_eq!(schema["author"]["url"], "https://example.com/author/jane-doe");
        assert_eq!(schema["datePublished"], "2025-11-25T00:00:00Z");
        assert!(is_iso_utc(&schema["datePublished"]));
        assert!(is_iso_utc(&schema["dateModified"]));
        for helper in ["authorName", "authorUrl", "authorType", "articleType"] {
            assert!(schema.get(helper).is_none(), "{} leaked", helper);
        }
    }

    #[test]
    fn offer_exclusivity() {
        let aggregate = build_schema_from_state(
            &BuildParams::new(SchemaKind::Product)
                .field("name", "Widget")
                .field("offerType", "AggregateOffer")
                .field("lowPrice", "10")
                .field("highPrice", "20")
                .field("price", "15"),
        );
        assert_eq!(aggregate["offers"]["@type"], "AggregateOffer");
        assert!(aggregate["offers"].get("price").is_none());
        assert!(aggregate.get("price").is_none());

        let single = build_schema_from_state(
            &BuildParams::new(SchemaKind::Product)
                .field("name", "Widget")
                .field("offerType", "Offer")
                .field("price", "15")
                .field("lowPrice", "10"),
        );
        assert_eq!(single["offers"]["@type"], "Offer");
        assert_eq!(single["offers"]["price"], 15);
        assert!(single["offers"].get("lowPrice").is_none());
        assert!(single.get("lowPrice").is_none());
    }

    #[test]
    fn unrecognized_type_fallback() {
        let params = BuildParams::new(SchemaKind::parse("UnknownThing")).field("foo", "bar");
        assert_eq!(
            build_schema_from_state(&params),
            json!({ "@context": "https://schema.org", "@type": "UnknownThing", "foo": "bar" })
        );
    }

    #[test]
    fn unrecognized_type_from_json() {
        let params: BuildParams =
            serde_json::from_str(r#"{"type": "UnknownThing", "fields": {"foo": " bar ", "x": ""}}"#)
                .unwrap();
        assert_eq!(
            build_schema_from_state(&params),
            json!({ "@context": "https://schema.org", "@type": "UnknownThing", "foo": "bar" })
        );
    }

    #[test]
    fn faq_filtering() {
        let mut params = BuildParams::new(SchemaKind::FaqPage);
        params.faq_items = vec![
            FaqItem {
                question: "Q1".into(),
                answer: "A1".into(),
            },
            FaqItem {
                question: String::new(),
                answer: "A2".into(),
            },
        ];

        let schema = build_schema_from_state(&params);
        let entities = schema["mainEntity"].as_array().unwrap();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0]["name"], "Q1");
        assert_eq!(entities[0]["acceptedAnswer"]["text"], "A1");
    }

    #[test]
    fn breadcrumb_requires_url() {
        let mut params = BuildParams::new(SchemaKind::Breadcrumb);
        params.breadcrumbs = vec![
            BreadcrumbItem {
                name: "Home".into(),
                url: "https://x.com/".into(),
            },
            BreadcrumbItem {
                name: "Orphan".into(),
                url: String::new(),
            },
        ];

        let schema = build_schema_from_state(&params);
        let items = schema["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["position"], 1);
    }

    #[test]
    fn event_offset_and_offers() {
        let schema = build_schema_from_state(&sample_params(&SchemaKind::Event));

        assert_eq!(schema["startDate"], "2025-06-12T18:30:00-04:00");
        assert_eq!(schema["endDate"], "2025-06-12T21:00:00-04:00");
        assert!(schema["offers"].is_array());
        assert_eq!(schema["offers"][0]["priceCurrency"], "USD");
        assert_eq!(schema["location"].as_array().map(Vec::len), Some(2));
        assert!(schema.get("venueName").is_none());
        assert!(schema.get("timezone").is_none());
    }

    #[test]
    fn business_hours_from_sample() {
        let schema = build_schema_from_state(&sample_params(&SchemaKind::LocalBusiness));

        assert_eq!(schema["@type"], "Restaurant");
        assert_eq!(
            schema["openingHours"],
            json!(["Mo-Fr 11:00-22:00", "Sa-Su 10:00-23:00"])
        );
        assert_eq!(schema["openingHoursSpecification"].as_array().map(Vec::len), Some(2));
        assert_eq!(
            schema["openingHoursSpecification"][1]["dayOfWeek"],
            json!(["Saturday", "Sunday"])
        );
    }

    #[test]
    fn open_all_week_ignores_rows() {
        let mut params = BuildParams::new(SchemaKind::LocalBusiness)
            .field("name", "Diner")
            .field("open247", "true");
        params.opening_hours = vec![OpeningHoursRow {
            days: "Monday".into(),
            opens: "09:00".into(),
            closes: "17:00".into(),
        }];

        let schema = build_schema_from_state(&params);
        assert_eq!(schema["openingHours"], "Mo-Su 00:00-23:59");
        assert_eq!(schema["openingHoursSpecification"][0]["opens"], "00:00");
        assert_eq!(schema["openingHoursSpecification"][0]["closes"], "23:59");
    }

    #[test]
    fn organization_id_from_url() {
        let schema = build_schema_from_state(&sample_params(&SchemaKind::Organization));
        assert_eq!(schema["@id"], "https://example.com#organization");
    }

    #[test]
    fn job_posting_requirements() {
        let schema = build_schema_from_state(&sample_params(&SchemaKind::JobPosting));

        assert_eq!(schema["employmentType"], "FULL_TIME");
        assert_eq!(
            schema["educationRequirements"]["credentialCategory"],
            "bachelor degree"
        );
        assert_eq!(schema["experienceRequirements"]["monthsOfExperience"], 36);
        assert_eq!(schema["baseSalary"]["value"]["minValue"], 120000);
        assert!(schema.get("salaryMin").is_none());
    }
}
