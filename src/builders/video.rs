use serde_json::{json, Value};

use super::{structured_or_flat, Draft, Fields};
use crate::nodes::{node_value, ImageObject};
use crate::normalize::{non_empty, normalize_url, number_value, to_number};
use crate::types::BuildParams;

const STRUCTURAL: &[&str] = &[
    "thumbnailUrl",
    "duration",
    "durationMinutes",
    "durationSeconds",
    "contentUrl",
    "embedUrl",
    "viewCount",
    "publisherName",
    "publisherLogo",
];

pub(super) fn build(params: &BuildParams) -> Draft {
    let fields = Fields::new(&params.fields);
    let mut draft = Draft::new("VideoObject");
    draft.pass_through(&fields, STRUCTURAL);

    draft.set_list(
        "thumbnailUrl",
        structured_or_flat(&params.video_thumbnails, &fields, "thumbnailUrl"),
    );
    draft.set_opt("contentUrl", normalize_url(fields.raw("contentUrl")));
    draft.set_opt("embedUrl", normalize_url(fields.raw("embedUrl")));

    let duration = fields.get("duration").map(String::from).or_else(|| {
        let minutes = fields
            .get("durationMinutes")
            .or_else(|| non_empty(&params.video_minutes))
            .unwrap_or("");
        let seconds = fields
            .get("durationSeconds")
            .or_else(|| non_empty(&params.video_seconds))
            .unwrap_or("");
        iso_duration(minutes, seconds)
    });
    draft.set_opt("duration", duration);

    if let Some(count) = number_value(fields.raw("viewCount")) {
        draft.set(
            "interactionStatistic",
            json!({
                "@type": "InteractionCounter",
                "interactionType": { "@type": "WatchAction" },
                "userInteractionCount": count,
            }),
        );
    }

    if let Some(name) = fields.get("publisherName") {
        draft.set(
            "publisher",
            json!({
                "@type": "Organization",
                "name": name,
                "logo": ImageObject::new(fields.raw("publisherLogo"))
                    .as_ref()
                    .map(node_value)
                    .unwrap_or(Value::Null),
            }),
        );
    }

    draft
}

/// `PT<m>M<s>S` from whole minutes and seconds; zero parts are left out.
fn iso_duration(minutes: &str, seconds: &str) -> Option<String> {
    let minutes = to_number(minutes).map(|m| m.max(0.0).trunc() as u64).unwrap_or(0);
    let seconds = to_number(seconds).map(|s| s.max(0.0).trunc() as u64).unwrap_or(0);
    if minutes == 0 && seconds == 0 {
        return None;
    }

    let mut duration = String::from("PT");
    if minutes > 0 {
        duration.push_str(&format!("{}M", minutes));
    }
    if seconds > 0 {
        duration.push_str(&format!("{}S", seconds));
    }
    Some(duration)
}

#[cfg(test)]
mod tests {
    use super::iso_duration;
    use crate::{build_schema_from_state, BuildParams, SchemaKind};
    use serde_json::json;

    fn video() -> BuildParams {
        BuildParams::new(SchemaKind::Video)
            .field("name", "Intro")
            .field("uploadDate", "2025-01-10")
    }

    #[test]
    fn iso_durations() {
        assert_eq!(iso_duration("3", "15").as_deref(), Some("PT3M15S"));
        assert_eq!(iso_duration("", "45").as_deref(), Some("PT45S"));
        assert_eq!(iso_duration("10", "0").as_deref(), Some("PT10M"));
        assert_eq!(iso_duration("", ""), None);
    }

    #[test]
    fn duration_falls_back_to_bare_minutes_and_seconds() {
        let mut params = video();
        params.video_minutes = "4".into();
        params.video_seconds = "5".into();
        let schema = build_schema_from_state(&params);
        assert_eq!(schema["duration"], "PT4M5S");

        let schema = build_schema_from_state(&params.clone().field("durationMinutes", "7"));
        assert_eq!(schema["duration"], "PT7M5S");

        let schema = build_schema_from_state(&params.field("duration", "PT1H"));
        assert_eq!(schema["duration"], "PT1H");
    }

    #[test]
    fn thumbnails_prefer_structured_list() {
        let mut params = video().field("thumbnailUrl", "https://v.com/a.jpg, https://v.com/b.jpg");
        let schema = build_schema_from_state(&params);
        assert_eq!(
            schema["thumbnailUrl"],
            json!(["https://v.com/a.jpg", "https://v.com/b.jpg"])
        );

        params.video_thumbnails = vec!["https://v.com/c.jpg".into()];
        let schema = build_schema_from_state(&params);
        assert_eq!(schema["thumbnailUrl"], "https://v.com/c.jpg");
    }

    #[test]
    fn view_count_statistic() {
        let schema = build_schema_from_state(&video().field("viewCount", "1200"));
        assert_eq!(schema["interactionStatistic"]["userInteractionCount"], 1200);
        assert!(schema.get("viewCount").is_none());
    }
}
