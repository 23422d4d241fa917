//! Event mapping.
//!
//! Start and end are entered as separate date, time and IANA zone fields and
//! combined into one ISO-8601 datetime with the zone's real offset.

use chrono::{FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone};
use chrono_tz::Tz;
use serde_json::{json, Value};

use super::{structured_or_flat, Draft, Fields};
use crate::hours::{day_name, normalize_days_to_codes};
use crate::nodes::{node_value, PostalAddress};
use crate::normalize::{is_date_only, non_empty, normalize_url, number_value, schema_enum_url};
use crate::types::BuildParams;

const STRUCTURAL: &[&str] = &[
    "startDate",
    "startTime",
    "endDate",
    "endTime",
    "timezone",
    "attendanceMode",
    "eventAttendanceMode",
    "eventStatus",
    "venueName",
    "venueStreet",
    "venueCity",
    "venueRegion",
    "venuePostalCode",
    "venueCountry",
    "streamUrl",
    "organizerName",
    "organizerUrl",
    "organizerType",
    "performerName",
    "performerType",
    "scheduleFrequency",
    "scheduleByDay",
    "scheduleStartDate",
    "scheduleEndDate",
    "scheduleStartTime",
    "scheduleEndTime",
    "image",
    "currency",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttendanceMode {
    Offline,
    Online,
    Mixed,
}

impl AttendanceMode {
    /// Accepts `offline`/`online`/`mixed` as well as the schema.org names and URLs.
    fn parse(value: &str) -> Option<Self> {
        let name = value.rsplit('/').next().unwrap_or(value).to_lowercase();
        match name.as_str() {
            "offline" | "offlineeventattendancemode" | "in-person" | "inperson" => Some(Self::Offline),
            "online" | "onlineeventattendancemode" | "virtual" => Some(Self::Online),
            "mixed" | "mixedeventattendancemode" | "hybrid" => Some(Self::Mixed),
            _ => None,
        }
    }

    fn url(self) -> &'static str {
        match self {
            Self::Offline => "https://schema.org/OfflineEventAttendanceMode",
            Self::Online => "https://schema.org/OnlineEventAttendanceMode",
            Self::Mixed => "https://schema.org/MixedEventAttendanceMode",
        }
    }
}

pub(super) fn build(params: &BuildParams) -> Draft {
    let fields = Fields::new(&params.fields);
    let mut draft = Draft::new("Event");
    draft.pass_through(&fields, STRUCTURAL);

    let timezone = fields.raw("timezone");
    draft.set_opt(
        "startDate",
        combine_date_time(fields.raw("startDate"), fields.raw("startTime"), timezone),
    );
    draft.set_opt(
        "endDate",
        combine_date_time(fields.raw("endDate"), fields.raw("endTime"), timezone),
    );

    let mode = fields
        .first(&["attendanceMode", "eventAttendanceMode"])
        .and_then(AttendanceMode::parse);
    draft.set_opt("eventAttendanceMode", mode.map(AttendanceMode::url));
    draft.set_opt("eventStatus", schema_enum_url(fields.raw("eventStatus")));
    draft.set_opt("location", location(&fields, mode));
    draft.set_list("image", structured_or_flat(&params.images, &fields, "image"));

    if fields.any(&["organizerName", "organizerUrl"]) {
        draft.set(
            "organizer",
            json!({
                "@type": fields.get("organizerType").unwrap_or("Organization"),
                "name": fields.get("organizerName"),
                "url": normalize_url(fields.raw("organizerUrl")),
            }),
        );
    }

    if let Some(performer) = fields.get("performerName") {
        draft.set(
            "performer",
            json!({
                "@type": fields.get("performerType").unwrap_or("PerformingGroup"),
                "name": performer,
            }),
        );
    }

    draft.set_array("offers", ticket_offers(params, &fields));
    draft.set_opt("eventSchedule", schedule(&fields));

    draft
}

fn location(fields: &Fields<'_>, mode: Option<AttendanceMode>) -> Option<Value> {
    let virtual_location = normalize_url(fields.raw("streamUrl"))
        .map(|url| json!({ "@type": "VirtualLocation", "url": url }));

    if mode == Some(AttendanceMode::Online) {
        return virtual_location;
    }

    let address = PostalAddress::new(
        fields.raw("venueStreet"),
        fields.raw("venueCity"),
        fields.raw("venueRegion"),
        fields.raw("venuePostalCode"),
        fields.raw("venueCountry"),
    );
    let place = (fields.get("venueName").is_some() || address.is_some()).then(|| {
        json!({
            "@type": "Place",
            "name": fields.get("venueName"),
            "address": address.as_ref().map(node_value),
        })
    });

    if mode == Some(AttendanceMode::Mixed) {
        return match (place, virtual_location) {
            (Some(place), Some(online)) => Some(Value::Array(vec![place, online])),
            (place, online) => place.or(online),
        };
    }

    place
}

fn ticket_offers(params: &BuildParams, fields: &Fields<'_>) -> Vec<Value> {
    let default_currency = non_empty(&params.ticket_default_currency).or(fields.get("currency"));

    params
        .ticket_types
        .iter()
        .filter_map(|ticket| {
            let name = non_empty(&ticket.name);
            let price = number_value(&ticket.price);
            if name.is_none() && price.is_none() {
                return None;
            }
            Some(json!({
                "@type": "Offer",
                "name": name,
                "price": price,
                "priceCurrency": non_empty(&ticket.currency).or(default_currency),
                "availability": schema_enum_url(&ticket.availability),
                "url": normalize_url(&ticket.url),
                "validFrom": non_empty(&ticket.valid_from),
            }))
        })
        .collect()
}

fn schedule(fields: &Fields<'_>) -> Option<Value> {
    const KEYS: &[&str] = &[
        "scheduleFrequency",
        "scheduleByDay",
        "scheduleStartDate",
        "scheduleEndDate",
        "scheduleStartTime",
        "scheduleEndTime",
    ];
    if !fields.any(KEYS) {
        return None;
    }

    let by_day: Vec<String> = normalize_days_to_codes(fields.raw("scheduleByDay"))
        .into_iter()
        .filter_map(day_name)
        .map(|day| format!("https://schema.org/{}", day))
        .collect();

    Some(json!({
        "@type": "Schedule",
        "repeatFrequency": fields.get("scheduleFrequency"),
        "byDay": by_day,
        "startDate": fields.get("scheduleStartDate"),
        "endDate": fields.get("scheduleEndDate"),
        "startTime": fields.get("scheduleStartTime"),
        "endTime": fields.get("scheduleEndTime"),
        "scheduleTimezone": fields.get("timezone"),
    }))
}

/// Combine a `yyyy-mm-dd` date and an `HH:MM[:SS]` time into an ISO-8601
/// datetime carrying the offset of `timezone` at that local instant.
///
/// - no date: `None`
/// - a date that is not date-only, or not a real calendar day: passed
///   through unchanged
/// - no (valid) time: midnight UTC, `<date>T00:00:00Z`
/// - no or unknown zone: the machine's local offset
pub fn combine_date_time(date: &str, time: &str, timezone: &str) -> Option<String> {
    let date = non_empty(date)?;
    let day = is_date_only(date)
        .then(|| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
        .flatten();
    let Some(day) = day else {
        return Some(date.to_string());
    };

    let local = non_empty(time).and_then(|time| {
        let clock = NaiveTime::parse_from_str(time, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
            .ok()?;
        Some(day.and_time(clock))
    });

    let Some(local) = local else {
        return Some(format!("{}T00:00:00Z", date));
    };

    let offset = match non_empty(timezone).and_then(|tz| tz.parse::<Tz>().ok()) {
        Some(tz) => offset_at(&tz, &local),
        None => offset_at(&Local, &local),
    };

    Some(format!("{}{}", local.format("%Y-%m-%dT%H:%M:%S"), offset))
}

/// Offset in effect at a wall-clock time. Times skipped by a DST jump use the
/// offset of the same instant read as UTC.
fn offset_at<Z: TimeZone>(zone: &Z, local: &NaiveDateTime) -> FixedOffset {
    match zone.offset_from_local_datetime(local).earliest() {
        Some(offset) => offset.fix(),
        None => zone.offset_from_utc_datetime(local).fix(),
    }
}

#[cfg(test)]
mod tests {
    use super::combine_date_time;
    use crate::{build_schema_from_state, BuildParams, SchemaKind, TicketType};
    use serde_json::json;

    fn event() -> BuildParams {
        BuildParams::new(SchemaKind::Event).field("name", "RustConf")
    }

    fn ticket(name: &str, price: &str) -> TicketType {
        TicketType {
            name: name.into(),
            price: price.into(),
            ..TicketType::default()
        }
    }

    #[test]
    fn combine_uses_zone_offset() {
        assert_eq!(
            combine_date_time("2025-07-04", "19:30", "America/New_York").as_deref(),
            Some("2025-07-04T19:30:00-04:00")
        );
        assert_eq!(
            combine_date_time("2025-01-15", "09:00", "Europe/Berlin").as_deref(),
            Some("2025-01-15T09:00:00+01:00")
        );
        assert_eq!(
            combine_date_time("2025-01-15", "09:00:30", "UTC").as_deref(),
            Some("2025-01-15T09:00:30+00:00")
        );
    }

    #[test]
    fn combine_without_time_is_utc_midnight() {
        assert_eq!(
            combine_date_time("2025-07-04", "", "America/New_York").as_deref(),
            Some("2025-07-04T00:00:00Z")
        );
    }

    #[test]
    fn combine_without_zone_uses_local_offset() {
        let value = combine_date_time("2025-07-04", "10:00", "").unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&value).is_ok());
        assert!(value.starts_with("2025-07-04T10:00:00"));

        let value = combine_date_time("2025-07-04", "10:00", "Mars/Olympus").unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&value).is_ok());
    }

    #[test]
    fn combine_passes_full_datetimes_through() {
        assert_eq!(
            combine_date_time("2025-07-04T10:00:00Z", "11:00", "UTC").as_deref(),
            Some("2025-07-04T10:00:00Z")
        );
        assert_eq!(combine_date_time("", "10:00", "UTC"), None);
    }

    #[test]
    fn combine_passes_impossible_dates_through() {
        assert_eq!(
            combine_date_time("2025-02-30", "18:30", "America/New_York").as_deref(),
            Some("2025-02-30")
        );
        assert_eq!(combine_date_time("2025-02-30", "", "").as_deref(), Some("2025-02-30"));
    }

    #[test]
    fn combine_handles_dst_gap() {
        // 02:30 does not exist in New York on 2025-03-09.
        let value = combine_date_time("2025-03-09", "02:30", "America/New_York").unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&value).is_ok());
    }

    #[test]
    fn offline_event_uses_place() {
        let schema = build_schema_from_state(
            &event()
                .field("attendanceMode", "offline")
                .field("venueName", "Hall A")
                .field("venueCity", "Portland"),
        );

        assert_eq!(
            schema["eventAttendanceMode"],
            "https://schema.org/OfflineEventAttendanceMode"
        );
        assert_eq!(
            schema["location"],
            json!({
                "@type": "Place",
                "name": "Hall A",
                "address": { "@type": "PostalAddress", "addressLocality": "Portland" }
            })
        );
        for key in ["venueName", "venueCity", "attendanceMode"] {
            assert!(schema.get(key).is_none());
        }
    }

    #[test]
    fn online_event_uses_virtual_location() {
        let schema = build_schema_from_state(
            &event()
                .field("attendanceMode", "online")
                .field("venueName", "Ignored Hall")
                .field("streamUrl", "https://stream.example.com/live"),
        );
        assert_eq!(
            schema["location"],
            json!({ "@type": "VirtualLocation", "url": "https://stream.example.com/live" })
        );
        assert!(schema.get("streamUrl").is_none());
    }

    #[test]
    fn mixed_event_lists_both_locations() {
        let schema = build_schema_from_state(
            &event()
                .field("attendanceMode", "https://schema.org/MixedEventAttendanceMode")
                .field("venueName", "Hall A")
                .field("streamUrl", "https://stream.example.com/live"),
        );
        let location = schema["location"].as_array().unwrap();
        assert_eq!(location.len(), 2);
        assert_eq!(location[0]["@type"], "Place");
        assert_eq!(location[1]["@type"], "VirtualLocation");

        let schema = build_schema_from_state(
            &event().field("attendanceMode", "mixed").field("venueName", "Hall A"),
        );
        assert_eq!(schema["location"]["@type"], "Place");
    }

    #[test]
    fn offers_are_always_an_array() {
        let mut params = event();
        params.ticket_default_currency = "USD".into();
        params.ticket_types = vec![ticket("General", "25"), ticket("", ""), ticket("", "5")];

        let schema = build_schema_from_state(&params);
        let offers = schema["offers"].as_array().unwrap();
        assert_eq!(offers.len(), 2);
        assert_eq!(
            offers[0],
            json!({ "@type": "Offer", "name": "General", "price": 25, "priceCurrency": "USD" })
        );
        assert!(offers[1].get("name").is_none());

        params.ticket_types.truncate(1);
        let schema = build_schema_from_state(&params);
        assert!(schema["offers"].is_array());
    }

    #[test]
    fn organizer_performer_and_schedule() {
        let schema = build_schema_from_state(
            &event()
                .field("organizerName", "Rust Foundation")
                .field("organizerUrl", "foundation.rust-lang.org")
                .field("performerName", "Ferris")
                .field("performerType", "Person")
                .field("scheduleFrequency", "P1W")
                .field("scheduleByDay", "Tuesday, Thu")
                .field("timezone", "Europe/London"),
        );

        assert_eq!(
            schema["organizer"],
            json!({
                "@type": "Organization",
                "name": "Rust Foundation",
                "url": "https://foundation.rust-lang.org"
            })
        );
        assert_eq!(schema["performer"], json!({ "@type": "Person", "name": "Ferris" }));
        assert_eq!(
            schema["eventSchedule"],
            json!({
                "@type": "Schedule",
                "repeatFrequency": "P1W",
                "byDay": ["https://schema.org/Tuesday", "https://schema.org/Thursday"],
                "scheduleTimezone": "Europe/London"
            })
        );
        assert!(schema.get("timezone").is_none());
    }

    #[test]
    fn start_date_combined_on_the_root() {
        let schema = build_schema_from_state(
            &event()
                .field("startDate", "2025-09-10")
                .field("startTime", "09:00")
                .field("timezone", "America/Denver"),
        );
        assert_eq!(schema["startDate"], "2025-09-10T09:00:00-06:00");
        assert!(schema.get("startTime").is_none());
    }
}
