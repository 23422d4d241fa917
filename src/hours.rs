//! Weekday normalization and opening-hours construction.

use chrono::NaiveTime;
use serde_json::Value;

use crate::nodes::{node_value, OpeningHoursSpecification};
use crate::normalize::non_empty;
use crate::types::OpeningHoursRow;

/// Two-letter day codes in canonical order (Monday first).
pub const DAY_CODES: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Full weekday names, indexed like [`DAY_CODES`].
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Accepted spellings. Matching is exact and case-sensitive.
const DAY_ALIASES: &[(&str, &str)] = &[
    ("Monday", "Mo"),
    ("Mon", "Mo"),
    ("Tuesday", "Tu"),
    ("Tue", "Tu"),
    ("Wednesday", "We"),
    ("Wed", "We"),
    ("Thursday", "Th"),
    ("Thu", "Th"),
    ("Friday", "Fr"),
    ("Fri", "Fr"),
    ("Saturday", "Sa"),
    ("Sat", "Sa"),
    ("Sunday", "Su"),
    ("Sun", "Su"),
];

/// Convert a comma-separated weekday list to day codes.
///
/// Unknown tokens are dropped. Order follows the input.
pub fn normalize_days_to_codes(days_raw: &str) -> Vec<&'static str> {
    days_raw
        .split(',')
        .map(str::trim)
        .filter_map(|token| {
            DAY_ALIASES
                .iter()
                .find(|(alias, _)| *alias == token)
                .map(|(_, code)| *code)
        })
        .collect()
}

/// Position of a day code in the week (Mo = 0).
pub fn day_index(code: &str) -> Option<usize> {
    DAY_CODES.iter().position(|c| *c == code)
}

/// Full weekday name for a day code.
pub fn day_name(code: &str) -> Option<&'static str> {
    day_index(code).map(|i| DAY_NAMES[i])
}

/// Deduplicate, sort by weekday and collapse consecutive runs.
///
/// `["Mo", "We", "Tu", "Fr"]` becomes `["Mo-We", "Fr"]`.
pub fn collapse_day_ranges<S: AsRef<str>>(codes: &[S]) -> Vec<String> {
    day_runs(codes)
        .into_iter()
        .map(|(start, end)| run_label(start, end))
        .collect()
}

fn run_label(start: usize, end: usize) -> String {
    if start == end {
        DAY_CODES[start].to_string()
    } else {
        format!("{}-{}", DAY_CODES[start], DAY_CODES[end])
    }
}

/// Maximal runs of consecutive weekday indices as `(start, end)` pairs.
fn day_runs<S: AsRef<str>>(codes: &[S]) -> Vec<(usize, usize)> {
    let mut indices: Vec<usize> = codes.iter().filter_map(|c| day_index(c.as_ref())).collect();
    indices.sort_unstable();
    indices.dedup();

    let mut runs: Vec<(usize, usize)> = Vec::new();
    for index in indices {
        match runs.last_mut() {
            Some((_, end)) if *end + 1 == index => *end = index,
            _ => runs.push((index, index)),
        }
    }
    runs
}

/// Both renderings of a business's opening hours.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpeningHours {
    /// Human-readable strings such as `"Mo-Fr 09:00-17:00"`.
    pub hours: Vec<String>,
    /// Structured `OpeningHoursSpecification` nodes.
    pub specification: Vec<Value>,
}

impl OpeningHours {
    pub fn is_empty(&self) -> bool {
        self.hours.is_empty() && self.specification.is_empty()
    }
}

/// Build opening hours from the repeater rows.
///
/// `open_all_week` ignores the rows and returns the fixed 24/7 result. Rows
/// without a recognizable day or a valid opens/closes pair are skipped.
pub fn build_opening_hours(rows: &[OpeningHoursRow], open_all_week: bool) -> OpeningHours {
    if open_all_week {
        return OpeningHours {
            hours: vec!["Mo-Su 00:00-23:59".to_string()],
            specification: vec![node_value(&OpeningHoursSpecification::new(
                DAY_NAMES.to_vec(),
                "00:00",
                "23:59",
            ))],
        };
    }

    let mut result = OpeningHours::default();

    for row in rows {
        let (Some(opens), Some(closes)) = (clock_time(&row.opens), clock_time(&row.closes)) else {
            continue;
        };
        let codes = normalize_days_to_codes(&row.days);

        for (start, end) in day_runs(&codes) {
            let range = run_label(start, end);
            result.hours.push(format!("{} {}-{}", range, opens, closes));
            result
                .specification
                .push(node_value(&OpeningHoursSpecification::new(
                    DAY_NAMES[start..=end].to_vec(),
                    opens.clone(),
                    closes.clone(),
                )));
        }
    }

    result
}

/// Normalize `H:MM`, `HH:MM` or `HH:MM:SS` to `HH:MM`.
fn clock_time(value: &str) -> Option<String> {
    let value = non_empty(value)?;
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
        .map(|t| t.format("%H:%M").to_string())
}
