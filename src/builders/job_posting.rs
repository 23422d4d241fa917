//! Job Posting mapping, including the free-text heuristics that turn
//! education and experience requirements into structured credentials.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{json, Value};

use super::{Draft, Fields};
use crate::nodes::{node_value, MonetaryAmount, NamedNode, PostalAddress, QuantitativeValue};
use crate::normalize::{is_truthy, non_empty, split_list};
use crate::types::BuildParams;

const STRUCTURAL: &[&str] = &[
    "hiringOrganizationName",
    "hiringOrganizationUrl",
    "hiringOrganizationLogo",
    "streetAddress",
    "addressLocality",
    "addressRegion",
    "postalCode",
    "addressCountry",
    "jobLocationType",
    "applicantCountry",
    "salaryMin",
    "salaryMax",
    "salaryCurrency",
    "salaryUnit",
    "employmentType",
    "educationRequirements",
    "experienceRequirements",
    "experienceInPlaceOfEducation",
    "identifierName",
    "identifierValue",
    "directApply",
];

const NO_REQUIREMENTS: &str = "no requirements";

pub(super) fn build(params: &BuildParams) -> Draft {
    let fields = Fields::new(&params.fields);
    let mut draft = Draft::new("JobPosting");
    draft.pass_through(&fields, STRUCTURAL);

    draft.set_node(
        "hiringOrganization",
        NamedNode::new("", "Organization", fields.raw("hiringOrganizationName")).map(|org| {
            org.with_same_as(fields.raw("hiringOrganizationUrl"))
                .with_logo(fields.raw("hiringOrganizationLogo"))
        }),
    );

    let employment: Vec<Value> = split_list(fields.raw("employmentType"))
        .iter()
        .map(|t| Value::from(t.to_uppercase().replace([' ', '-'], "_")))
        .collect();
    draft.set_list("employmentType", employment);

    add_location(&mut draft, &fields);

    if let Some(value) = QuantitativeValue::range(
        fields.raw("salaryMin"),
        fields.raw("salaryMax"),
        fields.get("salaryUnit").unwrap_or("YEAR"),
    ) {
        let salary = MonetaryAmount::new(
            fields.get("salaryCurrency").unwrap_or("USD"),
            node_value(&value),
        );
        draft.set_node("baseSalary", Some(salary));
    }

    if let Some(value) = fields.get("identifierValue") {
        draft.set(
            "identifier",
            json!({
                "@type": "PropertyValue",
                "name": fields.get("identifierName"),
                "value": value,
            }),
        );
    }

    if let Some(direct) = fields.get("directApply") {
        draft.set("directApply", is_truthy(direct));
    }

    let in_place = is_truthy(fields.raw("experienceInPlaceOfEducation"));
    let fallback = in_place.then_some(NO_REQUIREMENTS);

    draft.set_opt(
        "educationRequirements",
        fields
            .get("educationRequirements")
            .or(fallback)
            .map(education_credential),
    );
    draft.set_opt(
        "experienceRequirements",
        fields
            .get("experienceRequirements")
            .or(fallback)
            .map(experience_requirement),
    );
    if in_place {
        draft.set("experienceInPlaceOfEducation", true);
    }

    draft
}

fn add_location(draft: &mut Draft, fields: &Fields<'_>) {
    let remote = fields
        .get("jobLocationType")
        .is_some_and(|t| t.eq_ignore_ascii_case("TELECOMMUTE") || t.eq_ignore_ascii_case("remote"));

    // A remote job with a full street address would contradict itself.
    let address = if remote && fields.get("streetAddress").is_some() {
        PostalAddress::country_only(fields.raw("addressCountry"))
    } else {
        PostalAddress::new(
            fields.raw("streetAddress"),
            fields.raw("addressLocality"),
            fields.raw("addressRegion"),
            fields.raw("postalCode"),
            fields.raw("addressCountry"),
        )
    };

    if let Some(address) = address {
        draft.set(
            "jobLocation",
            json!({ "@type": "Place", "address": node_value(&address) }),
        );
    }

    if remote {
        draft.set("jobLocationType", "TELECOMMUTE");
        if let Some(country) = fields.first(&["applicantCountry", "addressCountry"]) {
            draft.set(
                "applicantLocationRequirements",
                json!({ "@type": "Country", "name": country }),
            );
        }
    }
}

/// Canonical credential categories, checked in order; first match wins.
fn education_patterns() -> &'static [(Regex, &'static str)] {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (
                r"(?i)\bno\s+(formal\s+)?(education(al)?\s+)?requirements?\b|^\s*none\s*$|\bnot\s+required\b",
                NO_REQUIREMENTS,
            ),
            (r"(?i)high\s*school|\bged\b|secondary\s+school", "high school"),
            (r"(?i)\bassociate", "associate degree"),
            (r"(?i)bachelor|undergraduate", "bachelor degree"),
            (r"(?i)post\s*-?\s*graduate|master|\bph\.?\s?d\b|doctor", "postgraduate degree"),
            (r"(?i)certificat", "professional certificate"),
        ]
        .into_iter()
        .map(|(pattern, category)| {
            (
                Regex::new(pattern).expect("education pattern is valid"),
                category,
            )
        })
        .collect()
    })
}

fn experience_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)(\d+(?:\.\d+)?)(?:\s*(?:-|–|to)\s*\d+(?:\.\d+)?)?\s*\+?\s*(years?|yrs?|months?|mos?)\b",
        )
        .expect("experience pattern is valid")
    })
}

fn conjunction_pattern() -> &'static (Regex, Regex) {
    static PATTERNS: OnceLock<(Regex, Regex)> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        (
            Regex::new(r"(?i)\bor\b").expect("or pattern is valid"),
            Regex::new(r"(?i)\band\b").expect("and pattern is valid"),
        )
    })
}

/// Map free-text education requirements to a credential.
///
/// `"no requirements"` stays a plain string, a recognized level becomes an
/// `EducationalOccupationalCredential`, anything else passes through.
pub fn education_credential(text: &str) -> Value {
    let text = text.trim();
    let category = education_patterns()
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, category)| *category);

    match category {
        Some(NO_REQUIREMENTS) => Value::from(NO_REQUIREMENTS),
        Some(category) => json!({
            "@type": "EducationalOccupationalCredential",
            "credentialCategory": category,
        }),
        None => Value::from(text),
    }
}

/// Months of experience described by free text, if any duration is named.
///
/// Each `N years`/`N months` mention (ranges count from their lower bound)
/// becomes months. Alternatives joined by "or" take the smallest; a
/// requirement joined by "and" takes the largest.
pub fn months_of_experience(text: &str) -> Option<u32> {
    let months: Vec<u32> = experience_pattern()
        .captures_iter(text)
        .filter_map(|caps| {
            let amount: f64 = caps.get(1)?.as_str().parse().ok()?;
            let unit = caps.get(2)?.as_str().to_lowercase();
            let factor = if unit.starts_with('y') { 12.0 } else { 1.0 };
            Some((amount * factor).round() as u32)
        })
        .collect();

    let (or_pattern, and_pattern) = conjunction_pattern();
    if !or_pattern.is_match(text) && and_pattern.is_match(text) {
        months.into_iter().max()
    } else {
        months.into_iter().min()
    }
}

fn experience_requirement(text: &str) -> Value {
    match months_of_experience(text) {
        Some(months) => json!({
            "@type": "OccupationalExperienceRequirements",
            "monthsOfExperience": months,
        }),
        None => Value::from(text.trim()),
    }
}
