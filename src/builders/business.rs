//! Local Business and Organization share address, geo, opening hours, rating
//! and profile handling; each adds its own repeaters on top.

use serde_json::{json, Value};

use super::person::same_as;
use super::{is_reserved, Draft, Fields};
use crate::hours::build_opening_hours;
use crate::nodes::{node_value, AggregateRating, ContactPoint, GeoCoordinates, PostalAddress};
use crate::normalize::{is_truthy, non_empty, normalize_url, number_value, split_lines};
use crate::types::BuildParams;

/// Inputs both kinds fold into nested properties.
const SHARED_STRUCTURAL: &[&str] = &[
    "streetAddress",
    "addressLocality",
    "addressRegion",
    "postalCode",
    "addressCountry",
    "latitude",
    "longitude",
    "open247",
    "openingHours",
    "ratingValue",
    "reviewCount",
    "sameAs",
    "logo",
    "url",
];

pub(super) fn build_local_business(params: &BuildParams) -> Draft {
    let fields = Fields::new(&params.fields);
    let mut draft = Draft::new(fields.get("businessType").unwrap_or("LocalBusiness"));
    draft.pass_through(&fields, &structural(&["businessType"]));
    add_shared(&mut draft, params, &fields);

    let departments: Vec<Value> = params
        .departments
        .iter()
        .filter_map(|department| {
            let name = non_empty(&department.name)?;
            Some(json!({
                "@type": non_empty(&department.business_type).unwrap_or("LocalBusiness"),
                "name": name,
                "telephone": non_empty(&department.telephone),
                "email": non_empty(&department.email),
            }))
        })
        .collect();
    draft.set_array("department", departments);

    draft
}

pub(super) fn build_organization(params: &BuildParams) -> Draft {
    let fields = Fields::new(&params.fields);
    let mut draft = Draft::new(fields.get("organizationType").unwrap_or("Organization"));
    draft.pass_through(&fields, &structural(&["organizationType", "@id", "organizationId", "id"]));
    add_shared(&mut draft, params, &fields);

    let id = fields
        .first(&["@id", "organizationId", "id"])
        .map(String::from)
        .or_else(|| organization_id(fields.raw("url")));
    draft.set_opt("@id", id);

    let contacts: Vec<Value> = params
        .contacts
        .iter()
        .filter_map(|c| {
            ContactPoint::new(
                &c.contact_type,
                &c.telephone,
                &c.email,
                &c.area_served,
                &c.available_language,
            )
        })
        .map(|contact| node_value(&contact))
        .collect();
    draft.set_array("contactPoint", contacts);

    for extra in &params.org_extras {
        let (Some(key), Some(value)) = (non_empty(&extra.key), non_empty(&extra.value)) else {
            continue;
        };
        if is_reserved(key) {
            continue;
        }
        let value = match key {
            "numberOfEmployees" => number_value(value).unwrap_or_else(|| Value::from(value)),
            _ => Value::from(value),
        };
        draft.set(key, value);
    }

    draft
}

fn structural(own: &[&'static str]) -> Vec<&'static str> {
    SHARED_STRUCTURAL.iter().chain(own).copied().collect()
}

/// `<url without trailing slash>#organization`
fn organization_id(url: &str) -> Option<String> {
    let url = normalize_url(url)?;
    Some(format!("{}#organization", url.trim_end_matches('/')))
}

fn add_shared(draft: &mut Draft, params: &BuildParams, fields: &Fields<'_>) {
    draft.set_opt("url", normalize_url(fields.raw("url")));
    draft.set_opt("logo", normalize_url(fields.raw("logo")));
    draft.set_node(
        "address",
        PostalAddress::new(
            fields.raw("streetAddress"),
            fields.raw("addressLocality"),
            fields.raw("addressRegion"),
            fields.raw("postalCode"),
            fields.raw("addressCountry"),
        ),
    );
    draft.set_node(
        "geo",
        GeoCoordinates::new(fields.raw("latitude"), fields.raw("longitude")),
    );

    let hours = build_opening_hours(&params.opening_hours, is_truthy(fields.raw("open247")));
    if hours.is_empty() {
        // Legacy free-text hours, one entry per line.
        let lines = split_lines(fields.raw("openingHours"));
        draft.set_list("openingHours", lines.into_iter().map(Value::from).collect());
    } else {
        draft.set_list("openingHours", hours.hours.into_iter().map(Value::from).collect());
        draft.set_array("openingHoursSpecification", hours.specification);
    }

    draft.set_node(
        "aggregateRating",
        AggregateRating::new(fields.raw("ratingValue"), fields.raw("reviewCount")),
    );
    draft.set_list("sameAs", same_as(params, fields));
}
