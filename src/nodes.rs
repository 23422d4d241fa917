//! Typed schema.org nodes nested under a root object.
//!
//! Every node serializes with its `@type` first and skips unset properties.
//! Constructors return `None` when none of the inputs are present so callers
//! never emit a node that carries nothing but its type.

use serde::Serialize;
use serde_json::{Number, Value};

use crate::normalize::{json_number, non_empty, normalize_url, to_number};

/// Serialize a node into a JSON value.
///
/// These structs hold only strings and numbers, which always serialize.
pub fn node_value<T: Serialize>(node: &T) -> Value {
    serde_json::to_value(node).unwrap_or(Value::Null)
}

fn text(value: &str) -> Option<String> {
    non_empty(value).map(String::from)
}

fn number(value: &str) -> Option<Number> {
    to_number(value).map(json_number)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
}

impl PostalAddress {
    /// Build an address from its five parts, or `None` if all are blank.
    pub fn new(street: &str, locality: &str, region: &str, postal_code: &str, country: &str) -> Option<Self> {
        let address = Self {
            kind: "PostalAddress",
            street_address: text(street),
            address_locality: text(locality),
            address_region: text(region),
            postal_code: text(postal_code),
            address_country: text(country),
        };
        address.has_any().then_some(address)
    }

    /// An address that names only its country.
    pub fn country_only(country: &str) -> Option<Self> {
        Self::new("", "", "", "", country)
    }

    fn has_any(&self) -> bool {
        self.street_address.is_some()
            || self.address_locality.is_some()
            || self.address_region.is_some()
            || self.postal_code.is_some()
            || self.address_country.is_some()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeoCoordinates {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub latitude: Number,
    pub longitude: Number,
}

impl GeoCoordinates {
    /// Both coordinates must parse, otherwise there is no geo node at all.
    pub fn new(latitude: &str, longitude: &str) -> Option<Self> {
        Some(Self {
            kind: "GeoCoordinates",
            latitude: number(latitude)?,
            longitude: number(longitude)?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRating {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub rating_value: Number,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_count: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_rating: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worst_rating: Option<Number>,
}

impl AggregateRating {
    /// Gated on a numeric rating value.
    pub fn new(rating_value: &str, review_count: &str) -> Option<Self> {
        Some(Self {
            kind: "AggregateRating",
            rating_value: number(rating_value)?,
            review_count: number(review_count),
            rating_count: None,
            best_rating: None,
            worst_rating: None,
        })
    }

    pub fn with_bounds(mut self, rating_count: &str, best: &str, worst: &str) -> Self {
        self.rating_count = number(rating_count);
        self.best_rating = number(best);
        self.worst_rating = number(worst);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitativeValue {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_text: Option<String>,
}

impl QuantitativeValue {
    /// Gated on at least one numeric bound.
    pub fn range(min: &str, max: &str, unit: &str) -> Option<Self> {
        let min_value = number(min);
        let max_value = number(max);
        if min_value.is_none() && max_value.is_none() {
            return None;
        }
        Some(Self {
            kind: "QuantitativeValue",
            min_value,
            max_value,
            unit_text: text(unit),
        })
    }
}

/// `value` is either a number or a nested [`QuantitativeValue`].
#[derive(Debug, Clone, Serialize)]
pub struct MonetaryAmount {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub currency: String,
    pub value: Value,
}

impl MonetaryAmount {
    pub fn new(currency: &str, value: Value) -> Self {
        Self {
            kind: "MonetaryAmount",
            currency: currency.trim().to_string(),
            value,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_served: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_language: Option<String>,
}

impl ContactPoint {
    /// A contact that resolves to nothing but its type is dropped.
    pub fn new(
        contact_type: &str,
        telephone: &str,
        email: &str,
        area_served: &str,
        available_language: &str,
    ) -> Option<Self> {
        let contact = Self {
            kind: "ContactPoint",
            contact_type: text(contact_type),
            telephone: text(telephone),
            email: text(email),
            area_served: text(area_served),
            available_language: text(available_language),
        };
        let has_any = contact.contact_type.is_some()
            || contact.telephone.is_some()
            || contact.email.is_some()
            || contact.area_served.is_some()
            || contact.available_language.is_some();
        has_any.then_some(contact)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHoursSpecification {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub day_of_week: Vec<&'static str>,
    pub opens: String,
    pub closes: String,
}

impl OpeningHoursSpecification {
    pub fn new(day_of_week: Vec<&'static str>, opens: impl Into<String>, closes: impl Into<String>) -> Self {
        Self {
            kind: "OpeningHoursSpecification",
            day_of_week,
            opens: opens.into(),
            closes: closes.into(),
        }
    }
}

/// A schema.org node identified by name (Organization, Person, Brand, ...).
#[derive(Debug, Clone, Serialize)]
pub struct NamedNode {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "sameAs", skip_serializing_if = "Option::is_none")]
    pub same_as: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,
}

impl NamedNode {
    /// Gated on a present name. A blank `kind` falls back to `default_kind`.
    pub fn new(kind: &str, default_kind: &str, name: &str) -> Option<Self> {
        Some(Self {
            kind: non_empty(kind).unwrap_or(default_kind).to_string(),
            name: text(name)?,
            url: None,
            same_as: None,
            logo: None,
        })
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = normalize_url(url);
        self
    }

    pub fn with_same_as(mut self, url: &str) -> Self {
        self.same_as = normalize_url(url);
        self
    }

    pub fn with_logo(mut self, logo: &str) -> Self {
        self.logo = ImageObject::new(logo);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub url: String,
}

impl ImageObject {
    pub fn new(url: &str) -> Option<Self> {
        Some(Self {
            kind: "ImageObject",
            url: normalize_url(url)?,
        })
    }
}
