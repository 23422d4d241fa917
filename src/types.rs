//! Core types for schema building.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The JSON-LD context written on every root object.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Schema kinds with a dedicated mapper.
///
/// Any other tag is carried as [`SchemaKind::Other`] and gets the raw-field
/// fallback mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SchemaKind {
    Article,
    Breadcrumb,
    FaqPage,
    Person,
    Product,
    Event,
    LocalBusiness,
    Organization,
    JobPosting,
    HowTo,
    Recipe,
    Video,
    WebSite,
    Other(String),
}

impl SchemaKind {
    /// Every kind that has a dedicated mapper, in menu order.
    pub const ALL: [SchemaKind; 13] = [
        SchemaKind::Article,
        SchemaKind::Breadcrumb,
        SchemaKind::FaqPage,
        SchemaKind::Person,
        SchemaKind::Product,
        SchemaKind::Event,
        SchemaKind::LocalBusiness,
        SchemaKind::Organization,
        SchemaKind::JobPosting,
        SchemaKind::HowTo,
        SchemaKind::Recipe,
        SchemaKind::Video,
        SchemaKind::WebSite,
    ];

    /// Parse a type tag.
    ///
    /// Matching ignores case, spaces, hyphens and underscores, so
    /// `"Local Business"`, `"local-business"` and `"LocalBusiness"` are the
    /// same kind. Unknown tags are kept verbatim; an empty tag becomes `Thing`.
    pub fn parse(tag: &str) -> Self {
        let folded: String = tag
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match folded.as_str() {
            "article" => SchemaKind::Article,
            "breadcrumb" | "breadcrumblist" | "breadcrumbs" => SchemaKind::Breadcrumb,
            "faq" | "faqpage" => SchemaKind::FaqPage,
            "person" => SchemaKind::Person,
            "product" => SchemaKind::Product,
            "event" => SchemaKind::Event,
            "localbusiness" => SchemaKind::LocalBusiness,
            "organization" | "organisation" => SchemaKind::Organization,
            "jobposting" => SchemaKind::JobPosting,
            "howto" => SchemaKind::HowTo,
            "recipe" => SchemaKind::Recipe,
            "video" | "videoobject" => SchemaKind::Video,
            "website" | "sitelinkssearchbox" => SchemaKind::WebSite,
            "" => SchemaKind::Other("Thing".to_string()),
            _ => SchemaKind::Other(tag.trim().to_string()),
        }
    }

    /// The schema.org `@type` this kind produces by default.
    pub fn schema_type(&self) -> &str {
        match self {
            SchemaKind::Article => "Article",
            SchemaKind::Breadcrumb => "BreadcrumbList",
            SchemaKind::FaqPage => "FAQPage",
            SchemaKind::Person => "Person",
            SchemaKind::Product => "Product",
            SchemaKind::Event => "Event",
            SchemaKind::LocalBusiness => "LocalBusiness",
            SchemaKind::Organization => "Organization",
            SchemaKind::JobPosting => "JobPosting",
            SchemaKind::HowTo => "HowTo",
            SchemaKind::Recipe => "Recipe",
            SchemaKind::Video => "VideoObject",
            SchemaKind::WebSite => "WebSite",
            SchemaKind::Other(tag) => tag,
        }
    }

    /// Human-readable label used in menus and reports.
    pub fn label(&self) -> &str {
        match self {
            SchemaKind::Article => "Article",
            SchemaKind::Breadcrumb => "Breadcrumb",
            SchemaKind::FaqPage => "FAQ Page",
            SchemaKind::Person => "Person",
            SchemaKind::Product => "Product",
            SchemaKind::Event => "Event",
            SchemaKind::LocalBusiness => "Local Business",
            SchemaKind::Organization => "Organization",
            SchemaKind::JobPosting => "Job Posting",
            SchemaKind::HowTo => "How-to",
            SchemaKind::Recipe => "Recipe",
            SchemaKind::Video => "Video",
            SchemaKind::WebSite => "Website Sitelinks Searchbox",
            SchemaKind::Other(tag) => tag,
        }
    }
}

impl From<String> for SchemaKind {
    fn from(tag: String) -> Self {
        SchemaKind::parse(&tag)
    }
}

impl From<SchemaKind> for String {
    fn from(kind: SchemaKind) -> Self {
        kind.schema_type().to_string()
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.schema_type())
    }
}

/// One input bundle: the type tag, flat form fields, and the repeated-item
/// lists the form keeps as structured state.
///
/// A missing key and an empty (after trim) value mean the same thing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildParams {
    #[serde(rename = "type")]
    pub kind: SchemaKind,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub breadcrumbs: Vec<BreadcrumbItem>,
    #[serde(default, rename = "faqItemsState")]
    pub faq_items: Vec<FaqItem>,
    #[serde(default)]
    pub social_profiles: Vec<SocialProfile>,
    #[serde(default)]
    pub education: Vec<EducationItem>,
    #[serde(default)]
    pub video_thumbnails: Vec<String>,
    #[serde(default, rename = "openingHoursState")]
    pub opening_hours: Vec<OpeningHoursRow>,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub ticket_types: Vec<TicketType>,
    #[serde(default)]
    pub org_extras: Vec<ExtraProperty>,
    #[serde(default)]
    pub how_to_tools: Vec<String>,
    #[serde(default)]
    pub how_to_supplies: Vec<String>,
    #[serde(default)]
    pub how_to_steps: Vec<HowToStepItem>,
    #[serde(default)]
    pub video_minutes: String,
    #[serde(default)]
    pub video_seconds: String,
    #[serde(default)]
    pub ticket_default_currency: String,
}

impl BuildParams {
    /// Create an empty bundle for a kind.
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            fields: BTreeMap::new(),
            images: Vec::new(),
            breadcrumbs: Vec::new(),
            faq_items: Vec::new(),
            social_profiles: Vec::new(),
            education: Vec::new(),
            video_thumbnails: Vec::new(),
            opening_hours: Vec::new(),
            departments: Vec::new(),
            contacts: Vec::new(),
            ticket_types: Vec::new(),
            org_extras: Vec::new(),
            how_to_tools: Vec::new(),
            how_to_supplies: Vec::new(),
            how_to_steps: Vec::new(),
            video_minutes: String::new(),
            video_seconds: String::new(),
            ticket_default_currency: String::new(),
        }
    }

    /// Set a flat form field.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbItem {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialProfile {
    /// Display only (e.g. "LinkedIn"); the URL is what gets emitted.
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationItem {
    pub name: String,
    pub url: String,
}

/// One opening-hours row: free-text day list plus a time range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningHoursRow {
    /// Comma-separated weekday names, e.g. `"Monday, Tuesday"`.
    pub days: String,
    pub opens: String,
    pub closes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Department {
    pub name: String,
    pub business_type: String,
    pub telephone: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    pub contact_type: String,
    pub telephone: String,
    pub email: String,
    pub area_served: String,
    pub available_language: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TicketType {
    pub name: String,
    pub price: String,
    pub currency: String,
    pub availability: String,
    pub url: String,
    pub valid_from: String,
}

/// Free-form key/value grafted onto an Organization root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraProperty {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HowToStepItem {
    pub name: String,
    pub text: String,
    pub url: String,
    pub image: String,
}
