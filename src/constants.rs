//! Dropdown option tables and per-kind field metadata.
//!
//! The field keys listed here are exactly the keys the mappers read from
//! [`BuildParams::fields`](crate::BuildParams). Repeated items (images,
//! breadcrumbs, FAQ pairs, ...) live in the bundle's typed lists and are not
//! listed.

use serde::Serialize;

use crate::types::SchemaKind;

pub const ARTICLE_TYPES: &[&str] = &[
    "Article",
    "BlogPosting",
    "NewsArticle",
    "TechArticle",
    "Report",
    "ScholarlyArticle",
];

pub const AUTHOR_TYPES: &[&str] = &["Person", "Organization"];

pub const OFFER_TYPES: &[&str] = &["Offer", "AggregateOffer"];

pub const AVAILABILITY: &[&str] = &[
    "InStock",
    "OutOfStock",
    "PreOrder",
    "BackOrder",
    "Discontinued",
    "LimitedAvailability",
    "OnlineOnly",
    "InStoreOnly",
    "SoldOut",
];

pub const ITEM_CONDITIONS: &[&str] = &[
    "NewCondition",
    "UsedCondition",
    "RefurbishedCondition",
    "DamagedCondition",
];

pub const CURRENCIES: &[&str] = &[
    "USD", "EUR", "GBP", "CAD", "AUD", "JPY", "INR", "CHF", "SEK", "NZD", "BRL", "MXN",
];

pub const ATTENDANCE_MODES: &[&str] = &["offline", "online", "mixed"];

pub const EVENT_STATUSES: &[&str] = &[
    "EventScheduled",
    "EventCancelled",
    "EventMovedOnline",
    "EventPostponed",
    "EventRescheduled",
];

pub const PERFORMER_TYPES: &[&str] = &["Person", "PerformingGroup", "MusicGroup", "TheaterGroup"];

pub const REPEAT_FREQUENCIES: &[&str] = &["P1D", "P1W", "P2W", "P1M", "P1Y"];

pub const BUSINESS_TYPES: &[&str] = &[
    "LocalBusiness",
    "Restaurant",
    "Store",
    "MedicalBusiness",
    "Dentist",
    "LegalService",
    "AutoRepair",
    "HealthAndBeautyBusiness",
    "HomeAndConstructionBusiness",
    "ProfessionalService",
    "FinancialService",
    "LodgingBusiness",
    "RealEstateAgent",
    "SportsActivityLocation",
];

pub const ORGANIZATION_TYPES: &[&str] = &[
    "Organization",
    "Corporation",
    "EducationalOrganization",
    "GovernmentOrganization",
    "NGO",
    "MedicalOrganization",
    "NewsMediaOrganization",
    "SportsOrganization",
];

pub const CONTACT_TYPES: &[&str] = &[
    "customer service",
    "technical support",
    "billing support",
    "sales",
    "reservations",
    "emergency",
];

pub const EMPLOYMENT_TYPES: &[&str] = &[
    "FULL_TIME",
    "PART_TIME",
    "CONTRACTOR",
    "TEMPORARY",
    "INTERN",
    "VOLUNTEER",
    "PER_DIEM",
    "OTHER",
];

pub const SALARY_UNITS: &[&str] = &["HOUR", "DAY", "WEEK", "MONTH", "YEAR"];

pub const JOB_LOCATION_TYPES: &[&str] = &["", "TELECOMMUTE"];

pub const EDUCATION_LEVELS: &[&str] = &[
    "no requirements",
    "high school",
    "associate degree",
    "bachelor degree",
    "postgraduate degree",
    "professional certificate",
];

pub const SOCIAL_PLATFORMS: &[&str] = &[
    "Facebook",
    "X",
    "Instagram",
    "LinkedIn",
    "YouTube",
    "TikTok",
    "Pinterest",
    "GitHub",
    "Wikipedia",
];

/// How a form renders a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    TextArea,
    Url,
    Number,
    Date,
    Time,
    Select,
    Checkbox,
}

/// Metadata for one flat form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "no_options")]
    pub options: &'static [&'static str],
}

impl FieldSpec {
    const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
            options: &[],
        }
    }

    const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }
}

fn no_options(options: &&[&str]) -> bool {
    options.is_empty()
}

const fn text(key: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec::new(key, label, FieldKind::Text)
}

const fn area(key: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec::new(key, label, FieldKind::TextArea)
}

const fn url(key: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec::new(key, label, FieldKind::Url)
}

const fn number(key: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec::new(key, label, FieldKind::Number)
}

const fn date(key: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec::new(key, label, FieldKind::Date)
}

const fn time(key: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec::new(key, label, FieldKind::Time)
}

const fn checkbox(key: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec::new(key, label, FieldKind::Checkbox)
}

const fn select(key: &'static str, label: &'static str, options: &'static [&'static str]) -> FieldSpec {
    FieldSpec {
        options,
        ..FieldSpec::new(key, label, FieldKind::Select)
    }
}

const ADDRESS: [FieldSpec; 5] = [
    text("streetAddress", "Street address"),
    text("addressLocality", "City"),
    text("addressRegion", "Region / state"),
    text("postalCode", "Postal code"),
    text("addressCountry", "Country"),
];

const ARTICLE_FIELDS: &[FieldSpec] = &[
    select("articleType", "Article type", ARTICLE_TYPES),
    text("headline", "Headline").required(),
    area("description", "Description"),
    text("authorName", "Author name").required(),
    select("authorType", "Author type", AUTHOR_TYPES),
    url("authorUrl", "Author URL"),
    text("publisherName", "Publisher name"),
    url("publisherLogo", "Publisher logo URL"),
    date("datePublished", "Date published").required(),
    date("dateModified", "Date modified"),
];

const BREADCRUMB_FIELDS: &[FieldSpec] = &[area("itemList", "Items (one `name|url` per line)")];

const FAQ_FIELDS: &[FieldSpec] = &[];

const PERSON_FIELDS: &[FieldSpec] = &[
    text("name", "Name").required(),
    text("jobTitle", "Job title"),
    text("worksFor", "Works for"),
    url("url", "Website"),
    url("image", "Photo URL"),
    text("email", "Email"),
    text("telephone", "Telephone"),
    date("birthDate", "Birth date"),
    ADDRESS[0],
    ADDRESS[1],
    ADDRESS[2],
    ADDRESS[3],
    ADDRESS[4],
    text("knowsLanguage", "Languages (comma separated)"),
    text("knowsAbout", "Expertise (comma separated)"),
    area("sameAs", "Profiles (one per line)"),
];

const PRODUCT_FIELDS: &[FieldSpec] = &[
    text("name", "Product name").required(),
    area("description", "Description"),
    url("image", "Image URL"),
    text("brand", "Brand"),
    text("sku", "SKU"),
    text("gtin", "GTIN"),
    select("offerType", "Offer type", OFFER_TYPES),
    number("price", "Price"),
    select("currency", "Currency", CURRENCIES),
    number("lowPrice", "Low price"),
    number("highPrice", "High price"),
    number("offerCount", "Offer count"),
    select("availability", "Availability", AVAILABILITY),
    select("itemCondition", "Condition", ITEM_CONDITIONS),
    date("priceValidUntil", "Price valid until"),
    url("offerUrl", "Offer URL"),
    text("sellerName", "Seller"),
    number("ratingValue", "Rating"),
    number("reviewCount", "Review count"),
    number("ratingCount", "Rating count"),
    number("bestRating", "Best rating"),
    number("worstRating", "Worst rating"),
    text("reviewAuthor", "Review author"),
    number("reviewRating", "Review rating"),
    area("reviewBody", "Review"),
];

const EVENT_FIELDS: &[FieldSpec] = &[
    text("name", "Event name").required(),
    area("description", "Description"),
    date("startDate", "Start date").required(),
    time("startTime", "Start time"),
    date("endDate", "End date"),
    time("endTime", "End time"),
    text("timezone", "Time zone (IANA)"),
    select("attendanceMode", "Attendance mode", ATTENDANCE_MODES),
    select("eventStatus", "Status", EVENT_STATUSES),
    text("venueName", "Venue name"),
    text("venueStreet", "Venue street"),
    text("venueCity", "Venue city"),
    text("venueRegion", "Venue region"),
    text("venuePostalCode", "Venue postal code"),
    text("venueCountry", "Venue country"),
    url("streamUrl", "Stream URL"),
    text("organizerName", "Organizer"),
    select("organizerType", "Organizer type", AUTHOR_TYPES),
    url("organizerUrl", "Organizer URL"),
    text("performerName", "Performer"),
    select("performerType", "Performer type", PERFORMER_TYPES),
    url("image", "Image URL"),
    select("currency", "Ticket currency", CURRENCIES),
    select("scheduleFrequency", "Repeats", REPEAT_FREQUENCIES),
    text("scheduleByDay", "Repeats on (days)"),
    date("scheduleStartDate", "Schedule start"),
    date("scheduleEndDate", "Schedule end"),
    time("scheduleStartTime", "Schedule start time"),
    time("scheduleEndTime", "Schedule end time"),
];

const SHARED_BUSINESS: [FieldSpec; 9] = [
    url("url", "Website"),
    url("logo", "Logo URL"),
    text("telephone", "Telephone"),
    text("email", "Email"),
    number("latitude", "Latitude"),
    number("longitude", "Longitude"),
    checkbox("open247", "Open 24/7"),
    number("ratingValue", "Rating"),
    number("reviewCount", "Review count"),
];

const LOCAL_BUSINESS_FIELDS: &[FieldSpec] = &[
    select("businessType", "Business type", BUSINESS_TYPES),
    text("name", "Business name").required(),
    area("description", "Description"),
    text("priceRange", "Price range"),
    SHARED_BUSINESS[0],
    SHARED_BUSINESS[1],
    SHARED_BUSINESS[2],
    SHARED_BUSINESS[3],
    text("streetAddress", "Street address").required(),
    ADDRESS[1],
    ADDRESS[2],
    ADDRESS[3],
    ADDRESS[4],
    SHARED_BUSINESS[4],
    SHARED_BUSINESS[5],
    SHARED_BUSINESS[6],
    area("openingHours", "Opening hours (one per line)"),
    SHARED_BUSINESS[7],
    SHARED_BUSINESS[8],
    area("sameAs", "Profiles (one per line)"),
];

const ORGANIZATION_FIELDS: &[FieldSpec] = &[
    select("organizationType", "Organization type", ORGANIZATION_TYPES),
    text("name", "Organization name").required(),
    text("legalName", "Legal name"),
    area("description", "Description"),
    url("url", "Website").required(),
    text("organizationId", "@id"),
    SHARED_BUSINESS[1],
    SHARED_BUSINESS[2],
    SHARED_BUSINESS[3],
    ADDRESS[0],
    ADDRESS[1],
    ADDRESS[2],
    ADDRESS[3],
    ADDRESS[4],
    date("foundingDate", "Founding date"),
    area("sameAs", "Profiles (one per line)"),
];

const JOB_POSTING_FIELDS: &[FieldSpec] = &[
    text("title", "Job title").required(),
    area("description", "Description").required(),
    date("datePosted", "Date posted").required(),
    date("validThrough", "Valid through"),
    text("employmentType", "Employment type (comma separated)"),
    text("hiringOrganizationName", "Hiring organization").required(),
    url("hiringOrganizationUrl", "Hiring organization URL"),
    url("hiringOrganizationLogo", "Hiring organization logo"),
    select("jobLocationType", "Location type", JOB_LOCATION_TYPES),
    ADDRESS[0],
    ADDRESS[1],
    ADDRESS[2],
    ADDRESS[3],
    ADDRESS[4],
    text("applicantCountry", "Applicant country"),
    number("salaryMin", "Salary min"),
    number("salaryMax", "Salary max"),
    select("salaryCurrency", "Salary currency", CURRENCIES),
    select("salaryUnit", "Salary per", SALARY_UNITS),
    text("educationRequirements", "Education requirements"),
    text("experienceRequirements", "Experience requirements"),
    checkbox("experienceInPlaceOfEducation", "Experience in place of education"),
    text("identifierName", "Identifier name"),
    text("identifierValue", "Identifier value"),
    checkbox("directApply", "Direct apply"),
];

const HOW_TO_FIELDS: &[FieldSpec] = &[
    text("name", "Title").required(),
    area("description", "Description"),
    url("image", "Image URL"),
    text("totalTime", "Total time (minutes or ISO 8601)"),
    number("estimatedCost", "Estimated cost"),
    select("estimatedCostCurrency", "Cost currency", CURRENCIES),
    area("tool", "Tools (comma separated)"),
    area("supply", "Supplies (comma separated)"),
    area("steps", "Steps (one per line)"),
];

const RECIPE_FIELDS: &[FieldSpec] = &[
    text("name", "Recipe name").required(),
    area("description", "Description"),
    text("authorName", "Author"),
    text("prepTime", "Prep time"),
    text("cookTime", "Cook time"),
    text("totalTime", "Total time"),
    text("recipeYield", "Yield"),
    text("recipeCategory", "Category"),
    text("recipeCuisine", "Cuisine"),
    area("recipeIngredient", "Ingredients (one per line)").required(),
    area("recipeInstructions", "Instructions (one per line)"),
    text("calories", "Calories"),
    number("ratingValue", "Rating"),
    number("reviewCount", "Review count"),
];

const VIDEO_FIELDS: &[FieldSpec] = &[
    text("name", "Title").required(),
    area("description", "Description"),
    url("thumbnailUrl", "Thumbnail URL"),
    date("uploadDate", "Upload date").required(),
    text("duration", "Duration (ISO 8601)"),
    number("durationMinutes", "Minutes"),
    number("durationSeconds", "Seconds"),
    url("contentUrl", "Content URL"),
    url("embedUrl", "Embed URL"),
    number("viewCount", "View count"),
    text("publisherName", "Publisher"),
    url("publisherLogo", "Publisher logo"),
];

const WEBSITE_FIELDS: &[FieldSpec] = &[
    text("name", "Site name").required(),
    url("url", "Site URL").required(),
    url("searchUrlTemplate", "Search URL template"),
    text("queryParam", "Query parameter"),
];

/// Flat form fields read by the mapper for `kind`.
///
/// Unrecognized kinds have no dedicated fields; every field they are given
/// is copied through.
pub fn fields_for(kind: &SchemaKind) -> &'static [FieldSpec] {
    match kind {
        SchemaKind::Article => ARTICLE_FIELDS,
        SchemaKind::Breadcrumb => BREADCRUMB_FIELDS,
        SchemaKind::FaqPage => FAQ_FIELDS,
        SchemaKind::Person => PERSON_FIELDS,
        SchemaKind::Product => PRODUCT_FIELDS,
        SchemaKind::Event => EVENT_FIELDS,
        SchemaKind::LocalBusiness => LOCAL_BUSINESS_FIELDS,
        SchemaKind::Organization => ORGANIZATION_FIELDS,
        SchemaKind::JobPosting => JOB_POSTING_FIELDS,
        SchemaKind::HowTo => HOW_TO_FIELDS,
        SchemaKind::Recipe => RECIPE_FIELDS,
        SchemaKind::Video => VIDEO_FIELDS,
        SchemaKind::WebSite => WEBSITE_FIELDS,
        SchemaKind::Other(_) => &[],
    }
}
