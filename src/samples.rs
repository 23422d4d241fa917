//! Synthetic input bundles, one per kind.
//!
//! Every sample is filled in enough to pass its acceptance check, which is
//! what `selftest` relies on.

use crate::types::{
    BreadcrumbItem, BuildParams, Contact, EducationItem, FaqItem, HowToStepItem,
    OpeningHoursRow, SchemaKind, SocialProfile, TicketType,
};

/// A representative input bundle for `kind`.
///
/// Unrecognized kinds get a bundle with just a `name`.
pub fn sample_params(kind: &SchemaKind) -> BuildParams {
    let params = BuildParams::new(kind.clone());

    match kind {
        SchemaKind::Article => {
            let mut params = params
                .field("articleType", "BlogPosting")
                .field("headline", "Structured data in five minutes")
                .field("description", "A quick tour of JSON-LD for search.")
                .field("authorName", "Jane Doe")
                .field("authorType", "Person")
                .field("authorUrl", "https://example.com/author/jane-doe")
                .field("publisherName", "Example Media")
                .field("publisherLogo", "https://example.com/logo.png")
                .field("datePublished", "2025-11-25")
                .field("dateModified", "2025-11-29");
            params.images = vec![
                "https://example.com/cover-16x9.jpg".into(),
                "https://example.com/cover-4x3.jpg".into(),
            ];
            params
        }
        SchemaKind::Breadcrumb => {
            let mut params = params;
            params.breadcrumbs = vec![
                crumb("Home", "https://example.com/"),
                crumb("Guides", "https://example.com/guides/"),
                crumb("Schema", "https://example.com/guides/schema/"),
            ];
            params
        }
        SchemaKind::FaqPage => {
            let mut params = params;
            params.faq_items = vec![
                FaqItem {
                    question: "What is JSON-LD?".into(),
                    answer: "A JSON serialization of linked data.".into(),
                },
                FaqItem {
                    question: "Where does it go?".into(),
                    answer: "In a script tag of type application/ld+json.".into(),
                },
            ];
            params
        }
        SchemaKind::Person => {
            let mut params = params
                .field("name", "Ada Lovelace")
                .field("jobTitle", "Mathematician")
                .field("worksFor", "Analytical Engines Ltd")
                .field("url", "https://example.com/ada")
                .field("birthDate", "1815-12-10")
                .field("addressLocality", "London")
                .field("addressCountry", "GB")
                .field("knowsLanguage", "English, French");
            params.education = vec![EducationItem {
                name: "University of London".into(),
                url: String::new(),
            }];
            params.social_profiles = vec![SocialProfile {
                platform: "Wikipedia".into(),
                url: "https://en.wikipedia.org/wiki/Ada_Lovelace".into(),
            }];
            params
        }
        SchemaKind::Product => params
            .field("name", "Trail Runner 2")
            .field("description", "Lightweight trail running shoe.")
            .field("image", "https://example.com/shoe.jpg")
            .field("brand", "Stride")
            .field("sku", "TR2-42")
            .field("offerType", "Offer")
            .field("price", "129.99")
            .field("currency", "USD")
            .field("availability", "InStock")
            .field("itemCondition", "NewCondition")
            .field("ratingValue", "4.6")
            .field("reviewCount", "89"),
        SchemaKind::Event => {
            let mut params = params
                .field("name", "Rust Meetup")
                .field("description", "Monthly talks and pizza.")
                .field("startDate", "2025-06-12")
                .field("startTime", "18:30")
                .field("endDate", "2025-06-12")
                .field("endTime", "21:00")
                .field("timezone", "America/New_York")
                .field("attendanceMode", "mixed")
                .field("eventStatus", "EventScheduled")
                .field("venueName", "Community Hall")
                .field("venueStreet", "1 Main St")
                .field("venueCity", "Springfield")
                .field("venueCountry", "US")
                .field("streamUrl", "https://example.com/live")
                .field("organizerName", "Rust Springfield");
            params.ticket_default_currency = "USD".into();
            params.ticket_types = vec![TicketType {
                name: "General".into(),
                price: "10".into(),
                availability: "InStock".into(),
                ..TicketType::default()
            }];
            params
        }
        SchemaKind::LocalBusiness => {
            let mut params = params
                .field("businessType", "Restaurant")
                .field("name", "Blue Door Bistro")
                .field("telephone", "+1-555-0100")
                .field("url", "https://bluedoor.example.com")
                .field("priceRange", "$$")
                .field("streetAddress", "12 Harbor Rd")
                .field("addressLocality", "Portland")
                .field("addressRegion", "ME")
                .field("postalCode", "04101")
                .field("addressCountry", "US")
                .field("latitude", "43.6591")
                .field("longitude", "-70.2568");
            params.opening_hours = vec![
                hours("Monday, Tuesday, Wednesday, Thursday, Friday", "11:00", "22:00"),
                hours("Saturday, Sunday", "10:00", "23:00"),
            ];
            params
        }
        SchemaKind::Organization => {
            let mut params = params
                .field("name", "Example Corp")
                .field("url", "https://example.com/")
                .field("logo", "https://example.com/logo.png")
                .field("sameAs", "https://www.linkedin.com/company/example");
            params.contacts = vec![Contact {
                contact_type: "customer service".into(),
                telephone: "+1-555-0199".into(),
                available_language: "English".into(),
                ..Contact::default()
            }];
            params
        }
        SchemaKind::JobPosting => params
            .field("title", "Backend Engineer")
            .field("description", "Build and run our ingestion services.")
            .field("datePosted", "2025-03-01")
            .field("validThrough", "2025-04-30")
            .field("employmentType", "Full time")
            .field("hiringOrganizationName", "Example Corp")
            .field("hiringOrganizationUrl", "https://example.com")
            .field("addressLocality", "Austin")
            .field("addressRegion", "TX")
            .field("addressCountry", "US")
            .field("salaryMin", "120000")
            .field("salaryMax", "150000")
            .field("salaryCurrency", "USD")
            .field("salaryUnit", "YEAR")
            .field("educationRequirements", "Bachelor's degree in computer science")
            .field("experienceRequirements", "3+ years"),
        SchemaKind::HowTo => {
            let mut params = params
                .field("name", "Brew pour-over coffee")
                .field("totalTime", "10")
                .field("estimatedCost", "2")
                .field("estimatedCostCurrency", "USD");
            params.how_to_tools = vec!["Kettle".into(), "Dripper".into()];
            params.how_to_supplies = vec!["Coffee beans".into()];
            params.how_to_steps = vec![step("Heat water to 94C."), step("Pour slowly in circles.")];
            params
        }
        SchemaKind::Recipe => params
            .field("name", "Weeknight Pancakes")
            .field("authorName", "Sam Cook")
            .field("prepTime", "10")
            .field("cookTime", "15")
            .field("recipeYield", "4 servings")
            .field("recipeIngredient", "2 eggs\n1 cup flour\n1 cup milk")
            .field("recipeInstructions", "Whisk everything.\nFry in a hot pan.")
            .field("calories", "320 calories"),
        SchemaKind::Video => {
            let mut params = params
                .field("name", "Schema markup explained")
                .field("description", "A walkthrough of JSON-LD.")
                .field("uploadDate", "2025-02-14")
                .field("contentUrl", "https://example.com/video.mp4")
                .field("viewCount", "1520");
            params.video_thumbnails = vec!["https://example.com/thumb.jpg".into()];
            params.video_minutes = "6".into();
            params.video_seconds = "30".into();
            params
        }
        SchemaKind::WebSite => params
            .field("name", "Example Docs")
            .field("url", "https://docs.example.com")
            .field(
                "searchUrlTemplate",
                "https://docs.example.com/search?q={search_term_string}",
            ),
        SchemaKind::Other(tag) => params.field("name", format!("Sample {}", tag)),
    }
}

fn crumb(name: &str, url: &str) -> BreadcrumbItem {
    BreadcrumbItem {
        name: name.into(),
        url: url.into(),
    }
}

fn hours(days: &str, opens: &str, closes: &str) -> OpeningHoursRow {
    OpeningHoursRow {
        days: days.into(),
        opens: opens.into(),
        closes: closes.into(),
    }
}

fn step(text: &str) -> HowToStepItem {
    HowToStepItem {
        text: text.into(),
        ..HowToStepItem::default()
    }
}
