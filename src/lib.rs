//! Schema Builder
//!
//! Turns flat form state into schema.org JSON-LD.
//!
//! One input bundle ([`BuildParams`]) carries a type tag, a map of string
//! form fields and a few typed repeater lists. [`build_schema_from_state`]
//! dispatches on the tag, maps the fields onto schema.org properties and
//! compacts the result. It never fails: missing or malformed input just
//! leaves properties out.
//!
//! # Example
//!
//! ```
//! use schema_builder::{build_schema_from_state, BuildParams, SchemaKind};
//!
//! let params = BuildParams::new(SchemaKind::Article)
//!     .field("articleType", "BlogPosting")
//!     .field("headline", "Hello")
//!     .field("authorName", "Jane Doe")
//!     .field("datePublished", "2025-11-25");
//!
//! let schema = build_schema_from_state(&params);
//!
//! assert_eq!(schema["@type"], "BlogPosting");
//! assert_eq!(schema["author"]["name"], "Jane Doe");
//! assert_eq!(schema["datePublished"], "2025-11-25T00:00:00Z");
//! ```
//!
//! # Output Rules
//!
//! | Rule | Effect |
//! |------|--------|
//! | Compaction | No `null`, blank string or empty array at any depth |
//! | List collapsing | 0 items: key absent; 1 item: scalar; 2+: array |
//! | Structured lists win | Repeater lists override the equivalent flat field |
//! | Unknown tags | Every present field is copied onto the root unmapped |
//!
//! # Acceptance Checks
//!
//! [`check_schema`] validates a built object against the per-kind output
//! contract from [`contract_for`]; [`self_test`] runs every kind's
//! [`sample_params`] through build and check.

mod builders;
mod check;
pub mod constants;
mod error;
mod hours;
mod loader;
mod nodes;
mod normalize;
mod samples;
mod types;

#[cfg(feature = "remote")]
mod checker;

pub use builders::{build_schema_from_state, combine_date_time, education_credential, months_of_experience};
pub use check::{check_schema, contract_for, self_test, SelfTestEntry, SelfTestReport};
pub use constants::{fields_for, FieldKind, FieldSpec};
pub use error::{CheckError, CheckIssue, LoadError, UrlCheckError};
pub use hours::{
    build_opening_hours, collapse_day_ranges, day_name, normalize_days_to_codes, OpeningHours,
    DAY_CODES, DAY_NAMES,
};
pub use loader::{is_url, load_params, load_params_auto, load_params_str};
pub use normalize::{
    compact, normalize_date, normalize_url, one_or_many, present_non_empty, split_list, to_number,
};
pub use samples::sample_params;
pub use types::{
    BreadcrumbItem, BuildParams, Contact, Department, EducationItem, ExtraProperty, FaqItem,
    HowToStepItem, OpeningHoursRow, SchemaKind, SocialProfile, TicketType, SCHEMA_CONTEXT,
};

#[cfg(feature = "remote")]
pub use checker::{
    check_urls, fetch_robots, fetch_url, CheckOptions, FetchMethod, FetchResponse, RobotsResponse,
    UrlCheckResult, UrlStatus,
};
#[cfg(feature = "remote")]
pub use loader::load_params_url;
