//! Sighting report normalization.
//!
//! Every function here is pure and total over its input: malformed values
//! come back as `None` (or as [`ShapeCategory::Other`](sighting_model::ShapeCategory::Other)),
//! never as an error, because preprocessing runs unattended over the whole
//! dataset and drops what it cannot interpret.
//!
//! - **Durations**: "about 5 min", "2-3 sec", "1 hour 30 minutes" -> seconds
//! - **Shapes**: open vocabulary -> five-way category
//! - **Timestamps**: several date/time layouts -> `NaiveDateTime`
//! - **Countries**: allow-list of the spellings that denote the United States

pub mod country;
pub mod datetime;
pub mod duration;
pub mod shape;

pub use country::{CountryAllowList, DEFAULT_ALLOWED_COUNTRIES};
pub use datetime::parse_timestamp;
pub use duration::{UNIT_CODES, UNIT_SPELLINGS, normalize_duration, unit_for_token};
pub use shape::categorize_shape;
