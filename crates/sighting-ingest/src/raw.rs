//! Raw report rows as read from the source file.

/// One sighting exactly as ingested.
///
/// Every field is optional text: a `None` is a null cell or an absent
/// optional column. Nothing here has been validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawReport {
    pub summary: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub date_time: Option<String>,
    pub shape: Option<String>,
    pub duration: Option<String>,
    pub city_latitude: Option<String>,
    pub city_longitude: Option<String>,
    pub text: Option<String>,
    pub polarity: Option<String>,
}
