use std::num::NonZeroU64;

use chrono::NaiveDate;
use sighting_model::{CleanedReport, ShapeCategory, SightingTable};

/// A report at `year-month-01 hour:00` lasting `seconds`.
pub fn report(year: i32, month: u32, hour: u32, seconds: u64) -> CleanedReport {
    CleanedReport {
        date_time: NaiveDate::from_ymd_opt(year, month, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap(),
        duration_seconds: NonZeroU64::new(seconds).unwrap(),
        shape: ShapeCategory::Light,
        summary: "Bright light".to_string(),
        city: "Phoenix".to_string(),
        state: "AZ".to_string(),
        city_latitude: 33.45,
        city_longitude: -112.07,
        text: None,
        polarity: None,
    }
}

pub fn table(reports: Vec<CleanedReport>) -> SightingTable {
    SightingTable::new(reports)
}
