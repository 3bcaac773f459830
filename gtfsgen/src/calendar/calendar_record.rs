use super::date_codec::serialize_naive_date;
use chrono::NaiveDate;
use serde::Serialize;

/// calendar_dates.txt exception_type for a date on which service is removed
pub const SERVICE_REMOVED: u8 = 2;

/// a row of calendar.txt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEntry {
    pub service_id: String,
    pub monday: u8,
    pub tuesday: u8,
    pub wednesday: u8,
    pub thursday: u8,
    pub friday: u8,
    pub saturday: u8,
    pub sunday: u8,
    #[serde(serialize_with = "serialize_naive_date")]
    pub start_date: NaiveDate,
    #[serde(serialize_with = "serialize_naive_date")]
    pub end_date: NaiveDate,
}

/// a row of calendar_dates.txt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarException {
    pub service_id: String,
    #[serde(serialize_with = "serialize_naive_date")]
    pub date: NaiveDate,
    pub exception_type: u8,
}
