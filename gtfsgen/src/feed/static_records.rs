use crate::calendar::date_codec::serialize_naive_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// a row of agency.txt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Agency {
    pub agency_id: String,
    pub agency_name: String,
    pub agency_url: String,
    pub agency_timezone: String,
    pub agency_lang: String,
    pub agency_phone: String,
}

/// a row of fare_attributes.txt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FareAttribute {
    pub fare_id: String,
    pub price: String,
    pub currency_type: String,
    pub payment_method: String,
    pub transfers: String,
    pub transfer_duration: String,
}

/// a row of fare_rules.txt. only the fare id is generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FareRule {
    pub fare_id: String,
    pub route_id: String,
    pub origin_id: String,
    pub destination_id: String,
    pub contains_id: String,
}

impl FareRule {
    pub fn for_fare(fare_id: &str) -> FareRule {
        FareRule {
            fare_id: fare_id.to_string(),
            ..Default::default()
        }
    }
}

/// a row of feed_info.txt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedInfo {
    pub feed_publisher_name: String,
    pub feed_publisher_url: String,
    pub feed_lang: String,
    #[serde(serialize_with = "serialize_naive_date")]
    pub feed_start_date: NaiveDate,
    #[serde(serialize_with = "serialize_naive_date")]
    pub feed_end_date: NaiveDate,
    pub feed_version: String,
}
