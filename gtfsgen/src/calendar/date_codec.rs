//! serde codecs for dates written in GTFS yyyymmdd format, both in feed
//! files and in the run configuration.
use chrono::NaiveDate;
use serde::{de::Error, Deserialize, Deserializer, Serializer};

pub const GTFS_DATE_FORMAT: &str = "%Y%m%d";

pub fn format_date(date: &NaiveDate) -> String {
    date.format(GTFS_DATE_FORMAT).to_string()
}

pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str.trim(), GTFS_DATE_FORMAT)
}

pub fn serialize_naive_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_date(date))
}

pub fn deserialize_naive_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let date_str: String = String::deserialize(deserializer)?;
    parse_date(&date_str).map_err(|e| D::Error::custom(format!("Invalid date format: {e}")))
}

/// accepts a missing value or an empty string as no date
pub fn deserialize_optional_naive_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let date_str: Option<String> = Option::deserialize(deserializer)?;
    match date_str {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_date(&s)
            .map(Some)
            .map_err(|e| D::Error::custom(format!("Invalid date format: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Dated {
        #[serde(
            serialize_with = "serialize_naive_date",
            deserialize_with = "deserialize_naive_date"
        )]
        date: NaiveDate,
        #[serde(default, deserialize_with = "deserialize_optional_naive_date")]
        until: Option<NaiveDate>,
    }

    #[test]
    fn test_gtfs_dates_in_json() {
        let parsed: Dated =
            serde_json::from_str(r#"{"date": "20260704", "until": ""}"#).expect("valid");
        assert_eq!(
            parsed.date,
            NaiveDate::from_ymd_opt(2026, 7, 4).expect("date")
        );
        assert_eq!(parsed.until, None);

        let parsed: Dated = serde_json::from_str(r#"{"date": "20260704"}"#).expect("valid");
        assert_eq!(parsed.until, None);

        let written = serde_json::to_string(&parsed).expect("serializes");
        assert_eq!(written, r#"{"date":"20260704","until":null}"#);

        let invalid = serde_json::from_str::<Dated>(r#"{"date": "07-04-2026"}"#);
        assert!(invalid.is_err());
    }
}
