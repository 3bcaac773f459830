//! midnight rollover for worksheet time cells. worksheets write times on a
//! 24-hour clock, so a trip that runs past midnight shows hours such as `0`
//! or `1` after a `23`. GTFS instead requires hours past 24 for service that
//! belongs to the previous service day.

/// which side of midnight an hour token falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourBucket {
    /// `1`-`9`, `01`-`09`, `10`-`23`
    PreMidnight,
    /// `0`, `00`, `24`-`36`
    PostMidnight,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DepartureTimeError {
    #[error("expected H:MM:SS but found {0} token(s)")]
    TokenCount(usize),
    #[error("hour '{0}' is not within 0-36")]
    InvalidHour(String),
    #[error("minutes or seconds '{0}' are not numeric")]
    InvalidMinuteSecond(String),
}

impl HourBucket {
    /// classifies a raw hour token. tokens of more than two digits, or past
    /// 36, belong to neither bucket.
    pub fn classify(token: &str) -> Option<HourBucket> {
        if token.is_empty() || token.len() > 2 || !token.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        match token.parse::<u32>().ok()? {
            0 => Some(HourBucket::PostMidnight),
            1..=23 => Some(HourBucket::PreMidnight),
            24..=36 => Some(HourBucket::PostMidnight),
            _ => None,
        }
    }

    /// bucket of an already-normalized departure time, using its hour token.
    /// an empty or unrecognized previous departure counts as pre-midnight.
    fn of_departure(departure: &str) -> Option<HourBucket> {
        departure.split(':').next().and_then(HourBucket::classify)
    }
}

/// normalizes one non-empty time cell given the departure previously
/// computed for the same trip.
///
/// - a pre-midnight hour following a post-midnight departure becomes hour+24
/// - any other pre-midnight hour is written as a plain integer
/// - `0` and `00` become `24`
/// - post-midnight hours of 24 and above are left unchanged
pub fn normalize_departure(
    cell: &str,
    previous_departure: &str,
) -> Result<String, DepartureTimeError> {
    let tokens: Vec<&str> = cell.trim().split(':').collect();
    let [hour, minute, second] = tokens[..] else {
        return Err(DepartureTimeError::TokenCount(tokens.len()));
    };
    for token in [minute, second] {
        if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
            return Err(DepartureTimeError::InvalidMinuteSecond(format!(
                "{minute}:{second}"
            )));
        }
    }
    let bucket = HourBucket::classify(hour)
        .ok_or_else(|| DepartureTimeError::InvalidHour(hour.to_string()))?;
    let value: u32 = hour
        .parse()
        .map_err(|_| DepartureTimeError::InvalidHour(hour.to_string()))?;

    let normalized = match bucket {
        HourBucket::PreMidnight => {
            let previous = HourBucket::of_departure(previous_departure);
            if previous == Some(HourBucket::PostMidnight) {
                format!("{}:{minute}:{second}", value + 24)
            } else {
                format!("{value}:{minute}:{second}")
            }
        }
        HourBucket::PostMidnight if value == 0 => format!("24:{minute}:{second}"),
        HourBucket::PostMidnight => format!("{hour}:{minute}:{second}"),
    };
    Ok(normalized)
}
