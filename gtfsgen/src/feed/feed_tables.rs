use super::{write_table, Agency, FareAttribute, FareRule, FeedError, FeedInfo, GtfsFile};
use crate::{
    calendar::{CalendarEntry, CalendarException},
    schedule::{Route, Stop, StopTime, Trip},
    shape::ShapePoint,
};
use std::path::Path;

/// every record of one unit's feed, held in memory until the unit is
/// complete and then written once per file
#[derive(Debug, Clone, Default)]
pub struct FeedTables {
    pub agency: Vec<Agency>,
    pub calendar: Vec<CalendarEntry>,
    pub calendar_dates: Vec<CalendarException>,
    pub fare_attributes: Vec<FareAttribute>,
    pub fare_rules: Vec<FareRule>,
    pub feed_info: Vec<FeedInfo>,
    pub routes: Vec<Route>,
    pub shapes: Vec<ShapePoint>,
    pub stop_times: Vec<StopTime>,
    pub stops: Vec<Stop>,
    pub trips: Vec<Trip>,
}

impl FeedTables {
    /// writes all eleven files into `directory`, creating it if needed
    pub fn write(&self, directory: &Path) -> Result<(), FeedError> {
        std::fs::create_dir_all(directory).map_err(|source| FeedError::io(directory, source))?;
        for file in GtfsFile::ALL {
            match file {
                GtfsFile::Agency => write_table(directory, file, &self.agency)?,
                GtfsFile::Calendar => write_table(directory, file, &self.calendar)?,
                GtfsFile::CalendarDates => write_table(directory, file, &self.calendar_dates)?,
                GtfsFile::FareAttributes => write_table(directory, file, &self.fare_attributes)?,
                GtfsFile::FareRules => write_table(directory, file, &self.fare_rules)?,
                GtfsFile::FeedInfo => write_table(directory, file, &self.feed_info)?,
                GtfsFile::Routes => write_table(directory, file, &self.routes)?,
                GtfsFile::Shapes => write_table(directory, file, &self.shapes)?,
                GtfsFile::StopTimes => write_table(directory, file, &self.stop_times)?,
                GtfsFile::Stops => write_table(directory, file, &self.stops)?,
                GtfsFile::Trips => write_table(directory, file, &self.trips)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs::read_to_string;

    #[test]
    fn test_every_file_is_written() {
        let dir = tempfile::tempdir().expect("temp dir");
        let unit_dir = dir.path().join("Blue").join("Weekday");
        let date = NaiveDate::from_ymd_opt(2026, 12, 25).expect("date");
        let tables = FeedTables {
            calendar_dates: vec![CalendarException {
                service_id: String::from("WK"),
                date,
                exception_type: 2,
            }],
            shapes: vec![ShapePoint {
                shape_id: String::from("blue"),
                lat: 39.1,
                lon: -80.25,
                sequence: 1,
                cumulative_distance: 0.0,
            }],
            ..Default::default()
        };
        tables.write(&unit_dir).expect("written");
        for file in GtfsFile::ALL {
            let contents = read_to_string(unit_dir.join(file.filename()))
                .unwrap_or_else(|e| panic!("{file} missing: {e}"));
            assert_eq!(contents.lines().next(), Some(file.header()));
            let records = match file {
                GtfsFile::CalendarDates | GtfsFile::Shapes => 1,
                _ => 0,
            };
            assert_eq!(contents.lines().count(), 1 + records);
        }
        let shapes = read_to_string(unit_dir.join("shapes.txt")).expect("shapes");
        assert_eq!(
            shapes.lines().nth(1),
            Some("blue,39.100000,-80.250000,1,0.00")
        );
        let dates_path = unit_dir.join("calendar_dates.txt");
        let dates = read_to_string(dates_path).expect("dates");
        assert_eq!(dates.lines().nth(1), Some("WK,20261225,2"));
    }
}
