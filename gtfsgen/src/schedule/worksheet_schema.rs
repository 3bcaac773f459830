use super::WorksheetMatrix;
use crate::report::GeneratorException;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// positions of every field within a worksheet. the defaults describe the
/// agency worksheet layout: a static header row with route, trip and
/// calendar attributes, a row of trip time headers, then one row per stop
/// with one time column per trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorksheetSchema {
    pub header_row: usize,
    pub time_header_row: usize,
    pub first_stop_row: usize,
    /// inclusive. defaults to the last row of the worksheet
    pub last_stop_row: Option<usize>,
    pub first_trip_column: usize,
    /// inclusive. defaults to the last cell of the time header row
    pub last_trip_column: Option<usize>,
    pub route: RouteColumns,
    pub trip: TripColumns,
    pub calendar: CalendarColumns,
    pub stop: StopColumns,
}

/// header row columns of the route attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteColumns {
    pub route_id: usize,
    pub route_short_name: usize,
    pub route_long_name: usize,
    pub route_desc: usize,
    pub route_type: usize,
    pub route_url: usize,
    pub route_color: usize,
    pub route_text_color: usize,
}

/// header row columns of the trip attributes. `trip_key` holds the
/// worksheet's part of the composite trip id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripColumns {
    pub route_id: usize,
    pub service_id: usize,
    pub trip_key: usize,
    pub trip_headsign: usize,
    pub trip_short_name: usize,
    pub direction_id: usize,
    pub block_id: usize,
    pub shape_id: usize,
    pub wheelchair_accessible: usize,
    pub bikes_allowed: usize,
}

/// header row columns of the service pattern. weekdays run monday..sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarColumns {
    pub service_id: usize,
    pub weekdays: [usize; 7],
}

/// columns of a stop row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopColumns {
    pub stop_sequence: usize,
    pub stop_id: usize,
    pub stop_code: usize,
    pub stop_name: usize,
    pub stop_desc: usize,
    pub stop_lat: usize,
    pub stop_lon: usize,
    pub zone_id: usize,
    pub stop_url: usize,
    pub location_type: usize,
    pub parent_station: usize,
    pub stop_timezone: usize,
    pub wheelchair_boarding: usize,
    pub stop_headsign: usize,
    pub pickup_type: usize,
    pub drop_off_type: usize,
    pub shape_dist_traveled: usize,
}

/// row and column ranges of one worksheet, resolved against its matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitLayout {
    pub stop_rows: Range<usize>,
    pub trip_columns: Range<usize>,
}

impl Default for WorksheetSchema {
    fn default() -> Self {
        Self {
            header_row: 1,
            time_header_row: 2,
            first_stop_row: 3,
            last_stop_row: None,
            first_trip_column: 27,
            last_trip_column: None,
            route: RouteColumns::default(),
            trip: TripColumns::default(),
            calendar: CalendarColumns::default(),
            stop: StopColumns::default(),
        }
    }
}

impl Default for RouteColumns {
    fn default() -> Self {
        Self {
            route_id: 10,
            route_short_name: 11,
            route_long_name: 12,
            route_desc: 13,
            route_type: 14,
            route_url: 15,
            route_color: 16,
            route_text_color: 17,
        }
    }
}

impl Default for TripColumns {
    fn default() -> Self {
        Self {
            route_id: 18,
            service_id: 19,
            trip_key: 20,
            trip_headsign: 21,
            trip_short_name: 22,
            direction_id: 23,
            block_id: 24,
            shape_id: 25,
            wheelchair_accessible: 26,
            bikes_allowed: 27,
        }
    }
}

impl Default for CalendarColumns {
    fn default() -> Self {
        Self {
            service_id: 28,
            weekdays: [29, 30, 31, 32, 33, 34, 35],
        }
    }
}

impl Default for StopColumns {
    fn default() -> Self {
        Self {
            stop_sequence: 2,
            stop_id: 3,
            stop_code: 10,
            stop_name: 11,
            stop_desc: 12,
            stop_lat: 13,
            stop_lon: 14,
            zone_id: 15,
            stop_url: 16,
            location_type: 17,
            parent_station: 18,
            stop_timezone: 19,
            wheelchair_boarding: 20,
            stop_headsign: 22,
            pickup_type: 23,
            drop_off_type: 24,
            shape_dist_traveled: 25,
        }
    }
}

impl WorksheetSchema {
    /// largest header row column referenced by the schema
    pub fn max_header_column(&self) -> usize {
        let r = &self.route;
        let t = &self.trip;
        [
            r.route_id,
            r.route_short_name,
            r.route_long_name,
            r.route_desc,
            r.route_type,
            r.route_url,
            r.route_color,
            r.route_text_color,
            t.route_id,
            t.service_id,
            t.trip_key,
            t.trip_headsign,
            t.trip_short_name,
            t.direction_id,
            t.block_id,
            t.shape_id,
            t.wheelchair_accessible,
            t.bikes_allowed,
            self.calendar.service_id,
        ]
        .into_iter()
        .chain(self.calendar.weekdays)
        .max()
        .unwrap_or_default()
    }

    /// checks the matrix against this schema once, before any record is
    /// decoded, and resolves the stop row and trip column ranges.
    pub fn validate(&self, matrix: &WorksheetMatrix) -> Result<UnitLayout, GeneratorException> {
        let header = matrix.row(self.header_row).ok_or_else(|| {
            GeneratorException::StructuralError(format!(
                "header row {} is missing ({} rows)",
                self.header_row,
                matrix.n_rows()
            ))
        })?;
        let header_len = header.len();
        let max_header_column = self.max_header_column();
        if header_len <= max_header_column {
            return Err(GeneratorException::StructuralError(format!(
                "header row {} has {header_len} cells, expected at least {}",
                self.header_row,
                max_header_column + 1
            )));
        }
        let time_header = matrix.row(self.time_header_row).ok_or_else(|| {
            GeneratorException::StructuralError(format!(
                "time header row {} is missing ({} rows)",
                self.time_header_row,
                matrix.n_rows()
            ))
        })?;
        let time_header_len = time_header.len();

        // without a configured end, trips end at the last labelled column
        let last_trip_column = match self.last_trip_column {
            Some(column) if column >= time_header_len => {
                return Err(GeneratorException::StructuralError(format!(
                    "last trip column {column} is outside time header row {} ({time_header_len} cells)",
                    self.time_header_row
                )))
            }
            Some(column) => column,
            None => time_header
                .iter()
                .rposition(|cell| !cell.is_empty())
                .unwrap_or_default(),
        };
        if time_header_len <= self.first_trip_column || last_trip_column < self.first_trip_column {
            return Err(GeneratorException::StructuralError(format!(
                "no trip columns between {} and {last_trip_column}",
                self.first_trip_column
            )));
        }

        let stop_end = match self.last_stop_row {
            Some(row) => (row + 1).min(matrix.n_rows()),
            None => matrix.n_rows(),
        };
        let stop_rows = self.first_stop_row..stop_end.max(self.first_stop_row);
        if stop_rows.is_empty() {
            log::warn!(
            "worksheet has no stop rows from row {}",
            self.first_stop_row
        );
        }

        Ok(UnitLayout {
            stop_rows,
            trip_columns: self.first_trip_column..last_trip_column + 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(header_len: usize, time_header_len: usize, stop_rows: usize) -> WorksheetMatrix {
        let mut rows = vec![vec![String::new(); 4]];
        rows.push(vec![String::new(); header_len]);
        rows.push(vec![String::from("0700"); time_header_len]);
        for _ in 0..stop_rows {
            rows.push(vec![String::new(); time_header_len]);
        }
        WorksheetMatrix::new(rows)
    }

    #[test]
    fn test_default_layout() {
        let schema = WorksheetSchema::default();
        assert_eq!(schema.max_header_column(), 35);
        let layout = schema.validate(&matrix(36, 30, 5)).expect("valid");
        assert_eq!(layout.stop_rows, 3..8);
        assert_eq!(layout.trip_columns, 27..30);
    }

    #[test]
    fn test_explicit_ranges_are_bounded() {
        let schema = WorksheetSchema {
            last_stop_row: Some(4),
            last_trip_column: Some(28),
            ..Default::default()
        };
        let layout = schema.validate(&matrix(36, 30, 5)).expect("valid");
        assert_eq!(layout.stop_rows, 3..5);
        assert_eq!(layout.trip_columns, 27..29);
    }

    #[test]
    fn test_trailing_empty_time_headers_are_not_trip_columns() {
        let mut rows = vec![vec![String::new(); 4], vec![String::new(); 36]];
        let mut time_header = vec![String::new(); 40];
        time_header[27] = String::from("0600");
        time_header[28] = String::from("0700");
        rows.push(time_header);
        rows.push(vec![String::new(); 40]);
        let layout = WorksheetSchema::default()
            .validate(&WorksheetMatrix::new(rows))
            .expect("valid");
        assert_eq!(layout.trip_columns, 27..29);
    }

    #[test]
    fn test_unlabelled_trip_columns_are_rejected() {
        let mut rows = vec![vec![String::new(); 4], vec![String::new(); 36]];
        rows.push(vec![String::new(); 40]);
        let result = WorksheetSchema::default().validate(&WorksheetMatrix::new(rows));
        assert!(matches!(
            result,
            Err(GeneratorException::StructuralError(_))
        ));
    }

    #[test]
    fn test_short_header_row_is_rejected() {
        let schema = WorksheetSchema::default();
        let result = schema.validate(&matrix(30, 30, 5));
        assert!(matches!(
            result,
            Err(GeneratorException::StructuralError(_))
        ));
    }

    #[test]
    fn test_missing_trip_columns_are_rejected() {
        let schema = WorksheetSchema::default();
        assert!(schema.validate(&matrix(36, 27, 5)).is_err());
        let schema = WorksheetSchema {
            last_trip_column: Some(40),
            ..Default::default()
        };
        assert!(schema.validate(&matrix(36, 30, 5)).is_err());
    }

    #[test]
    fn test_missing_rows_are_rejected() {
        let schema = WorksheetSchema::default();
        let one_row = WorksheetMatrix::from(vec![vec!["title"]]);
        assert!(schema.validate(&one_row).is_err());
    }
}
