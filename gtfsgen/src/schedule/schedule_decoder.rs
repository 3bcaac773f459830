use super::{
    normalize_departure, Route, Stop, StopTime, Trip, UnitLayout, WorksheetMatrix,
    WorksheetSchema,
};
use crate::{calendar::ServicePattern, report::GeneratorException};
use indexmap::IndexSet;
use itertools::Itertools;

/// everything decoded from one worksheet along with the record-level
/// exceptions met on the way.
#[derive(Debug, Clone, Default)]
pub struct DecodedSchedule {
    pub routes: Vec<Route>,
    pub trips: Vec<Trip>,
    pub stop_times: Vec<StopTime>,
    pub stops: Vec<Stop>,
    pub service: ServicePattern,
    pub exceptions: Vec<GeneratorException>,
}

impl DecodedSchedule {
    /// distinct, non-empty shape ids referenced by the trips, in trip order
    pub fn shape_ids(&self) -> IndexSet<&str> {
        self.trips
            .iter()
            .map(|t| t.shape_id.as_str())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// the stop row fields shared by every trip column. `location_type` is
/// `None` when the cell did not parse.
struct StopRow<'a> {
    index: usize,
    location_type: Option<i64>,
    stop_sequence: &'a str,
    stop_id: &'a str,
    stop_headsign: &'a str,
    pickup_type: &'a str,
    drop_off_type: &'a str,
    distance_traveled: &'a str,
}

/// location_type of a station grouping stops; these rows never carry times
const STATION: i64 = 1;

/// decodes the routes, trips, stop times, stops and service pattern of a
/// single worksheet.
pub struct ScheduleDecoder<'a> {
    matrix: &'a WorksheetMatrix,
    schema: &'a WorksheetSchema,
    layout: UnitLayout,
    workbook: &'a str,
    agency_id: &'a str,
    default_route_type: &'a str,
}

impl<'a> ScheduleDecoder<'a> {
    /// validates the matrix against the schema. a failure here abandons
    /// the unit.
    pub fn new(
        matrix: &'a WorksheetMatrix,
        schema: &'a WorksheetSchema,
        workbook: &'a str,
        agency_id: &'a str,
        default_route_type: &'a str,
    ) -> Result<ScheduleDecoder<'a>, GeneratorException> {
        let layout = schema.validate(matrix)?;
        Ok(ScheduleDecoder {
            matrix,
            schema,
            layout,
            workbook,
            agency_id,
            default_route_type,
        })
    }

    pub fn decode(&self) -> DecodedSchedule {
        let mut exceptions = vec![];

        let columns = self.trip_columns(&mut exceptions);
        let trips = columns
            .iter()
            .map(|column| self.decode_trip(*column, &mut exceptions))
            .collect_vec();

        let rows = self.stop_rows(&mut exceptions);
        let mut stop_times = vec![];
        for (trip, column) in trips.iter().zip(columns) {
            let (trip_stop_times, trip_exceptions) =
                self.decode_stop_times(&trip.trip_id, column, &rows);
            stop_times.extend(trip_stop_times);
            exceptions.extend(trip_exceptions);
        }

        let (stops, stop_exceptions) = self.decode_stops(&rows);
        exceptions.extend(stop_exceptions);

        let (service, service_exceptions) = self.decode_service_pattern();
        exceptions.extend(service_exceptions);

        DecodedSchedule {
            routes: vec![self.decode_route()],
            trips,
            stop_times,
            stops,
            service,
            exceptions,
        }
    }

    /// header row cell. the header row is validated to reach every column
    /// the schema names.
    fn header(&self, column: usize) -> &'a str {
        self.matrix
            .cell(self.schema.header_row, column)
            .unwrap_or_default()
    }

    fn time_header(&self, column: usize) -> &'a str {
        self.matrix
            .cell(self.schema.time_header_row, column)
            .unwrap_or_default()
    }

    pub fn trip_id(&self, column: usize) -> String {
        format!(
            "{}-{}-{}",
            self.workbook,
            self.header(self.schema.trip.trip_key),
            self.time_header(column)
        )
    }

    /// the trip columns that yield a trip. a column without a time header,
    /// or whose trip id repeats an earlier column, is reported and skipped.
    fn trip_columns(&self, exceptions: &mut Vec<GeneratorException>) -> Vec<usize> {
        let mut trip_ids = IndexSet::new();
        let mut columns = vec![];
        for column in self.layout.trip_columns.clone() {
            if self.time_header(column).is_empty() {
                exceptions.push(GeneratorException::missing_fields(
                    format!("trip in column {column}"),
                    &["time header"],
                ));
                continue;
            }
            let trip_id = self.trip_id(column);
            if trip_ids.contains(&trip_id) {
                exceptions.push(GeneratorException::StructuralError(format!(
                    "trip id '{trip_id}' of column {column} repeats an earlier column"
                )));
                continue;
            }
            trip_ids.insert(trip_id);
            columns.push(column);
        }
        columns
    }

    /// the trip of one column. every trip shares the header row attributes.
    fn decode_trip(&self, column: usize, exceptions: &mut Vec<GeneratorException>) -> Trip {
        let t = &self.schema.trip;
        let trip = Trip {
            route_id: self.header(t.route_id).to_string(),
            service_id: self.header(t.service_id).to_string(),
            trip_id: self.trip_id(column),
            trip_headsign: self.header(t.trip_headsign).to_string(),
            trip_short_name: self.header(t.trip_short_name).to_string(),
            direction_id: self.header(t.direction_id).to_string(),
            block_id: self.header(t.block_id).to_string(),
            shape_id: self.header(t.shape_id).to_string(),
            wheelchair_accessible: self.header(t.wheelchair_accessible).to_string(),
            bikes_allowed: self.header(t.bikes_allowed).to_string(),
        };
        if trip.route_id.is_empty() && trip.service_id.is_empty() && trip.trip_id.is_empty() {
            exceptions.push(GeneratorException::missing_fields(
                format!("trip in column {column}"),
                &["route_id", "service_id", "trip_id"],
            ));
        }
        trip
    }

    /// a row with an empty stop id, or no content at all, separates groups
    /// of stops and is not a stop.
    fn is_spacer_row(&self, index: usize) -> bool {
        let blank = self
            .matrix
            .row(index)
            .is_some_and(|cells| cells.iter().all(String::is_empty));
        blank || matches!(self.matrix.cell(index, self.schema.stop.stop_id), Ok(""))
    }

    /// reads the trip-independent cells of every stop row once. rows that
    /// fall short of the schema are reported and left out.
    fn stop_rows(&self, exceptions: &mut Vec<GeneratorException>) -> Vec<StopRow<'a>> {
        let mut rows = vec![];
        for index in self.layout.stop_rows.clone() {
            if self.is_spacer_row(index) {
                continue;
            }
            match self.stop_row(index, exceptions) {
                Ok(row) => rows.push(row),
                Err(e) => exceptions.push(e),
            }
        }
        rows
    }

    fn stop_row(
        &self,
        index: usize,
        exceptions: &mut Vec<GeneratorException>,
    ) -> Result<StopRow<'a>, GeneratorException> {
        let s = &self.schema.stop;
        let matrix: &'a WorksheetMatrix = self.matrix;
        let cell = |column: usize| matrix.cell(index, column);
        let location_type = cell(s.location_type)?;
        let mut row = StopRow {
            index,
            location_type: None,
            stop_sequence: cell(s.stop_sequence)?,
            stop_id: cell(s.stop_id)?,
            stop_headsign: cell(s.stop_headsign)?,
            pickup_type: cell(s.pickup_type)?,
            drop_off_type: cell(s.drop_off_type)?,
            distance_traveled: cell(s.shape_dist_traveled)?,
        };
        match parse_flag(location_type, index, s.location_type) {
            Ok(value) => row.location_type = Some(value),
            Err(e) => exceptions.push(e),
        }
        Ok(row)
    }

    /// walks the stop rows of one trip column. nothing is emitted until the
    /// first parseable time; from then on every non-station row produces a
    /// stop time, with empty times between timepoints.
    fn decode_stop_times(
        &self,
        trip_id: &str,
        column: usize,
        rows: &[StopRow<'a>],
    ) -> (Vec<StopTime>, Vec<GeneratorException>) {
        let mut stop_times = vec![];
        let mut exceptions = vec![];
        let mut trip_started = false;
        let mut previous_departure = String::new();

        for row in rows.iter().filter(|r| r.location_type != Some(STATION)) {
            let cell = match self.matrix.cell(row.index, column) {
                Ok(cell) => cell,
                Err(e) => {
                    exceptions.push(e);
                    continue;
                }
            };
            let mut departure_time = String::new();
            if !cell.is_empty() {
                match normalize_departure(cell, &previous_departure) {
                    Ok(time) => {
                        trip_started = true;
                        departure_time = time;
                    }
                    Err(e) => exceptions.push(GeneratorException::parse_error(
                        format!("trip {trip_id}, row {}, column {column}", row.index),
                        cell,
                        e,
                    )),
                }
            }
            if trip_started {
                stop_times.push(StopTime {
                    trip_id: trip_id.to_string(),
                    arrival_time: departure_time.clone(),
                    departure_time: departure_time.clone(),
                    stop_id: row.stop_id.to_string(),
                    stop_sequence: row.stop_sequence.to_string(),
                    stop_headsign: row.stop_headsign.to_string(),
                    pickup_type: row.pickup_type.to_string(),
                    drop_off_type: row.drop_off_type.to_string(),
                    distance_traveled: row.distance_traveled.to_string(),
                });
            }
            if !departure_time.is_empty() {
                previous_departure = departure_time;
            }
        }
        (stop_times, exceptions)
    }

    /// one stop per stop row with an id, a name and a location. stations
    /// are included. duplicates keep their first position.
    fn decode_stops(&self, rows: &[StopRow<'a>]) -> (Vec<Stop>, Vec<GeneratorException>) {
        let (stops, exceptions): (Vec<Stop>, Vec<GeneratorException>) = rows
            .iter()
            .filter_map(|row| {
                row.location_type
                    .map(|location_type| self.decode_stop(row.index, location_type))
            })
            .partition_result();
        let unique: IndexSet<Stop> = stops.into_iter().collect();
        (unique.into_iter().collect(), exceptions)
    }

    fn decode_stop(&self, index: usize, location_type: i64) -> Result<Stop, GeneratorException> {
        let s = &self.schema.stop;
        let cell = |column: usize| self.matrix.cell(index, column);
        let stop_id = cell(s.stop_id)?;
        let stop_name = cell(s.stop_name)?;
        let lat = cell(s.stop_lat)?;
        let lon = cell(s.stop_lon)?;
        let missing = [
            ("stop_id", stop_id),
            ("stop_name", stop_name),
            ("stop_lat", lat),
            ("stop_lon", lon),
        ]
        .into_iter()
        .filter(|(_, v)| v.is_empty())
        .map(|(k, _)| k)
        .collect_vec();
        if !missing.is_empty() {
            return Err(GeneratorException::missing_fields(
                format!("stop at row {index}"),
                &missing,
            ));
        }
        let coordinate = |value: &str, column: usize| {
            value.parse::<f64>().map_err(|e| {
                GeneratorException::parse_error(format!("row {index}, column {column}"), value, e)
            })
        };
        Ok(Stop {
            stop_id: stop_id.to_string(),
            stop_code: cell(s.stop_code)?.to_string(),
            stop_name: stop_name.to_string(),
            stop_desc: cell(s.stop_desc)?.to_string(),
            stop_lat: Stop::format_coordinate(coordinate(lat, s.stop_lat)?),
            stop_lon: Stop::format_coordinate(coordinate(lon, s.stop_lon)?),
            zone_id: cell(s.zone_id)?.to_string(),
            stop_url: cell(s.stop_url)?.to_string(),
            location_type,
            parent_station: cell(s.parent_station)?.to_string(),
            stop_timezone: cell(s.stop_timezone)?.to_string(),
            wheelchair_boarding: parse_flag(
                cell(s.wheelchair_boarding)?,
                index,
                s.wheelchair_boarding,
            )?,
        })
    }

    /// the worksheet's single route. an empty route_type falls back to the
    /// configured default.
    pub fn decode_route(&self) -> Route {
        let r = &self.schema.route;
        let route_type = match self.header(r.route_type) {
            "" => self.default_route_type,
            value => value,
        };
        Route {
            route_id: self.header(r.route_id).to_string(),
            agency_id: self.agency_id.to_string(),
            route_short_name: self.header(r.route_short_name).to_string(),
            route_long_name: self.header(r.route_long_name).to_string(),
            route_desc: self.header(r.route_desc).to_string(),
            route_type: route_type.to_string(),
            route_url: self.header(r.route_url).to_string(),
            route_color: self.header(r.route_color).to_string(),
            route_text_color: self.header(r.route_text_color).to_string(),
        }
    }

    /// service id and weekday flags of the header row
    pub fn decode_service_pattern(&self) -> (ServicePattern, Vec<GeneratorException>) {
        let c = &self.schema.calendar;
        let header_row = self.schema.header_row;
        let mut exceptions = vec![];
        let weekdays = c.weekdays.map(|column| {
            match parse_flag(self.header(column), header_row, column) {
                Ok(flag) => u8::from(flag != 0),
                Err(e) => {
                    exceptions.push(e);
                    0
                }
            }
        });
        let service = ServicePattern {
            service_id: self.header(c.service_id).to_string(),
            weekdays,
        };
        (service, exceptions)
    }
}

/// integer flag cell; an empty cell reads as 0
fn parse_flag(value: &str, row: usize, column: usize) -> Result<i64, GeneratorException> {
    if value.is_empty() {
        return Ok(0);
    }
    value.parse::<i64>().map_err(|e| {
        GeneratorException::parse_error(format!("row {row}, column {column}"), value, e)
    })
}
