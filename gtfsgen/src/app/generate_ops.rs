use super::{GtfsGenError, RunSummary};
use crate::{
    calendar::{CalendarResolver, HolidayCalendar, HolidayOccurrence, ServiceWindow},
    config::GeneratorConfig,
    feed::{archive_directory, archive_path, FeedAssembler, FeedInfo, FeedTables},
    report::{ExceptionLog, GeneratorException, ProcessingUnit},
    schedule::{DecodedSchedule, ScheduleDecoder, WorksheetSource},
    shape::ShapePathBuilder,
};
use chrono::{DateTime, Local, NaiveDate};
use kdam::tqdm;
use serde::Serialize;
use std::path::PathBuf;

/// when the run started and the date it treats as today
#[derive(Debug, Clone)]
pub struct RunContext {
    pub started: DateTime<Local>,
    pub run_date: NaiveDate,
}

impl RunContext {
    pub fn new(started: DateTime<Local>, run_date: Option<NaiveDate>) -> RunContext {
        RunContext {
            run_date: run_date.unwrap_or_else(|| started.date_naive()),
            started,
        }
    }

    /// date and hour of the run
    pub fn feed_version(&self) -> String {
        self.started.format("%Y%m%d.%-H").to_string()
    }
}

/// the service window and the configured holidays inside it
#[derive(Debug, Clone, Serialize)]
pub struct HolidayReport {
    pub service_window: ServiceWindow,
    pub holidays: Vec<HolidayOccurrence>,
}

/// the records every unit feed shares: agency, fares and feed info
pub fn static_tables(
    config: &GeneratorConfig,
    window: &ServiceWindow,
    context: &RunContext,
) -> FeedTables {
    let feed_version = config
        .feed
        .version
        .clone()
        .unwrap_or_else(|| context.feed_version());
    FeedTables {
        agency: vec![config.agency.clone()],
        fare_attributes: config.fares.fare_attributes(),
        fare_rules: config.fares.fare_rules(),
        feed_info: vec![FeedInfo {
            feed_publisher_name: config.feed.publisher_name.clone(),
            feed_publisher_url: config.feed.publisher_url.clone(),
            feed_lang: config.feed.lang.clone(),
            feed_start_date: window.start_date,
            feed_end_date: window.end_date,
            feed_version,
        }],
        ..Default::default()
    }
}

/// lists the units to process in configuration order. a workbook whose
/// worksheets cannot be listed is logged and skipped.
pub fn enumerate_units(
    config: &GeneratorConfig,
    source: &dyn WorksheetSource,
    exception_log: &mut ExceptionLog,
) -> Vec<ProcessingUnit> {
    let mut units = vec![];
    for workbook in config.workbooks.iter() {
        let worksheets = if workbook.worksheets.is_empty() {
            match source.worksheet_names(&workbook.name) {
                Ok(names) => names,
                Err(e) => {
                    exception_log.record(
                        &ProcessingUnit::new(&workbook.name, ""),
                        GeneratorException::UnitAborted(e.to_string()),
                    );
                    continue;
                }
            }
        } else {
            workbook.worksheets.clone()
        };
        for worksheet in worksheets {
            if config.ignore_sheets.contains(&worksheet) {
                log::info!("ignoring worksheet {}/{worksheet}", workbook.name);
                continue;
            }
            units.push(ProcessingUnit::new(&workbook.name, &worksheet));
        }
    }
    units
}

/// the parts of a run shared by every unit
pub struct UnitPipeline<'a> {
    config: &'a GeneratorConfig,
    resolver: CalendarResolver,
    window: ServiceWindow,
    statics: FeedTables,
    shape_builder: ShapePathBuilder,
}

impl<'a> UnitPipeline<'a> {
    pub fn new(config: &'a GeneratorConfig, context: &RunContext) -> UnitPipeline<'a> {
        let resolver = calendar_resolver(config);
        let window = resolver.service_window(
            config.feed_start_date,
            config.feed_end_date,
            context.run_date,
        );
        log::info!(
            "service window {} to {}",
            window.start_date,
            window.end_date
        );
        UnitPipeline {
            config,
            statics: static_tables(config, &window, context),
            resolver,
            window,
            shape_builder: ShapePathBuilder::new(&config.kml_root, config.distance_unit()),
        }
    }

    /// decodes one worksheet and writes its eleven files and its archive
    /// into the unit directory. record-level exceptions go to the log; an
    /// error abandons the unit.
    pub fn process(
        &self,
        unit: &ProcessingUnit,
        source: &dyn WorksheetSource,
        exception_log: &mut ExceptionLog,
    ) -> Result<PathBuf, GtfsGenError> {
        let matrix = source.worksheet(unit)?;
        let decoder = ScheduleDecoder::new(
            &matrix,
            &self.config.schema,
            &unit.workbook,
            &self.config.agency.agency_id,
            &self.config.default_route_type,
        )
        .map_err(GtfsGenError::SchemaError)?;
        let decoded = decoder.decode();
        let calendar = self.resolver.resolve(&decoded.service, &self.window);

        let mut shapes = vec![];
        for shape_id in decoded.shape_ids() {
            let (points, exceptions) = self.shape_builder.build(shape_id);
            shapes.extend(points);
            exception_log.record_all(unit, exceptions);
        }

        let DecodedSchedule {
            routes,
            trips,
            stop_times,
            stops,
            exceptions,
            ..
        } = decoded;
        exception_log.record_all(unit, exceptions);
        exception_log.record_all(unit, calendar.issues);

        let tables = FeedTables {
            calendar: vec![calendar.entry],
            calendar_dates: calendar.exceptions,
            routes,
            shapes,
            stop_times,
            stops,
            trips,
            ..self.statics.clone()
        };
        let directory = unit.output_directory(&self.config.gtfs_root);
        tables.write(&directory)?;
        archive_directory(&directory, &unit.worksheet)?;
        log::info!(
            "{unit}: {} trips, {} stop times, {} shape points, {} exception(s)",
            tables.trips.len(),
            tables.stop_times.len(),
            tables.shapes.len(),
            exception_log.entries_for(unit).count()
        );
        Ok(directory)
    }
}

/// runs every unit, then merges the successful ones into the master feed
pub fn generate(
    config: &GeneratorConfig,
    source: &dyn WorksheetSource,
    context: &RunContext,
) -> Result<RunSummary, GtfsGenError> {
    let mut exception_log =
        ExceptionLog::create(&config.report_root, &context.started).map_err(|source| {
            GtfsGenError::ReportError {
                path: config.report_root.display().to_string(),
                source,
            }
        })?;
    let pipeline = UnitPipeline::new(config, context);
    let units = enumerate_units(config, source, &mut exception_log);

    let mut unit_directories = vec![];
    let mut units_failed = 0;
    let unit_iter = tqdm!(
        units.iter(),
        total = units.len(),
        desc = "generate worksheet feeds"
    );
    for unit in unit_iter {
        match pipeline.process(unit, source, &mut exception_log) {
            Ok(directory) => unit_directories.push(directory),
            Err(e) => {
                log::error!("{unit}: {e}");
                units_failed += 1;
                exception_log.record(unit, GeneratorException::UnitAborted(e.to_string()));
            }
        }
    }
    eprintln!();

    let archive = assemble(config, &unit_directories)?;
    Ok(RunSummary {
        units_processed: unit_directories.len(),
        units_failed,
        exceptions: exception_log.len(),
        archive: Some(archive),
    })
}

/// merges the unit feeds already on disk for the configured units
pub fn merge(
    config: &GeneratorConfig,
    source: &dyn WorksheetSource,
) -> Result<RunSummary, GtfsGenError> {
    let mut exception_log = ExceptionLog::in_memory();
    let units = enumerate_units(config, source, &mut exception_log);
    let mut unit_directories = vec![];
    let mut units_failed = 0;
    for unit in units.iter() {
        let directory = unit.output_directory(&config.gtfs_root);
        if directory.is_dir() {
            unit_directories.push(directory);
        } else {
            log::warn!("{unit}: no unit feed at {}", directory.display());
            units_failed += 1;
        }
    }
    let archive = assemble(config, &unit_directories)?;
    Ok(RunSummary {
        units_processed: unit_directories.len(),
        units_failed,
        exceptions: exception_log.len(),
        archive: Some(archive),
    })
}

fn assemble(
    config: &GeneratorConfig,
    unit_directories: &[PathBuf],
) -> Result<PathBuf, GtfsGenError> {
    if unit_directories.is_empty() {
        log::warn!("no unit feeds to merge, the master feed will only hold headers");
    }
    let assembler = FeedAssembler::new(&config.gtfs_root);
    for (file, lines) in assembler.merge(unit_directories)? {
        log::debug!("{file}: {lines} lines");
    }
    assembler.package(&config.agency.agency_id)?;
    Ok(archive_path(&config.gtfs_root, &config.agency.agency_id))
}

/// the service window of a run and the configured holidays inside it, as
/// they end up in calendar_dates.txt
pub fn holiday_report(config: &GeneratorConfig, context: &RunContext) -> HolidayReport {
    let resolver = calendar_resolver(config);
    let service_window = resolver.service_window(
        config.feed_start_date,
        config.feed_end_date,
        context.run_date,
    );
    HolidayReport {
        holidays: resolver.holidays(&service_window),
        service_window,
    }
}

fn calendar_resolver(config: &GeneratorConfig) -> CalendarResolver {
    CalendarResolver::new(
        HolidayCalendar::usa_wv(),
        config.holidays.clone(),
        config.max_span_days,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::WorkbookConfig,
        feed::{Agency, GtfsFile},
        report::EXCEPTION_LOG_FILENAME,
        schedule::CsvWorksheetSource,
    };
    use std::path::Path;

    /// a worksheet with two trip columns (27, 28) and the given stops as
    /// (stop_id, lat, lon, [times])
    fn worksheet_csv(
        route_id: &str,
        shape_id: &str,
        stops: &[(&str, &str, &str, [&str; 2])],
    ) -> String {
        let mut header = vec![""; 36];
        header[10] = route_id;
        header[11] = route_id;
        header[14] = "3";
        header[18] = route_id;
        header[19] = "WK";
        header[20] = "Weekday";
        header[25] = shape_id;
        header[28] = "WK";
        for flag in header.iter_mut().take(34).skip(29) {
            *flag = "1";
        }
        let mut time_header = vec![""; 29];
        time_header[27] = "0600";
        time_header[28] = "0700";

        let mut lines = vec![
            String::from("schedule"),
            header.join(","),
            time_header.join(","),
        ];
        for (i, (stop_id, lat, lon, times)) in stops.iter().enumerate() {
            let sequence = (i + 1).to_string();
            let name = format!("{stop_id} street");
            let mut row = vec![""; 29];
            row[2] = sequence.as_str();
            row[3] = *stop_id;
            row[11] = name.as_str();
            row[13] = *lat;
            row[14] = *lon;
            row[27] = times[0];
            row[28] = times[1];
            lines.push(row.join(","));
        }
        lines.join("\n")
    }

    fn write(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("parent dir");
        }
        std::fs::write(path, contents).expect("write");
    }

    fn data_lines(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("{} unreadable: {e}", path.display()))
            .lines()
            .skip(1)
            .map(String::from)
            .collect()
    }

    fn test_config(root: &Path) -> GeneratorConfig {
        GeneratorConfig {
            gtfs_root: root.join("gtfs"),
            source_root: root.join("worksheets"),
            kml_root: root.join("kml"),
            report_root: root.join("reports"),
            holidays: vec![String::from("Christmas")],
            feed_start_date: NaiveDate::from_ymd_opt(2026, 1, 1),
            workbooks: vec![
                WorkbookConfig {
                    name: String::from("Blue"),
                    worksheets: vec![String::from("Weekday"), String::from("Broken")],
                },
                WorkbookConfig {
                    name: String::from("Red"),
                    worksheets: vec![],
                },
            ],
            agency: Agency {
                agency_id: String::from("MT"),
                agency_name: String::from("Mountain Transit"),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn write_inputs(root: &Path) {
        let worksheets = root.join("worksheets");
        write(
            &worksheets.join("Blue").join("Weekday.csv"),
            &worksheet_csv(
                "BLUE",
                "blue",
                &[
                    ("A", "39.1", "-80.1", ["6:00:00", "7:00:00"]),
                    ("B", "39.2", "-80.2", ["6:10:00", "7:10:00"]),
                ],
            ),
        );
        write(
            &worksheets.join("Blue").join("Broken.csv"),
            "title\nshort,row\n",
        );
        write(
            &worksheets.join("Red").join("Weekday.csv"),
            &worksheet_csv(
                "RED",
                "red",
                &[
                    ("A", "39.1", "-80.1", ["", "7:30:00"]),
                    ("C", "39.3", "-80.3", ["6:40:00", "7:40:00"]),
                ],
            ),
        );
        write(
            &worksheets.join("Red").join("Instructions.csv"),
            "read me\n",
        );
        write(
            &root.join("kml").join("blue.kml"),
            r#"<kml xmlns="http://www.opengis.net/kml/2.2"><Document><Folder><Placemark><LineString>
            <coordinates>-80.1,39.1,0 -80.15,39.15,0 -80.2,39.2,0</coordinates>
            </LineString></Placemark></Folder></Document></kml>"#,
        );
    }

    #[test]
    fn test_units_follow_configuration_order() {
        let dir = tempfile::tempdir().expect("temp dir");
        write_inputs(dir.path());
        let mut config = test_config(dir.path());
        config.ignore_sheets = vec![String::from("Instructions")];
        let source = CsvWorksheetSource::new(&config.source_root);
        let mut exception_log = ExceptionLog::in_memory();
        let units = enumerate_units(&config, &source, &mut exception_log);
        assert_eq!(
            units,
            vec![
                ProcessingUnit::new("Blue", "Weekday"),
                ProcessingUnit::new("Blue", "Broken"),
                ProcessingUnit::new("Red", "Weekday"),
            ]
        );
        assert!(exception_log.is_empty());
    }

    #[test]
    fn test_generate_and_merge() {
        let dir = tempfile::tempdir().expect("temp dir");
        write_inputs(dir.path());
        let mut config = test_config(dir.path());
        config.ignore_sheets = vec![String::from("Instructions")];
        let source = CsvWorksheetSource::new(&config.source_root);
        let context = RunContext::new(Local::now(), None);

        let summary = generate(&config, &source, &context).expect("run completes");
        assert_eq!(summary.units_processed, 2);
        assert_eq!(summary.units_failed, 1);
        let archive = summary.archive.clone().expect("archive");
        assert_eq!(archive, config.gtfs_root.join("MT.zip"));
        assert!(archive.is_file());
        assert!(config.gtfs_root.join("Blue").join("Weekday").join("Weekday.zip").is_file());

        let master = |file: GtfsFile| data_lines(&config.gtfs_root.join(file.filename()));
        assert_eq!(master(GtfsFile::Trips).len(), 4);
        assert_eq!(master(GtfsFile::Agency), vec!["MT,Mountain Transit,,,,"]);
        assert_eq!(master(GtfsFile::CalendarDates), vec!["WK,20261225,2"]);
        assert_eq!(
            master(GtfsFile::Calendar),
            vec!["WK,1,1,1,1,1,0,0,20260101,20261231"]
        );
        let stop_ids: Vec<String> = master(GtfsFile::Stops)
            .iter()
            .filter_map(|l| l.split(',').next().map(String::from))
            .collect();
        assert_eq!(stop_ids, vec!["A", "B", "C"]);
        assert_eq!(master(GtfsFile::Shapes).len(), 3);
        assert_eq!(
            master(GtfsFile::StopTimes)
                .iter()
                .filter(|l| l.starts_with("Red-Weekday-0600"))
                .count(),
            1
        );

        let report = std::fs::read_to_string(config.report_root.join(EXCEPTION_LOG_FILENAME))
            .expect("exception log");
        assert!(report.contains("workbook: Blue worksheet: Broken exception: unit abandoned"));
        assert!(report.contains("no source found for shape 'red'"));

        let first = master(GtfsFile::StopTimes);
        let merged = merge(&config, &source).expect("merge completes");
        assert_eq!(merged.units_processed, 2);
        assert_eq!(merged.units_failed, 1);
        assert_eq!(master(GtfsFile::StopTimes), first);
    }

    #[test]
    fn test_holiday_report() {
        let config = GeneratorConfig {
            holidays: vec![
                String::from("Christmas"),
                String::from("Independence Day"),
                String::from("July 4th"),
                String::from("Labor Day"),
            ],
            feed_start_date: NaiveDate::from_ymd_opt(2026, 6, 1),
            feed_end_date: NaiveDate::from_ymd_opt(2026, 10, 1),
            ..Default::default()
        };
        let context = RunContext::new(Local::now(), None);
        let report = holiday_report(&config, &context);
        let names: Vec<&str> = report.holidays.iter().map(|h| h.name).collect();
        assert_eq!(names, vec!["July 4th", "Labor Day"]);
        let json = serde_json::to_value(&report).expect("serializes");
        assert_eq!(json["service_window"]["end_date"], "20261001");
        assert_eq!(json["holidays"][0]["date"], "20260703");
        assert_eq!(json["holidays"][1]["date"], "20260907");
    }
}
