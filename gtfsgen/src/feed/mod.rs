mod archive_ops;
mod feed_assembler;
mod feed_error;
mod feed_tables;
mod feed_writer;
mod gtfs_file;
mod static_records;

pub use archive_ops::{archive_directory, archive_path};
pub use feed_assembler::FeedAssembler;
pub use feed_error::FeedError;
pub use feed_tables::FeedTables;
pub use feed_writer::write_table;
pub use gtfs_file::GtfsFile;
pub use static_records::{Agency, FareAttribute, FareRule, FeedInfo};
