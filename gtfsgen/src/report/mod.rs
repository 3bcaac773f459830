mod exception_log;
mod generator_exception;
mod processing_unit;

pub use exception_log::{ExceptionEntry, ExceptionLog, EXCEPTION_LOG_FILENAME};
pub use generator_exception::GeneratorException;
pub use processing_unit::ProcessingUnit;
