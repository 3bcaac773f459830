/// record-level problems found while decoding a unit. none of these stop
/// the unit; they are collected next to the records that did decode and
/// written to the exception log.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeneratorException {
    #[error("unable to parse '{value}' at {location}: {msg}")]
    ParseError {
        location: String,
        value: String,
        msg: String,
    },
    #[error("{record} is missing required field(s): {fields}")]
    MissingRequiredField { record: String, fields: String },
    #[error("no source found for shape '{shape_id}' under {directory}")]
    MissingSource { shape_id: String, directory: String },
    #[error("worksheet structure error: {0}")]
    StructuralError(String),
    #[error("unit abandoned: {0}")]
    UnitAborted(String),
}

impl GeneratorException {
    pub fn parse_error(location: impl Into<String>, value: &str, msg: impl ToString) -> Self {
        GeneratorException::ParseError {
            location: location.into(),
            value: value.to_string(),
            msg: msg.to_string(),
        }
    }

    pub fn missing_fields(record: impl Into<String>, fields: &[&str]) -> Self {
        GeneratorException::MissingRequiredField {
            record: record.into(),
            fields: fields.join(", "),
        }
    }
}
