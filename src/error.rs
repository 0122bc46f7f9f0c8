use thiserror::Error;

#[derive(Error, Debug)]
pub enum TsvTableError {
    #[error("unsupported field {field:?}, supported fields: {supported:?}")]
    UnsupportedField {
        field: String,
        supported: Vec<String>,
    },

    #[error("field {field:?} is already set")]
    ValueConflict { field: String },

    #[error("missing fields: {missing:?}, rows can only be serialized with all of the following fields set: {required:?}")]
    MissingFields {
        missing: Vec<String>,
        required: Vec<String>,
    },

    #[error("record columns {actual:?} don't match table columns {expected:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("duplicate column {field:?}")]
    DuplicateColumn { field: String },

    #[error("IO Error")]
    IOError {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = TsvTableError> = std::result::Result<T, E>;
