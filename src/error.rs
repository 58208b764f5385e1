use polars::prelude::PolarsError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing column `{0}`")]
    MissingColumn(&'static str),

    #[error("duplicate show_id `{0}`")]
    DuplicateId(String),

    #[error("null show_id at row {0}")]
    NullId(usize),

    #[error("title {id} has unknown type `{value}`")]
    UnknownKind { id: String, value: String },

    #[error("invalid value for {key}: {message}")]
    Config { key: &'static str, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
