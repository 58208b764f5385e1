use crate::error::{Error, Result};
use polars::prelude::*;
use rustc_hash::FxHashSet as HashSet;
use std::fmt;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

// CREATE TABLE netflix (
//     show_id      VARCHAR(5),
//     type         VARCHAR(10),
//     title        VARCHAR(150),
//     director     VARCHAR(208),
//     cast         VARCHAR(1000),
//     country      VARCHAR(150),
//     date_added   VARCHAR(50),
//     release_year INT,
//     rating       VARCHAR(10),
//     duration     VARCHAR(15),
//     listed_in    VARCHAR(100),
//     description  VARCHAR(250)
// );

pub const SHOW_ID: &str = "show_id";
pub const TYPE: &str = "type";
pub const TITLE: &str = "title";
pub const DIRECTOR: &str = "director";
pub const CAST: &str = "cast";
pub const COUNTRY: &str = "country";
pub const DATE_ADDED: &str = "date_added";
pub const RELEASE_YEAR: &str = "release_year";
pub const RATING: &str = "rating";
pub const DURATION: &str = "duration";
pub const LISTED_IN: &str = "listed_in";
pub const DESCRIPTION: &str = "description";

/// Columns in file order.
pub const COLUMNS: [&str; 12] = [
    SHOW_ID,
    TYPE,
    TITLE,
    DIRECTOR,
    CAST,
    COUNTRY,
    DATE_ADDED,
    RELEASE_YEAR,
    RATING,
    DURATION,
    LISTED_IN,
    DESCRIPTION,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Movie,
    TvShow,
}

impl Kind {
    pub fn label(self) -> &'static str {
        match self {
            Kind::Movie => "Movie",
            Kind::TvShow => "TV Show",
        }
    }

    pub fn from_label(label: &str) -> Option<Kind> {
        match label {
            "Movie" => Some(Kind::Movie),
            "TV Show" => Some(Kind::TvShow),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The title collection. Queries only ever borrow it.
pub struct NetflixData {
    pub titles: DataFrame,
}

fn schema() -> Schema {
    let mut schema = Schema::with_capacity(COLUMNS.len());
    for name in COLUMNS {
        let dtype = if name == RELEASE_YEAR {
            DataType::Int32
        } else {
            DataType::String
        };
        schema.with_column(name.into(), dtype);
    }
    schema
}

impl NetflixData {
    pub fn new(titles: DataFrame) -> Result<Self> {
        for name in COLUMNS {
            let column = titles
                .column(name)
                .map_err(|_| Error::MissingColumn(name))?;
            if name == RELEASE_YEAR {
                column.i32()?;
            } else {
                column.str()?;
            }
        }

        let mut seen: HashSet<&str> = HashSet::default();
        for (row, (id, kind)) in titles
            .column(SHOW_ID)?
            .str()?
            .into_iter()
            .zip(titles.column(TYPE)?.str()?.into_iter())
            .enumerate()
        {
            let id = id.ok_or(Error::NullId(row))?;
            if !seen.insert(id) {
                return Err(Error::DuplicateId(id.to_string()));
            }
            if kind.and_then(Kind::from_label).is_none() {
                return Err(Error::UnknownKind {
                    id: id.to_string(),
                    value: kind.unwrap_or_default().to_string(),
                });
            }
        }

        Ok(NetflixData { titles })
    }

    /// Reads `netflix_titles.csv`, or a Parquet export of it when the path
    /// ends in `.parquet`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let start = Instant::now();

        let mut titles = if path.extension().is_some_and(|ext| ext == "parquet") {
            ParquetReader::new(File::open(path)?).finish()?
        } else {
            CsvReadOptions::default()
                .with_has_header(true)
                .with_schema(Some(Arc::new(schema())))
                .try_into_reader_with_file_path(Some(path.to_path_buf()))?
                .finish()?
        };

        // parquet exports usually carry release_year as Int64
        if let Ok(year) = titles.column(RELEASE_YEAR) {
            let year = year.cast(&DataType::Int32)?;
            titles.with_column(year)?;
        }

        let data = NetflixData::new(titles)?;
        info!(
            path = %path.display(),
            rows = data.len(),
            elapsed = ?start.elapsed(),
            "loaded titles"
        );
        Ok(data)
    }

    pub fn len(&self) -> usize {
        self.titles.height()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.height() == 0
    }
}
