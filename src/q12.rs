use crate::data::{DIRECTOR, NetflixData};
use polars::prelude::*;
use std::time::Instant;
use tracing::debug;

/// Titles whose `director` is null. An empty string is a value, not a null.
pub fn without_director(db: &NetflixData) -> PolarsResult<DataFrame> {
    let start = Instant::now();
    let res = db
        .titles
        .clone()
        .lazy()
        .filter(col(DIRECTOR).is_null())
        .collect()?;
    debug!(rows = res.height(), elapsed = ?start.elapsed(), "q12 without director");
    Ok(res)
}

// 12.sql
// SELECT *
// FROM netflix
// WHERE director IS NULL;
