use crate::data::{DURATION, Kind, NetflixData, TYPE};
use crate::fields::leading_integer;
use polars::prelude::*;
use std::time::Instant;
use tracing::debug;

pub fn shows_longer_than(db: &NetflixData, seasons: u32) -> PolarsResult<DataFrame> {
    let t = &db.titles;
    let start = Instant::now();

    let mask: BooleanChunked = t
        .column(TYPE)?
        .str()?
        .into_iter()
        .zip(t.column(DURATION)?.str()?.into_iter())
        .map(|(kind, duration)| {
            kind.and_then(Kind::from_label) == Some(Kind::TvShow)
                && duration
                    .and_then(leading_integer)
                    .is_some_and(|n| n > seasons)
        })
        .collect();
    let res = t.filter(&mask)?;

    debug!(rows = res.height(), elapsed = ?start.elapsed(), "q8 long-running shows");
    Ok(res)
}

// 8.sql
// SELECT *
// FROM netflix
// WHERE type = 'TV Show'
//   AND SPLIT_PART(duration, ' ', 1)::INT > 5;
