use crate::data::{DURATION, Kind, NetflixData, TYPE};
use crate::fields::leading_integer;
use polars::prelude::*;
use std::time::Instant;
use tracing::debug;

/// The movie with the most minutes; the first one in the collection wins a
/// tie. Durations that do not parse are skipped.
pub fn longest_movie(db: &NetflixData) -> PolarsResult<Option<DataFrame>> {
    let t = &db.titles;
    let start = Instant::now();

    let mut best: Option<(usize, u32)> = None;
    for (idx, (kind, duration)) in t
        .column(TYPE)?
        .str()?
        .into_iter()
        .zip(t.column(DURATION)?.str()?.into_iter())
        .enumerate()
    {
        if kind.and_then(Kind::from_label) != Some(Kind::Movie) {
            continue;
        }
        if let Some(minutes) = duration.and_then(leading_integer) {
            if best.is_none_or(|(_, max)| minutes > max) {
                best = Some((idx, minutes));
            }
        }
    }

    let res = best.map(|(idx, _)| t.slice(idx as i64, 1));
    debug!(
        rows = res.as_ref().map_or(0, |df| df.height()),
        elapsed = ?start.elapsed(),
        "q5 longest movie"
    );
    Ok(res)
}

// 5.sql
// SELECT *
// FROM netflix
// WHERE type = 'Movie'
// ORDER BY SPLIT_PART(duration, ' ', 1)::INT DESC;
