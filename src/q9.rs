use crate::data::{LISTED_IN, NetflixData};
use crate::fields::split_list;
use polars::prelude::*;
use std::time::Instant;
use tracing::debug;
use rustc_hash::FxHashMap as HashMap;

/// Occurrences of every genre in `listed_in`, most common first.
pub fn genre_counts(db: &NetflixData) -> PolarsResult<Vec<(&str, u32)>> {
    let start = Instant::now();

    let mut counts: HashMap<&str, u32> = HashMap::default();
    for listed_in in db.titles.column(LISTED_IN)?.str()?.into_iter().flatten() {
        for genre in split_list(listed_in) {
            *counts.entry(genre).or_default() += 1;
        }
    }

    let mut res: Vec<(&str, u32)> = counts.into_iter().collect();
    res.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    debug!(genres = res.len(), elapsed = ?start.elapsed(), "q9 genre counts");
    Ok(res)
}

// 9.sql
// SELECT UNNEST(STRING_TO_ARRAY(listed_in, ',')) AS genre,
//        COUNT(*) AS total_content
// FROM netflix
// GROUP BY 1;
