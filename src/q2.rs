use crate::data::{Kind, NetflixData, RATING, TYPE};
use polars::prelude::*;
use rustc_hash::FxHashMap as HashMap;
use std::time::Instant;
use tracing::debug;

/// Rank-1 ratings per kind. Tied ratings are all returned; a null rating is
/// a group of its own.
pub fn top_rating_per_kind(db: &NetflixData) -> PolarsResult<Vec<(Kind, Option<&str>)>> {
    let t = &db.titles;
    let start = Instant::now();

    let mut counts: HashMap<(Kind, Option<&str>), u32> = HashMap::default();
    for (kind, rating) in t
        .column(TYPE)?
        .str()?
        .into_iter()
        .zip(t.column(RATING)?.str()?.into_iter())
    {
        if let Some(kind) = kind.and_then(Kind::from_label) {
            *counts.entry((kind, rating)).or_default() += 1;
        }
    }

    let mut best: HashMap<Kind, u32> = HashMap::default();
    for (&(kind, _), &count) in &counts {
        let max = best.entry(kind).or_default();
        *max = (*max).max(count);
    }

    let mut res: Vec<(Kind, Option<&str>)> = counts
        .into_iter()
        .filter(|((kind, _), count)| best.get(kind) == Some(count))
        .map(|(key, _)| key)
        .collect();
    res.sort_unstable();

    debug!(rows = res.len(), elapsed = ?start.elapsed(), "q2 top rating per kind");
    Ok(res)
}

// 2.sql
// WITH rating_counts AS (
//     SELECT type, rating, COUNT(*) AS rating_count
//     FROM netflix
//     GROUP BY type, rating
// ),
// ranked_ratings AS (
//     SELECT type, rating, rating_count,
//            RANK() OVER (PARTITION BY type ORDER BY rating_count DESC) AS rank
//     FROM rating_counts
// )
// SELECT type, rating AS most_frequent_rating
// FROM ranked_ratings
// WHERE rank = 1;
