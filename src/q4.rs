use crate::data::{COUNTRY, NetflixData};
use crate::fields::split_list;
use polars::prelude::*;
use rustc_hash::FxHashMap as HashMap;
use std::time::Instant;
use tracing::debug;

/// Countries by number of titles they appear on, ties by name.
pub fn top_countries(db: &NetflixData, n: usize) -> PolarsResult<Vec<(&str, u32)>> {
    let start = Instant::now();

    let mut counts: HashMap<&str, u32> = HashMap::default();
    for country in db.titles.column(COUNTRY)?.str()?.into_iter().flatten() {
        for name in split_list(country) {
            *counts.entry(name).or_default() += 1;
        }
    }

    let mut res: Vec<(&str, u32)> = counts.into_iter().collect();
    res.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    res.truncate(n);

    debug!(rows = res.len(), elapsed = ?start.elapsed(), "q4 top countries");
    Ok(res)
}

// 4.sql
// SELECT *
// FROM (
//     SELECT UNNEST(STRING_TO_ARRAY(country, ',')) AS country,
//            COUNT(*) AS total_content
//     FROM netflix
//     GROUP BY 1
// ) AS t1
// WHERE country IS NOT NULL
// ORDER BY total_content DESC
// LIMIT 5;
