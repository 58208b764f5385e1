use crate::data::{COUNTRY, NetflixData, RELEASE_YEAR};
use polars::prelude::*;
use rustc_hash::FxHashMap as HashMap;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct YearShare<'a> {
    pub country: &'a str,
    pub release_year: i32,
    pub total_release: u32,
    /// Percent of the country's titles, two decimals.
    pub share: f64,
}

/// Years contributing the largest share of titles whose `country` is exactly
/// `country`. Co-productions listing several countries do not count.
pub fn top_years_for_country<'a>(
    db: &NetflixData,
    country: &'a str,
    n: usize,
) -> PolarsResult<Vec<YearShare<'a>>> {
    let t = &db.titles;
    let start = Instant::now();

    let mut per_year: HashMap<i32, u32> = HashMap::default();
    let mut total = 0u32;
    for (c, year) in t
        .column(COUNTRY)?
        .str()?
        .into_iter()
        .zip(t.column(RELEASE_YEAR)?.i32()?.into_iter())
    {
        if let (Some(c), Some(year)) = (c, year) {
            if c == country {
                *per_year.entry(year).or_default() += 1;
                total += 1;
            }
        }
    }

    let res = rank_years(country, per_year, total, n);
    debug!(rows = res.len(), elapsed = ?start.elapsed(), "q10 top years for country");
    Ok(res)
}

fn rank_years(
    country: &str,
    per_year: HashMap<i32, u32>,
    total: u32,
    n: usize,
) -> Vec<YearShare<'_>> {
    let mut res: Vec<YearShare> = per_year
        .into_iter()
        .map(|(release_year, total_release)| YearShare {
            country,
            release_year,
            total_release,
            share: (total_release as f64 / total as f64 * 10_000.0).round() / 100.0,
        })
        .collect();
    // ordered on the rounded share, so distinct counts can tie
    res.sort_unstable_by(|a, b| {
        b.share
            .total_cmp(&a.share)
            .then_with(|| a.release_year.cmp(&b.release_year))
    });
    res.truncate(n);
    res
}

// 10.sql
// SELECT country,
//        release_year,
//        COUNT(show_id) AS total_release,
//        ROUND(
//            COUNT(show_id)::numeric /
//            (SELECT COUNT(show_id) FROM netflix WHERE country = 'India')::numeric * 100, 2
//        ) AS avg_release
// FROM netflix
// WHERE country = 'India'
// GROUP BY country, release_year
// ORDER BY avg_release DESC
// LIMIT 5;
