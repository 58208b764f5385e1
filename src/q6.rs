use crate::data::{DATE_ADDED, NetflixData};
use crate::fields::parse_date_added;
use chrono::{Months, NaiveDate};
use polars::prelude::*;
use std::time::Instant;
use tracing::debug;

/// Titles added on or after `today` minus `years`. Rows whose `date_added`
/// is missing or unparsable are left out.
pub fn recently_added(db: &NetflixData, today: NaiveDate, years: u32) -> PolarsResult<DataFrame> {
    let start = Instant::now();
    let cutoff = today
        .checked_sub_months(Months::new(years.saturating_mul(12)))
        .unwrap_or(NaiveDate::MIN);

    let mask: BooleanChunked = db
        .titles
        .column(DATE_ADDED)?
        .str()?
        .into_iter()
        .map(|added| added.and_then(parse_date_added).is_some_and(|d| d >= cutoff))
        .collect();
    let res = db.titles.filter(&mask)?;

    debug!(%cutoff, rows = res.height(), elapsed = ?start.elapsed(), "q6 recently added");
    Ok(res)
}

// 6.sql
// SELECT *
// FROM netflix
// WHERE TO_DATE(date_added, 'Month DD, YYYY') >= CURRENT_DATE - INTERVAL '5 years';
