use crate::data::{CAST, NetflixData, RELEASE_YEAR};
use chrono::{Datelike, NaiveDate};
use memchr::memmem;
use polars::prelude::*;
use std::time::Instant;
use tracing::debug;

/// Titles whose `cast` text contains `actor` and which were released in the
/// last `years` years counted from `today`.
pub fn actor_in_recent_years(
    db: &NetflixData,
    actor: &str,
    today: NaiveDate,
    years: u32,
) -> PolarsResult<DataFrame> {
    let t = &db.titles;
    let start = Instant::now();

    let after = today.year() - years as i32;
    let finder = memmem::Finder::new(actor);

    let mask: BooleanChunked = t
        .column(CAST)?
        .str()?
        .into_iter()
        .zip(t.column(RELEASE_YEAR)?.i32()?.into_iter())
        .map(|(cast, year)| match (cast, year) {
            (Some(cast), Some(year)) => year > after && finder.find(cast.as_bytes()).is_some(),
            _ => false,
        })
        .collect();
    let res = t.filter(&mask)?;

    debug!(actor, after, rows = res.height(), elapsed = ?start.elapsed(), "q13");
    Ok(res)
}

// 13.sql
// SELECT *
// FROM netflix
// WHERE cast LIKE '%Salman Khan%'
//   AND release_year > EXTRACT(YEAR FROM CURRENT_DATE) - 10;

#[cfg(test)]
mod test_q13 {
    use super::*;
    use crate::fixture::{Row, data, ids};

    fn starring(id: &'static str, cast: Option<&'static str>, release_year: i32) -> Row {
        Row {
            cast,
            release_year,
            ..Row::new(id)
        }
    }

    #[test]
    fn actor_within_window() -> PolarsResult<()> {
        let db = data(&[
            starring("s1", Some("Salman Khan, Katrina Kaif"), 2017),
            starring("s2", Some("Anushka Sharma,Salman Khan"), 2016),
            starring("s3", Some("Salman Khan"), 2015),
            starring("s4", Some("salman khan"), 2020),
            starring("s5", None, 2020),
            starring("s6", Some("Aamir Khan"), 2020),
        ]);
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(
            ids(&actor_in_recent_years(&db, "Salman Khan", today, 10)?),
            ["s1", "s2"]
        );
        Ok(())
    }
}
