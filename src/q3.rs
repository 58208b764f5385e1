use crate::data::{NetflixData, RELEASE_YEAR};
use polars::prelude::*;
use std::time::Instant;
use tracing::debug;

pub fn released_in(db: &NetflixData, year: i32) -> PolarsResult<DataFrame> {
    let start = Instant::now();
    let res = db
        .titles
        .clone()
        .lazy()
        .filter(col(RELEASE_YEAR).eq(lit(year)))
        .collect()?;
    debug!(year, rows = res.height(), elapsed = ?start.elapsed(), "q3 released in");
    Ok(res)
}

// 3.sql
// SELECT *
// FROM netflix
// WHERE release_year = 2020;

#[cfg(test)]
mod test_q3 {
    use super::*;
    use crate::fixture::{Row, data, ids};

    #[test]
    fn filters_by_year() -> PolarsResult<()> {
        let db = data(&[
            Row::new("s1"),
            Row {
                release_year: 2019,
                ..Row::show("s2")
            },
            Row::show("s3"),
        ]);
        assert_eq!(ids(&released_in(&db, 2020)?), ["s1", "s3"]);
        assert_eq!(released_in(&db, 1999)?.height(), 0);
        Ok(())
    }
}
