use crate::data::{Kind, NetflixData, TYPE};
use polars::prelude::*;
use std::time::Instant;
use tracing::debug;

pub fn type_distribution(db: &NetflixData) -> PolarsResult<Vec<(Kind, u32)>> {
    let start = Instant::now();

    let mut movies = 0;
    let mut shows = 0;
    for kind in db
        .titles
        .column(TYPE)?
        .str()?
        .into_iter()
        .flatten()
        .filter_map(Kind::from_label)
    {
        match kind {
            Kind::Movie => movies += 1,
            Kind::TvShow => shows += 1,
        }
    }

    let res: Vec<(Kind, u32)> = [(Kind::Movie, movies), (Kind::TvShow, shows)]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect();

    debug!(groups = res.len(), elapsed = ?start.elapsed(), "q1 type distribution");
    Ok(res)
}

// 1.sql
// SELECT type,
//        COUNT(*)
// FROM netflix
// GROUP BY 1;

#[cfg(test)]
mod test_q1 {
    use super::*;
    use crate::fixture::{Row, data};

    #[test]
    fn counts_sum_to_total() -> PolarsResult<()> {
        let db = data(&[
            Row::new("s1"),
            Row::show("s2"),
            Row::new("s3"),
            Row::new("s4"),
        ]);
        let res = type_distribution(&db)?;
        assert_eq!(res, [(Kind::Movie, 3), (Kind::TvShow, 1)]);
        assert_eq!(res.iter().map(|(_, n)| *n as usize).sum::<usize>(), db.len());
        Ok(())
    }

    #[test]
    fn omits_absent_kind() -> PolarsResult<()> {
        let db = data(&[Row::show("s1")]);
        assert_eq!(type_distribution(&db)?, [(Kind::TvShow, 1)]);
        Ok(())
    }
}
