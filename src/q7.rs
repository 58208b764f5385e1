use crate::data::{DIRECTOR, NetflixData};
use crate::fields::split_list;
use polars::prelude::*;
use std::time::Instant;
use tracing::debug;

/// Titles crediting `name` as one of their directors.
pub fn directed_by(db: &NetflixData, name: &str) -> PolarsResult<DataFrame> {
    let start = Instant::now();
    let mask: BooleanChunked = db
        .titles
        .column(DIRECTOR)?
        .str()?
        .into_iter()
        .map(|director| director.is_some_and(|d| split_list(d).any(|n| n == name)))
        .collect();
    let res = db.titles.filter(&mask)?;

    debug!(name, rows = res.height(), elapsed = ?start.elapsed(), "q7 directed by");
    Ok(res)
}

// 7.sql
// SELECT *
// FROM (
//     SELECT *,
//            UNNEST(STRING_TO_ARRAY(director, ',')) AS director_name
//     FROM netflix
// ) AS t
// WHERE director_name = 'Rajiv Chilaka';

#[cfg(test)]
mod test_q7 {
    use super::*;
    use crate::fixture::{Row, data, ids};

    fn directed(id: &'static str, director: Option<&'static str>) -> Row {
        Row {
            director,
            ..Row::new(id)
        }
    }

    #[test]
    fn matches_any_listed_director() -> PolarsResult<()> {
        let db = data(&[
            directed("s1", Some("Rajiv Chilaka, Someone Else")),
            directed("s2", Some("Someone Else,Rajiv Chilaka")),
            directed("s3", Some("Rajiv Chilakam")),
            directed("s4", None),
        ]);
        assert_eq!(ids(&directed_by(&db, "Rajiv Chilaka")?), ["s1", "s2"]);
        Ok(())
    }

    #[test]
    fn repeated_name_returns_title_once() -> PolarsResult<()> {
        let db = data(&[directed("s1", Some("Rajiv Chilaka, Rajiv Chilaka"))]);
        assert_eq!(directed_by(&db, "Rajiv Chilaka")?.height(), 1);
        Ok(())
    }
}
