use crate::data::{CAST, COUNTRY, NetflixData};
use crate::fields::split_list;
use polars::prelude::*;
use rustc_hash::FxHashMap as HashMap;
use std::time::Instant;
use tracing::debug;

/// Most credited actors on titles whose `country` is exactly `country`,
/// ties by name.
pub fn top_actors_for_country<'a>(
    db: &'a NetflixData,
    country: &str,
    n: usize,
) -> PolarsResult<Vec<(&'a str, u32)>> {
    let t = &db.titles;
    let start = Instant::now();

    let mut counts: HashMap<&str, u32> = HashMap::default();
    for (c, cast) in t
        .column(COUNTRY)?
        .str()?
        .into_iter()
        .zip(t.column(CAST)?.str()?.into_iter())
    {
        if let (Some(c), Some(cast)) = (c, cast) {
            if c != country {
                continue;
            }
            for actor in split_list(cast) {
                *counts.entry(actor).or_default() += 1;
            }
        }
    }

    let mut res: Vec<(&str, u32)> = counts.into_iter().collect();
    res.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    res.truncate(n);

    debug!(country, rows = res.len(), elapsed = ?start.elapsed(), "q14 top actors");
    Ok(res)
}

// 14.sql
// SELECT UNNEST(STRING_TO_ARRAY(cast, ',')) AS actor,
//        COUNT(*)
// FROM netflix
// WHERE country = 'India'
// GROUP BY actor
// ORDER BY COUNT(*) DESC
// LIMIT 10;

#[cfg(test)]
mod test_q14 {
    use super::*;
    use crate::fixture::{Row, data};

    fn cast_of(id: &'static str, country: &'static str, cast: &'static str) -> Row {
        Row {
            country: Some(country),
            cast: Some(cast),
            ..Row::new(id)
        }
    }

    #[test]
    fn counts_actors_of_country() -> PolarsResult<()> {
        let db = data(&[
            cast_of("s1", "India", "Anupam Kher, Shah Rukh Khan"),
            cast_of("s2", "India", "Shah Rukh Khan,Naseeruddin Shah"),
            cast_of("s3", "India", "Anupam Kher, Shah Rukh Khan, Om Puri"),
            cast_of("s4", "India, United Kingdom", "Om Puri, Om Puri"),
            cast_of("s5", "Japan", "Shah Rukh Khan"),
        ]);
        assert_eq!(
            top_actors_for_country(&db, "India", 3)?,
            [("Shah Rukh Khan", 3), ("Anupam Kher", 2), ("Naseeruddin Shah", 1)]
        );
        Ok(())
    }
}
