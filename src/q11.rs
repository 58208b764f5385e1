use crate::data::{LISTED_IN, NetflixData};
use polars::prelude::*;
use std::time::Instant;
use tracing::debug;

/// Suffix match on the whole `listed_in` text, case-sensitive.
pub fn listed_in_ending_with(db: &NetflixData, suffix: &str) -> PolarsResult<DataFrame> {
    let start = Instant::now();
    let res = db
        .titles
        .clone()
        .lazy()
        .filter(col(LISTED_IN).str().ends_with(lit(suffix)))
        .collect()?;
    debug!(suffix, rows = res.height(), elapsed = ?start.elapsed(), "q11 genre suffix");
    Ok(res)
}

// 11.sql
// SELECT *
// FROM netflix
// WHERE listed_in LIKE '%Documentaries';

#[cfg(test)]
mod test_q11 {
    use super::*;
    use crate::fixture::{Row, data, ids};

    fn listed(id: &'static str, listed_in: Option<&'static str>) -> Row {
        Row {
            listed_in,
            ..Row::new(id)
        }
    }

    #[test]
    fn matches_field_suffix_only() -> PolarsResult<()> {
        let db = data(&[
            listed("s1", Some("Documentaries")),
            listed("s2", Some("International Movies, Documentaries")),
            listed("s3", Some("Documentaries, Sports Movies")),
            listed("s4", Some("Docuseries, documentaries")),
            listed("s5", None),
        ]);
        assert_eq!(
            ids(&listed_in_ending_with(&db, "Documentaries")?),
            ["s1", "s2"]
        );
        Ok(())
    }
}
