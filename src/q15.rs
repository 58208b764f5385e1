use crate::data::{DESCRIPTION, NetflixData};
use polars::prelude::*;
use regex::{Regex, RegexBuilder};
use std::fmt;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Bad,
    Good,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Bad => "Bad",
            Category::Good => "Good",
        })
    }
}

fn keyword_matcher(keywords: &[String]) -> PolarsResult<Option<Regex>> {
    if keywords.is_empty() {
        return Ok(None);
    }
    let pattern = keywords
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map(Some)
        .map_err(|e| PolarsError::ComputeError(e.to_string().into()))
}

/// A title is Bad when its description mentions any keyword, ignoring case,
/// and Good otherwise. Both categories are always reported.
pub fn categorize(db: &NetflixData, keywords: &[String]) -> PolarsResult<Vec<(Category, u32)>> {
    let start = Instant::now();
    let matcher = keyword_matcher(keywords)?;

    let mut bad = 0;
    let mut good = 0;
    for description in db.titles.column(DESCRIPTION)?.str()?.into_iter() {
        let flagged = match (&matcher, description) {
            (Some(re), Some(text)) => re.is_match(text),
            _ => false,
        };
        if flagged {
            bad += 1;
        } else {
            good += 1;
        }
    }

    debug!(bad, good, elapsed = ?start.elapsed(), "q15 categorize");
    Ok(vec![(Category::Bad, bad), (Category::Good, good)])
}

// 15.sql
// SELECT category,
//        COUNT(*) AS content_count
// FROM (
//     SELECT CASE
//                WHEN description ILIKE '%kill%' OR description ILIKE '%violence%' THEN 'Bad'
//                ELSE 'Good'
//            END AS category
//     FROM netflix
// ) AS categorized_content
// GROUP BY category;
