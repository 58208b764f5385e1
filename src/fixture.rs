use crate::data::*;
use polars::prelude::*;

#[derive(Clone)]
pub struct Row {
    pub id: &'static str,
    pub kind: &'static str,
    pub title: &'static str,
    pub director: Option<&'static str>,
    pub cast: Option<&'static str>,
    pub country: Option<&'static str>,
    pub date_added: Option<&'static str>,
    pub release_year: i32,
    pub rating: Option<&'static str>,
    pub duration: Option<&'static str>,
    pub listed_in: Option<&'static str>,
    pub description: Option<&'static str>,
}

impl Row {
    pub fn new(id: &'static str) -> Self {
        Row {
            id,
            kind: "Movie",
            title: id,
            director: None,
            cast: None,
            country: None,
            date_added: None,
            release_year: 2020,
            rating: None,
            duration: None,
            listed_in: None,
            description: None,
        }
    }

    pub fn show(id: &'static str) -> Self {
        Row {
            kind: "TV Show",
            ..Row::new(id)
        }
    }
}

pub fn frame(rows: &[Row]) -> DataFrame {
    fn strs(rows: &[Row], f: impl Fn(&Row) -> Option<&'static str>) -> Vec<Option<&'static str>> {
        rows.iter().map(f).collect()
    }

    DataFrame::new(vec![
        Column::new(SHOW_ID.into(), strs(rows, |r| Some(r.id))),
        Column::new(TYPE.into(), strs(rows, |r| Some(r.kind))),
        Column::new(TITLE.into(), strs(rows, |r| Some(r.title))),
        Column::new(DIRECTOR.into(), strs(rows, |r| r.director)),
        Column::new(CAST.into(), strs(rows, |r| r.cast)),
        Column::new(COUNTRY.into(), strs(rows, |r| r.country)),
        Column::new(DATE_ADDED.into(), strs(rows, |r| r.date_added)),
        Column::new(
            RELEASE_YEAR.into(),
            rows.iter().map(|r| r.release_year).collect::<Vec<i32>>(),
        ),
        Column::new(RATING.into(), strs(rows, |r| r.rating)),
        Column::new(DURATION.into(), strs(rows, |r| r.duration)),
        Column::new(LISTED_IN.into(), strs(rows, |r| r.listed_in)),
        Column::new(DESCRIPTION.into(), strs(rows, |r| r.description)),
    ])
    .unwrap()
}

pub fn data(rows: &[Row]) -> NetflixData {
    NetflixData::new(frame(rows)).unwrap()
}

/// Ids of a result frame, in row order.
pub fn ids(df: &DataFrame) -> Vec<String> {
    df.column(SHOW_ID)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect()
}
