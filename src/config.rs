use crate::error::{Error, Result};
use chrono::NaiveDate;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_DATA_PATH: &str = "data/netflix_titles.csv";

/// Parameters of the fifteen business questions.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub release_year: i32,
    pub top_countries: usize,
    pub recent_years: u32,
    pub director: String,
    pub min_seasons: u32,
    pub country: String,
    pub top_years: usize,
    pub genre_suffix: String,
    pub actor: String,
    pub actor_window_years: u32,
    pub top_actors: usize,
    pub keywords: Vec<String>,
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario {
            release_year: 2020,
            top_countries: 5,
            recent_years: 5,
            director: "Rajiv Chilaka".to_string(),
            min_seasons: 5,
            country: "India".to_string(),
            top_years: 5,
            genre_suffix: "Documentaries".to_string(),
            actor: "Salman Khan".to_string(),
            actor_window_years: 10,
            top_actors: 10,
            keywords: vec!["kill".to_string(), "violence".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_path: PathBuf,
    /// Pins "today" for the date-relative questions; the clock is used
    /// otherwise.
    pub today: Option<NaiveDate>,
    pub scenario: Scenario,
}

impl Config {
    /// Reads `NETFLIX_*` variables, after loading `.env` if there is one.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self> {
        let mut scenario = Scenario::default();

        if let Some(year) = parsed(&lookup, "NETFLIX_YEAR")? {
            scenario.release_year = year;
        }
        if let Some(director) = lookup("NETFLIX_DIRECTOR") {
            scenario.director = director;
        }
        if let Some(country) = lookup("NETFLIX_COUNTRY") {
            scenario.country = country;
        }
        if let Some(actor) = lookup("NETFLIX_ACTOR") {
            scenario.actor = actor;
        }
        if let Some(suffix) = lookup("NETFLIX_GENRE_SUFFIX") {
            scenario.genre_suffix = suffix;
        }
        if let Some(keywords) = lookup("NETFLIX_KEYWORDS") {
            scenario.keywords = crate::fields::split_list(&keywords)
                .map(str::to_string)
                .collect();
            if scenario.keywords.is_empty() {
                return Err(Error::Config {
                    key: "NETFLIX_KEYWORDS",
                    message: "no keywords given".to_string(),
                });
            }
        }

        let today = match lookup("NETFLIX_TODAY") {
            Some(raw) => Some(NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|e| {
                Error::Config {
                    key: "NETFLIX_TODAY",
                    message: e.to_string(),
                }
            })?),
            None => None,
        };

        Ok(Config {
            data_path: lookup("NETFLIX_DATA")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
            today,
            scenario,
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

fn parsed<T>(lookup: &impl Fn(&'static str) -> Option<String>, key: &'static str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim().parse().map_err(|e: T::Err| Error::Config {
                key,
                message: e.to_string(),
            })
        })
        .transpose()
}
