use netflix_eda::config::Config;
use netflix_eda::data::NetflixData;
use netflix_eda::*;
use polars::prelude::DataFrame;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn titles(heading: &str, df: &DataFrame) {
    println!("== {heading} ({} rows)\n{df}\n", df.height());
}

fn main() -> Result<(), error::Error> {
    let config = Config::from_env()?;
    init_tracing();

    let today = config.today();
    let s = &config.scenario;
    info!(path = %config.data_path.display(), %today, "running queries");
    let db = NetflixData::from_path(&config.data_path)?;

    println!("== 1. content by type");
    for (kind, count) in q1::type_distribution(&db)? {
        println!("{kind}\t{count}");
    }

    println!("\n== 2. most frequent rating per type");
    for (kind, rating) in q2::top_rating_per_kind(&db)? {
        println!("{kind}\t{}", rating.unwrap_or("<null>"));
    }
    println!();

    titles(
        &format!("3. released in {}", s.release_year),
        &q3::released_in(&db, s.release_year)?,
    );

    println!("== 4. top {} countries", s.top_countries);
    for (country, count) in q4::top_countries(&db, s.top_countries)? {
        println!("{country}\t{count}");
    }
    println!();

    match q5::longest_movie(&db)? {
        Some(movie) => titles("5. longest movie", &movie),
        None => println!("== 5. longest movie\nnone\n"),
    }

    titles(
        &format!("6. added in the last {} years", s.recent_years),
        &q6::recently_added(&db, today, s.recent_years)?,
    );
    titles(
        &format!("7. directed by {}", s.director),
        &q7::directed_by(&db, &s.director)?,
    );
    titles(
        &format!("8. TV shows with more than {} seasons", s.min_seasons),
        &q8::shows_longer_than(&db, s.min_seasons)?,
    );

    println!("== 9. titles per genre");
    for (genre, count) in q9::genre_counts(&db)? {
        println!("{genre}\t{count}");
    }

    println!("\n== 10. top {} years for {}", s.top_years, s.country);
    for row in q10::top_years_for_country(&db, &s.country, s.top_years)? {
        println!(
            "{}\t{}\t{}\t{:.2}",
            row.country, row.release_year, row.total_release, row.share
        );
    }
    println!();

    titles(
        &format!("11. genres ending with {}", s.genre_suffix),
        &q11::listed_in_ending_with(&db, &s.genre_suffix)?,
    );
    titles("12. without director", &q12::without_director(&db)?);
    titles(
        &format!("13. {} in the last {} years", s.actor, s.actor_window_years),
        &q13::actor_in_recent_years(&db, &s.actor, today, s.actor_window_years)?,
    );

    println!("== 14. top {} actors in {}", s.top_actors, s.country);
    for (actor, count) in q14::top_actors_for_country(&db, &s.country, s.top_actors)? {
        println!("{actor}\t{count}");
    }

    println!("\n== 15. content by description keywords {:?}", s.keywords);
    for (category, count) in q15::categorize(&db, &s.keywords)? {
        println!("{category}\t{count}");
    }

    Ok(())
}
