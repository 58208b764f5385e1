use chrono::NaiveDate;

const DATE_ADDED_FORMAT: &str = "%B %d, %Y";

/// Pieces of a comma-joined field, trimmed, empties dropped.
pub fn split_list(field: &str) -> impl Iterator<Item = &str> {
    field.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// `"90 min"` -> 90, `"3 Seasons"` -> 3.
pub fn leading_integer(duration: &str) -> Option<u32> {
    duration.trim_start().split(' ').next()?.parse().ok()
}

/// `date_added` is stored as e.g. `"September 25, 2021"`, sometimes with a
/// leading space.
pub fn parse_date_added(date_added: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_added.trim(), DATE_ADDED_FORMAT).ok()
}
