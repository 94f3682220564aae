//! Local handling of location queries before falling back to a geocoder.

use crate::models::Coordinate;

/// Recognise a literal `lat,lng` query such as `"50.08, 14.44"`.
///
/// Only plain decimal numbers are accepted; anything else is left for a
/// geocoding service.
pub fn parse_coordinate_query(query: &str) -> Option<Coordinate> {
    let (lat, lng) = query.trim().split_once(',')?;
    Some(Coordinate::new(parse_decimal(lat)?, parse_decimal(lng)?))
}

fn parse_decimal(value: &str) -> Option<f64> {
    let value = value.trim();
    let digits = value.strip_prefix('-').unwrap_or(value);
    let mut parts = digits.splitn(2, '.');
    let whole = parts.next()?;
    let fraction = parts.next().unwrap_or("");
    if whole.is_empty()
        || !whole.bytes().all(|b| b.is_ascii_digit())
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    value.parse().ok()
}
