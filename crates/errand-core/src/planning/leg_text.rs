//! Parsing of provider-formatted duration and distance text.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ErrandError, Result};

static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?P<days>\d+)\s*days?)?\s*(?:(?P<hours>\d+)\s*h(?:ou)?rs?)?\s*(?:(?P<mins>\d+)\s*min(?:ute)?s?)?$",
    )
    .expect("duration pattern is valid")
});

static DISTANCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<value>\d+(?:[.,]\d+)?)\s*(?P<unit>km|m)$").expect("distance pattern is valid")
});

/// Parses text such as `"1 hour 5 mins"` or `"12 min"` into whole minutes.
pub fn parse_minutes(text: &str) -> Result<u64> {
    let normalized = text.trim().to_lowercase();
    let caps = DURATION
        .captures(&normalized)
        .ok_or_else(|| ErrandError::malformed("duration", text))?;

    let part = |name: &str| -> Result<Option<u64>> {
        caps.name(name)
            .map(|m| {
                m.as_str()
                    .parse::<u64>()
                    .map_err(|_| ErrandError::malformed("duration", text))
            })
            .transpose()
    };

    let (days, hours, mins) = (part("days")?, part("hours")?, part("mins")?);
    if days.is_none() && hours.is_none() && mins.is_none() {
        return Err(ErrandError::malformed("duration", text));
    }

    Ok(days.unwrap_or(0) * 24 * 60 + hours.unwrap_or(0) * 60 + mins.unwrap_or(0))
}

/// Parses text such as `"2.3 km"` or `"500 m"` into kilometers.
///
/// A comma is accepted as the decimal separator.
pub fn parse_kilometers(text: &str) -> Result<f64> {
    let normalized = text.trim().to_lowercase();
    let caps = DISTANCE
        .captures(&normalized)
        .ok_or_else(|| ErrandError::malformed("distance", text))?;

    let value: f64 = caps["value"]
        .replace(',', ".")
        .parse()
        .map_err(|_| ErrandError::malformed("distance", text))?;

    Ok(match &caps["unit"] {
        "km" => value,
        _ => value / 1000.0,
    })
}
