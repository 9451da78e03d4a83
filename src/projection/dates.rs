use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use regex::Regex;

lazy_static::lazy_static! {
    static ref RELATIVE_DATE_RE: Regex = Regex::new(r"^(\d+)([hdwmHDWM])$").expect("valid regex");
}

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];

/// Best-effort parse of a date or datetime string. Tries RFC 3339 first, then
/// a handful of common layouts; dates without a time component resolve to
/// midnight UTC. Returns `None` rather than erroring on anything unparsable.
pub fn parse_flexible(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            let midnight = date.and_hms_opt(0, 0, 0)?;
            return Some(Utc.from_utc_datetime(&midnight));
        }
    }

    None
}

/// Parse a filter pattern into a point in time. Accepts everything
/// `parse_flexible` does plus relative offsets like "7d", "2w", "1m".
pub fn parse_pattern(input: &str) -> Option<DateTime<Utc>> {
    parse_relative(input.trim()).or_else(|| parse_flexible(input))
}

fn parse_relative(input: &str) -> Option<DateTime<Utc>> {
    let captures = RELATIVE_DATE_RE.captures(input)?;
    let amount = captures[1].parse::<i64>().ok()?;
    let unit = captures[2].to_lowercase();

    let duration = match unit.as_str() {
        "h" => Duration::hours(amount),
        "d" => Duration::days(amount),
        "w" => Duration::weeks(amount),
        "m" => Duration::days(amount * 30),
        _ => return None,
    };

    Some(Utc::now() - duration)
}
