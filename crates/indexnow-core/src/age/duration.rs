//! ISO-8601 duration parsing (`P10D`, `PT1H30M`, `P2W`).
//!
//! Calendar years and months have no fixed length in seconds and are
//! rejected; weeks, days, and time components are accepted. Fractional
//! values are summed and then truncated toward zero.

use crate::error::Error;

const DATE_UNITS: &[(char, f64)] = &[('W', 604_800.0), ('D', 86_400.0)];
const TIME_UNITS: &[(char, f64)] = &[('H', 3_600.0), ('M', 60.0), ('S', 1.0)];

/// Parses an ISO-8601 duration into whole seconds.
///
/// Returns `MalformedDuration` for anything outside the supported grammar:
/// missing `P`, empty component list, unknown or repeated designators,
/// out-of-order designators, or calendar years/months.
pub fn parse_iso8601_seconds(expr: &str) -> Result<i64, Error> {
    let mal = || Error::MalformedDuration(expr.to_string());

    let rest = expr.strip_prefix('P').ok_or_else(mal)?;
    if rest.is_empty() {
        return Err(mal());
    }

    let (date_part, time_part) = match rest.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (rest, None),
    };
    if time_part == Some("") {
        // "P1DT" has a time marker but no time components.
        return Err(mal());
    }

    let mut total = parse_components(date_part, DATE_UNITS).ok_or_else(mal)?;
    if let Some(time) = time_part {
        total += parse_components(time, TIME_UNITS).ok_or_else(mal)?;
    }

    Ok(total as i64)
}

/// Parses a run of `<number><designator>` pairs against a unit table.
/// Designators must appear in table order, each at most once.
fn parse_components(mut part: &str, units: &[(char, f64)]) -> Option<f64> {
    let mut total = 0.0;
    let mut next_unit = 0;

    while !part.is_empty() {
        let digits = part
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(part.len());
        if digits == 0 || digits == part.len() {
            // Designator without a number, or number without a designator.
            return None;
        }
        let value: f64 = part[..digits].parse().ok()?;
        let designator = part[digits..].chars().next()?;

        let idx = units[next_unit..]
            .iter()
            .position(|(c, _)| *c == designator)
            .map(|i| i + next_unit)?;
        next_unit = idx + 1;
        total += value * units[idx].1;

        part = &part[digits + designator.len_utf8()..];
    }

    Some(total)
}
