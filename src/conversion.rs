//! Sexagesimal ↔ decimal degree conversions.
//!
//! Ephemeris services report right ascension as `HH MM SS.ss` and declination as
//! `±DD MM SS.s`. Tables handed to [`crate::tabular`] must already hold decimal degrees;
//! these helpers do that conversion, and format decimal degrees back for reports.

use crate::{
    constants::Degree,
    interpolation::angles::normalize_degrees,
};

/// Degrees per hour of right ascension
const DEG_PER_HOUR: f64 = 15.0;

/// Accuracy implied by the number of decimals of the last sexagesimal component.
///
/// Arguments
/// ---------------
/// * `field`: last component of the angle (e.g. `"56.78"`)
/// * `factor`: unit of that component, in the unit of the result (`1/3600` for seconds)
fn compute_accuracy(field: &str, factor: f64) -> f64 {
    let field = field.trim();
    let decimals = field
        .find('.')
        .map(|dot_pos| field.len() - dot_pos - 1)
        .unwrap_or(0);
    10f64.powi(-(decimals as i32)) * factor
}

/// Parse `"A B C"` into its sign, its absolute value in units of `A` and the raw `C` field.
fn parse_sexagesimal(input: &str) -> Option<(f64, f64, &str)> {
    let mut parts = input.split_whitespace();
    let (first, minutes, seconds) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let sign = if first.starts_with('-') { -1.0 } else { 1.0 };
    let units: f64 = first.trim_start_matches(['-', '+']).parse().ok()?;
    let minutes: f64 = minutes.parse().ok()?;
    let secs: f64 = seconds.parse().ok()?;

    Some((sign, units + minutes / 60.0 + secs / 3600.0, seconds))
}

/// Parse a right ascension string to degrees
///
/// Arguments
/// ---------
/// * `ra`: right ascension formatted as `HH MM SS.SS`
///
/// Returns
/// -------
/// * `(degrees, accuracy)`, the accuracy (in degrees) derived from the decimals of the
///   seconds field. `None` if the input is not three numbers.
pub fn parse_ra_to_deg(ra: &str) -> Option<(Degree, Degree)> {
    let (_, hours, seconds) = parse_sexagesimal(ra)?;
    Some((
        hours * DEG_PER_HOUR,
        compute_accuracy(seconds, 1.0 / 3600.0),
    ))
}

/// Parse a declination string to degrees
///
/// Arguments
/// ---------
/// * `dec`: declination formatted as `±DD MM SS.SS`
///
/// Returns
/// -------
/// * `(degrees, accuracy)`; `None` if the input is not three numbers.
///   The sign is taken from the degree field, so `-00 30 00` is `-0.5`.
pub fn parse_dec_to_deg(dec: &str) -> Option<(Degree, Degree)> {
    let (sign, degrees, seconds) = parse_sexagesimal(dec)?;
    Some((sign * degrees, compute_accuracy(seconds, 1.0 / 3600.0)))
}

/// Hundredths of a second in one unit (hour or degree)
const CENTISECONDS_PER_UNIT: f64 = 360_000.0;

/// Split a positive quantity into whole units, minutes, seconds and hundredths of a second.
///
/// The value is rounded to the hundredth of a second first, so `59.999` seconds carry into
/// the minutes (and the minutes into the units) instead of printing as `60.00`.
fn split_sexagesimal(value: f64) -> (u64, u64, u64, u64) {
    let total = (value * CENTISECONDS_PER_UNIT).round() as u64;
    let centis = total % 100;
    let seconds = (total / 100) % 60;
    let minutes = (total / 6_000) % 60;
    let units = total / 360_000;
    (units, minutes, seconds, centis)
}

/// Format a right ascension in degrees as `HH:MM:SS.ss`.
pub fn format_ra_hms(ra: Degree) -> String {
    let (h, m, s, cs) = split_sexagesimal(normalize_degrees(ra) / DEG_PER_HOUR);
    // rounding up the last hundredth of 23:59:59.99 wraps to the start of the day
    format!("{:02}:{m:02}:{s:02}.{cs:02}", h % 24)
}

/// Format a declination in degrees as `+DD:MM:SS.ss`.
pub fn format_dec_dms(dec: Degree) -> String {
    let sign = if dec >= 0.0 { '+' } else { '-' };
    let (d, m, s, cs) = split_sexagesimal(dec.abs());
    format!("{sign}{d:02}:{m:02}:{s:02}.{cs:02}")
}

#[cfg(test)]
mod conversion_test {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_ra_to_deg() {
        let (ra, acc) = parse_ra_to_deg("13 29 52.37").unwrap();
        assert_relative_eq!(ra, 202.46820833333333, max_relative = 1e-14);
        assert_relative_eq!(acc, 1.0 / 360000.0, max_relative = 1e-12);

        let (ra, acc) = parse_ra_to_deg("00 00 00").unwrap();
        assert_eq!(ra, 0.0);
        assert_relative_eq!(acc, 1.0 / 3600.0, max_relative = 1e-12);

        assert_eq!(parse_ra_to_deg("1 2 3.4.5"), None);
        assert_eq!(parse_ra_to_deg("1 2"), None);
        assert_eq!(parse_ra_to_deg("1 2 3 4"), None);
    }

    #[test]
    fn test_dec_to_deg() {
        let (dec, _) = parse_dec_to_deg("-00 30 00.0").unwrap();
        assert_eq!(dec, -0.5);

        let (dec, acc) = parse_dec_to_deg("+23 26 21.4").unwrap();
        assert_relative_eq!(dec, 23.43927777777778, max_relative = 1e-14);
        assert_relative_eq!(acc, 1.0 / 36000.0, max_relative = 1e-12);

        assert_eq!(parse_dec_to_deg("89 15"), None);
        assert_eq!(parse_dec_to_deg("aa 15 00"), None);
    }

    #[test]
    fn test_format_ra_hms() {
        assert_eq!(format_ra_hms(0.0), "00:00:00.00");
        assert_eq!(format_ra_hms(202.5), "13:30:00.00");
        assert_eq!(format_ra_hms(-15.0), "23:00:00.00");
    }

    #[test]
    fn test_format_dec_dms() {
        assert_eq!(format_dec_dms(-0.5), "-00:30:00.00");
        assert_eq!(format_dec_dms(45.25), "+45:15:00.00");
    }

    #[test]
    fn test_format_rounding_carry() {
        assert_eq!(format_ra_hms(359.99999999), "00:00:00.00");
        assert_eq!(format_ra_hms(14.99999999), "01:00:00.00");
        assert_eq!(format_dec_dms(10.999999999), "+11:00:00.00");
        assert_eq!(format_dec_dms(-0.9999999999), "-01:00:00.00");
        // 12h 34m 56.785s stays below the carry
        assert_eq!(format_ra_hms(188.73660417), "12:34:56.79");
    }
}
