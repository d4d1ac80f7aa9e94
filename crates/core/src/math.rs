//! Numeric and duration helpers.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ArgumentError;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_WEEK: i64 = 604_800;

static DURATION_COMPONENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)([wdhms])").expect("valid duration pattern"));

/// Units that [`format_time`] can leave out of its output.
///
/// Weeks are always shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Days.
    Days,
    /// Hours.
    Hours,
    /// Minutes.
    Minutes,
    /// Seconds.
    Seconds,
}

/// Uniform integer in `[min, max]`.
pub fn generate_number_between<R: Rng + ?Sized>(
    rng: &mut R,
    min: i32,
    max: i32,
) -> Result<i32, ArgumentError> {
    if min > max {
        return Err(ArgumentError::InvertedRange {
            min: min.into(),
            max: max.into(),
        });
    }

    Ok(rng.gen_range(min..=max))
}

/// Restrict `value` to `[min, max]`.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Parse a duration such as `1w2d`, `1h30m` or `90s` into seconds.
///
/// A plain integer (e.g. `"600"`) is taken as seconds. Unrecognised text
/// contributes nothing, so `"soon"` parses to `0`. `None` parses to `0`.
pub fn parse_seconds(value: Option<&str>) -> i64 {
    let Some(value) = value else {
        return 0;
    };

    // "-1" is the legacy "not a number" marker and falls through to the pattern.
    if let Ok(legacy) = value.parse::<i32>() {
        if legacy != -1 {
            return legacy.into();
        }
    }

    DURATION_COMPONENT
        .captures_iter(value)
        .map(|caps| {
            let amount = caps[1].parse::<i64>().unwrap_or(0);
            let unit = match &caps[2] {
                "w" => SECONDS_PER_WEEK,
                "d" => SECONDS_PER_DAY,
                "h" => SECONDS_PER_HOUR,
                "m" => SECONDS_PER_MINUTE,
                _ => 1,
            };
            amount.saturating_mul(unit)
        })
        .fold(0_i64, i64::saturating_add)
}

/// [`parse_seconds`], returning `default_seconds` when `value` is `None`.
pub fn parse_seconds_or(value: Option<&str>, default_seconds: i64) -> i64 {
    match value {
        Some(_) => parse_seconds(value),
        None => default_seconds,
    }
}

/// Render a number of seconds as `1 week, 2 days, 3 hours`.
///
/// `condensed` abbreviates units to their first letter (`1 w, 2 d, 3 h`) and
/// drops plurals. Units in `omissions` are skipped but still consume their
/// share of the duration. Zero renders as `now`, negative input as
/// `invalid seconds`, and a duration with every shown unit omitted as `soon`.
pub fn format_time(seconds: i64, condensed: bool, omissions: &[TimeUnit]) -> String {
    if seconds <= 0 {
        let label = if seconds == 0 { "now" } else { "invalid seconds" };
        return label.to_string();
    }

    let mut remaining = seconds;
    let mut parts: Vec<String> = Vec::new();

    if remaining >= SECONDS_PER_WEEK {
        parts.push(component(remaining / SECONDS_PER_WEEK, "week", condensed));
        remaining %= SECONDS_PER_WEEK;
    }

    let units = [
        (TimeUnit::Days, SECONDS_PER_DAY, "day"),
        (TimeUnit::Hours, SECONDS_PER_HOUR, "hour"),
        (TimeUnit::Minutes, SECONDS_PER_MINUTE, "minute"),
    ];
    for (unit, size, label) in units {
        if remaining >= size {
            if !omissions.contains(&unit) {
                parts.push(component(remaining / size, label, condensed));
            }
            remaining %= size;
        }
    }

    if remaining > 0 && !omissions.contains(&TimeUnit::Seconds) {
        parts.push(component(remaining, "second", condensed));
    }

    if parts.is_empty() {
        return "soon".to_string();
    }
    parts.join(", ")
}

fn component(value: i64, label: &str, condensed: bool) -> String {
    if condensed {
        let initial = &label[..1];
        return format!("{value} {initial}");
    }

    let plural = if value > 1 { "s" } else { "" };
    format!("{value} {label}{plural}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn number_between_is_inclusive() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let n = generate_number_between(&mut rng, 1, 3).unwrap();
            assert!((1..=3).contains(&n));
            seen[(n - 1) as usize] = true;
        }
        assert_eq!(seen, [true; 3]);
        assert_eq!(generate_number_between(&mut rng, 5, 5), Ok(5));
    }

    #[test]
    fn number_between_rejects_inverted_range() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_number_between(&mut rng, 4, 2),
            Err(ArgumentError::InvertedRange { min: 4, max: 2 })
        );
    }

    #[test]
    fn clamps_values() {
        assert_eq!(clamp(5, 0, 3), 3);
        assert_eq!(clamp(-1, 0, 3), 0);
        assert_eq!(clamp(2, 0, 3), 2);
        assert_eq!(clamp(0.5_f32, 0.0, 1.0), 0.5);
        assert_eq!(clamp(1.5_f64, 0.0, 1.0), 1.0);
    }

    #[test]
    fn parses_legacy_seconds() {
        assert_eq!(parse_seconds(Some("600")), 600);
        assert_eq!(parse_seconds(Some("-5")), -5);
        assert_eq!(parse_seconds(None), 0);
        assert_eq!(parse_seconds_or(None, 30), 30);
        assert_eq!(parse_seconds_or(Some("45"), 30), 45);
    }

    #[test]
    fn parses_unit_components() {
        assert_eq!(parse_seconds(Some("1h30m")), 5_400);
        assert_eq!(parse_seconds(Some("1w1d")), 691_200);
        assert_eq!(parse_seconds(Some("2m 10s")), 130);
        assert_eq!(parse_seconds(Some("soon")), 0);
        assert_eq!(parse_seconds(Some("-1")), 0);
    }

    #[test]
    fn formats_special_values() {
        assert_eq!(format_time(0, false, &[]), "now");
        assert_eq!(format_time(-3, false, &[]), "invalid seconds");
        assert_eq!(format_time(3_600, false, &[TimeUnit::Hours]), "soon");
    }

    #[test]
    fn formats_full_durations() {
        assert_eq!(format_time(1, false, &[]), "1 second");
        assert_eq!(
            format_time(90_061, false, &[]),
            "1 day, 1 hour, 1 minute, 1 second"
        );
        assert_eq!(format_time(1_296_000, false, &[]), "2 weeks, 1 day");
        assert_eq!(format_time(7_325, true, &[]), "2 h, 2 m, 5 s");
    }

    #[test]
    fn omitted_units_consume_their_share() {
        assert_eq!(
            format_time(90_061, false, &[TimeUnit::Hours, TimeUnit::Seconds]),
            "1 day, 1 minute"
        );
        assert_eq!(format_time(SECONDS_PER_WEEK, false, &[TimeUnit::Days]), "1 week");
    }
}
