// File: crates/chart-core/src/ticks.rs
// Summary: Tick value generation and axis label formatting.

use chrono::{DateTime, Datelike};

/// Round tick values covering `[min, max]`, aiming for roughly `count`
/// ticks on a 1/2/5 decade step.
pub fn ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || count == 0 {
        return Vec::new();
    }
    if (max - min).abs() < 1e-12 {
        return vec![min];
    }
    let (lo, hi, reversed) = if min <= max { (min, max, false) } else { (max, min, true) };
    let step = tick_step(lo, hi, count);
    if step <= 0.0 {
        return vec![lo, hi];
    }
    let first = (lo / step).ceil();
    let last = (hi / step).floor();
    let mut out = Vec::new();
    let mut i = first;
    while i <= last + 0.5 {
        out.push(i * step);
        i += 1.0;
    }
    if reversed {
        out.reverse();
    }
    out
}

/// Nice step size (1, 2, or 5 times a power of ten) for about `count`
/// intervals across `[lo, hi]`.
fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let span = hi - lo;
    let raw = span / count.max(1) as f64;
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let err = raw / base;
    let factor = if err >= 7.5 {
        10.0
    } else if err >= 3.5 {
        5.0
    } else if err >= 1.5 {
        2.0
    } else {
        1.0
    };
    base * factor
}

/// Format a tick value with just enough decimals for its step size.
pub fn format_tick_value(value: f64, step: f64) -> String {
    let decimals = if step <= 0.0 {
        0
    } else {
        (-step.log10().floor()).max(0.0) as usize
    };
    format!("{value:.decimals$}")
}

/// Compact year label: the full 4-digit year for the first tick and for any
/// exact millennium, the 2-digit suffix otherwise.
pub fn format_year_tick(index: usize, year: i32) -> String {
    if index == 0 || year % 1000 == 0 {
        return year.to_string();
    }
    let y = year.to_string();
    y.chars().skip(y.len().saturating_sub(2)).collect()
}

/// Year of a Unix timestamp in UTC.
pub fn timestamp_year(instant: i64) -> i32 {
    DateTime::from_timestamp(instant, 0)
        .map(|dt| dt.year())
        .unwrap_or(1970)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_are_round_and_cover_domain() {
        let t = ticks(0.0, 3.2, 10);
        assert!(!t.is_empty());
        assert!((t[0] - 0.0).abs() < 1e-9);
        assert!(*t.last().unwrap() <= 3.2 + 1e-9);
        for w in t.windows(2) {
            assert!(w[1] > w[0]);
        }
        // 1/2/5 step
        let step = t[1] - t[0];
        let mant = step / 10f64.powf(step.log10().floor());
        assert!(
            (mant - 1.0).abs() < 1e-6 || (mant - 2.0).abs() < 1e-6 || (mant - 5.0).abs() < 1e-6,
            "step {step} not a 1/2/5 decade multiple"
        );
    }

    #[test]
    fn ticks_degenerate_inputs() {
        assert!(ticks(f64::NEG_INFINITY, 1.0, 10).is_empty());
        assert_eq!(ticks(2.0, 2.0, 10), vec![2.0]);
    }

    #[test]
    fn tick_values_format_to_step_precision() {
        assert_eq!(format_tick_value(0.30000000000000004, 0.1), "0.3");
        assert_eq!(format_tick_value(2.0, 0.5), "2.0");
        assert_eq!(format_tick_value(40.0, 10.0), "40");
    }

    #[test]
    fn year_formatter_matches_contract() {
        assert_eq!(format_year_tick(0, 2024), "2024");
        assert_eq!(format_year_tick(3, 2023), "23");
        assert_eq!(format_year_tick(7, 3000), "3000");
        assert_eq!(format_year_tick(1, 2000), "2000");
        assert_eq!(format_year_tick(5, 1999), "99");
    }
}
