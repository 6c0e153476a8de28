//! Parsing of human-written refresh intervals.

use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Unit suffixes and their length in milliseconds. Longer suffixes first so
/// that "ms" is not read as "s".
const UNITS: &[(&str, f64)] = &[("ms", 1.0), ("s", 1_000.0), ("m", 60_000.0)];

/// Parse an interval such as "500ms", "1.5s", "2m" or a bare number of
/// seconds ("3").
pub fn parse_duration(input: &str) -> Result<Duration> {
    let s = input.trim();
    if s.is_empty() {
        bail!("empty duration");
    }

    let (number, millis_per_unit) = UNITS
        .iter()
        .find_map(|(suffix, ms)| s.strip_suffix(suffix).map(|n| (n.trim(), *ms)))
        .unwrap_or((s, 1_000.0));

    let value: f64 = number
        .parse()
        .with_context(|| format!("invalid duration: {input:?}"))?;
    if !value.is_finite() || value < 0.0 {
        bail!("duration must be a non-negative number: {input:?}");
    }

    Ok(Duration::from_micros((value * millis_per_unit * 1_000.0) as u64))
}
