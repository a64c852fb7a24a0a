//! Time-offset parsing.
//!
//! Offsets are written the way people write timestamps: `SS`, `MM:SS`, or
//! `HH:MM:SS`, with fractional seconds allowed in the last component
//! (`1:30.5`). We normalize everything to whole milliseconds.

use crate::error::{Error, Result};

/// Parse an optional time string into a millisecond offset.
///
/// `None` means "from the beginning" and parses to `0`. No upper bound is
/// enforced here; the audio window clamps offsets against the actual buffer
/// length.
pub fn parse_offset(value: Option<&str>) -> Result<u64> {
    let Some(value) = value else {
        return Ok(0);
    };

    let invalid = || Error::InvalidTimeFormat(value.to_string());

    let parts: Vec<&str> = value.split(':').collect();
    let total_seconds = match parts.as_slice() {
        [s] => parse_seconds(s).ok_or_else(invalid)?,
        [m, s] => {
            let minutes = parse_whole(m).ok_or_else(invalid)?;
            let seconds = parse_seconds(s).ok_or_else(invalid)?;
            minutes as f64 * 60.0 + seconds
        }
        [h, m, s] => {
            let hours = parse_whole(h).ok_or_else(invalid)?;
            let minutes = parse_whole(m).ok_or_else(invalid)?;
            let seconds = parse_seconds(s).ok_or_else(invalid)?;
            hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds
        }
        _ => return Err(invalid()),
    };

    Ok((total_seconds * 1000.0).round() as u64)
}

/// Parse an hour/minute component. Unsigned, so negatives are rejected.
fn parse_whole(part: &str) -> Option<u64> {
    part.trim().parse::<u64>().ok()
}

/// Parse the seconds component, allowing a fractional part.
fn parse_seconds(part: &str) -> Option<f64> {
    let seconds = part.trim().parse::<f64>().ok()?;
    if seconds.is_finite() && seconds >= 0.0 {
        Some(seconds)
    } else {
        None
    }
}
