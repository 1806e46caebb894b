//! Conversions between clock strings, minutes since midnight and daylight
//! progress (0 at sunrise, 100 at sunset).

use crate::error::{Result, SolarError};
use crate::types::{ClockTime, DaylightWindow};

pub const MINUTES_PER_DAY: i32 = 1440;

/// Wraps values outside a single day, so `1440` is midnight again and `-1`
/// is 23:59.
pub fn minutes_to_time(total_minutes: i32) -> ClockTime {
    let m = total_minutes.rem_euclid(MINUTES_PER_DAY);
    ClockTime {
        hour: (m / 60) as u32,
        minute: (m % 60) as u32,
        second: 0,
    }
}

pub fn time_to_minutes(time: &ClockTime) -> i32 {
    time.minutes_since_midnight()
}

/// `"HH:MM AM/PM"`. Both hour 0 and hour 12 display as `12`. Input wraps
/// around the day like [`minutes_to_time`].
pub fn minutes_to_time_string(total_minutes: i32) -> String {
    let m = total_minutes.rem_euclid(MINUTES_PER_DAY);
    let hours = m / 60;
    let display_hours = match hours % 12 {
        0 => 12,
        h => h,
    };
    let suffix = if hours >= 12 { "PM" } else { "AM" };
    format!("{:02}:{:02} {}", display_hours, m % 60, suffix)
}

/// `"HH:MM"` in 24-hour form; inverse of [`parse_time_to_minutes`].
pub fn minutes_to_24h_string(total_minutes: i32) -> String {
    let m = total_minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// Reads the hour and minute fields of `"HH:MM"`. Anything after a second
/// `:` (e.g. seconds in `"HH:MM:SS"`) is ignored.
pub fn parse_time_to_minutes(time_str: &str) -> Result<i32> {
    let parse_error = |reason: &str| SolarError::Parse {
        input: time_str.to_string(),
        reason: reason.to_string(),
    };

    let mut fields = time_str.trim().split(':');
    let hours = fields.next().unwrap_or_default();
    let minutes = fields
        .next()
        .ok_or_else(|| parse_error("missing ':' separator"))?;
    let hours: i32 = hours
        .trim()
        .parse()
        .map_err(|_| parse_error("hours are not a number"))?;
    let minutes: i32 = minutes
        .trim()
        .parse()
        .map_err(|_| parse_error("minutes are not a number"))?;
    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(|| parse_error("time out of range"))
}

/// Like [`parse_time_to_minutes`] but falls back to midnight on bad input.
pub fn parse_time_to_minutes_lenient(time_str: &str) -> i32 {
    parse_time_to_minutes(time_str).unwrap_or_else(|e| {
        log::warn!("{}; using 00:00", e);
        0
    })
}

/// Progress is not clamped here, so values past 100 land after sunset.
pub fn progress_to_time(progress: i32, sunrise_minutes: i32, sunset_minutes: i32) -> ClockTime {
    let span = sunset_minutes as i64 - sunrise_minutes as i64;
    let minutes = sunrise_minutes as i64 + progress as i64 * span / 100;
    minutes_to_time(minutes.rem_euclid(MINUTES_PER_DAY as i64) as i32)
}

pub fn time_to_progress(time_str: &str, sunrise_minutes: i32, sunset_minutes: i32) -> Result<i32> {
    let minutes = parse_time_to_minutes(time_str)?;
    minutes_to_progress(minutes, sunrise_minutes, sunset_minutes)
}

pub fn minutes_to_progress(minutes: i32, sunrise_minutes: i32, sunset_minutes: i32) -> Result<i32> {
    let span = sunset_minutes as i64 - sunrise_minutes as i64;
    if span == 0 {
        return Err(SolarError::InvalidRange {
            sunrise: sunrise_minutes,
            sunset: sunset_minutes,
        });
    }
    let progress = (minutes as i64 - sunrise_minutes as i64) * 100 / span;
    Ok(progress.clamp(0, 100) as i32)
}

impl DaylightWindow {
    pub fn new(sunrise: i32, sunset: i32) -> Self {
        Self { sunrise, sunset }
    }

    pub fn span(&self) -> i32 {
        self.sunset - self.sunrise
    }

    pub fn progress_to_time(&self, progress: i32) -> ClockTime {
        progress_to_time(progress, self.sunrise, self.sunset)
    }

    pub fn time_to_progress(&self, time_str: &str) -> Result<i32> {
        time_to_progress(time_str, self.sunrise, self.sunset)
    }

    pub fn progress_at(&self, time: &ClockTime) -> Result<i32> {
        minutes_to_progress(time.minutes_since_midnight(), self.sunrise, self.sunset)
    }
}
