use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, TimeZone, Timelike, Utc};

use crate::angles;
use crate::error::{Result, SolarError};
use crate::types::{DaylightWindow, Location, SunTimes};

/// Sun elevation at apparent sunrise/sunset: refraction plus the solar radius.
pub const STANDARD_HORIZON: f64 = -0.833;

pub fn current_date_time() -> DateTime<Utc> {
    Utc::now()
}

/// Solar noon in minutes after UTC midnight.
pub fn solar_noon_minutes(longitude: f64, day_of_year: i32) -> f64 {
    720.0 - 4.0 * longitude - angles::equation_of_time(day_of_year)
}

/// Half the daylight arc in minutes, or the error describing which way the
/// sun fails to cross `horizon_elevation`.
fn half_day_minutes(latitude: f64, day_of_year: i32, horizon_elevation: f64, date: NaiveDate) -> Result<f64> {
    let lat_rad = angles::deg_to_rad(latitude);
    let decl_rad = angles::deg_to_rad(angles::solar_declination(day_of_year));
    let h0_rad = angles::deg_to_rad(horizon_elevation);
    let cos_h = (h0_rad.sin() - lat_rad.sin() * decl_rad.sin()) / (lat_rad.cos() * decl_rad.cos());

    if cos_h > 1.0 {
        Err(SolarError::SunNeverRises { date })
    } else if cos_h < -1.0 {
        Err(SolarError::SunNeverSets { date })
    } else {
        let h_deg = angles::rad_to_deg(cos_h.acos());
        Ok(h_deg / angles::DEGREES_PER_HOUR * 60.0)
    }
}

fn at_utc_minutes(date: NaiveDate, minutes: f64) -> Result<DateTime<Utc>> {
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| SolarError::InvalidDate(date.to_string()))?;
    let offset = TimeDelta::try_milliseconds((minutes * 60_000.0).round() as i64)
        .ok_or_else(|| SolarError::InvalidDate(format!("{} + {} min", date, minutes)))?;
    Ok(Utc.from_utc_datetime(&midnight) + offset)
}

pub fn sun_times(location: &Location, date: NaiveDate) -> Result<SunTimes> {
    sun_times_for_horizon(location, date, STANDARD_HORIZON)
}

pub fn sun_times_for_horizon(location: &Location, date: NaiveDate, horizon_elevation: f64) -> Result<SunTimes> {
    let n = date.ordinal() as i32;
    let noon = solar_noon_minutes(location.longitude, n);
    let half_day = half_day_minutes(location.latitude, n, horizon_elevation, date)?;

    let times = SunTimes {
        sunrise: at_utc_minutes(date, noon - half_day)?,
        midday: at_utc_minutes(date, noon)?,
        sunset: at_utc_minutes(date, noon + half_day)?,
    };
    log::debug!(
        "sun times for {} at ({:.3}, {:.3}): rise={} noon={} set={}",
        date,
        location.latitude,
        location.longitude,
        times.sunrise,
        times.midday,
        times.sunset
    );
    Ok(times)
}

pub fn sun_times_today(location: &Location) -> Result<SunTimes> {
    sun_times(location, current_date_time().date_naive())
}

fn local_minutes<Tz: TimeZone>(dt: &DateTime<Utc>, tz: &Tz) -> i32 {
    let local = dt.with_timezone(tz);
    (local.hour() * 60 + local.minute()) as i32
}

impl SunTimes {
    /// Sunrise and sunset as minutes since midnight in `tz`. When daylight
    /// crosses local midnight the window is inverted (sunset < sunrise).
    pub fn daylight_window<Tz: TimeZone>(&self, tz: &Tz) -> DaylightWindow {
        DaylightWindow {
            sunrise: local_minutes(&self.sunrise, tz),
            sunset: local_minutes(&self.sunset, tz),
        }
    }

    pub fn day_length(&self) -> TimeDelta {
        self.sunset - self.sunrise
    }
}
