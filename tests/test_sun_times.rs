use chrono::{NaiveDate, TimeDelta, TimeZone, Utc};
use chrono_tz::America::Chicago;

use sun_helper::error::SolarError;
use sun_helper::sun_times::*;
use sun_helper::types::Location;

fn springfield() -> Location {
    Location::default()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn minutes_between(a: chrono::DateTime<Utc>, b: chrono::DateTime<Utc>) -> i64 {
    (a - b).num_minutes().abs()
}

#[test]
fn test_default_location() {
    let loc = Location::default();
    assert_eq!(loc.latitude, 39.8);
    assert_eq!(loc.longitude, -89.6);
}

#[test]
fn test_springfield_equinox_times() {
    let times = sun_times(&springfield(), date(2026, 3, 21)).unwrap();
    let expected_noon = Utc.with_ymd_and_hms(2026, 3, 21, 18, 6, 0).unwrap();
    let expected_rise = Utc.with_ymd_and_hms(2026, 3, 21, 12, 3, 0).unwrap();
    let expected_set = Utc.with_ymd_and_hms(2026, 3, 22, 0, 9, 0).unwrap();
    assert!(minutes_between(times.midday, expected_noon) <= 5, "midday={}", times.midday);
    assert!(minutes_between(times.sunrise, expected_rise) <= 10, "sunrise={}", times.sunrise);
    assert!(minutes_between(times.sunset, expected_set) <= 10, "sunset={}", times.sunset);
}

#[test]
fn test_midday_is_centered() {
    let times = sun_times(&springfield(), date(2026, 7, 4)).unwrap();
    assert!(times.sunrise < times.midday && times.midday < times.sunset);
    let morning = times.midday - times.sunrise;
    let afternoon = times.sunset - times.midday;
    assert!((morning - afternoon).num_seconds().abs() <= 1);
}

#[test]
fn test_equator_equinox_day_length() {
    let equator = Location { latitude: 0.0, longitude: 0.0 };
    let times = sun_times(&equator, date(2026, 3, 21)).unwrap();
    let len = times.day_length();
    assert!(len > TimeDelta::hours(12) && len < TimeDelta::minutes(12 * 60 + 15), "{}", len);
}

#[test]
fn test_summer_days_longer_than_winter() {
    let summer = sun_times(&springfield(), date(2026, 6, 21)).unwrap();
    let winter = sun_times(&springfield(), date(2026, 12, 21)).unwrap();
    assert!(summer.day_length() > TimeDelta::hours(14));
    assert!(winter.day_length() < TimeDelta::hours(10));
}

#[test]
fn test_lower_horizon_lengthens_day() {
    let d = date(2026, 3, 21);
    let standard = sun_times(&springfield(), d).unwrap();
    let civil = sun_times_for_horizon(&springfield(), d, -6.0).unwrap();
    assert!(civil.sunrise < standard.sunrise);
    assert!(civil.sunset > standard.sunset);
    assert_eq!(civil.midday, standard.midday);
}

#[test]
fn test_polar_day_and_night() {
    let tromso = Location { latitude: 69.65, longitude: 18.96 };
    let june = date(2026, 6, 21);
    let december = date(2026, 12, 21);
    assert_eq!(sun_times(&tromso, june), Err(SolarError::SunNeverSets { date: june }));
    assert_eq!(
        sun_times(&tromso, december),
        Err(SolarError::SunNeverRises { date: december })
    );
}

#[test]
fn test_daylight_window_in_local_time() {
    let times = sun_times(&springfield(), date(2026, 3, 21)).unwrap();
    let window = times.daylight_window(&Chicago);
    // About 07:03 and 19:09 CDT.
    assert!((window.sunrise - 423).abs() <= 10, "sunrise={}", window.sunrise);
    assert!((window.sunset - 1149).abs() <= 10, "sunset={}", window.sunset);
}

#[test]
fn test_daylight_window_in_utc_wraps_past_midnight() {
    let times = sun_times(&springfield(), date(2026, 3, 21)).unwrap();
    let window = times.daylight_window(&Utc);
    assert!(window.sunset < window.sunrise);
}

#[test]
fn test_solar_noon_minutes_greenwich() {
    // Only the equation of time shifts noon at longitude 0.
    let noon = solar_noon_minutes(0.0, 80);
    assert!((noon - 727.5).abs() < 1.0, "noon={}", noon);
}

#[test]
fn test_today_has_times_for_temperate_location() {
    let now = current_date_time();
    let times = sun_times_today(&springfield()).unwrap();
    assert_eq!(times.midday.date_naive(), now.date_naive());
}
