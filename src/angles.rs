use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

use crate::types::{SunPosition, Vector3};

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DEGREES_PER_HOUR: f64 = 15.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if a >= 360.0 { 0.0 } else { a }
}

pub fn intermediate_angle_b(n: i32) -> f64 {
    deg_to_rad((n - 1) as f64 * (360.0 / 365.0))
}

/// Equation of time in minutes for day-of-year `n`.
pub fn equation_of_time(n: i32) -> f64 {
    let b = intermediate_angle_b(n);
    229.18
        * (0.000075
            + 0.001868 * b.cos()
            - 0.032077 * b.sin()
            - 0.014615 * (2.0 * b).cos()
            - 0.040849 * (2.0 * b).sin())
}

/// Hours to add to UTC to get local solar time.
pub fn utc_lst_correction(longitude: f64, eot: f64) -> f64 {
    (4.0 * longitude + eot) / 60.0
}

pub fn hour_angle(local_solar_time: f64) -> f64 {
    DEGREES_PER_HOUR * (local_solar_time - 12.0)
}

pub fn solar_declination(n: i32) -> f64 {
    EARTH_AXIAL_TILT * deg_to_rad(360.0 * ((284 + n) as f64 / 365.0)).sin()
}

pub fn solar_zenith_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let cos_zenith =
        lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * dec_rad.cos() * ha_rad.cos();
    rad_to_deg(cos_zenith.clamp(-1.0, 1.0).acos())
}

pub fn solar_altitude(zenith_angle: f64) -> f64 {
    90.0 - zenith_angle
}

/// Compass bearing of the sun, clockwise from north in `[0, 360)`.
pub fn solar_azimuth(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let sin_az = -dec_rad.cos() * ha_rad.sin();
    let cos_az = dec_rad.sin() * lat_rad.cos() - dec_rad.cos() * lat_rad.sin() * ha_rad.cos();
    let az_rad = sin_az.atan2(cos_az);
    normalize_angle(rad_to_deg(az_rad))
}

/// Approximate azimuth/elevation of the sun seen from `(latitude, longitude)`
/// at instant `dt`. Good to roughly a degree, which is plenty for placing a
/// sun icon or driving lights.
pub fn solar_position<Tz: TimeZone>(latitude: f64, longitude: f64, dt: &DateTime<Tz>) -> SunPosition {
    let utc = dt.with_timezone(&Utc);
    let utc_hours = utc.hour() as f64 + utc.minute() as f64 / 60.0 + utc.second() as f64 / 3600.0;
    let n = utc.ordinal() as i32;
    let eot = equation_of_time(n);
    let decl = solar_declination(n);
    let lst = (utc_hours + utc_lst_correction(longitude, eot)).rem_euclid(24.0);
    let ha = hour_angle(lst);
    let zenith = solar_zenith_angle(latitude, decl, ha);

    let pos = SunPosition {
        azimuth: solar_azimuth(latitude, decl, ha),
        elevation: solar_altitude(zenith),
    };
    log::debug!(
        "sun at {} ({:.3}, {:.3}): azimuth={:.2} elevation={:.2}",
        utc,
        latitude,
        longitude,
        pos.azimuth,
        pos.elevation
    );
    pos
}

/// Projects a direction given in degrees onto a y-up frame where +z points
/// north and +x points east.
pub fn spherical_to_cartesian(azimuth: f64, elevation: f64, distance: f64) -> Vector3 {
    let az = deg_to_rad(azimuth);
    let el = deg_to_rad(elevation);
    Vector3 {
        x: distance * el.cos() * az.sin(),
        y: distance * el.sin(),
        z: distance * el.cos() * az.cos(),
    }
}
