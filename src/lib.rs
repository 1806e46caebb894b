pub mod angles;
pub mod daylight;
pub mod error;
pub mod helper;
pub mod sun_times;
pub mod types;

pub use angles::{
    deg_to_rad, equation_of_time, hour_angle, normalize_angle, rad_to_deg, solar_altitude,
    solar_azimuth, solar_declination, solar_position, solar_zenith_angle, spherical_to_cartesian,
    DEGREES_PER_HOUR, EARTH_AXIAL_TILT,
};

pub use daylight::{
    minutes_to_24h_string, minutes_to_progress, minutes_to_time, minutes_to_time_string,
    parse_time_to_minutes, parse_time_to_minutes_lenient, progress_to_time, time_to_minutes,
    time_to_progress, MINUTES_PER_DAY,
};

pub use error::{Result, SolarError};

pub use helper::SunPositionHelper;

pub use sun_times::{
    current_date_time, solar_noon_minutes, sun_times, sun_times_for_horizon, sun_times_today,
    STANDARD_HORIZON,
};

pub use types::{
    ClockTime, DaylightWindow, HelperConfig, Location, SunPosition, SunTimes, Vector3,
};
