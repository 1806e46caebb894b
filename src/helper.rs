use chrono::{DateTime, NaiveDate, TimeZone};

use crate::angles;
use crate::error::Result;
use crate::sun_times;
use crate::types::{HelperConfig, SunPosition, SunTimes, Vector3};

/// Bundles a configured location with the free functions so a front end can
/// ask "where is the sun now" without threading coordinates around.
#[derive(Debug, Clone, Copy, Default)]
pub struct SunPositionHelper {
    config: HelperConfig,
}

impl SunPositionHelper {
    pub fn new(config: HelperConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HelperConfig {
        &self.config
    }

    pub fn position_at<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> SunPosition {
        let loc = self.config.location;
        angles::solar_position(loc.latitude, loc.longitude, dt)
    }

    pub fn position_now(&self) -> SunPosition {
        self.position_at(&sun_times::current_date_time())
    }

    pub fn relative_position(&self, pos: &SunPosition) -> Vector3 {
        angles::spherical_to_cartesian(pos.azimuth, pos.elevation, self.config.sun_distance)
    }

    pub fn sun_times_on(&self, date: NaiveDate) -> Result<SunTimes> {
        sun_times::sun_times_for_horizon(&self.config.location, date, self.config.horizon_elevation)
    }

    pub fn sun_times_today(&self) -> Result<SunTimes> {
        self.sun_times_on(sun_times::current_date_time().date_naive())
    }
}
