use chrono::{NaiveDate, TimeZone};
use chrono_tz::America::Chicago;

use sun_helper::{minutes_to_time_string, HelperConfig, SunPositionHelper};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let helper = SunPositionHelper::new(HelperConfig::default());
    let loc = helper.config().location;

    let dt = Chicago
        .with_ymd_and_hms(2026, 3, 21, 12, 0, 0)
        .single()
        .ok_or("ambiguous local time")?;
    let date = NaiveDate::from_ymd_opt(2026, 3, 21).ok_or("bad date")?;

    let pos = helper.position_at(&dt);
    let icon = helper.relative_position(&pos);
    let times = helper.sun_times_on(date)?;
    let window = times.daylight_window(&Chicago);

    println!("=== Sun Position Example ===");
    println!(
        "Location: Springfield, IL ({:.1}°N, {:.1}°W)",
        loc.latitude, -loc.longitude
    );
    println!("Date/Time: {}", dt);
    println!();
    println!("--- Position ---");
    println!("Azimuth: {:.2}° (0°=N, 90°=E, 180°=S)", pos.azimuth);
    println!("Elevation: {:.2}°", pos.elevation);
    println!("Scene vector: ({:.1}, {:.1}, {:.1})", icon.x, icon.y, icon.z);
    println!();
    println!("--- Daylight ---");
    println!("Sunrise: {}", minutes_to_time_string(window.sunrise));
    println!("Midday:  {}", times.midday.with_timezone(&Chicago));
    println!("Sunset:  {}", minutes_to_time_string(window.sunset));
    for progress in [0, 25, 50, 75, 100] {
        let t = window.progress_to_time(progress);
        println!("{:>3}% -> {:02}:{:02}", progress, t.hour, t.minute);
    }
    println!("Progress at 15:00: {}%", window.time_to_progress("15:00")?);

    Ok(())
}
