use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Display format for observation timestamps: minute precision,
/// 24-hour clock, no seconds or offset.
pub const TIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One canonical hourly weather reading for a city.
///
/// Field names are the stable semantic names; the raw feed keys they
/// come from are listed in [`raw_keys`]. Values are kept exactly as
/// received, the normalizer validates types but not ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// City the reading belongs to. Non-empty.
    pub city: String,
    /// Forecast time. The feed carries no offset, so this is naive.
    pub timestamp: NaiveDateTime,
    /// Air temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Precipitation probability, 0-100.
    pub precip_probability_pct: f64,
    /// Total precipitation amount in millimetres.
    pub precip_amount_mm: f64,
    /// Cloud cover, 0-100.
    pub cloud_cover_pct: f64,
    /// Rain amount in millimetres.
    pub rain_mm: f64,
    /// Snowfall amount in millimetres.
    pub snowfall_mm: f64,
    /// Wind speed in km/h.
    pub wind_speed_kmh: f64,
    /// Wind direction in degrees, 0-360.
    pub wind_direction_deg: f64,
    /// WMO weather code. Opaque to the pipeline.
    pub weather_code: i64,
}

impl Observation {
    /// Render the timestamp for display as `YYYY-MM-DD HH:mm`.
    #[must_use]
    pub fn formatted_time(&self) -> String {
        self.timestamp.format(TIME_DISPLAY_FORMAT).to_string()
    }
}

/// Raw feed keys, one per canonical field.
///
/// The rename table is fixed and total: every key must be present in
/// every raw record for normalization to succeed.
pub mod raw_keys {
    pub const CITY: &str = "city";
    pub const TIME: &str = "time";
    pub const TEMPERATURE: &str = "temperature_2m";
    pub const PRECIP_PROBABILITY: &str = "precipitation_probability";
    pub const PRECIP_AMOUNT: &str = "precipitation";
    pub const CLOUD_COVER: &str = "cloudcover";
    pub const RAIN: &str = "rain";
    pub const SNOWFALL: &str = "snowfall";
    pub const WIND_SPEED: &str = "windspeed_10m";
    pub const WIND_DIRECTION: &str = "winddirection_10m";
    pub const WEATHER_CODE: &str = "weathercode";
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn observation_at(ts: NaiveDateTime) -> Observation {
        Observation {
            city: "Sopron".to_string(),
            timestamp: ts,
            temperature_c: -2.5,
            precip_probability_pct: 10.0,
            precip_amount_mm: 0.0,
            cloud_cover_pct: 80.0,
            rain_mm: 0.0,
            snowfall_mm: 0.0,
            wind_speed_kmh: 12.0,
            wind_direction_deg: 270.0,
            weather_code: 3,
        }
    }

    #[test]
    fn formatted_time_is_minute_precision() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let obs = observation_at(ts);
        assert_eq!(obs.formatted_time(), "2024-01-01 00:00");
    }

    #[test]
    fn formatted_time_is_always_sixteen_chars() {
        let ts = NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        let obs = observation_at(ts);
        let s = obs.formatted_time();
        assert_eq!(s.len(), 16);
        assert_eq!(s, "2024-12-31 23:59");
    }
}
