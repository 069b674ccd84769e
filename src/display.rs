//! Presentation helpers: turning forecast days into the text and icon paths
//! shown on a day card.

use crate::types::forecast_day::{ForecastDay, TemperatureRange};
use crate::types::weather_condition::ConditionCode;
use bon::Builder;

const NOT_AVAILABLE: &str = "n/a";

/// Formats a `YYYYMMDD` date as `YYYY/MM/DD`. Anything else is returned unchanged.
///
/// ```
/// use cityweather::format_date;
///
/// assert_eq!(format_date("20240115"), "2024/01/15");
/// assert_eq!(format_date("soon"), "soon");
/// ```
pub fn format_date(yyyymmdd: &str) -> String {
    if yyyymmdd.len() != 8 || !yyyymmdd.bytes().all(|b| b.is_ascii_digit()) {
        return yyyymmdd.to_string();
    }
    format!(
        "{}/{}/{}",
        &yyyymmdd[0..4],
        &yyyymmdd[4..6],
        &yyyymmdd[6..8]
    )
}

/// Maps condition codes to icon asset paths.
///
/// Known codes resolve to `{directory}/{code}.png`; unknown or empty codes
/// resolve to `{directory}/{fallback}.png`.
///
/// ```
/// use cityweather::{ConditionCode, IconResolver};
///
/// let icons = IconResolver::builder().directory("static/icons").build();
/// assert_eq!(icons.resolve(&ConditionCode::new("ts")), "static/icons/ts.png");
/// assert_eq!(icons.resolve(&ConditionCode::new("tornado")), "static/icons/unknown.png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct IconResolver {
    #[builder(into, default = "weather_icons".to_string())]
    directory: String,
    #[builder(into, default = "unknown".to_string())]
    fallback: String,
}

impl Default for IconResolver {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl IconResolver {
    pub fn resolve(&self, code: &ConditionCode) -> String {
        let name = match code.condition() {
            Some(condition) => condition.code(),
            None => self.fallback.as_str(),
        };
        format!("{}/{}.png", self.directory.trim_end_matches('/'), name)
    }
}

/// Render-ready text of one forecast day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCard {
    /// Date as `YYYY/MM/DD`.
    pub title: String,
    pub icon_path: String,
    /// Alt text for the icon: a description for known codes, the raw code otherwise.
    pub icon_alt: String,
    /// The raw condition code.
    pub condition: String,
    pub temperature: String,
    pub wind: String,
}

impl DayCard {
    pub fn new(day: &ForecastDay, icons: &IconResolver) -> Self {
        let icon_alt = match day.condition.condition() {
            Some(condition) => condition.description().to_string(),
            None => day.condition.to_string(),
        };
        let temperature = match day.temperature {
            TemperatureRange::Range { max, min } => format!("Temp: {max}°C / {min}°C"),
            TemperatureRange::Single(value) => format!("Temp: {value}°C"),
            TemperatureRange::Unavailable => format!("Temp: {NOT_AVAILABLE}"),
        };
        let wind = match day.wind_max_ms {
            Some(speed) => format!("Wind: {speed} m/s"),
            None => format!("Wind: {NOT_AVAILABLE}"),
        };

        Self {
            title: format_date(&day.date),
            icon_path: icons.resolve(&day.condition),
            icon_alt,
            condition: day.condition.to_string(),
            temperature,
            wind,
        }
    }
}

/// Builds one card per day, in forecast order.
pub fn day_cards(days: &[ForecastDay], icons: &IconResolver) -> Vec<DayCard> {
    days.iter().map(|day| DayCard::new(day, icons)).collect()
}
