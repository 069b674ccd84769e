//! Defines [`ForecastDay`], one normalized day of a forecast, and the
//! [`TemperatureRange`] tri-state it carries.

use crate::types::weather_condition::ConditionCode;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How much temperature information the upstream entry carried.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TemperatureRange {
    /// Both a daily maximum and minimum, in °C.
    Range { max: f64, min: f64 },
    /// A single temperature value, in °C.
    Single(f64),
    /// No temperature was reported.
    Unavailable,
}

impl TemperatureRange {
    /// The maximum in °C; a single value counts as the maximum.
    pub fn max(&self) -> Option<f64> {
        match *self {
            TemperatureRange::Range { max, .. } => Some(max),
            TemperatureRange::Single(value) => Some(value),
            TemperatureRange::Unavailable => None,
        }
    }

    /// The minimum in °C; a single value counts as the minimum.
    pub fn min(&self) -> Option<f64> {
        match *self {
            TemperatureRange::Range { min, .. } => Some(min),
            TemperatureRange::Single(value) => Some(value),
            TemperatureRange::Unavailable => None,
        }
    }

    /// True when only one value was reported for the day.
    pub fn is_single(&self) -> bool {
        matches!(self, TemperatureRange::Single(_))
    }
}

/// One day of a normalized forecast.
///
/// Produced by [`crate::normalize`]. A forecast never holds more than seven of
/// these and never two with the same `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Calendar date as eight digits, `YYYYMMDD`.
    pub date: String,
    /// Upstream condition token, passed through unchanged.
    pub condition: ConditionCode,
    pub temperature: TemperatureRange,
    /// Maximum 10 m wind speed in m/s, if reported.
    pub wind_max_ms: Option<f64>,
}

impl ForecastDay {
    /// Daily maximum in °C. A single reported value answers both max and min;
    /// use [`TemperatureRange::is_single`] to tell the cases apart.
    pub fn temperature_max_c(&self) -> Option<f64> {
        self.temperature.max()
    }

    /// Daily minimum in °C.
    pub fn temperature_min_c(&self) -> Option<f64> {
        self.temperature.min()
    }

    /// The date as a calendar value, `None` if it is not a real date.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use cityweather::{ConditionCode, ForecastDay, TemperatureRange};
    ///
    /// let day = ForecastDay {
    ///     date: "20240229".to_string(),
    ///     condition: ConditionCode::new("clear"),
    ///     temperature: TemperatureRange::Unavailable,
    ///     wind_max_ms: None,
    /// };
    /// assert_eq!(day.naive_date(), NaiveDate::from_ymd_opt(2024, 2, 29));
    /// ```
    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y%m%d").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(temperature: TemperatureRange) -> ForecastDay {
        ForecastDay {
            date: "20240115".to_string(),
            condition: ConditionCode::new("rain"),
            temperature,
            wind_max_ms: Some(3.0),
        }
    }

    #[test]
    fn range_reports_max_and_min() {
        let day = day(TemperatureRange::Range { max: 10.0, min: 2.0 });
        assert_eq!(day.temperature_max_c(), Some(10.0));
        assert_eq!(day.temperature_min_c(), Some(2.0));
        assert!(!day.temperature.is_single());
    }

    #[test]
    fn single_value_answers_both_but_stays_single() {
        let day = day(TemperatureRange::Single(7.0));
        assert_eq!(day.temperature_max_c(), Some(7.0));
        assert_eq!(day.temperature_min_c(), Some(7.0));
        assert!(day.temperature.is_single());
    }

    #[test]
    fn unavailable_reports_nothing() {
        let day = day(TemperatureRange::Unavailable);
        assert_eq!(day.temperature_max_c(), None);
        assert_eq!(day.temperature_min_c(), None);
    }

    #[test]
    fn impossible_date_has_no_calendar_value() {
        let mut day = day(TemperatureRange::Unavailable);
        day.date = "20231345".to_string();
        assert_eq!(day.naive_date(), None);
    }
}
