//! Turns a 7Timer forecast document into at most seven [`ForecastDay`] records.
//!
//! The `dataseries` entries differ between upstream products: dates may be numbers
//! or strings, `temp2m` may be a `{max, min}` object or a single number, and any
//! field may be missing. Deserialization here never fails on a field's shape; a
//! field it cannot read is treated as absent.

use crate::forecast::error::ForecastError;
use crate::types::forecast_day::{ForecastDay, TemperatureRange};
use crate::types::weather_condition::ConditionCode;
use log::debug;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;

/// Upper bound on the number of days in a normalized forecast.
pub const MAX_FORECAST_DAYS: usize = 7;

/// The forecast document as returned by the service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastDocument {
    #[serde(default, deserialize_with = "lenient")]
    pub dataseries: Option<Vec<RawDay>>,
}

impl ForecastDocument {
    /// Deserializes a response body.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// One upstream `dataseries` entry, possibly at sub-daily granularity.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDay {
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<RawDate>,
    #[serde(default, deserialize_with = "lenient")]
    pub weather: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub temp2m: Option<RawTemperature>,
    #[serde(default, deserialize_with = "lenient")]
    pub wind10m_max: Option<f64>,
}

/// An upstream date: an integer, a whole-valued float, or text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
    Number(u64),
    Float(f64),
    Text(String),
}

impl RawDate {
    /// The date as an eight digit `YYYYMMDD` string, if it is one.
    fn to_yyyymmdd(&self) -> Option<String> {
        let text = match self {
            RawDate::Number(n) => n.to_string(),
            // Only whole, positive values, e.g. `20240115.0`
            RawDate::Float(f) if *f >= 0.0 && f.fract() == 0.0 && *f < u64::MAX as f64 => {
                (*f as u64).to_string()
            }
            RawDate::Float(_) => return None,
            RawDate::Text(s) => s.trim().to_string(),
        };
        (text.len() == 8 && text.bytes().all(|b| b.is_ascii_digit())).then_some(text)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawTemperature {
    Scalar(f64),
    Range {
        #[serde(default, deserialize_with = "lenient")]
        max: Option<f64>,
        #[serde(default, deserialize_with = "lenient")]
        min: Option<f64>,
    },
}

impl RawTemperature {
    fn to_range(&self) -> TemperatureRange {
        match *self {
            RawTemperature::Scalar(value) => TemperatureRange::Single(value),
            RawTemperature::Range {
                max: Some(max),
                min: Some(min),
            } => TemperatureRange::Range { max, min },
            RawTemperature::Range {
                max: Some(value),
                min: None,
            }
            | RawTemperature::Range {
                max: None,
                min: Some(value),
            } => TemperatureRange::Single(value),
            RawTemperature::Range {
                max: None,
                min: None,
            } => TemperatureRange::Unavailable,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(IgnoredAny),
}

/// Reads an optional field, mapping values of an unexpected shape to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<Lenient<T>>::deserialize(deserializer)? {
        Some(Lenient::Value(value)) => Some(value),
        Some(Lenient::Other(_)) | None => None,
    })
}

fn to_forecast_day(date: String, raw: &RawDay) -> ForecastDay {
    ForecastDay {
        date,
        condition: ConditionCode::new(raw.weather.clone().unwrap_or_default()),
        temperature: raw
            .temp2m
            .as_ref()
            .map_or(TemperatureRange::Unavailable, RawTemperature::to_range),
        wind_max_ms: raw.wind10m_max,
    }
}

/// Normalizes a forecast document into daily records.
///
/// Entries are taken in document order; the first entry for each date wins and
/// collection stops after [`MAX_FORECAST_DAYS`] distinct dates. Entries without an
/// eight digit date are ignored. The result is never re-sorted.
///
/// # Errors
///
/// [`ForecastError::EmptyForecast`] when `dataseries` is missing, empty, or has no
/// entry with a usable date.
pub fn normalize(document: &ForecastDocument) -> Result<Vec<ForecastDay>, ForecastError> {
    let series = match document.dataseries.as_deref() {
        Some(series) if !series.is_empty() => series,
        _ => return Err(ForecastError::EmptyForecast),
    };

    let mut seen = HashSet::new();
    let mut days = Vec::with_capacity(MAX_FORECAST_DAYS);
    for raw in series {
        let Some(date) = raw.date.as_ref().and_then(RawDate::to_yyyymmdd) else {
            debug!("Ignoring dataseries entry without a usable date: {:?}", raw.date);
            continue;
        };
        if !seen.insert(date.clone()) {
            debug!("Dropping repeated dataseries entry for {}", date);
            continue;
        }
        days.push(to_forecast_day(date, raw));
        if days.len() == MAX_FORECAST_DAYS {
            break;
        }
    }

    if days.is_empty() {
        return Err(ForecastError::EmptyForecast);
    }
    Ok(days)
}

/// Parses and normalizes a forecast JSON body.
///
/// # Examples
///
/// ```
/// use cityweather::{normalize_json, TemperatureRange};
///
/// let body = r#"{"dataseries": [
///     {"date": 20240115, "weather": "rain", "temp2m": {"max": 10, "min": 2}, "wind10m_max": 3},
///     {"date": 20240115, "weather": "clear", "temp2m": {"max": 12, "min": 4}, "wind10m_max": 2}
/// ]}"#;
/// let days = normalize_json(body)?;
/// assert_eq!(days.len(), 1);
/// assert_eq!(days[0].condition.as_str(), "rain");
/// assert_eq!(days[0].temperature, TemperatureRange::Range { max: 10.0, min: 2.0 });
/// # Ok::<(), cityweather::ForecastError>(())
/// ```
pub fn normalize_json(text: &str) -> Result<Vec<ForecastDay>, ForecastError> {
    let document = ForecastDocument::from_json(text)?;
    normalize(&document)
}
