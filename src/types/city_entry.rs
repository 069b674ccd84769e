//! Defines [`CityEntry`], one selectable city from the catalog.

use serde::{Deserialize, Serialize};

/// A named geographic coordinate parsed from one catalog row.
///
/// Coordinates are kept as the strings found in the catalog so they can be
/// forwarded to the forecast service exactly as written. The parser only
/// produces entries whose `name` is non-empty and whose coordinates parse as
/// decimal degrees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityEntry {
    /// City name, e.g. "Paris".
    pub name: String,
    /// Country name, or an empty string when the catalog has no country column.
    pub country: String,
    /// Latitude in decimal degrees, as written in the catalog.
    pub latitude: String,
    /// Longitude in decimal degrees, as written in the catalog.
    pub longitude: String,
}

impl CityEntry {
    /// Human readable label for a city selector.
    ///
    /// ```
    /// use cityweather::CityEntry;
    ///
    /// let paris = CityEntry {
    ///     name: "Paris".into(),
    ///     country: "France".into(),
    ///     latitude: "48.85".into(),
    ///     longitude: "2.35".into(),
    /// };
    /// assert_eq!(paris.label(), "Paris, France");
    /// ```
    pub fn label(&self) -> String {
        if self.country.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.country)
        }
    }

    /// The `"lat,lon"` pair used as the selector value.
    pub fn coordinate_value(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }

    /// Latitude and longitude parsed as degrees.
    pub fn lat_lon(&self) -> Option<(f64, f64)> {
        let lat = self.latitude.parse::<f64>().ok()?;
        let lon = self.longitude.parse::<f64>().ok()?;
        Some((lat, lon))
    }
}
