//! Parses the city catalog: comma separated text with one header line.
//!
//! Two header conventions are understood for coordinates, `latitude`/`longitude`
//! and the shorter `lat`/`lon`. Fields are split on plain commas; quoted fields
//! are not supported, so a city or country name must not contain a comma.

use crate::catalog::error::SchemaError;
use crate::types::city_entry::CityEntry;
use log::{debug, warn};

const CITY: &str = "city";
const COUNTRY: &str = "country";

/// Which pair of column names carried the coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateConvention {
    /// `latitude` and `longitude`.
    LongNames,
    /// `lat` and `lon`.
    ShortNames,
}

impl CoordinateConvention {
    /// Conventions in the order they are tried.
    const PRIORITY: [CoordinateConvention; 2] = [
        CoordinateConvention::LongNames,
        CoordinateConvention::ShortNames,
    ];

    fn column_names(self) -> (&'static str, &'static str) {
        match self {
            CoordinateConvention::LongNames => ("latitude", "longitude"),
            CoordinateConvention::ShortNames => ("lat", "lon"),
        }
    }
}

/// Column positions resolved from a catalog header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub convention: CoordinateConvention,
    pub latitude: usize,
    pub longitude: usize,
    pub city: usize,
    pub country: Option<usize>,
}

impl ResolvedColumns {
    fn highest_index(&self) -> usize {
        [self.latitude, self.longitude, self.city]
            .into_iter()
            .chain(self.country)
            .max()
            .unwrap_or(0)
    }

    /// Builds an entry from one split row, `None` if the row is malformed.
    fn extract(&self, fields: &[&str]) -> Option<CityEntry> {
        if fields.len() <= self.highest_index() {
            return None;
        }
        let name = fields[self.city].trim();
        let latitude = fields[self.latitude].trim();
        let longitude = fields[self.longitude].trim();
        if name.is_empty() || !is_degrees(latitude) || !is_degrees(longitude) {
            return None;
        }
        let country = self
            .country
            .map(|idx| fields[idx].trim())
            .unwrap_or_default();

        Some(CityEntry {
            name: name.to_string(),
            country: country.to_string(),
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
        })
    }
}

fn is_degrees(value: &str) -> bool {
    value.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Resolves the column layout from a header line. Matching is case-insensitive.
///
/// # Errors
///
/// * [`SchemaError::IncompleteCoordinates`] when only one name of a coordinate pair is present.
/// * [`SchemaError::MissingColumn`] when no coordinate pair or no `city` column is present.
pub fn resolve_columns(header: &str) -> Result<ResolvedColumns, SchemaError> {
    let names: Vec<String> = header
        .trim_start_matches('\u{feff}')
        .split(',')
        .map(|name| name.trim().to_lowercase())
        .collect();
    let position = |wanted: &str| names.iter().position(|name| name == wanted);

    let mut coordinates = None;
    for convention in CoordinateConvention::PRIORITY {
        let (lat_name, lon_name) = convention.column_names();
        match (position(lat_name), position(lon_name)) {
            (Some(latitude), Some(longitude)) => {
                coordinates = Some((convention, latitude, longitude));
                break;
            }
            (Some(_), None) => {
                return Err(SchemaError::IncompleteCoordinates {
                    found: lat_name,
                    missing: lon_name,
                })
            }
            (None, Some(_)) => {
                return Err(SchemaError::IncompleteCoordinates {
                    found: lon_name,
                    missing: lat_name,
                })
            }
            (None, None) => {}
        }
    }
    let (convention, latitude, longitude) =
        coordinates.ok_or(SchemaError::MissingColumn("latitude"))?;
    let city = position(CITY).ok_or(SchemaError::MissingColumn(CITY))?;

    Ok(ResolvedColumns {
        convention,
        latitude,
        longitude,
        city,
        country: position(COUNTRY),
    })
}

/// Parses catalog text into cities, in the order they appear.
///
/// Blank lines are ignored. Rows that are too short to reach every resolved
/// column, have an empty city, or have coordinates that are not decimal degrees
/// are skipped with a warning.
///
/// # Errors
///
/// Returns a [`SchemaError`] when the header cannot be resolved, when there are no
/// data rows, or when every data row was skipped.
///
/// # Examples
///
/// ```
/// use cityweather::parse_catalog;
///
/// let cities = parse_catalog("latitude,longitude,city,country\n48.85,2.35,Paris,France\n")?;
/// assert_eq!(cities.len(), 1);
/// assert_eq!(cities[0].name, "Paris");
/// assert_eq!(cities[0].country, "France");
/// assert_eq!(cities[0].latitude, "48.85");
/// # Ok::<(), cityweather::SchemaError>(())
/// ```
pub fn parse_catalog(text: &str) -> Result<Vec<CityEntry>, SchemaError> {
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header) = lines.next().ok_or(SchemaError::MissingHeader)?;
    let columns = resolve_columns(header)?;

    let mut entries = Vec::new();
    let mut rows = 0;
    let mut skipped = 0;
    for (idx, line) in lines {
        rows += 1;
        let fields: Vec<&str> = line.split(',').collect();
        match columns.extract(&fields) {
            Some(entry) => entries.push(entry),
            None => {
                skipped += 1;
                warn!("Skipping malformed catalog row {}: {:?}", idx + 1, line);
            }
        }
    }

    if rows == 0 {
        return Err(SchemaError::NoDataRows);
    }
    if entries.is_empty() {
        return Err(SchemaError::NoValidRows { skipped });
    }
    debug!(
        "Parsed {} cities with {:?} coordinate columns ({} rows skipped)",
        entries.len(),
        columns.convention,
        skipped
    );
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(name: &str, country: &str, latitude: &str, longitude: &str) -> CityEntry {
        CityEntry {
            name: name.to_string(),
            country: country.to_string(),
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
        }
    }

    #[test]
    fn parses_long_header_with_country() {
        let cities =
            parse_catalog("latitude,longitude,city,country\n48.85,2.35,Paris,France\n").unwrap();
        assert_eq!(cities, vec![city("Paris", "France", "48.85", "2.35")]);
    }

    #[test]
    fn falls_back_to_short_header_without_country() {
        let text = "lat,lon,city\n52.52,13.40,Berlin\n-33.87,151.21,Sydney\n";
        let cities = parse_catalog(text).unwrap();
        assert_eq!(
            cities,
            vec![
                city("Berlin", "", "52.52", "13.40"),
                city("Sydney", "", "-33.87", "151.21"),
            ]
        );
    }

    #[test]
    fn header_is_case_insensitive_and_column_order_free() {
        let text = "Country, City ,LONGITUDE,Latitude\r\nJapan, Tokyo ,139.69,35.68\r\n";
        let cities = parse_catalog(text).unwrap();
        assert_eq!(cities, vec![city("Tokyo", "Japan", "35.68", "139.69")]);
    }

    #[test]
    fn resolves_convention_and_optional_country() {
        let columns = resolve_columns("\u{feff}city,lat,lon").unwrap();
        assert_eq!(columns.convention, CoordinateConvention::ShortNames);
        assert_eq!((columns.latitude, columns.longitude, columns.city), (1, 2, 0));
        assert_eq!(columns.country, None);
    }

    #[test]
    fn long_names_win_over_short_names() {
        let columns = resolve_columns("lat,lon,latitude,longitude,city").unwrap();
        assert_eq!(columns.convention, CoordinateConvention::LongNames);
        assert_eq!((columns.latitude, columns.longitude), (2, 3));
    }

    #[test]
    fn keeps_source_order_and_trims_fields() {
        let text = "latitude,longitude,city,country\n 1.5 , 2.5 , Zurich , Switzerland \n0,0,Accra,Ghana\n";
        let names: Vec<String> = parse_catalog(text)
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Zurich", "Accra"]);
    }

    #[test]
    fn skips_blank_and_short_rows() {
        let text = "latitude,longitude,city,country\n\n48.85,2.35,Paris,France\n   \n40.41,-3.70,Madrid\n";
        let cities = parse_catalog(text).unwrap();
        assert_eq!(cities, vec![city("Paris", "France", "48.85", "2.35")]);
    }

    #[test]
    fn skips_rows_with_unusable_values() {
        let text = "lat,lon,city\nnorth,2.35,Paris\n41.90,12.49,\n41.90,12.49,Rome\n";
        let cities = parse_catalog(text).unwrap();
        assert_eq!(cities, vec![city("Rome", "", "41.90", "12.49")]);
    }

    #[test]
    fn missing_city_column_is_schema_error() {
        assert_eq!(
            parse_catalog("latitude,longitude,name\n1,2,Oslo\n"),
            Err(SchemaError::MissingColumn("city"))
        );
    }

    #[test]
    fn missing_coordinates_is_schema_error() {
        assert_eq!(
            parse_catalog("x,y,city\n1,2,Oslo\n"),
            Err(SchemaError::MissingColumn("latitude"))
        );
    }

    #[test]
    fn half_a_coordinate_pair_is_schema_error() {
        assert_eq!(
            parse_catalog("latitude,lon,city\n1,2,Oslo\n"),
            Err(SchemaError::IncompleteCoordinates {
                found: "latitude",
                missing: "longitude"
            })
        );
        assert_eq!(
            parse_catalog("lon,city\n1,Oslo\n"),
            Err(SchemaError::IncompleteCoordinates {
                found: "lon",
                missing: "lat"
            })
        );
    }

    #[test]
    fn header_only_is_schema_error() {
        assert_eq!(
            parse_catalog("latitude,longitude,city,country\n"),
            Err(SchemaError::NoDataRows)
        );
        assert_eq!(
            parse_catalog("lat,lon,city\n\n  \n"),
            Err(SchemaError::NoDataRows)
        );
    }

    #[test]
    fn empty_text_is_schema_error() {
        assert_eq!(parse_catalog(""), Err(SchemaError::MissingHeader));
        assert_eq!(parse_catalog("\n\n"), Err(SchemaError::MissingHeader));
    }

    #[test]
    fn only_malformed_rows_is_schema_error() {
        assert_eq!(
            parse_catalog("lat,lon,city\n1,2\n3\n"),
            Err(SchemaError::NoValidRows { skipped: 2 })
        );
    }
}
