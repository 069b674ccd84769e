mod catalog;
mod city_weather;
mod display;
mod error;
mod forecast;
mod lookup;
mod types;

pub use city_weather::*;
pub use error::CityWeatherError;

pub use catalog::catalog_loader::{load_catalog_text, CatalogSource};
pub use catalog::error::{CatalogError, SchemaError};
pub use catalog::parse_catalog::{
    parse_catalog, resolve_columns, CoordinateConvention, ResolvedColumns,
};

pub use forecast::error::ForecastError;
pub use forecast::fetcher::{ForecastFetcher, DEFAULT_FORECAST_ENDPOINT};
pub use forecast::normalize::{
    normalize, normalize_json, ForecastDocument, RawDate, RawDay, RawTemperature,
    MAX_FORECAST_DAYS,
};

pub use lookup::{LookupOutcome, LookupSequencer, LookupTicket};

pub use display::{day_cards, format_date, DayCard, IconResolver};

pub use types::city_entry::CityEntry;
pub use types::forecast_day::{ForecastDay, TemperatureRange};
pub use types::weather_condition::{ConditionCode, WeatherCondition};
