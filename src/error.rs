use crate::catalog::error::CatalogError;
use crate::forecast::error::ForecastError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CityWeatherError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error("Failed to build the HTTP client")]
    ClientBuild(#[source] reqwest::Error),
}

impl CityWeatherError {
    /// Short status line for the user. Each failure only affects the operation
    /// that raised it.
    pub fn user_message(&self) -> &'static str {
        match self {
            CityWeatherError::Catalog(_) => "Could not load city list.",
            CityWeatherError::Forecast(ForecastError::EmptyForecast) => "No forecast available.",
            CityWeatherError::Forecast(ForecastError::MissingCoordinates) => {
                "Please select a city."
            }
            CityWeatherError::Forecast(_) => "Error loading forecast.",
            CityWeatherError::ClientBuild(_) => "Could not start the forecast client.",
        }
    }
}
