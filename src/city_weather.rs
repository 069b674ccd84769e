//! This module provides the main entry point of the crate: a client that loads the
//! city catalog and looks up 7-day forecasts for its cities.

use crate::catalog::catalog_loader::{load_catalog_text, CatalogSource};
use crate::catalog::parse_catalog::parse_catalog;
use crate::catalog::error::CatalogError;
use crate::error::CityWeatherError;
use crate::forecast::fetcher::{ForecastFetcher, DEFAULT_FORECAST_ENDPOINT};
use crate::lookup::{LookupOutcome, LookupSequencer};
use crate::types::city_entry::CityEntry;
use crate::types::forecast_day::ForecastDay;
use bon::bon;
use log::{debug, info};
use reqwest::Client;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The client for loading the city catalog and fetching forecasts.
///
/// Create one with [`CityWeather::builder()`]. Every operation is independent: a
/// failed catalog load does not affect forecast lookups and vice versa, and nothing
/// is retried.
///
/// # Examples
///
/// ```no_run
/// # use cityweather::{CatalogSource, CityWeather, CityWeatherError, LookupOutcome};
/// # #[tokio::main]
/// # async fn main() -> Result<(), CityWeatherError> {
/// let client = CityWeather::builder()
///     .catalog(CatalogSource::Path("data/city_coordinates.csv".into()))
///     .build()?;
///
/// let cities = client.load_catalog().await?;
/// if let LookupOutcome::Current(days) = client.lookup(&cities[0]).await? {
///     println!("{} days for {}", days.len(), cities[0].label());
/// }
/// # Ok(())
/// # }
/// ```
pub struct CityWeather {
    client: Client,
    catalog: CatalogSource,
    fetcher: ForecastFetcher,
    sequencer: LookupSequencer,
}

#[bon]
impl CityWeather {
    /// Builds a client.
    ///
    /// # Arguments
    ///
    /// * `.catalog(CatalogSource)`: **Required.** Where the city CSV is read from.
    /// * `.forecast_endpoint(impl Into<String>)`: Optional. Forecast API endpoint, defaults to the public 7Timer API.
    /// * `.timeout(Duration)`: Optional. Per-request timeout, defaults to 10 seconds.
    ///
    /// # Errors
    ///
    /// Returns [`CityWeatherError::ClientBuild`] if the HTTP client cannot be created.
    #[builder]
    pub fn new(
        catalog: CatalogSource,
        #[builder(into)] forecast_endpoint: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, CityWeatherError> {
        let client = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(CityWeatherError::ClientBuild)?;
        let endpoint =
            forecast_endpoint.unwrap_or_else(|| DEFAULT_FORECAST_ENDPOINT.to_string());

        Ok(Self {
            fetcher: ForecastFetcher::new(client.clone(), endpoint),
            client,
            catalog,
            sequencer: LookupSequencer::new(),
        })
    }

    /// Loads and parses the city catalog.
    ///
    /// # Errors
    ///
    /// [`CityWeatherError::Catalog`] when the text cannot be read or its header and
    /// rows do not describe any city.
    pub async fn load_catalog(&self) -> Result<Vec<CityEntry>, CityWeatherError> {
        let text = load_catalog_text(&self.client, &self.catalog).await?;
        let cities = parse_catalog(&text).map_err(CatalogError::from)?;
        info!("Loaded {} cities", cities.len());
        Ok(cities)
    }

    /// Fetches the forecast for a coordinate pair.
    ///
    /// ```no_run
    /// # use cityweather::{CatalogSource, CityWeather, CityWeatherError};
    /// # async fn run(client: CityWeather) -> Result<(), CityWeatherError> {
    /// let days = client
    ///     .forecast()
    ///     .latitude("48.85")
    ///     .longitude("2.35")
    ///     .call()
    ///     .await?;
    /// assert!(days.len() <= 7);
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn forecast(
        &self,
        latitude: &str,
        longitude: &str,
    ) -> Result<Vec<ForecastDay>, CityWeatherError> {
        Ok(self.fetcher.fetch(latitude, longitude).await?)
    }

    /// Fetches the forecast for a catalog city.
    pub async fn forecast_for_city(
        &self,
        city: &CityEntry,
    ) -> Result<Vec<ForecastDay>, CityWeatherError> {
        self.forecast()
            .latitude(&city.latitude)
            .longitude(&city.longitude)
            .call()
            .await
    }

    /// Looks up the forecast for `city`, superseding any lookup still in flight.
    ///
    /// Starting another lookup cancels this one: its request is dropped, any result
    /// or error is discarded, and [`LookupOutcome::Superseded`] is returned.
    pub async fn lookup(&self, city: &CityEntry) -> Result<LookupOutcome, CityWeatherError> {
        let ticket = self.sequencer.begin();

        tokio::select! {
            biased;
            _ = ticket.superseded() => {
                debug!("Abandoning stale forecast lookup for {}", city.label());
                Ok(LookupOutcome::Superseded)
            }
            result = self.forecast_for_city(city) => {
                if !ticket.is_current() {
                    debug!("Discarding stale forecast for {}", city.label());
                    return Ok(LookupOutcome::Superseded);
                }
                result.map(LookupOutcome::Current)
            }
        }
    }
}
