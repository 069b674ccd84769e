use crate::forecast::error::ForecastError;
use crate::forecast::normalize::normalize_json;
use crate::types::forecast_day::ForecastDay;
use log::{info, warn};
use reqwest::Client;

/// The public 7Timer API endpoint.
pub const DEFAULT_FORECAST_ENDPOINT: &str = "https://www.7timer.info/bin/api.pl";

/// 7Timer product giving one entry per day with a max/min temperature.
const PRODUCT: &str = "civillight";

/// Requests 7Timer forecasts and normalizes the responses.
pub struct ForecastFetcher {
    client: Client,
    endpoint: String,
}

impl ForecastFetcher {
    /// Creates a fetcher that sends its requests through `client` to `endpoint`.
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Fetches and normalizes the forecast for a coordinate pair.
    ///
    /// Coordinates are forwarded as given; they only have to be non-empty.
    pub async fn fetch(
        &self,
        latitude: &str,
        longitude: &str,
    ) -> Result<Vec<ForecastDay>, ForecastError> {
        let latitude = latitude.trim();
        let longitude = longitude.trim();
        if latitude.is_empty() || longitude.is_empty() {
            return Err(ForecastError::MissingCoordinates);
        }

        let body = self.download(latitude, longitude).await?;
        let days = normalize_json(&body)?;
        info!(
            "Received {} forecast days for {},{}",
            days.len(),
            latitude,
            longitude
        );
        Ok(days)
    }

    async fn download(&self, latitude: &str, longitude: &str) -> Result<String, ForecastError> {
        let url = &self.endpoint;
        info!("Requesting forecast for {},{} from {}", latitude, longitude, url);

        let response = self
            .client
            .get(url)
            .query(&[
                ("lon", longitude),
                ("lat", latitude),
                ("product", PRODUCT),
                ("output", "json"),
            ])
            .send()
            .await
            .map_err(|e| ForecastError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    ForecastError::HttpStatus {
                        url: url.clone(),
                        status,
                        source: e,
                    }
                } else {
                    ForecastError::NetworkRequest(url.clone(), e)
                });
            }
        };

        response
            .text()
            .await
            .map_err(|e| ForecastError::NetworkRequest(url.clone(), e))
    }
}
