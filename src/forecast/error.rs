use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Forecast response contains no usable days")]
    EmptyForecast,

    #[error("Latitude and longitude are required for a forecast lookup")]
    MissingCoordinates,

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse forecast JSON")]
    JsonParse(#[from] serde_json::Error),
}
