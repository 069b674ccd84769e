use crate::catalog::error::CatalogError;
use log::{info, warn};
use reqwest::Client;
use std::path::PathBuf;

/// Where the catalog text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A CSV file on the local filesystem.
    Path(PathBuf),
    /// A CSV resource fetched with an HTTP GET.
    Url(String),
    /// CSV text already in memory, e.g. bundled with `include_str!`.
    Inline(String),
}

impl CatalogSource {
    fn describe(&self) -> String {
        match self {
            CatalogSource::Path(path) => path.display().to_string(),
            CatalogSource::Url(url) => url.clone(),
            CatalogSource::Inline(_) => "inline text".to_string(),
        }
    }
}

/// Reads the raw catalog text from `source`.
pub async fn load_catalog_text(
    client: &Client,
    source: &CatalogSource,
) -> Result<String, CatalogError> {
    info!("Loading city catalog from {}", source.describe());
    match source {
        CatalogSource::Path(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CatalogError::FileRead(path.clone(), e)),
        CatalogSource::Url(url) => download(client, url).await,
        CatalogSource::Inline(text) => Ok(text.clone()),
    }
}

async fn download(client: &Client, url: &str) -> Result<String, CatalogError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| CatalogError::NetworkRequest(url.to_string(), e))?;

    let response = match response.error_for_status() {
        Ok(resp) => resp,
        Err(e) => {
            warn!("HTTP error for {}: {:?}", url, e);
            return Err(if let Some(status) = e.status() {
                CatalogError::HttpStatus {
                    url: url.to_string(),
                    status,
                    source: e,
                }
            } else {
                CatalogError::NetworkRequest(url.to_string(), e)
            });
        }
    };

    response
        .text()
        .await
        .map_err(|e| CatalogError::NetworkRequest(url.to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CSV: &str = "lat,lon,city\n52.52,13.40,Berlin\n";

    #[tokio::test]
    async fn reads_catalog_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();

        let source = CatalogSource::Path(file.path().to_path_buf());
        let text = load_catalog_text(&Client::new(), &source).await.unwrap();
        assert_eq!(text, CSV);
    }

    #[tokio::test]
    async fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("city_coordinates.csv");

        let source = CatalogSource::Path(missing.clone());
        let err = load_catalog_text(&Client::new(), &source).await.unwrap_err();
        assert!(matches!(err, CatalogError::FileRead(p, _) if p == missing));
    }

    #[tokio::test]
    async fn downloads_catalog_url() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/city_coordinates.csv"))
            .respond_with(ResponseTemplate::new(200).set_body_string(CSV))
            .mount(&mock_server)
            .await;

        let source = CatalogSource::Url(format!("{}/city_coordinates.csv", mock_server.uri()));
        let text = load_catalog_text(&Client::new(), &source).await.unwrap();
        assert_eq!(text, CSV);
    }

    #[tokio::test]
    async fn http_error_status_is_reported() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let source = CatalogSource::Url(format!("{}/missing.csv", mock_server.uri()));
        let err = load_catalog_text(&Client::new(), &source).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::HttpStatus { status, .. } if status == reqwest::StatusCode::NOT_FOUND
        ));
    }

    #[tokio::test]
    async fn inline_text_is_returned_as_is() {
        let source = CatalogSource::Inline(CSV.to_string());
        let text = load_catalog_text(&Client::new(), &source).await.unwrap();
        assert_eq!(text, CSV);
    }
}
