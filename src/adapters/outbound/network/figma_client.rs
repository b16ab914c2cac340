use crate::adapters::outbound::figma_document::{
    FigmaDocumentParser, FigmaFile, ImageRenderResponse, PublishedComponent,
    PublishedComponentsResponse,
};
use crate::health_analysis::domain::{FigmaFileKey, LibrarySnapshot};
use crate::ports::outbound::ComponentSource;
use crate::shared::error::HealthError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;

const TOKEN_HEADER: &str = "X-Figma-Token";

/// FigmaApiClient adapter reading component data from the Figma REST API
///
/// Implements the ComponentSource port for one file key. The file document,
/// its published components and component sets are fetched, then thumbnails
/// missing from the publish metadata are rendered through the images
/// endpoint.
///
/// # Security
/// - The access token is only ever sent as the `X-Figma-Token` header
/// - The file key is validated and URL-encoded before use
pub struct FigmaApiClient {
    client: reqwest::Client,
    api_url: String,
    token: String,
    file_key: FigmaFileKey,
    max_retries: u32,
}

impl FigmaApiClient {
    const API_ENDPOINT: &'static str = "https://api.figma.com";
    const TIMEOUT_SECONDS: u64 = 60;
    /// Upper bound of node ids per images request
    const IMAGE_BATCH_SIZE: usize = 50;

    /// Creates a client for `file_key`
    ///
    /// # Errors
    /// Returns `HealthError::MissingToken` if `token` is blank, or an error if
    /// the HTTP client cannot be built.
    pub fn new(token: String, file_key: FigmaFileKey) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(HealthError::MissingToken.into());
        }

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("figma-health/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_url: Self::API_ENDPOINT.to_string(),
            token,
            file_key,
            max_retries: 3,
        })
    }

    /// Points the client at another API root (e.g. a proxy)
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    fn file_endpoint(&self, suffix: &str) -> String {
        format!(
            "{}/v1/files/{}{}",
            self.api_url,
            urlencoding::encode(self.file_key.as_str()),
            suffix
        )
    }

    fn images_endpoint(&self, node_ids: &[&str]) -> String {
        format!(
            "{}/v1/images/{}?ids={}&format=png",
            self.api_url,
            urlencoding::encode(self.file_key.as_str()),
            urlencoding::encode(&node_ids.join(","))
        )
    }

    /// GETs `url` with retries; client errors other than 429 fail immediately
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.get_once(url).await {
                Ok(value) => return Ok(value),
                Err(RequestFailure::Permanent(e)) => return Err(e),
                Err(RequestFailure::Transient(e)) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(250 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("No request was attempted for {}", url)))
    }

    async fn get_once<T: DeserializeOwned>(&self, url: &str) -> std::result::Result<T, RequestFailure> {
        let api_error = |details: String| -> anyhow::Error {
            HealthError::FigmaApi {
                endpoint: redact_query(url),
                details,
            }
            .into()
        };

        let response = self
            .client
            .get(url)
            .header(TOKEN_HEADER, &self.token)
            .send()
            .await
            .map_err(|e| RequestFailure::Transient(api_error(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let error = api_error(format!("status code {}", status));
            return Err(if is_retryable(status) {
                RequestFailure::Transient(error)
            } else {
                RequestFailure::Permanent(error)
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RequestFailure::Permanent(api_error(format!("invalid response body: {}", e))))
    }

    async fn fetch_published(&self) -> Vec<PublishedComponent> {
        let mut entries = Vec::new();
        for suffix in ["/components", "/component_sets"] {
            match self
                .get_json::<PublishedComponentsResponse>(&self.file_endpoint(suffix))
                .await
            {
                Ok(response) => entries.extend(response.into_entries()),
                Err(e) => {
                    // Unpublished files and tokens without library scope end up here
                    eprintln!(
                        "⚠️  Warning: Could not read published metadata ({}): {}",
                        suffix.trim_start_matches('/'),
                        e
                    );
                }
            }
        }
        entries
    }

    /// Renders PNGs for records that have no thumbnail URL yet
    async fn fill_missing_thumbnails(&self, snapshot: &mut LibrarySnapshot) {
        let missing: Vec<&str> = snapshot
            .records
            .iter()
            .filter(|record| record.usable_thumbnail().is_none() && !record.id.is_empty())
            .map(|record| record.id.as_str())
            .collect();
        if missing.is_empty() {
            return;
        }

        let mut rendered: HashMap<String, String> = HashMap::new();
        for chunk in missing.chunks(Self::IMAGE_BATCH_SIZE) {
            match self
                .get_json::<ImageRenderResponse>(&self.images_endpoint(chunk))
                .await
            {
                Ok(response) => {
                    if let Some(err) = response.err {
                        eprintln!("⚠️  Warning: Thumbnail rendering reported: {}", err);
                    }
                    rendered.extend(
                        response
                            .images
                            .into_iter()
                            .filter_map(|(id, url)| url.map(|url| (id, url))),
                    );
                }
                Err(e) => eprintln!("⚠️  Warning: Failed to render thumbnails: {}", e),
            }
        }

        for record in &mut snapshot.records {
            if record.usable_thumbnail().is_none() {
                if let Some(url) = rendered.remove(&record.id) {
                    record.thumbnail_url = Some(url);
                }
            }
        }
    }
}

#[async_trait]
impl ComponentSource for FigmaApiClient {
    async fn fetch_library(&self) -> Result<LibrarySnapshot> {
        let file: FigmaFile = self.get_json(&self.file_endpoint("")).await?;
        let published = self.fetch_published().await;

        let mut snapshot = FigmaDocumentParser::extract(&file, &published);
        self.fill_missing_thumbnails(&mut snapshot).await;
        Ok(snapshot)
    }

    fn describe(&self) -> String {
        format!("Figma file {}", self.file_key)
    }
}

enum RequestFailure {
    Transient(anyhow::Error),
    Permanent(anyhow::Error),
}

fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Endpoint without its query string, for error messages
fn redact_query(url: &str) -> String {
    url.split('?').next().unwrap_or(url).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> FigmaApiClient {
        FigmaApiClient::new(
            "figd_test".to_string(),
            FigmaFileKey::parse("AbC123").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_blank_token_is_rejected() {
        let key = FigmaFileKey::parse("AbC123").unwrap();
        let err = FigmaApiClient::new("  ".to_string(), key).err().unwrap();
        assert!(err.to_string().contains("No Figma access token"));
    }

    #[test]
    fn test_file_endpoints() {
        let client = client();
        assert_eq!(
            client.file_endpoint(""),
            "https://api.figma.com/v1/files/AbC123"
        );
        assert_eq!(
            client.file_endpoint("/component_sets"),
            "https://api.figma.com/v1/files/AbC123/component_sets"
        );
    }

    #[test]
    fn test_images_endpoint_encodes_ids() {
        let client = client().with_api_url("http://localhost:8080/");
        assert_eq!(
            client.images_endpoint(&["1:2", "1:3"]),
            "http://localhost:8080/v1/images/AbC123?ids=1%3A2%2C1%3A3&format=png"
        );
    }

    #[test]
    fn test_is_retryable() {
        assert!(is_retryable(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable(StatusCode::BAD_GATEWAY));
        assert!(!is_retryable(StatusCode::FORBIDDEN));
        assert!(!is_retryable(StatusCode::NOT_FOUND));
    }

    #[test]
    fn test_redact_query() {
        assert_eq!(
            redact_query("https://api.figma.com/v1/images/k?ids=1"),
            "https://api.figma.com/v1/images/k"
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(client().describe(), "Figma file AbC123");
    }
}
