// HTTP client for the asteroid backend.
//
// Endpoints used:
//   GET  /                         health check
//   GET  /database/asteroids       all normalized records
//   GET  /database/asteroids/ids   record ids only
//   GET  /database/asteroids/{id}  one normalized record (404 if unknown)
//   POST /ai/report                {"asteroidIds": [...]} -> HTML document
//
// One request per call, no retries. Failures are classified into
// BackendError so the CLI can print a single clear message.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::{extract_error_message, BackendError};
use super::traits::{AsteroidSource, ReportGenerator};
use crate::asteroid::models::RawAsteroidRecord;

/// Default backend address (the FastAPI service's local dev port).
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// Response from `GET /database/asteroids/ids`.
#[derive(Debug, Clone, Deserialize)]
pub struct AsteroidIdsResponse {
    pub asteroid_ids: Vec<String>,
}

/// Response from the `GET /` health endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub api_name: Option<String>,
}

/// Request body for `POST /ai/report`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub asteroid_ids: Vec<String>,
}

/// Client for the asteroid backend API.
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new client pointing at the given base URL.
    ///
    /// `timeout` bounds each whole request; report generation calls out to
    /// a language model on the backend, so it needs to be generous.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("neo-hazard/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// URL of a single record. The id becomes one percent-encoded path
    /// segment, so `/`, `?` or `#` in it cannot reach another endpoint.
    fn asteroid_url(&self, id: &str) -> Result<String, BackendError> {
        let malformed = |reason: String| BackendError::Malformed {
            url: self.url("/database/asteroids/"),
            reason,
        };

        // Url drops "." and ".." segments, which would turn this into the list endpoint.
        if matches!(id, "" | "." | "..") {
            return Err(malformed(format!("invalid asteroid id {id:?}")));
        }

        let mut url =
            Url::parse(&self.base_url).map_err(|e| malformed(format!("bad base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| malformed("base URL cannot take a path".to_string()))?
            .pop_if_empty()
            .extend(["database", "asteroids", id]);
        Ok(url.into())
    }

    /// Send a request and return the response if it has a 2xx status.
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&ReportRequest>,
    ) -> Result<Response, BackendError> {
        debug!(method = %method, url = %url, "Backend request");

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_builder() {
                BackendError::Malformed {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            } else {
                BackendError::Transport {
                    url: url.to_string(),
                    source: e,
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Server {
                status,
                message: extract_error_message(status, &body),
            });
        }

        Ok(response)
    }

    /// Read the whole body as text, classifying read failures.
    async fn read_text(url: String, response: Response) -> Result<String, BackendError> {
        response.text().await.map_err(|e| BackendError::Malformed {
            url,
            reason: format!("failed to read response body: {e}"),
        })
    }

    /// GET a JSON endpoint and deserialize it.
    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, BackendError> {
        let response = self.send(Method::GET, &url, None).await?;
        let body = Self::read_text(url.clone(), response).await?;
        serde_json::from_str(&body).map_err(|e| BackendError::Malformed {
            url,
            reason: format!("unexpected response shape: {e}"),
        })
    }

    /// Check that the backend is up.
    pub async fn health(&self) -> Result<HealthResponse, BackendError> {
        self.get_json(self.url("/")).await
    }

    /// Fetch every normalized asteroid record.
    pub async fn fetch_asteroids(&self) -> Result<Vec<RawAsteroidRecord>, BackendError> {
        let records: Vec<RawAsteroidRecord> = self.get_json(self.url("/database/asteroids")).await?;
        info!(count = records.len(), "Fetched asteroid records");
        Ok(records)
    }

    /// Fetch the ids of every stored asteroid.
    pub async fn fetch_asteroid_ids(&self) -> Result<Vec<String>, BackendError> {
        let resp: AsteroidIdsResponse = self.get_json(self.url("/database/asteroids/ids")).await?;
        Ok(resp.asteroid_ids)
    }

    /// Fetch one asteroid by id. An unknown id is `Ok(None)`, not an error.
    pub async fn fetch_asteroid(&self, id: &str) -> Result<Option<RawAsteroidRecord>, BackendError> {
        let url = self.asteroid_url(id)?;
        match self.get_json(url).await {
            Ok(record) => Ok(Some(record)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Ask the backend for an AI-written HTML report over the given ids.
    pub async fn request_report(&self, asteroid_ids: &[String]) -> Result<String, BackendError> {
        let body = ReportRequest {
            asteroid_ids: asteroid_ids.to_vec(),
        };
        let url = self.url("/ai/report");
        let response = self.send(Method::POST, &url, Some(&body)).await?;
        let html = Self::read_text(url, response).await?;
        info!(
            ids = asteroid_ids.len(),
            bytes = html.len(),
            "Received AI report"
        );
        Ok(html)
    }
}

#[async_trait]
impl AsteroidSource for BackendClient {
    async fn fetch_records(&self) -> Result<Vec<RawAsteroidRecord>> {
        Ok(self.fetch_asteroids().await?)
    }

    async fn fetch_record(&self, id: &str) -> Result<Option<RawAsteroidRecord>> {
        Ok(self.fetch_asteroid(id).await?)
    }
}

#[async_trait]
impl ReportGenerator for BackendClient {
    async fn generate_report(&self, asteroid_ids: &[String]) -> Result<String> {
        if asteroid_ids.is_empty() {
            anyhow::bail!("No asteroid ids given for the report");
        }
        Ok(self.request_report(asteroid_ids).await?)
    }
}
