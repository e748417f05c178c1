//! Authenticated client for the analysis backend.
//!
//! Every call goes through [`ApiClient::execute`], which decorates the
//! request with the stored bearer token and handles 401 responses by
//! refreshing the access token once and resubmitting the request.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::{header, Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};
use url::Url;

use super::endpoints;
use super::request::{ApiRequest, Attempt, Body};
use super::ApiError;
use crate::auth::SessionManager;
use crate::config::{Config, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::models::{RefreshRequest, RefreshResponse};

/// API client for the analysis backend.
/// Clone is cheap - reqwest::Client and the session are both shared.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    session: Arc<SessionManager>,
}

impl ApiClient {
    /// Create a new API client with the default request timeout
    pub fn new(base_url: &str, session: Arc<SessionManager>) -> Result<Self> {
        Self::with_timeout(base_url, session, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: &str, session: Arc<SessionManager>, timeout: Duration) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: Self::parse_base_url(base_url)?,
            session,
        })
    }

    pub fn from_config(config: &Config, session: Arc<SessionManager>) -> Result<Self> {
        Self::with_timeout(
            config.base_url(),
            session,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Normalize the base URL so relative endpoint paths join under it
    fn parse_base_url(base_url: &str) -> Result<Url> {
        let normalized = format!("{}/", base_url.trim().trim_end_matches('/'));
        let url = Url::parse(&normalized)
            .with_context(|| format!("Invalid API base URL: {}", base_url))?;
        match url.scheme() {
            "http" | "https" => {}
            scheme => return Err(anyhow!("Unsupported API URL scheme: {}", scheme)),
        }
        if url.host().is_none() {
            return Err(anyhow!("API base URL has no host: {}", base_url));
        }
        Ok(url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .with_context(|| format!("Invalid endpoint path: {}", path))
    }

    fn auth_headers(token: Option<&str>) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        Ok(headers)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: Response) -> Result<Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let url = response.url().to_string();
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_status(status, &body);
            warn!(status = %status, url = %url, error = %err, "API error");
            Err(err.into())
        }
    }

    /// Send one attempt of `request` with the given bearer token.
    async fn dispatch(&self, request: &ApiRequest, attempt: Attempt, token: Option<&str>) -> Result<Response> {
        let url = self.endpoint(&request.path)?;
        debug!(method = %request.method, url = %url, ?attempt, authenticated = token.is_some(), "Sending request");

        let builder = self
            .client
            .request(request.method.clone(), url.clone())
            .headers(Self::auth_headers(token)?);

        let builder = match &request.body {
            Body::Empty => builder,
            Body::Json(value) => builder.json(value),
            Body::Multipart(upload) => builder.multipart(upload.to_form()?),
        };

        builder
            .send()
            .await
            .map_err(ApiError::from)
            .with_context(|| format!("Failed to send {} request to {}", request.method, url))
    }

    /// Execute a request, refreshing the access token at most once on 401.
    ///
    /// Non-401 failures are returned unchanged. If the refresh is impossible
    /// the session is expired (credentials cleared, `SessionEvent::Expired`
    /// emitted) and the original `ApiError::Unauthorized` is returned.
    pub async fn execute(&self, request: ApiRequest) -> Result<Response> {
        if request.anonymous {
            let response = self.dispatch(&request, Attempt::Retried, None).await?;
            return Self::check_response(response).await;
        }

        let mut attempt = Attempt::Fresh;
        let mut token = self.session.access_token()?;

        loop {
            let response = self.dispatch(&request, attempt, token.as_deref()).await?;
            if response.status() != StatusCode::UNAUTHORIZED {
                return Self::check_response(response).await;
            }

            match attempt {
                Attempt::Retried => {
                    warn!(path = %request.path, "Still unauthorized after token refresh");
                    return Err(ApiError::Unauthorized.into());
                }
                Attempt::Fresh => {
                    debug!(path = %request.path, "Unauthorized, refreshing access token");
                    attempt = Attempt::Retried;
                    let refreshed = self
                        .session
                        .refresh_with(token.as_deref(), |refresh| self.request_refresh(refresh))
                        .await;
                    match refreshed {
                        Ok(new_token) => token = Some(new_token),
                        Err(e) => {
                            debug!(error = %e, "Refresh impossible, surfacing original error");
                            return Err(ApiError::Unauthorized.into());
                        }
                    }
                }
            }
        }
    }

    /// Dedicated refresh call. Bypasses `execute` so a rejected refresh
    /// token can never trigger another refresh.
    async fn request_refresh(&self, refresh_token: String) -> Result<String> {
        let url = self.endpoint(endpoints::auth::REFRESH)?;
        let response = self
            .client
            .post(url)
            .json(&RefreshRequest { refresh: &refresh_token })
            .send()
            .await
            .map_err(ApiError::from)
            .context("Failed to send token refresh request")?;

        let response = Self::check_response(response).await?;
        let refreshed: RefreshResponse = response
            .json()
            .await
            .context("Failed to parse token refresh response")?;
        Ok(refreshed.access)
    }

    // ===== JSON helpers =====

    pub(crate) async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let path = request.path.clone();
        let response = self.execute(request).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
            .with_context(|| format!("Failed to parse JSON response from {}", path))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send_json(ApiRequest::get(path)).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<T> {
        self.send_json(ApiRequest::post(path).json(body)?).await
    }

    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<T> {
        self.send_json(ApiRequest::patch(path).json(body)?).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send_json(ApiRequest::delete(path)).await
    }
}
