// ABOUTME: Shared HTTP client for the remote backend with configured timeouts
// ABOUTME: JSON request helpers with bearer auth and buffered status/body responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::HttpClientConfig;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;
use url::Url;

/// Buffered response of a remote call
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Raw response body
    pub body: String,
}

impl ApiResponse {
    /// Whether the status is 2xx
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Status as a plain number
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Decode the body as `T`
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the body is not the expected JSON
    pub fn json<T: DeserializeOwned>(&self) -> AppResult<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            AppError::serialization(format!("Unexpected response body: {e}"))
                .with_http_status(self.status_code())
                .with_source(e)
        })
    }

    /// First non-empty string among `fields` of a JSON object body
    #[must_use]
    pub fn error_field(&self, fields: &[&str]) -> Option<String> {
        let value: Value = serde_json::from_str(&self.body).ok()?;
        fields.iter().find_map(|field| {
            value
                .get(field)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        })
    }
}

/// `base_path` followed by `segments`, each percent-encoded as one path segment
///
/// # Errors
///
/// Returns `InternalError` if the path cannot be assembled
pub fn encode_path(base_path: &str, segments: &[&str]) -> AppResult<String> {
    let mut url = Url::parse("http://localhost")
        .map_err(|e| AppError::internal(format!("Failed to build request path: {e}")))?;
    url.set_path(base_path);
    url.path_segments_mut()
        .map_err(|()| AppError::internal("Request path cannot carry segments"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url.path().to_owned())
}

/// HTTP client bound to one backend base URL
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` with the configured timeouts
    #[must_use]
    pub fn new(base_url: impl Into<String>, config: &HttpClientConfig) -> Self {
        let client = ClientBuilder::new()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .unwrap_or_else(|_| Client::new());
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { client, base_url }
    }

    /// Base URL without trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of `path`
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET path`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached or the body cannot be read
    pub async fn get(&self, path: &str, token: Option<&str>) -> AppResult<ApiResponse> {
        self.send(Method::GET, path, token, Option::<&()>::None)
            .await
    }

    /// `POST path` with a JSON body
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached or the body cannot be read
    pub async fn post<B>(&self, path: &str, token: Option<&str>, body: &B) -> AppResult<ApiResponse>
    where
        B: Serialize + Sync + ?Sized,
    {
        self.send(Method::POST, path, token, Some(body)).await
    }

    /// `PUT path` with a JSON body
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached or the body cannot be read
    pub async fn put<B>(&self, path: &str, token: Option<&str>, body: &B) -> AppResult<ApiResponse>
    where
        B: Serialize + Sync + ?Sized,
    {
        self.send(Method::PUT, path, token, Some(body)).await
    }

    /// `DELETE path`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached or the body cannot be read
    pub async fn delete(&self, path: &str, token: Option<&str>) -> AppResult<ApiResponse> {
        self.send(Method::DELETE, path, token, Option::<&()>::None)
            .await
    }

    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&B>,
    ) -> AppResult<ApiResponse>
    where
        B: Serialize + Sync + ?Sized,
    {
        let mut request: RequestBuilder = self.client.request(method.clone(), self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let started = Instant::now();
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        AppLogger::log_remote_request(
            method.as_str(),
            path,
            status.as_u16(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:8080/exercise-logging/", &HttpClientConfig::default());
        assert_eq!(
            client.url("/api/v1/users/login"),
            "http://localhost:8080/exercise-logging/api/v1/users/login"
        );
    }

    #[test]
    fn test_encode_path_keeps_reserved_characters_in_one_segment() {
        assert_eq!(
            encode_path("/api/v1/muscle-groups", &["by-name", "upper/back #2?"]).unwrap(),
            "/api/v1/muscle-groups/by-name/upper%2Fback%20%232%3F"
        );
        assert_eq!(
            encode_path("/api/v1/users", &["u 1", "workout-plans"]).unwrap(),
            "/api/v1/users/u%201/workout-plans"
        );
    }

    #[test]
    fn test_error_field_picks_first_present() {
        let response = ApiResponse {
            status: StatusCode::CONFLICT,
            body: r#"{"error":"","message":"Muscle group is in use"}"#.to_owned(),
        };
        assert_eq!(
            response.error_field(&["error", "message"]).as_deref(),
            Some("Muscle group is in use")
        );

        let plain = ApiResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "oops".to_owned(),
        };
        assert!(plain.error_field(&["message"]).is_none());
    }
}
