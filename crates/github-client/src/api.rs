//! GitHub users API client
//!
//! Request configuration, error handling, and the HTTP client for the
//! `/users/{username}` endpoint. One request per lookup; no caching and
//! no retries.

use crate::models::UserProfile;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Media type requested from the REST API
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

// =============================================================================
// Error Types
// =============================================================================

/// API error with HTTP status and message
///
/// Represents failures from the users endpoint: transport errors
/// (status 0), non-success HTTP statuses, and undecodable bodies.
///
/// # Examples
/// ```
/// use github_client::api::ApiError;
///
/// let error = ApiError::new(404, "NotFound", "Not Found");
/// assert_eq!(error.status(), 404);
/// assert!(error.is_not_found());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code (0 for transport/decode failures)
    status: u16,
    /// Error code (e.g., "NotFound", "NetworkError")
    error: String,
    /// Human-readable error message
    message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: u16, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            message: message.into(),
        }
    }

    /// Error for an empty or all-whitespace username, raised before any
    /// request is built
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(0, "InvalidInput", message)
    }

    /// Get the HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Get the error code
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this error means the requested user does not exist
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Check if this error happened before an HTTP status was received
    /// (transport failure, input rejection, or body decode failure)
    pub fn is_transport_error(&self) -> bool {
        self.status == 0
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GitHub API error {}: {} - {}",
            self.status, self.error, self.message
        )
    }
}

impl std::error::Error for ApiError {}

/// Error body returned by the REST API on non-success statuses
#[derive(Debug, Clone, Deserialize)]
struct ApiErrorBody {
    /// Human-readable message (e.g., "Not Found")
    message: String,
}

// =============================================================================
// Client Configuration
// =============================================================================

/// Configuration for the users API client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base API URL (e.g., "https://api.github.com")
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string (required by the GitHub API)
    pub user_agent: String,
    /// Custom headers to include in all requests
    pub default_headers: HashMap<String, String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("Octoview/{}", env!("CARGO_PKG_VERSION")),
            default_headers: HashMap::new(),
        }
    }
}

impl ApiConfig {
    /// Create a new config with a base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a default header
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }
}

// =============================================================================
// Client Implementation
// =============================================================================

/// Client for the GitHub users endpoint
///
/// # Examples
/// ```
/// use github_client::api::{ApiConfig, UserApi};
///
/// async fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let api = UserApi::new(ApiConfig::default());
///     let profile = api.get_user("octocat").await?;
///     println!("@{} has {} followers", profile.login, profile.followers);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct UserApi {
    /// HTTP client
    client: reqwest::Client,
    /// Configuration
    config: ApiConfig,
}

impl UserApi {
    /// Create a new users API client
    pub fn new(config: ApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Fetch a user's public profile by username
    ///
    /// Issues one GET to `{base_url}/users/{username}`. The username is
    /// trimmed and rejected before dispatch when empty, so no request
    /// reaches the network for blank input.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` - empty or all-whitespace username
    /// - `NotFound` - no such user (HTTP 404)
    /// - `NetworkError` - transport failure
    /// - `ParseError` - response body was not a valid profile
    pub async fn get_user(&self, username: &str) -> Result<UserProfile, ApiError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ApiError::invalid_input("Username cannot be empty"));
        }

        let url = format!(
            "{}/users/{}",
            self.config.base_url,
            urlencoding::encode(username)
        );
        debug!(username, "fetching user profile");

        let mut request = self.client.get(&url).header("Accept", GITHUB_ACCEPT);
        for (key, value) in &self.config.default_headers {
            request = request.header(key, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::new(0, "NetworkError", format!("Request failed: {}", e)))?;

        self.parse_response(response).await
    }

    /// Parse a reqwest response into a profile
    async fn parse_response(&self, response: reqwest::Response) -> Result<UserProfile, ApiError> {
        let status = response.status().as_u16();

        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let code = if status == 404 { "NotFound" } else { "HttpError" };

            // The API reports failures as {"message": "..."}
            if let Ok(body) = serde_json::from_str::<ApiErrorBody>(&error_body) {
                return Err(ApiError::new(status, code, body.message));
            }
            return Err(ApiError::new(
                status,
                code,
                format!("HTTP {}: {}", status, error_body),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::new(0, "ParseError", format!("Failed to read response: {}", e)))?;

        serde_json::from_str(&body)
            .map_err(|e| ApiError::new(0, "ParseError", format!("Failed to parse profile: {}", e)))
    }

    /// Get the client configuration
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Get the base API URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

// =============================================================================
// Tests
// =============================================================================
