//! Data model for the GitHub users endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A public user profile as returned by `GET /users/{username}`
///
/// Fields the API reports as `null` (and `blog`, which the API reports
/// as an empty string when unset) are optional; presentation-level
/// fallbacks live in the view layer, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Login handle (e.g., "octocat")
    pub login: String,
    /// Numeric account id
    pub id: u64,
    /// Avatar image URL
    pub avatar_url: String,
    /// Web profile URL
    pub html_url: String,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Company affiliation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Website/blog URL (the API uses `""` for unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
    /// Location string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Public email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Profile bio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Twitter handle, without the leading `@`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_username: Option<String>,
    /// Number of public repositories
    pub public_repos: u64,
    /// Follower count
    pub followers: u64,
    /// Following count
    pub following: u64,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}
