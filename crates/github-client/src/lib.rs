//! GitHub REST client for Octoview
//!
//! This crate provides the HTTP client for the public GitHub users
//! endpoint, along with the profile data model and error types.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod models;

pub use api::{ApiConfig, ApiError, UserApi};
pub use models::UserProfile;
