//! Application state management for Octoview
//!
//! This crate tracks the profile fetch lifecycle: which fetch is the
//! most recently issued, and what the display currently reflects.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod fetch;

pub use fetch::{FetchError, FetchPhase, FetchTicket, ProfileState, ProfileStore};
