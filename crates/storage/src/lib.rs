//! Storage layer for Octoview
//!
//! This crate provides the sled-backed key-value store and the
//! settings capability used for theme persistence.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;
pub mod settings;

pub use kv::{KvConfig, KvError, KvStore};
pub use settings::{KvSettings, MemorySettings, SettingsError, SettingsStore};
