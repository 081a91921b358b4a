//! User interface layer for Octoview
//!
//! This crate provides the theming system and the profile card
//! view-model that maps fetched profiles onto display slots.
//!
//! # Themes
//!
//! Two themes are supported:
//! - [`theme::ThemeName::Light`] - bright theme, the default
//! - [`theme::ThemeName::Dark`] - dark theme, persisted under the
//!   `theme` key when selected
//!
//! # Example
//!
//! ```rust
//! use app_ui::theme::{ThemeController, ThemeName};
//! use storage::MemorySettings;
//!
//! let mut controller = ThemeController::load(MemorySettings::new()).unwrap();
//! assert_eq!(controller.theme(), ThemeName::Light);
//!
//! controller.toggle().unwrap();
//! assert!(controller.is_dark());
//! assert_eq!(controller.icons().logo, "github-icon-light");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod theme;
pub mod view;

// Re-export commonly used types
pub use theme::{
    dark_theme, get_theme, light_theme, IconSet, Theme, ThemeColors, ThemeController, ThemeName,
    THEME_KEY,
};

pub use view::{LinkSlot, ProfileCard, BIO_FALLBACK, INERT_HREF, NAME_FALLBACK, NOT_AVAILABLE};
