//! Theme system for Octoview
//!
//! A two-state light/dark theme with a compact palette, icon asset
//! mapping, and a controller that persists the selection through the
//! injected settings capability.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{get_theme, ThemeName};
//!
//! let theme = get_theme(ThemeName::Dark);
//! assert!(theme.is_dark());
//! let bg = &theme.colors.background;
//! ```

use serde::{Deserialize, Serialize};
use storage::settings::{Result as SettingsResult, SettingsStore};
use tracing::debug;

/// Storage key for the persisted theme selection
pub const THEME_KEY: &str = "theme";

/// A color represented as an RGB hex string (e.g., "#FFFFFF")
pub type Color = String;

// =============================================================================
// Theme Names
// =============================================================================

/// Name of a visual mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Bright theme with white background (default)
    Light,
    /// Dark theme with near-black background
    Dark,
}

impl ThemeName {
    /// The opposite mode
    pub fn toggled(&self) -> ThemeName {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }

    /// The string persisted to storage
    pub fn as_stored(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }

    /// Resolve a stored value to a theme
    ///
    /// Dark only when the stored value is exactly `"dark"`; anything
    /// else, including absence or garbage, resolves to Light.
    pub fn from_stored(value: Option<&str>) -> ThemeName {
        match value {
            Some("dark") => ThemeName::Dark,
            _ => ThemeName::Light,
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

// =============================================================================
// Palette
// =============================================================================

/// Semantic colors for a theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Page background
    pub background: Color,
    /// Card surface
    pub surface: Color,
    /// Primary text
    pub text_primary: Color,
    /// Secondary text (labels, counts)
    pub text_secondary: Color,
    /// Accent (links, the handle)
    pub accent: Color,
    /// Error text
    pub error: Color,
}

/// A complete theme: name plus palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Semantic colors
    pub colors: ThemeColors,
}

impl Theme {
    /// Whether this is the dark mode
    pub fn is_dark(&self) -> bool {
        matches!(self.name, ThemeName::Dark)
    }
}

/// The light theme
pub fn light_theme() -> Theme {
    Theme {
        name: ThemeName::Light,
        colors: ThemeColors {
            background: "#F6F8FA".to_string(),
            surface: "#FFFFFF".to_string(),
            text_primary: "#1F2328".to_string(),
            text_secondary: "#59636E".to_string(),
            accent: "#0969DA".to_string(),
            error: "#CF222E".to_string(),
        },
    }
}

/// The dark theme
pub fn dark_theme() -> Theme {
    Theme {
        name: ThemeName::Dark,
        colors: ThemeColors {
            background: "#0D1117".to_string(),
            surface: "#161B22".to_string(),
            text_primary: "#E6EDF3".to_string(),
            text_secondary: "#8D96A0".to_string(),
            accent: "#4493F8".to_string(),
            error: "#F85149".to_string(),
        },
    }
}

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Light => light_theme(),
        ThemeName::Dark => dark_theme(),
    }
}

// =============================================================================
// Icons
// =============================================================================

/// Icon asset names for one mode
///
/// Assets follow the `{brightness-icon, github-icon} x {light, dark}`
/// naming convention; dark mode shows the `-light` variants so the
/// icons stay visible against the dark background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    /// Asset name of the theme-toggle (brightness) icon
    pub theme_toggle: &'static str,
    /// Asset name of the GitHub logo icon
    pub logo: &'static str,
}

impl IconSet {
    /// Icons appropriate for a mode
    pub fn for_theme(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self {
                theme_toggle: "brightness-icon-light",
                logo: "github-icon-light",
            },
            ThemeName::Light => Self {
                theme_toggle: "brightness-icon-dark",
                logo: "github-icon-dark",
            },
        }
    }
}

/// Path of an icon asset relative to the assets directory
pub fn asset_path(name: &str) -> String {
    format!("assets/{}.svg", name)
}

// =============================================================================
// Controller
// =============================================================================

/// Theme state machine over a settings capability
///
/// Startup reads the persisted selection once; `toggle` flips the mode
/// and completes all side effects (persist, icon swap, dark flag)
/// before returning. The persistence write is the only fallible step;
/// when it fails the in-memory state is left unchanged.
pub struct ThemeController<S: SettingsStore> {
    store: S,
    theme: ThemeName,
}

impl<S: SettingsStore> ThemeController<S> {
    /// Resolve the startup theme from the settings store
    pub fn load(store: S) -> SettingsResult<Self> {
        let stored = store.get(THEME_KEY)?;
        let theme = ThemeName::from_stored(stored.as_deref());
        debug!(theme = %theme, "theme resolved from storage");
        Ok(Self { store, theme })
    }

    /// Current theme
    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    /// Whether the root display surface carries the dark flag
    pub fn is_dark(&self) -> bool {
        self.theme == ThemeName::Dark
    }

    /// Icons for the current mode
    pub fn icons(&self) -> IconSet {
        IconSet::for_theme(self.theme)
    }

    /// Palette for the current mode
    pub fn palette(&self) -> Theme {
        get_theme(self.theme)
    }

    /// Flip the mode, persisting the new selection
    ///
    /// Returns the new theme. On a persistence failure the previous
    /// theme remains active.
    pub fn toggle(&mut self) -> SettingsResult<ThemeName> {
        let next = self.theme.toggled();
        self.store.set(THEME_KEY, next.as_stored())?;
        self.theme = next;
        debug!(theme = %next, "theme toggled");
        Ok(next)
    }
}
