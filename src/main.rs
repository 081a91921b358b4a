//! Octoview: a terminal GitHub profile viewer
//!
//! Startup resolves the persisted theme and fetches an initial profile
//! (the CLI argument, or "github"), then drops into a prompt loop:
//! a line is a username to look up, `:theme` toggles light/dark, and
//! `:quit` or EOF exits.

use anyhow::{Context, Result};
use app_state::{FetchPhase, ProfileStore};
use app_ui::theme::ThemeController;
use app_ui::view::ProfileCard;
use github_client::{ApiConfig, UserApi};
use std::io::{self, BufRead, Write};
use storage::{KvConfig, KvSettings, KvStore, SettingsStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Username fetched when none is given, matching the page-load default
const DEFAULT_USERNAME: &str = "github";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("octoview=info")),
        )
        .with_writer(io::stderr)
        .init();

    let data_dir =
        std::env::var("OCTOVIEW_DATA_DIR").unwrap_or_else(|_| ".octoview".to_string());
    let kv = KvStore::new(KvConfig::new(format!("{}/kv", data_dir)))
        .context("opening settings store")?;
    let mut theme =
        ThemeController::load(KvSettings::new(kv)).context("resolving startup theme")?;
    info!(theme = %theme.theme(), "theme resolved");

    let base_url = std::env::var("OCTOVIEW_API_URL")
        .unwrap_or_else(|_| "https://api.github.com".to_string());
    let api = UserApi::new(ApiConfig::new(base_url));
    let store = ProfileStore::new();

    let initial = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_USERNAME.to_string());
    fetch_and_render(&store, &api, &theme, &initial).await;

    let stdin = io::stdin();
    loop {
        print!("octoview> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match line.trim() {
            "" => println!("Enter a username; empty input is not submitted."),
            ":quit" | ":q" => break,
            ":theme" => toggle_theme(&mut theme)?,
            username => fetch_and_render(&store, &api, &theme, username).await,
        }
    }

    Ok(())
}

/// Flip the theme and report the new mode and icon set
fn toggle_theme<S: SettingsStore>(theme: &mut ThemeController<S>) -> Result<()> {
    let next = theme.toggle().context("persisting theme selection")?;
    let icons = theme.icons();
    println!(
        "Theme: {} ({} / {})",
        next, icons.theme_toggle, icons.logo
    );
    Ok(())
}

/// Fetch a username and redraw the card, or report the failure
///
/// A failed fetch prints the error and leaves the previously rendered
/// profile as the store's current one.
async fn fetch_and_render<S: SettingsStore>(
    store: &ProfileStore,
    api: &UserApi,
    theme: &ThemeController<S>,
    username: &str,
) {
    let state = store.fetch(api, username).await;

    match state.phase {
        FetchPhase::Failed => {
            if let Some(err) = state.error {
                println!("{}", err);
            }
        }
        _ => {
            if let Some(profile) = state.profile {
                let card = ProfileCard::from_profile(&profile);
                let mode = if theme.is_dark() { "dark" } else { "light" };
                println!("---- [{}] ----", mode);
                for line in card.to_lines() {
                    println!("{}", line);
                }
            }
        }
    }
}
