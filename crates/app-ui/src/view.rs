//! Profile card view-model
//!
//! Maps a fetched [`UserProfile`] onto the fixed set of display slots.
//! Building a card fills every slot, so rendering a new profile is a
//! full redraw: no slot carries over from the previous card.

use chrono::{DateTime, Utc};
use github_client::UserProfile;
use serde::Serialize;

/// Fallback for a missing display name
pub const NAME_FALLBACK: &str = "Not Found";

/// Fallback for a missing bio (bio-specific, never used elsewhere)
pub const BIO_FALLBACK: &str = "404 Bio Not Found";

/// Generic fallback for missing optional fields
pub const NOT_AVAILABLE: &str = "Not Available";

/// Inert link target for absent link-bearing fields
pub const INERT_HREF: &str = "#";

/// A display slot that carries both text and a link target
///
/// Absent source values keep the slot visible with the generic fallback
/// text and an inert href; the slot is never omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSlot {
    /// Display text
    pub text: String,
    /// Hyperlink target
    pub href: String,
}

impl LinkSlot {
    /// A slot with a live link
    pub fn present(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self { text: text.into(), href: href.into() }
    }

    /// The inert placeholder slot
    pub fn absent() -> Self {
        Self {
            text: NOT_AVAILABLE.to_string(),
            href: INERT_HREF.to_string(),
        }
    }

    /// Whether this slot links anywhere
    pub fn is_linked(&self) -> bool {
        self.href != INERT_HREF
    }
}

/// The profile display slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCard {
    /// Avatar image URL
    pub avatar_url: String,
    /// Display name slot
    pub full_name: String,
    /// Login handle, rendered with a leading `@`
    pub handle: String,
    /// Link target of the handle
    pub handle_href: String,
    /// Bio slot
    pub bio: String,
    /// Location slot
    pub location: String,
    /// Website slot (from the `blog` field)
    pub website: LinkSlot,
    /// Twitter slot
    pub twitter: LinkSlot,
    /// Email slot
    pub email: LinkSlot,
    /// Company slot
    pub company: String,
    /// Public repository count
    pub repositories: String,
    /// Follower count
    pub followers: String,
    /// Following count
    pub following: String,
    /// Joined date, "Joined <Month> <D>, <YYYY>"
    pub joined: String,
}

/// Treat `null` and `""` the same way the source fields do
fn filled(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// Format the account creation date with its fixed label
fn joined_label(created_at: &DateTime<Utc>) -> String {
    format!("Joined {}", created_at.format("%B %-d, %Y"))
}

impl ProfileCard {
    /// Map a profile onto the display slots
    pub fn from_profile(profile: &UserProfile) -> Self {
        let full_name = filled(profile.name.as_ref())
            .unwrap_or(NAME_FALLBACK)
            .to_string();

        let bio = filled(profile.bio.as_ref())
            .unwrap_or(BIO_FALLBACK)
            .to_string();

        let location = filled(profile.location.as_ref())
            .unwrap_or(NOT_AVAILABLE)
            .to_string();

        let company = filled(profile.company.as_ref())
            .unwrap_or(NOT_AVAILABLE)
            .to_string();

        let website = match filled(profile.blog.as_ref()) {
            Some(blog) => LinkSlot::present(blog, blog),
            None => LinkSlot::absent(),
        };

        let twitter = match filled(profile.twitter_username.as_ref()) {
            Some(handle) => LinkSlot::present(
                format!("@{}", handle),
                format!("https://twitter.com/{}", handle),
            ),
            None => LinkSlot::absent(),
        };

        let email = match filled(profile.email.as_ref()) {
            Some(email) => LinkSlot::present(email, format!("mailto:{}", email)),
            None => LinkSlot::absent(),
        };

        Self {
            avatar_url: profile.avatar_url.clone(),
            full_name,
            handle: format!("@{}", profile.login),
            handle_href: format!("https://github.com/{}", profile.login),
            bio,
            location,
            website,
            twitter,
            email,
            company,
            repositories: profile.public_repos.to_string(),
            followers: profile.followers.to_string(),
            following: profile.following.to_string(),
            joined: joined_label(&profile.created_at),
        }
    }

    /// Render the card as terminal lines, one per display region
    ///
    /// Every slot is emitted every time, matching the card's
    /// full-redraw contract.
    pub fn to_lines(&self) -> Vec<String> {
        vec![
            format!("{}  ({})", self.full_name, self.handle),
            self.bio.clone(),
            String::new(),
            format!("Location   {}", self.location),
            format!("Website    {}", self.website.text),
            format!("Twitter    {}", self.twitter.text),
            format!("Email      {}", self.email.text),
            format!("Company    {}", self.company),
            String::new(),
            format!(
                "Repos {}   Followers {}   Following {}",
                self.repositories, self.followers, self.following
            ),
            self.joined.clone(),
            format!("Avatar     {}", self.avatar_url),
        ]
    }
}

impl From<&UserProfile> for ProfileCard {
    fn from(profile: &UserProfile) -> Self {
        Self::from_profile(profile)
    }
}
