//! Profile fetch lifecycle
//!
//! Each fetch is issued a monotonically increasing ticket; a completion
//! is applied only when its ticket is the most recently issued one, so
//! overlapping fetches cannot race the display into showing a stale
//! profile. The displayed profile always reflects the most recent
//! successful fetch, and a failure never clears it.

use github_client::{ApiError, UserApi, UserProfile};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tracing::{debug, warn};

/// Fetch error taxonomy, surfaced to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The requested user does not exist
    #[error("User not found: {0}")]
    NotFound(String),

    /// The API returned a non-success status
    #[error("GitHub API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the error body
        message: String,
    },

    /// Transport-level failure
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not a valid profile
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// The username was rejected before dispatch
    #[error("Invalid username: {0}")]
    InvalidInput(String),
}

impl FetchError {
    /// Classify an API error for the user who asked about `username`
    pub fn from_api(username: &str, err: ApiError) -> Self {
        if err.is_not_found() {
            return FetchError::NotFound(username.to_string());
        }
        match err.error() {
            "InvalidInput" => FetchError::InvalidInput(err.message().to_string()),
            "NetworkError" => FetchError::Network(err.message().to_string()),
            "ParseError" => FetchError::Malformed(err.message().to_string()),
            _ => FetchError::Api {
                status: err.status(),
                message: err.message().to_string(),
            },
        }
    }
}

/// Fetch phase of the profile store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    /// No fetch has been issued yet
    Idle,

    /// A fetch is in flight
    Loading,

    /// The latest issued fetch succeeded
    Ready,

    /// The latest issued fetch failed
    Failed,
}

/// Ticket identifying one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchTicket {
    /// The ticket's sequence number
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Point-in-time view of the profile state
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileState {
    /// Current fetch phase
    pub phase: FetchPhase,
    /// Most recently fetched profile, if any fetch has succeeded
    pub profile: Option<UserProfile>,
    /// Error from the latest issued fetch, if it failed
    pub error: Option<FetchError>,
}

struct StoreInner {
    phase: FetchPhase,
    profile: Option<UserProfile>,
    error: Option<FetchError>,
}

/// Profile fetch coordinator
///
/// Owns the sequence counter and the state the display renders from.
/// Callers take a ticket with [`begin`](Self::begin), perform the fetch,
/// and hand the outcome to [`complete`](Self::complete); completions for
/// superseded tickets are discarded.
pub struct ProfileStore {
    sequence: AtomicU64,
    inner: RwLock<StoreInner>,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore {
    /// Create a store with no profile loaded
    pub fn new() -> Self {
        Self {
            sequence: AtomicU64::new(0),
            inner: RwLock::new(StoreInner {
                phase: FetchPhase::Idle,
                profile: None,
                error: None,
            }),
        }
    }

    /// Issue a ticket for a new fetch and mark the store loading
    ///
    /// Any fetch still in flight under an earlier ticket is implicitly
    /// superseded; its completion will be discarded.
    pub fn begin(&self) -> FetchTicket {
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.write().phase = FetchPhase::Loading;
        debug!(sequence = seq, "fetch issued");
        FetchTicket(seq)
    }

    /// Apply a fetch outcome, returning whether it was applied
    ///
    /// Returns `false` when the ticket has been superseded by a later
    /// [`begin`](Self::begin); the store is left untouched in that case.
    /// A failure keeps the previously loaded profile available.
    pub fn complete(
        &self,
        ticket: FetchTicket,
        result: Result<UserProfile, FetchError>,
    ) -> bool {
        if ticket.0 != self.sequence.load(Ordering::SeqCst) {
            warn!(sequence = ticket.0, "discarding superseded fetch result");
            return false;
        }

        let mut inner = self.inner.write();
        match result {
            Ok(profile) => {
                debug!(login = %profile.login, "profile loaded");
                inner.profile = Some(profile);
                inner.error = None;
                inner.phase = FetchPhase::Ready;
            }
            Err(err) => {
                debug!(error = %err, "fetch failed");
                inner.error = Some(err);
                inner.phase = FetchPhase::Failed;
            }
        }
        true
    }

    /// Fetch a username through the API and resolve the store
    ///
    /// Convenience wrapper around [`begin`](Self::begin) /
    /// [`complete`](Self::complete) for sequential callers; the ticket
    /// is taken before the request is awaited, so concurrent callers
    /// still get last-issued-wins resolution.
    pub async fn fetch(&self, api: &UserApi, username: &str) -> ProfileState {
        let ticket = self.begin();
        let result = api
            .get_user(username)
            .await
            .map_err(|e| FetchError::from_api(username, e));
        self.complete(ticket, result);
        self.snapshot()
    }

    /// Take a point-in-time snapshot of the state
    pub fn snapshot(&self) -> ProfileState {
        let inner = self.inner.read();
        ProfileState {
            phase: inner.phase,
            profile: inner.profile.clone(),
            error: inner.error.clone(),
        }
    }

    /// Current fetch phase
    pub fn phase(&self) -> FetchPhase {
        self.inner.read().phase
    }
}
