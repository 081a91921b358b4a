//! End-to-end fetch-and-render tests
//!
//! Mock GitHub API -> client -> profile store -> profile card, covering
//! the display scenarios and the overlapping-fetch resolution.

use app_state::{FetchError, FetchPhase, ProfileStore};
use app_ui::view::{ProfileCard, BIO_FALLBACK, INERT_HREF, NOT_AVAILABLE};
use github_client::{ApiConfig, UserApi};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user_body(login: &str, name: &str, followers: u64) -> serde_json::Value {
    json!({
        "login": login,
        "id": 9919,
        "avatar_url": format!("https://avatars.example.com/{login}"),
        "html_url": format!("https://github.com/{login}"),
        "name": name,
        "company": null,
        "blog": "",
        "location": null,
        "email": null,
        "bio": null,
        "twitter_username": null,
        "public_repos": 488,
        "followers": followers,
        "following": 0,
        "created_at": "2008-01-01T00:00:00Z"
    })
}

#[tokio::test]
async fn test_fetch_github_renders_expected_slots() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/github"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body("github", "GitHub", 12000)))
        .mount(&mock_server)
        .await;

    let api = UserApi::new(ApiConfig::new(mock_server.uri()));
    let store = ProfileStore::new();

    let state = store.fetch(&api, "github").await;
    assert_eq!(state.phase, FetchPhase::Ready);

    let card = ProfileCard::from_profile(&state.profile.unwrap());
    assert_eq!(card.handle, "@github");
    assert_eq!(card.full_name, "GitHub");
    assert_eq!(card.bio, BIO_FALLBACK);
    assert_eq!(card.followers, "12000");
    assert_eq!(card.joined, "Joined January 1, 2008");

    // Absent optionals stay visible with inert links
    assert_eq!(card.company, NOT_AVAILABLE);
    assert_eq!(card.website.text, NOT_AVAILABLE);
    assert_eq!(card.website.href, INERT_HREF);
}

#[tokio::test]
async fn test_unknown_user_surfaces_error_and_keeps_previous_card() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/github"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body("github", "GitHub", 12000)))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&mock_server)
        .await;

    let api = UserApi::new(ApiConfig::new(mock_server.uri()));
    let store = ProfileStore::new();

    store.fetch(&api, "github").await;
    let state = store.fetch(&api, "ghost").await;

    assert_eq!(state.phase, FetchPhase::Failed);
    assert_eq!(state.error, Some(FetchError::NotFound("ghost".to_string())));
    // The previously rendered profile is untouched
    assert_eq!(state.profile.unwrap().login, "github");
}

#[tokio::test]
async fn test_empty_username_is_blocked_before_dispatch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body("github", "GitHub", 1)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let api = UserApi::new(ApiConfig::new(mock_server.uri()));
    let store = ProfileStore::new();

    let state = store.fetch(&api, "   ").await;
    assert_eq!(state.phase, FetchPhase::Failed);
    assert!(matches!(state.error, Some(FetchError::InvalidInput(_))));

    mock_server.verify().await;
}

#[tokio::test]
async fn test_overlapping_fetches_latest_issued_wins() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body("alice", "Alice", 10)))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/bob"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body("bob", "Bob", 20)))
        .mount(&mock_server)
        .await;

    let api = UserApi::new(ApiConfig::new(mock_server.uri()));
    let store = ProfileStore::new();

    // "alice" is submitted first, "bob" second; tickets are taken in
    // submission order while the responses resolve in any order
    let alice_ticket = store.begin();
    let bob_ticket = store.begin();

    let bob = api.get_user("bob").await.map_err(|e| FetchError::from_api("bob", e));
    let alice = api.get_user("alice").await.map_err(|e| FetchError::from_api("alice", e));

    // bob's response lands first and is applied; alice's late response
    // is superseded and discarded
    assert!(store.complete(bob_ticket, bob));
    assert!(!store.complete(alice_ticket, alice));

    let state = store.snapshot();
    assert_eq!(state.phase, FetchPhase::Ready);
    assert_eq!(state.profile.unwrap().login, "bob");
}

#[tokio::test]
async fn test_full_redraw_replaces_every_slot() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "alice",
            "id": 1,
            "avatar_url": "https://avatars.example.com/alice",
            "html_url": "https://github.com/alice",
            "name": "Alice",
            "company": "Wonderland Inc",
            "blog": "https://alice.example",
            "location": "Wonderland",
            "email": "alice@example.com",
            "bio": "Curiouser and curiouser",
            "twitter_username": "alice",
            "public_repos": 3,
            "followers": 42,
            "following": 7,
            "created_at": "2015-06-15T12:00:00Z"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/bob"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body("bob", "Bob", 20)))
        .mount(&mock_server)
        .await;

    let api = UserApi::new(ApiConfig::new(mock_server.uri()));
    let store = ProfileStore::new();

    let state = store.fetch(&api, "alice").await;
    let alice_card = ProfileCard::from_profile(&state.profile.unwrap());
    assert_eq!(alice_card.bio, "Curiouser and curiouser");
    assert_eq!(alice_card.email.href, "mailto:alice@example.com");

    let state = store.fetch(&api, "bob").await;
    let bob_card = ProfileCard::from_profile(&state.profile.unwrap());

    // Nothing from alice's card survives into bob's
    assert_eq!(bob_card.handle, "@bob");
    assert_eq!(bob_card.bio, BIO_FALLBACK);
    assert_eq!(bob_card.email.href, INERT_HREF);
    assert_eq!(bob_card.joined, "Joined January 1, 2008");
}
