#![allow(dead_code)]

use redirectus::application::services::LinkService;
use redirectus::domain::entities::{LinkSnapshot, LinkTargets};
use redirectus::domain::persist_event::{PersistReceiver, persist_channel};
use redirectus::infrastructure::persistence::InMemoryLinkRepository;
use redirectus::state::AppState;
use std::sync::Arc;

pub const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
pub const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36";
pub const WINDOWS_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub fn targets(ios: &str, android: &str, default: &str) -> LinkTargets {
    LinkTargets {
        ios: ios.to_string(),
        android: android.to_string(),
        default: default.to_string(),
    }
}

pub fn create_test_state() -> (AppState, PersistReceiver) {
    create_test_state_with(LinkSnapshot::new())
}

pub fn create_test_state_with(snapshot: LinkSnapshot) -> (AppState, PersistReceiver) {
    let (tx, rx) = persist_channel();

    let link_repository = Arc::new(InMemoryLinkRepository::from_snapshot(snapshot, tx.clone()));
    let link_service = Arc::new(LinkService::new(link_repository));

    (AppState::new(link_service, tx), rx)
}

/// State with one link, `app`, pointing each platform to a distinct host.
pub fn create_seeded_state() -> (AppState, PersistReceiver) {
    let mut snapshot = LinkSnapshot::new();
    snapshot.insert(
        "app".to_string(),
        targets(
            "https://ios.example.com/app",
            "https://android.example.com/app",
            "https://www.example.com/app",
        ),
    );
    create_test_state_with(snapshot)
}
