// chat-widget/chat-widget-integration-tests
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use pretty_assertions::assert_eq;

use chat_widget_core::dtos::{
    InMemoryKeyValueStore, KeyValueStore, Participant, ParticipantStatus,
};
use chat_widget_core::{AppConfig, ChatEvent};

use crate::tests::async_test;

use super::helpers::{FakeChatAdapter, TestController};

fn friends() -> Vec<Participant> {
    ["alice", "bob", "carol", "dave"]
        .into_iter()
        .map(|id| Participant::user(id, id.to_uppercase(), ParticipantStatus::Online))
        .collect()
}

#[async_test]
async fn test_restores_windows_of_previous_session() {
    let adapter = FakeChatAdapter::with_friends(friends());

    let first = TestController::new(adapter.clone());
    first.bootstrap().await;
    for participant in &friends()[0..3] {
        first.windows.open_chat_window(participant.clone()).await;
    }
    assert_eq!(first.window_ids(), vec!["carol", "bob", "alice"]);

    let store = first.store.clone();
    drop(first);

    // Carol left the friends list in the meantime.
    adapter.set_friends(vec![friends()[0].clone(), friends()[1].clone()]);

    let second = TestController::build(adapter, AppConfig::default(), store);
    second.bootstrap().await;

    assert_eq!(second.window_ids(), vec!["bob", "alice"]);
    assert!(second
        .delegate
        .take_events()
        .iter()
        .all(|event| !matches!(event, ChatEvent::ParticipantClicked { .. })));
}

#[async_test]
async fn test_corrupt_window_state_does_not_prevent_bootstrap() {
    let store = Arc::new(InMemoryKeyValueStore::new());
    store
        .set("chat-widget-windows-me", "{not json")
        .expect("Failed to seed window state");

    let client = TestController::build(
        FakeChatAdapter::with_friends(friends()),
        AppConfig::default(),
        store,
    );
    client.bootstrap().await;

    assert!(client.is_bootstrapped());
    assert_eq!(client.participants.participants().len(), 4);
    assert!(client.window_ids().is_empty());

    // The widget stays usable and overwrites the broken state.
    client.windows.open_chat_window(friends()[0].clone()).await;
    assert_eq!(
        client.store.get("chat-widget-windows-me").unwrap().as_deref(),
        Some(r#"["alice"]"#)
    );
}

#[async_test]
async fn test_does_not_restore_without_persistence() {
    let adapter = FakeChatAdapter::with_friends(friends());
    let config = AppConfig {
        persist_windows_state: false,
        ..Default::default()
    };

    let first = TestController::with_config(adapter.clone(), config.clone());
    first.bootstrap().await;
    first.windows.open_chat_window(friends()[0].clone()).await;

    let second = TestController::build(adapter, config, first.store.clone());
    second.bootstrap().await;

    assert!(second.window_ids().is_empty());
}

#[async_test]
async fn test_shrinking_viewport_evicts_oldest_windows() {
    let client = TestController::new(FakeChatAdapter::with_friends(friends()));
    client.bootstrap().await;

    for participant in friends() {
        client.windows.open_chat_window(participant).await;
    }
    assert_eq!(client.window_ids(), vec!["dave", "carol", "bob", "alice"]);
    client.delegate.take_events();

    // Room for two windows next to the friends list.
    client.windows.on_viewport_resized(262 + 2 * 320);

    assert_eq!(client.window_ids(), vec!["dave", "carol"]);
    assert!(!client.windows.unsupported_viewport());

    let events = client.delegate.take_events();
    assert!(events.contains(&ChatEvent::WindowsChanged));
    assert!(events
        .iter()
        .all(|event| !matches!(event, ChatEvent::ParticipantChatClosed { .. })));

    client.windows.on_viewport_resized(400);
    assert!(client.window_ids().is_empty());
    assert!(client.windows.unsupported_viewport());
}

#[async_test]
async fn test_opening_beyond_capacity_evicts_oldest_window() {
    let config = AppConfig {
        initial_viewport_width: 262 + 2 * 320,
        ..Default::default()
    };
    let client = TestController::with_config(FakeChatAdapter::with_friends(friends()), config);
    client.bootstrap().await;

    for participant in &friends()[0..3] {
        client.windows.open_chat_window(participant.clone()).await;
    }

    assert_eq!(client.window_ids(), vec!["carol", "bob"]);
}
