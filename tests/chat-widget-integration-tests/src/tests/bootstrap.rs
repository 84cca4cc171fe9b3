// chat-widget/chat-widget-integration-tests
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;

use chat_widget_core::dtos::{Participant, ParticipantStatus};
use chat_widget_core::{AppConfig, BootstrapError, ChatController, ChatEvent};
use chat_widget_wasm_utils::sleep;

use crate::tests::async_test;

use super::helpers::{FakeChatAdapter, TestController};

fn friends() -> Vec<Participant> {
    vec![
        Participant::user("alice", "Alice", ParticipantStatus::Online),
        Participant::user("bob", "Bob", ParticipantStatus::Away),
    ]
}

#[async_test]
async fn test_bootstrap_loads_friends_list() {
    let client = TestController::new(FakeChatAdapter::with_friends(friends()));

    assert!(!client.is_bootstrapped());
    client.bootstrap().await;

    assert!(client.is_bootstrapped());
    assert!(client.adapter.is_connected());
    assert_eq!(client.participants.participants().len(), 2);
    assert_eq!(
        client.delegate.take_events(),
        vec![ChatEvent::ParticipantsChanged]
    );

    // A second call has no effect.
    client.bootstrap().await;
    assert!(client.delegate.take_events().is_empty());
}

#[async_test]
async fn test_bootstrap_survives_unreachable_server() {
    let adapter = FakeChatAdapter::with_friends(friends());
    adapter.set_offline(true);

    let client = TestController::new(adapter);
    client.bootstrap().await;

    assert!(client.is_bootstrapped());
    assert!(client.participants.participants().is_empty());

    client.adapter.set_offline(false);
    client.participants.fetch_friends_list(false).await.unwrap();
    assert_eq!(client.participants.participants().len(), 2);
}

#[async_test]
async fn test_disabled_widget_does_not_fetch_until_enabled() {
    let client = TestController::new(FakeChatAdapter::with_friends(friends()));

    client.set_disabled(true).await;
    client.bootstrap().await;

    assert!(client.is_disabled());
    assert!(client.participants.participants().is_empty());

    client.set_disabled(false).await;
    assert!(!client.is_disabled());
    assert_eq!(client.participants.participants().len(), 2);
}

#[async_test]
async fn test_disabling_stops_polling_the_friends_list() {
    let adapter = FakeChatAdapter::with_friends(friends()[0..1].to_vec());
    let config = AppConfig {
        poll_friends_list: true,
        polling_interval: Duration::from_millis(10),
        ..Default::default()
    };

    let client = TestController::with_config(adapter, config);
    client.bootstrap().await;
    assert_eq!(client.participants.participants().len(), 1);

    client.adapter.set_friends(friends());
    sleep(Duration::from_millis(100)).await;
    assert_eq!(client.participants.participants().len(), 2);

    client.set_disabled(true).await;
    client.adapter.set_friends(vec![]);
    sleep(Duration::from_millis(100)).await;
    assert_eq!(client.participants.participants().len(), 2);

    // Enabling fetches right away and resumes polling.
    client.set_disabled(false).await;
    assert!(client.participants.participants().is_empty());

    client.adapter.set_friends(friends()[1..2].to_vec());
    sleep(Duration::from_millis(100)).await;
    assert_eq!(
        client
            .participants
            .participants()
            .iter()
            .map(|p| p.id.to_string())
            .collect::<Vec<_>>(),
        vec!["bob"]
    );
}

#[test]
fn test_build_validates_configuration() {
    assert_eq!(
        ChatController::builder().set_user_id("me").build().err(),
        Some(BootstrapError::MissingAdapter)
    );

    assert_eq!(
        ChatController::builder()
            .set_chat_adapter(Arc::new(FakeChatAdapter::default()))
            .set_user_id("  ")
            .build()
            .err(),
        Some(BootstrapError::MissingUserId)
    );

    let config = AppConfig {
        theme: "neon".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        ChatController::builder()
            .set_chat_adapter(Arc::new(FakeChatAdapter::default()))
            .set_user_id("me")
            .set_config(config)
            .build(),
        Err(BootstrapError::InvalidTheme(_))
    ));
}
