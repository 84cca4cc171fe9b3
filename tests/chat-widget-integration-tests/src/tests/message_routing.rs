// chat-widget/chat-widget-integration-tests
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use pretty_assertions::assert_eq;

use chat_widget_core::dtos::{AdapterEvent, Participant, ParticipantId, ParticipantStatus};
use chat_widget_core::test::MessageBuilder;
use chat_widget_core::ChatEvent;

use crate::tests::async_test;

use super::helpers::{AdapterCall, FakeChatAdapter, TestController};

fn alice() -> Participant {
    Participant::user("alice", "Alice", ParticipantStatus::Online)
}

fn alice_id() -> ParticipantId {
    ParticipantId::from("alice")
}

async fn bootstrapped_client() -> TestController {
    let client = TestController::new(FakeChatAdapter::with_friends(vec![alice()]));
    client.bootstrap().await;
    client.delegate.take_events();
    client
}

#[async_test]
async fn test_inbound_message_opens_window_once() {
    let client = bootstrapped_client().await;

    client
        .adapter
        .receive_message(
            alice(),
            MessageBuilder::new_with_index(1, "alice")
                .set_text("Hi there")
                .build_message(),
        )
        .await;

    assert_eq!(client.window_ids(), vec!["alice"]);

    let window = client.windows.window(&alice_id()).unwrap();
    assert_eq!(window.messages.len(), 1);
    assert_eq!(window.messages[0].message, "Hi there");
    assert!(!window.is_loading_history);

    // The window is bound to the roster's instance of the sender.
    let listed = client.participants.participants()[0].clone();
    assert!(window.participant.is_same_instance(&listed));

    let events = client.delegate.take_events();
    assert!(events.contains(&ChatEvent::ParticipantChatOpened {
        participant: listed.clone()
    }));
    assert!(!events.contains(&ChatEvent::ParticipantClicked {
        participant: listed
    }));

    assert_eq!(client.messages.unread_count(&alice_id()).value(), 1);

    // A second message goes into the same window.
    client
        .adapter
        .receive_message(alice(), MessageBuilder::new_with_index(2, "alice").build_message())
        .await;

    assert_eq!(client.window_ids(), vec!["alice"]);
    assert_eq!(
        client.windows.window(&alice_id()).unwrap().messages.len(),
        2
    );
    assert_eq!(client.messages.total_unread_count().value(), 2);
}

#[async_test]
async fn test_sends_draft_after_welcome_message() {
    let client = bootstrapped_client().await;

    let opened = client.windows.open_chat_window(alice()).await;
    assert!(opened.was_created);

    client.windows.set_draft(&alice_id(), "Hello Alice");
    let message = client.messages.send_draft(&alice_id()).unwrap();

    assert_eq!(message.from_id, ParticipantId::from("me"));
    assert_eq!(message.to_id, alice_id());
    assert_eq!(
        client.adapter.take_calls(),
        vec![
            AdapterCall::SendWelcomeMessage(alice_id()),
            AdapterCall::SendMessage(message.clone())
        ]
    );

    let window = client.windows.window(&alice_id()).unwrap();
    assert_eq!(window.messages, vec![message]);
    assert_eq!(window.draft, "");

    // Reopening the window neither duplicates it nor asks for another welcome message.
    client.windows.close_chat_window(&alice_id());
    client.windows.open_chat_window(alice()).await;

    assert_eq!(client.window_ids(), vec!["alice"]);
    assert!(client.adapter.take_calls().is_empty());
    assert_eq!(
        client.windows.window(&alice_id()).unwrap().messages.len(),
        1
    );
}

#[async_test]
async fn test_status_change_reaches_open_window() {
    let client = bootstrapped_client().await;
    client.windows.open_chat_window(alice()).await;
    client.delegate.take_events();

    client
        .adapter
        .push_event(AdapterEvent::ParticipantStatusChanged {
            participant_id: alice_id(),
            status: ParticipantStatus::Busy,
        })
        .await;

    assert_eq!(
        client.windows.window(&alice_id()).unwrap().participant.status(),
        ParticipantStatus::Busy
    );
    assert_eq!(
        client.delegate.take_events(),
        vec![
            ChatEvent::ParticipantsChanged,
            ChatEvent::WindowChanged {
                participant_id: alice_id()
            }
        ]
    );
}

#[async_test]
async fn test_focused_window_marks_incoming_message_as_seen() {
    let client = bootstrapped_client().await;
    client.windows.open_chat_window(alice()).await;
    client.windows.set_window_focus(&alice_id(), true);
    client.delegate.take_events();

    client
        .adapter
        .receive_message(alice(), MessageBuilder::new_with_index(1, "alice").build_message())
        .await;

    assert_eq!(client.messages.unread_count(&alice_id()).value(), 0);
    assert!(client
        .delegate
        .take_events()
        .iter()
        .any(|event| matches!(event, ChatEvent::MessagesSeen { messages } if messages.len() == 1)));
}
