// chat-widget/chat-widget-integration-tests
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use pretty_assertions::assert_eq;

use chat_widget_core::dtos::{
    AdapterEvent, CustomerRecord, DebtorId, Participant, ParticipantId, ParticipantStatus,
    WindowAction, WindowPanel,
};
use chat_widget_core::ChatEvent;

use crate::tests::async_test;

use super::helpers::{AdapterCall, FakeChatAdapter, TestController};

fn client_participant() -> Participant {
    Participant::client("c-1", "Client", ParticipantStatus::Online)
}

fn client_id() -> ParticipantId {
    ParticipantId::from("c-1")
}

async fn controller_with_open_client_window() -> TestController {
    let controller =
        TestController::new(FakeChatAdapter::with_friends(vec![client_participant()]));
    controller.bootstrap().await;
    controller
        .windows
        .open_chat_window(client_participant())
        .await;
    controller.adapter.take_calls();
    controller.delegate.take_events();
    controller
}

#[async_test]
async fn test_associates_and_disassociates_customer() {
    let controller = controller_with_open_client_window().await;

    assert_eq!(
        controller.windows.window_actions(&client_id()),
        vec![WindowAction::EndSession, WindowAction::AssociateCustomer]
    );

    controller
        .windows
        .activate_window_action(&client_id(), WindowAction::AssociateCustomer);
    controller
        .customers
        .set_customer_search_input(&client_id(), "123.456.789-01");
    controller.customers.search_customer(&client_id());

    assert_eq!(
        controller.adapter.take_calls(),
        vec![AdapterCall::SearchCustomer {
            tax_id: "12345678901".to_string(),
            participant_id: client_id()
        }]
    );

    controller
        .adapter
        .push_event(AdapterEvent::CustomerSearchResult {
            participant_id: client_id(),
            customer: Some(CustomerRecord {
                debtor_id: DebtorId::from("d-1"),
                name: "ACME".to_string(),
            }),
        })
        .await;

    assert_eq!(
        controller.windows.window(&client_id()).unwrap().panel,
        WindowPanel::AssociateCustomer
    );

    controller.customers.associate_customer(&client_id());
    assert_eq!(
        controller.adapter.take_calls(),
        vec![AdapterCall::AssociateCustomer {
            debtor_id: DebtorId::from("d-1"),
            participant_id: client_id()
        }]
    );

    controller
        .adapter
        .push_event(AdapterEvent::CustomerAssociated {
            participant_id: client_id(),
        })
        .await;

    assert_eq!(
        controller.windows.window_actions(&client_id()),
        vec![
            WindowAction::EndSession,
            WindowAction::DisassociateCustomer
        ]
    );

    controller
        .windows
        .activate_window_action(&client_id(), WindowAction::DisassociateCustomer);
    controller.customers.disassociate_customer(&client_id());
    assert_eq!(
        controller.adapter.take_calls(),
        vec![AdapterCall::DisassociateCustomer(client_id())]
    );

    controller
        .adapter
        .push_event(AdapterEvent::CustomerDisassociated {
            participant_id: client_id(),
        })
        .await;

    let window = controller.windows.window(&client_id()).unwrap();
    assert_eq!(window.panel, WindowPanel::SearchCustomer);
    assert!(!window.customer.is_associated());
    assert!(controller
        .delegate
        .take_events()
        .iter()
        .all(|event| matches!(event, ChatEvent::WindowChanged { .. })));
}

#[async_test]
async fn test_invalid_tax_id_never_reaches_adapter() {
    let controller = controller_with_open_client_window().await;

    controller
        .customers
        .set_customer_search_input(&client_id(), "1234567890");
    controller.customers.search_customer(&client_id());

    assert!(controller.adapter.take_calls().is_empty());
    assert!(controller
        .windows
        .window(&client_id())
        .unwrap()
        .customer
        .error
        .is_some());
}

#[async_test]
async fn test_end_session_closes_window() {
    let controller = controller_with_open_client_window().await;

    controller
        .windows
        .activate_window_action(&client_id(), WindowAction::EndSession);
    controller.customers.end_session(&client_id());

    assert_eq!(
        controller.adapter.take_calls(),
        vec![AdapterCall::EndSession(client_id())]
    );
    assert!(controller.window_ids().is_empty());
    assert!(controller
        .delegate
        .take_events()
        .contains(&ChatEvent::ParticipantChatClosed {
            participant: controller.participants.participants()[0].clone()
        }));
}
