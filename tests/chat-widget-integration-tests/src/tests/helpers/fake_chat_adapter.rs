// chat-widget/chat-widget-integration-tests
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{format_err, Result};
use async_trait::async_trait;
use parking_lot::Mutex;

use chat_widget_core::dtos::{
    AdapterEvent, AdapterEventCallback, ChatAdapter, DebtorId, Message, Participant,
    ParticipantId, ParticipantWithMetadata,
};

/// Outbound requests the widget sent to the adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum AdapterCall {
    SendMessage(Message),
    SendWelcomeMessage(ParticipantId),
    EndSession(ParticipantId),
    SearchCustomer {
        tax_id: String,
        participant_id: ParticipantId,
    },
    AssociateCustomer {
        debtor_id: DebtorId,
        participant_id: ParticipantId,
    },
    DisassociateCustomer(ParticipantId),
}

/// An in-memory server. Messages it receives are stored in the history of their conversation,
/// so that windows opened afterwards load them.
#[derive(Clone, Default)]
pub struct FakeChatAdapter {
    inner: Arc<FakeChatAdapterInner>,
}

#[derive(Default)]
struct FakeChatAdapterInner {
    friends: Mutex<Vec<ParticipantWithMetadata>>,
    histories: Mutex<HashMap<ParticipantId, Vec<Message>>>,
    calls: Mutex<Vec<AdapterCall>>,
    event_handler: Mutex<Option<AdapterEventCallback>>,
    is_offline: Mutex<bool>,
}

impl FakeChatAdapter {
    pub fn with_friends(friends: Vec<Participant>) -> Self {
        let adapter = Self::default();
        adapter.set_friends(friends);
        adapter
    }

    pub fn set_friends(&self, friends: Vec<Participant>) {
        *self.inner.friends.lock() = friends.into_iter().map(Into::into).collect();
    }

    pub fn set_offline(&self, is_offline: bool) {
        *self.inner.is_offline.lock() = is_offline;
    }

    pub fn set_history(&self, participant_id: impl Into<ParticipantId>, messages: Vec<Message>) {
        self.inner
            .histories
            .lock()
            .insert(participant_id.into(), messages);
    }

    /// Returns the recorded calls and resets the log.
    pub fn take_calls(&self) -> Vec<AdapterCall> {
        std::mem::take(&mut *self.inner.calls.lock())
    }

    pub fn is_connected(&self) -> bool {
        self.inner.event_handler.lock().is_some()
    }

    /// Stores `message` in the conversation with `participant` and delivers it to the widget.
    pub async fn receive_message(&self, participant: Participant, message: Message) {
        self.inner
            .histories
            .lock()
            .entry(participant.id.clone())
            .or_default()
            .push(message.clone());

        self.push_event(AdapterEvent::MessageReceived {
            participant,
            message,
        })
        .await
    }

    pub async fn push_event(&self, event: AdapterEvent) {
        let Some(handler) = self.inner.event_handler.lock().clone() else {
            panic!("Tried to push {:?} before the widget registered its handler.", event);
        };
        handler(event).await
    }

    fn record(&self, call: AdapterCall) {
        self.inner.calls.lock().push(call)
    }
}

#[async_trait]
impl ChatAdapter for FakeChatAdapter {
    async fn list_friends(&self) -> Result<Vec<ParticipantWithMetadata>> {
        if *self.inner.is_offline.lock() {
            return Err(format_err!("The server is not reachable."));
        }
        Ok(self.inner.friends.lock().clone())
    }

    async fn get_message_history(&self, participant_id: &ParticipantId) -> Result<Vec<Message>> {
        Ok(self
            .inner
            .histories
            .lock()
            .get(participant_id)
            .cloned()
            .unwrap_or_default())
    }

    fn send_message(&self, message: &Message) {
        self.inner
            .histories
            .lock()
            .entry(message.to_id.clone())
            .or_default()
            .push(message.clone());
        self.record(AdapterCall::SendMessage(message.clone()))
    }

    fn send_welcome_message(&self, participant_id: &ParticipantId) {
        self.record(AdapterCall::SendWelcomeMessage(participant_id.clone()))
    }

    fn end_session(&self, participant_id: &ParticipantId) {
        self.record(AdapterCall::EndSession(participant_id.clone()))
    }

    fn search_customer(&self, tax_id: &str, participant_id: &ParticipantId) {
        self.record(AdapterCall::SearchCustomer {
            tax_id: tax_id.to_string(),
            participant_id: participant_id.clone(),
        })
    }

    fn associate_customer(&self, debtor_id: &DebtorId, participant_id: &ParticipantId) {
        self.record(AdapterCall::AssociateCustomer {
            debtor_id: debtor_id.clone(),
            participant_id: participant_id.clone(),
        })
    }

    fn disassociate_customer(&self, participant_id: &ParticipantId) {
        self.record(AdapterCall::DisassociateCustomer(participant_id.clone()))
    }

    fn set_event_handler(&self, handler: AdapterEventCallback) {
        self.inner.event_handler.lock().replace(handler);
    }
}
