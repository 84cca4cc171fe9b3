// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use chat_widget_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::messaging::models::Message;
use crate::domain::participants::models::ParticipantWithMetadata;
use crate::domain::shared::models::{DebtorId, ParticipantId};

use super::AdapterEventCallback;

/// The transport the widget talks to.
///
/// All methods without a return value are fire-and-forget. Their outcome, if any, is delivered
/// through the callback registered with `set_event_handler`.
#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ChatAdapter: SendUnlessWasm + SyncUnlessWasm {
    async fn list_friends(&self) -> Result<Vec<ParticipantWithMetadata>>;
    async fn get_message_history(&self, participant_id: &ParticipantId) -> Result<Vec<Message>>;

    fn send_message(&self, message: &Message);
    fn send_welcome_message(&self, participant_id: &ParticipantId);
    fn end_session(&self, participant_id: &ParticipantId);

    /// Answered with `AdapterEvent::CustomerSearchResult`.
    fn search_customer(&self, tax_id: &str, participant_id: &ParticipantId);
    /// Answered with `AdapterEvent::CustomerAssociated`.
    fn associate_customer(&self, debtor_id: &DebtorId, participant_id: &ParticipantId);
    /// Answered with `AdapterEvent::CustomerDisassociated`.
    fn disassociate_customer(&self, participant_id: &ParticipantId);

    /// Registers the callback that receives inbound events. Replaces any earlier registration.
    fn set_event_handler(&self, handler: AdapterEventCallback);
}
