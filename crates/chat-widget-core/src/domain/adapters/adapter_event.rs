// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use chat_widget_wasm_utils::PinnedFuture;

use crate::domain::messaging::models::Message;
use crate::domain::participants::models::{
    Participant, ParticipantStatus, ParticipantWithMetadata,
};
use crate::domain::shared::models::ParticipantId;
use crate::domain::workflows::models::CustomerRecord;

/// Events pushed by the adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum AdapterEvent {
    /// The complete roster was pushed.
    FriendsListChanged {
        participants: Vec<ParticipantWithMetadata>,
    },
    MessageReceived {
        participant: Participant,
        message: Message,
    },
    ParticipantStatusChanged {
        participant_id: ParticipantId,
        status: ParticipantStatus,
    },
    /// The answer to `ChatAdapter::search_customer`. `customer` is `None` if no customer was
    /// found.
    CustomerSearchResult {
        participant_id: ParticipantId,
        customer: Option<CustomerRecord>,
    },
    CustomerAssociated {
        participant_id: ParticipantId,
    },
    CustomerDisassociated {
        participant_id: ParticipantId,
    },
}

/// Receives `AdapterEvent`s. Adapters should await the returned future before delivering the
/// next event to preserve ordering.
#[cfg(not(target_arch = "wasm32"))]
pub type AdapterEventCallback = Arc<dyn Fn(AdapterEvent) -> PinnedFuture<()> + Send + Sync>;
#[cfg(target_arch = "wasm32")]
pub type AdapterEventCallback = Arc<dyn Fn(AdapterEvent) -> PinnedFuture<()>>;
