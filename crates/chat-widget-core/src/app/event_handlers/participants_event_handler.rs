// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::app::deps::{
    AppDependencies, DynChatEventDispatcher, DynParticipantDirectory, DynWindowSet,
};
use crate::app::event_handlers::{AdapterEvent, AdapterEventHandler};
use crate::domain::participants::models::{ParticipantStatus, ParticipantWithMetadata};
use crate::domain::shared::models::ParticipantId;
use crate::ChatEvent;

/// Handles roster and presence related events.
pub struct ParticipantsEventHandler {
    event_dispatcher: DynChatEventDispatcher,
    participant_directory: DynParticipantDirectory,
    window_set: DynWindowSet,
}

impl From<&AppDependencies> for ParticipantsEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            event_dispatcher: deps.event_dispatcher.clone(),
            participant_directory: deps.participant_directory.clone(),
            window_set: deps.window_set.clone(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl AdapterEventHandler for ParticipantsEventHandler {
    fn name(&self) -> &'static str {
        "participants"
    }

    async fn handle_event(&self, event: AdapterEvent) -> Result<Option<AdapterEvent>> {
        match event {
            AdapterEvent::FriendsListChanged { participants } => {
                self.handle_friends_list_changed(participants);
            }
            AdapterEvent::ParticipantStatusChanged {
                participant_id,
                status,
            } => self.handle_status_changed(&participant_id, status),
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl ParticipantsEventHandler {
    fn handle_friends_list_changed(&self, participants: Vec<ParticipantWithMetadata>) {
        debug!("Received friends list with {} entries.", participants.len());

        self.participant_directory.replace_all(participants);
        self.window_set
            .rebind_participants(|id| self.participant_directory.get(id));

        self.event_dispatcher
            .dispatch_event(ChatEvent::ParticipantsChanged);
    }

    fn handle_status_changed(&self, participant_id: &ParticipantId, status: ParticipantStatus) {
        let is_known = self
            .participant_directory
            .set_status(participant_id, status)
            .is_some();

        // Participants that are not part of the roster (e.g. groups) only live in their window.
        let has_window = self
            .window_set
            .update(participant_id, |window| window.participant.set_status(status))
            .is_some();

        if !is_known && !has_window {
            debug!(
                "Ignoring status change of unknown participant {}.",
                participant_id
            );
            return;
        }

        self.event_dispatcher
            .dispatch_event(ChatEvent::ParticipantsChanged);

        if has_window {
            self.event_dispatcher
                .dispatch_event(ChatEvent::WindowChanged {
                    participant_id: participant_id.clone(),
                });
        }
    }
}
