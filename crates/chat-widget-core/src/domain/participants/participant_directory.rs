// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;

use parking_lot::RwLock;

use crate::domain::messaging::models::UnreadCount;
use crate::domain::shared::models::ParticipantId;

use super::models::{Participant, ParticipantStatus, ParticipantWithMetadata};

/// The roster of chattable participants as last reported by the adapter.
///
/// The directory is the authoritative owner of participant instances. Windows hold clones of the
/// same handles, so status updates applied here are visible through them.
#[derive(Default)]
pub struct ParticipantDirectory {
    state: RwLock<DirectoryState>,
}

#[derive(Default)]
struct DirectoryState {
    entries: Vec<ParticipantWithMetadata>,
    /// Participants a window was opened for since the last refresh. Their unread count is no
    /// longer taken from the (then stale) metadata snapshot.
    interacted_with: HashSet<ParticipantId>,
    has_loaded: bool,
}

impl ParticipantDirectory {
    /// Replaces the roster and starts a new interaction epoch.
    ///
    /// Participants that are already known keep their instance (and receive the reported status)
    /// so that open windows stay bound to the same participant.
    pub fn replace_all(&self, entries: Vec<ParticipantWithMetadata>) {
        let mut state = self.state.write();

        let entries = entries
            .into_iter()
            .map(|entry| {
                let existing = state
                    .entries
                    .iter()
                    .find(|e| e.participant.id == entry.participant.id)
                    .filter(|e| e.participant.kind == entry.participant.kind)
                    .filter(|e| e.participant.profile == entry.participant.profile);

                match existing {
                    Some(existing) => {
                        existing.participant.set_status(entry.participant.status());
                        ParticipantWithMetadata::new(existing.participant.clone(), entry.metadata)
                    }
                    None => entry,
                }
            })
            .collect();

        state.entries = entries;
        state.interacted_with.clear();
        state.has_loaded = true;
    }

    /// Returns `true` once the first roster was received.
    pub fn has_loaded(&self) -> bool {
        self.state.read().has_loaded
    }

    pub fn participants(&self) -> Vec<Participant> {
        self.state
            .read()
            .entries
            .iter()
            .map(|entry| entry.participant.clone())
            .collect()
    }

    pub fn get(&self, id: &ParticipantId) -> Option<Participant> {
        self.state
            .read()
            .entries
            .iter()
            .find(|entry| &entry.participant.id == id)
            .map(|entry| entry.participant.clone())
    }

    /// Participants whose display name contains `query`, ignoring case. An empty query returns
    /// the full roster.
    pub fn filtered(&self, query: &str) -> Vec<Participant> {
        if query.is_empty() {
            return self.participants();
        }

        let query = query.to_uppercase();

        self.state
            .read()
            .entries
            .iter()
            .filter(|entry| {
                entry
                    .participant
                    .display_name()
                    .to_uppercase()
                    .contains(&query)
            })
            .map(|entry| entry.participant.clone())
            .collect()
    }

    pub fn mark_interacted(&self, id: &ParticipantId) {
        self.state.write().interacted_with.insert(id.clone());
    }

    pub fn has_interacted(&self, id: &ParticipantId) -> bool {
        self.state.read().interacted_with.contains(id)
    }

    /// The unread count reported by the adapter for `id`, valid only as long as nobody
    /// interacted with the participant since the roster was refreshed.
    pub fn fallback_unread_count(&self, id: &ParticipantId) -> UnreadCount {
        let state = self.state.read();

        if state.interacted_with.contains(id) {
            return UnreadCount::default();
        }

        state
            .entries
            .iter()
            .find(|entry| &entry.participant.id == id)
            .and_then(|entry| entry.metadata)
            .map(|metadata| UnreadCount::from(metadata.total_unread_messages))
            .unwrap_or_default()
    }

    /// Updates the status of the participant identified by `id`. Returns the updated instance, if
    /// the participant is known.
    pub fn set_status(&self, id: &ParticipantId, status: ParticipantStatus) -> Option<Participant> {
        let participant = self.get(id)?;
        participant.set_status(status);
        Some(participant)
    }
}
