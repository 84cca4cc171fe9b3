// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::participants::models::{Participant, ParticipantType};
use crate::domain::shared::models::ParticipantId;

/// Users picked from the friends list to start a group conversation with.
#[derive(Debug, Clone, Default)]
pub struct FriendsListSelection {
    selected: Vec<Participant>,
}

impl FriendsListSelection {
    pub fn toggle(&mut self, participant: Participant, is_checked: bool) {
        if is_checked {
            if !self.is_selected(&participant.id) {
                self.selected.push(participant);
            }
        } else {
            self.selected.retain(|p| p.id != participant.id);
        }
    }

    pub fn is_selected(&self, id: &ParticipantId) -> bool {
        self.selected.iter().any(|p| &p.id == id)
    }

    pub fn selected(&self) -> &[Participant] {
        &self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Builds a group from the selection if it is non-empty and led by a user. Only users are
    /// taken as members.
    pub fn build_group(&self) -> Option<Participant> {
        let first = self.selected.first()?;
        if first.r#type() != ParticipantType::User {
            return None;
        }

        let members = self
            .selected
            .iter()
            .filter(|p| p.r#type() == ParticipantType::User)
            .cloned()
            .collect();

        Some(Participant::group(members))
    }
}
