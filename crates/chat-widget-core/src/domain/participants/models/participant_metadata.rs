// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use super::Participant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParticipantMetadata {
    pub total_unread_messages: u32,
}

/// A directory entry as returned by the adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantWithMetadata {
    pub participant: Participant,
    pub metadata: Option<ParticipantMetadata>,
}

impl ParticipantWithMetadata {
    pub fn new(participant: Participant, metadata: Option<ParticipantMetadata>) -> Self {
        Self {
            participant,
            metadata,
        }
    }
}

impl From<Participant> for ParticipantWithMetadata {
    fn from(participant: Participant) -> Self {
        Self::new(participant, None)
    }
}
