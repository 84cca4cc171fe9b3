// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use participant::{Participant, ParticipantInfo, ParticipantKind, ParticipantProfile};
pub use participant_metadata::{ParticipantMetadata, ParticipantWithMetadata};
pub use participant_status::ParticipantStatus;
pub use participant_type::ParticipantType;

mod participant;
mod participant_metadata;
mod participant_status;
mod participant_type;
