// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::Message;
use crate::domain::participants::models::Participant;
use crate::domain::shared::models::ParticipantId;
use crate::domain::windows::models::ScrollDirection;

#[derive(Debug, Clone, PartialEq)]
pub enum ChatEvent {
    /// The user clicked a participant that had no open window.
    ParticipantClicked { participant: Participant },

    /// A window was created for `participant`.
    ParticipantChatOpened { participant: Participant },

    /// The window of `participant` was closed explicitly. Windows evicted because they no longer
    /// fit into the viewport do not trigger this event.
    ParticipantChatClosed { participant: Participant },

    /// `messages` were marked as seen by the local user.
    MessagesSeen { messages: Vec<Message> },

    /// The input of the window for `participant_id` should receive focus.
    WindowFocusRequested { participant_id: ParticipantId },

    /// The message list of the window for `participant_id` should scroll to `direction`.
    ScrollRequested {
        participant_id: ParticipantId,
        direction: ScrollDirection,
    },

    /// The roster or the status of a participant changed.
    ParticipantsChanged,

    /// Windows were opened, closed or evicted.
    WindowsChanged,

    /// The contents of the window for `participant_id` changed (messages, draft, flags or
    /// customer workflow).
    WindowChanged { participant_id: ParticipantId },
}
