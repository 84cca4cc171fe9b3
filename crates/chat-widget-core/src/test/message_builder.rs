// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Duration, Utc};

use crate::domain::messaging::models::{Message, MessageType};
use crate::domain::shared::models::ParticipantId;
use crate::test::mock_data;

pub struct MessageBuilder {
    from: ParticipantId,
    to: ParticipantId,
    text: String,
    r#type: Option<MessageType>,
    date_sent: DateTime<Utc>,
    date_seen: Option<DateTime<Utc>>,
}

impl MessageBuilder {
    /// An unread message sent by `from` to the local user.
    pub fn new_with_index(idx: u32, from: impl Into<ParticipantId>) -> Self {
        MessageBuilder {
            from: from.into(),
            to: mock_data::local_user_id(),
            text: format!("Message {}", idx),
            r#type: Some(MessageType::Text),
            date_sent: mock_data::reference_date() + Duration::minutes(idx.into()),
            date_seen: None,
        }
    }

    /// A message sent by the local user to `to`.
    pub fn outgoing_with_index(idx: u32, to: impl Into<ParticipantId>) -> Self {
        let mut builder = Self::new_with_index(idx, mock_data::local_user_id());
        builder.to = to.into();
        builder
    }

    pub fn set_to(mut self, to: impl Into<ParticipantId>) -> Self {
        self.to = to.into();
        self
    }

    pub fn set_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Leaves the type unset, like adapters that do not know about message types.
    pub fn set_untyped(mut self) -> Self {
        self.r#type = None;
        self
    }

    pub fn set_seen(mut self, is_seen: bool) -> Self {
        self.date_seen = is_seen.then(|| self.date_sent);
        self
    }

    pub fn build_message(self) -> Message {
        Message {
            r#type: self.r#type,
            from_id: self.from,
            to_id: self.to,
            message: self.text,
            date_sent: Some(self.date_sent),
            date_seen: self.date_seen,
            file: None,
        }
    }
}
