// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::shared::models::ParticipantId;

use super::MessageType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// `None` until the message entered a window, where it is defaulted to `MessageType::Text`.
    #[serde(default)]
    pub r#type: Option<MessageType>,
    pub from_id: ParticipantId,
    pub to_id: ParticipantId,
    pub message: String,
    #[serde(default)]
    pub date_sent: Option<DateTime<Utc>>,
    /// `None` means unread.
    #[serde(default)]
    pub date_seen: Option<DateTime<Utc>>,
    #[serde(default)]
    pub file: Option<FileAttachment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAttachment {
    pub download_url: Url,
    pub file_size_in_bytes: u64,
}

impl Message {
    pub fn text(
        from_id: impl Into<ParticipantId>,
        to_id: impl Into<ParticipantId>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            r#type: Some(MessageType::Text),
            from_id: from_id.into(),
            to_id: to_id.into(),
            message: message.into(),
            date_sent: None,
            date_seen: None,
            file: None,
        }
    }

    /// Defaults the type to `MessageType::Text` if it is missing and returns the effective type.
    /// Calling this repeatedly has no further effect.
    pub fn ensure_type(&mut self) -> MessageType {
        *self.r#type.get_or_insert(MessageType::Text)
    }

    pub fn is_seen(&self) -> bool {
        self.date_seen.is_some()
    }

    pub fn is_unread_by(&self, user_id: &ParticipantId) -> bool {
        &self.from_id != user_id && self.date_seen.is_none()
    }

    pub fn mark_as_seen(&mut self, date: DateTime<Utc>) {
        self.date_seen = Some(date);
    }
}
