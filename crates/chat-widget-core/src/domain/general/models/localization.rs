// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::participants::models::ParticipantStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusDescription {
    pub online: String,
    pub busy: String,
    pub away: String,
    pub offline: String,
}

/// User facing strings of the widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Localization {
    pub title: String,
    pub message_placeholder: String,
    pub search_placeholder: String,
    pub status_description: StatusDescription,
    /// Prefix of the title of browser notifications, followed by the sender's name.
    pub browser_notification_title: String,
    pub load_message_history_placeholder: String,
}

impl Localization {
    pub fn status_title(&self, status: ParticipantStatus) -> &str {
        match status {
            ParticipantStatus::Online => &self.status_description.online,
            ParticipantStatus::Busy => &self.status_description.busy,
            ParticipantStatus::Away => &self.status_description.away,
            ParticipantStatus::Offline => &self.status_description.offline,
        }
    }
}

impl Default for StatusDescription {
    fn default() -> Self {
        Self {
            online: "Online".to_string(),
            busy: "Busy".to_string(),
            away: "Away".to_string(),
            offline: "Offline".to_string(),
        }
    }
}

impl Default for Localization {
    fn default() -> Self {
        Self {
            title: "Friends".to_string(),
            message_placeholder: "Type a message".to_string(),
            search_placeholder: "Search".to_string(),
            status_description: Default::default(),
            browser_notification_title: "New message from".to_string(),
            load_message_history_placeholder: "Load older messages".to_string(),
        }
    }
}
