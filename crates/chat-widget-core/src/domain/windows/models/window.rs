// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

use crate::domain::messaging::models::{Message, UnreadCount};
use crate::domain::participants::models::{Participant, ParticipantType};
use crate::domain::shared::models::ParticipantId;
use crate::domain::workflows::models::{CustomerWorkflow, WindowPanel};

static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

/// A conversation with a single participant.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    /// Distinguishes a window from an earlier one opened for the same participant.
    instance_id: u64,
    /// Shared with the participant directory.
    pub participant: Participant,
    /// Chronological, oldest first.
    pub messages: Vec<Message>,
    /// The text currently typed into the window's input.
    pub draft: String,
    pub is_collapsed: bool,
    pub is_loading_history: bool,
    pub has_focus: bool,
    pub has_more_messages: bool,
    /// Set once the welcome message was requested for this conversation.
    pub welcome_message_requested: bool,
    /// The last page loaded from a paged history. 0 until the first page was requested.
    pub history_page: u32,
    pub panel: WindowPanel,
    pub customer: CustomerWorkflow,
}

impl Window {
    pub fn new(participant: Participant, is_loading_history: bool, is_collapsed: bool) -> Self {
        Self {
            instance_id: NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed),
            participant,
            messages: vec![],
            draft: String::new(),
            is_collapsed,
            is_loading_history,
            has_focus: false,
            has_more_messages: true,
            welcome_message_requested: false,
            history_page: 0,
            panel: WindowPanel::None,
            customer: CustomerWorkflow::default(),
        }
    }

    pub fn id(&self) -> &ParticipantId {
        &self.participant.id
    }

    pub fn instance_id(&self) -> u64 {
        self.instance_id
    }

    /// Inserts a batch of older messages before the current ones.
    pub fn prepend_history(&mut self, history: Vec<Message>) {
        let mut messages = history;
        messages.append(&mut self.messages);
        self.messages = messages;
    }

    /// Returns `true` the first time it is called while the conversation has no messages and
    /// `false` ever after.
    pub fn claim_welcome_message(&mut self) -> bool {
        if self.welcome_message_requested || !self.messages.is_empty() {
            return false;
        }
        self.welcome_message_requested = true;
        true
    }

    /// Messages not sent by `local_user_id` that were not seen yet.
    pub fn unread_count(&self, local_user_id: &ParticipantId) -> UnreadCount {
        UnreadCount::from(
            self.messages
                .iter()
                .filter(|message| message.is_unread_by(local_user_id))
                .count(),
        )
    }

    /// Marks the unread messages addressed to `local_user_id` as seen. In group conversations
    /// every unread message counts. Returns the messages that changed.
    pub fn mark_unread_as_seen(
        &mut self,
        local_user_id: &ParticipantId,
        date: DateTime<Utc>,
    ) -> Vec<Message> {
        let is_group = self.participant.r#type() == ParticipantType::Group;

        self.messages
            .iter_mut()
            .filter(|message| {
                message.date_seen.is_none() && (is_group || &message.to_id == local_user_id)
            })
            .map(|message| {
                message.mark_as_seen(date);
                message.clone()
            })
            .collect()
    }

    /// Avatars are shown for the first message of every run of messages by the same remote
    /// sender.
    pub fn is_avatar_visible(&self, index: usize, local_user_id: &ParticipantId) -> bool {
        let Some(message) = self.messages.get(index) else {
            return false;
        };

        if &message.from_id == local_user_id {
            return false;
        }

        match index.checked_sub(1).and_then(|i| self.messages.get(i)) {
            Some(previous) => previous.from_id != message.from_id,
            None => true,
        }
    }
}
