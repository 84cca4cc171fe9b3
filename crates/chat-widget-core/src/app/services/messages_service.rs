// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{bail, Result};
use tracing::{debug, info};

use crate::app::deps::*;
use crate::domain::adapters::FileUpload;
use crate::domain::messaging::models::{Message, UnreadCount};
use crate::domain::shared::models::ParticipantId;
use crate::domain::windows::models::ScrollDirection;
use crate::ChatEvent;

pub struct MessagesService {
    chat_adapter: DynChatAdapter,
    ctx: DynAppContext,
    event_dispatcher: DynChatEventDispatcher,
    file_upload_adapter: Option<DynFileUploadAdapter>,
    participant_directory: DynParticipantDirectory,
    time_provider: DynTimeProvider,
    window_set: DynWindowSet,
}

impl From<&AppDependencies> for MessagesService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            chat_adapter: deps.chat_adapter.clone(),
            ctx: deps.ctx.clone(),
            event_dispatcher: deps.event_dispatcher.clone(),
            file_upload_adapter: deps.file_upload_adapter.clone(),
            participant_directory: deps.participant_directory.clone(),
            time_provider: deps.time_provider.clone(),
            window_set: deps.window_set.clone(),
        }
    }
}

impl MessagesService {
    /// Sends the window's draft as typed. Blank drafts are ignored. Returns the sent message.
    ///
    /// The message is appended to the window before the adapter sees it and the draft is only
    /// cleared after that.
    pub fn send_draft(&self, participant_id: &ParticipantId) -> Option<Message> {
        let now = self.time_provider.now();
        let local_user_id = &self.ctx.local_user_id;

        let (message, is_collapsed) = self.window_set.update(participant_id, |window| {
            if window.draft.trim().is_empty() {
                return None;
            }

            let mut message = Message::text(
                local_user_id.clone(),
                window.id().clone(),
                window.draft.clone(),
            );
            message.date_sent = Some(now);

            window.messages.push(message.clone());
            Some((message, window.is_collapsed))
        })??;

        self.chat_adapter.send_message(&message);

        self.window_set
            .update(participant_id, |window| window.draft.clear());

        self.event_dispatcher
            .dispatch_event(ChatEvent::WindowChanged {
                participant_id: participant_id.clone(),
            });

        if !is_collapsed {
            self.event_dispatcher
                .dispatch_event(ChatEvent::ScrollRequested {
                    participant_id: participant_id.clone(),
                    direction: ScrollDirection::Bottom,
                });
        }

        Some(message)
    }

    pub fn is_upload_supported(&self) -> bool {
        self.file_upload_adapter.is_some()
    }

    pub fn is_uploading_file(&self, participant_id: &ParticipantId) -> bool {
        self.ctx.is_upload_in_progress(participant_id)
    }

    /// Uploads a file and appends the adapter's resulting message to the window. Only one upload
    /// per window runs at a time.
    pub async fn upload_file(&self, participant_id: &ParticipantId, file: FileUpload) -> Result<()> {
        let Some(adapter) = &self.file_upload_adapter else {
            bail!("No FileUploadAdapter was configured.");
        };

        if !self.window_set.contains(participant_id) {
            bail!("No window is open for {}.", participant_id);
        }

        if !self
            .ctx
            .uploads_in_progress
            .write()
            .insert(participant_id.clone())
        {
            bail!("An upload for {} is in progress already.", participant_id);
        }

        info!("Uploading {} to {}…", file.name, participant_id);
        self.dispatch_window_changed(participant_id);

        let result = adapter.upload_file(file, participant_id).await;

        self.ctx.uploads_in_progress.write().remove(participant_id);

        let mut message = match result {
            Ok(message) => message,
            Err(err) => {
                self.dispatch_window_changed(participant_id);
                return Err(err);
            }
        };

        message.ensure_type();
        // The sender of an uploaded file is always the local user.
        message.from_id = self.ctx.local_user_id.clone();

        let is_collapsed = self.window_set.update(participant_id, |window| {
            window.messages.push(message.clone());
            window.is_collapsed
        });

        let Some(is_collapsed) = is_collapsed else {
            debug!("Discarding uploaded file since its window was closed.");
            return Ok(());
        };

        self.chat_adapter.send_message(&message);
        self.dispatch_window_changed(participant_id);

        if !is_collapsed {
            self.event_dispatcher
                .dispatch_event(ChatEvent::ScrollRequested {
                    participant_id: participant_id.clone(),
                    direction: ScrollDirection::Bottom,
                });
        }

        Ok(())
    }

    /// The unread count of a participant. Falls back to the count the adapter reported with the
    /// friends list as long as the user never interacted with the participant.
    pub fn unread_count(&self, participant_id: &ParticipantId) -> UnreadCount {
        let local_user_id = &self.ctx.local_user_id;

        if let Some(count) = self
            .window_set
            .update(participant_id, |window| window.unread_count(local_user_id))
        {
            return count;
        }

        self.participant_directory
            .fallback_unread_count(participant_id)
    }

    /// The unread count of all open windows combined.
    pub fn total_unread_count(&self) -> UnreadCount {
        let local_user_id = &self.ctx.local_user_id;
        let total: u32 = self
            .window_set
            .windows()
            .iter()
            .map(|window| window.unread_count(local_user_id).value())
            .sum();
        UnreadCount::from(total)
    }

    fn dispatch_window_changed(&self, participant_id: &ParticipantId) {
        self.event_dispatcher
            .dispatch_event(ChatEvent::WindowChanged {
                participant_id: participant_id.clone(),
            });
    }
}
