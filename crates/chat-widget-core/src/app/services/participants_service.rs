// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::{error, info, warn};

use chat_widget_wasm_utils::PeriodicTask;

use crate::app::deps::*;
use crate::domain::participants::models::{Participant, ParticipantStatus};
use crate::ChatEvent;

#[derive(Clone)]
pub struct ParticipantsService {
    chat_adapter: DynChatAdapter,
    ctx: DynAppContext,
    event_dispatcher: DynChatEventDispatcher,
    participant_directory: DynParticipantDirectory,
    window_set: DynWindowSet,
    windows_domain_service: DynWindowsDomainService,
}

impl From<&AppDependencies> for ParticipantsService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            chat_adapter: deps.chat_adapter.clone(),
            ctx: deps.ctx.clone(),
            event_dispatcher: deps.event_dispatcher.clone(),
            participant_directory: deps.participant_directory.clone(),
            window_set: deps.window_set.clone(),
            windows_domain_service: deps.windows_domain_service.clone(),
        }
    }
}

impl ParticipantsService {
    /// All participants in the order the adapter delivered them.
    pub fn participants(&self) -> Vec<Participant> {
        self.participant_directory.participants()
    }

    /// The participants matching the current search input.
    pub fn filtered_participants(&self) -> Vec<Participant> {
        self.participant_directory
            .filtered(&self.ctx.search_input.read())
    }

    pub fn search_input(&self) -> String {
        self.ctx.search_input.read().clone()
    }

    pub fn set_search_input(&self, input: impl Into<String>) {
        *self.ctx.search_input.write() = input.into();
        self.event_dispatcher
            .dispatch_event(ChatEvent::ParticipantsChanged);
    }

    pub fn status_title(&self, status: ParticipantStatus) -> String {
        self.ctx.config.localization.status_title(status).to_string()
    }

    /// Replaces the directory with the adapter's friends list. A failed fetch leaves the
    /// directory untouched. The first fetch after bootstrapping restores persisted windows.
    pub async fn fetch_friends_list(&self, is_bootstrapping: bool) -> Result<()> {
        let participants = self.chat_adapter.list_friends().await?;

        self.participant_directory.replace_all(participants);
        self.window_set
            .rebind_participants(|id| self.participant_directory.get(id));
        self.event_dispatcher
            .dispatch_event(ChatEvent::ParticipantsChanged);

        if is_bootstrapping {
            if let Err(err) = self.windows_domain_service.restore_windows().await {
                error!("Failed to restore windows. {}", err.to_string());
            }
        }

        Ok(())
    }

    /// Fetches the friends list and, if configured, keeps polling it.
    pub async fn activate_friends_list_fetch(&self) -> Result<()> {
        self.ctx.cancel_polling();

        let config = &self.ctx.config;

        if config.poll_friends_list {
            info!(
                "Polling the friends list every {}s.",
                config.polling_interval.as_secs_f32()
            );

            let service = self.clone();
            let task = PeriodicTask::start(config.polling_interval, move || {
                let service = service.clone();
                async move {
                    if let Err(err) = service.fetch_friends_list(false).await {
                        warn!("Failed to poll the friends list. {}", err.to_string());
                    }
                }
            });

            self.ctx.polling_task.lock().replace(task);
        }

        self.fetch_friends_list(true).await
    }

    pub fn stop_polling(&self) {
        self.ctx.cancel_polling();
    }
}
