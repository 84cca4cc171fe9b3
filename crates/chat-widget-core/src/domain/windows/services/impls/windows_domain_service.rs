// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::Ordering;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::app::deps::{
    DynAppContext, DynChatAdapter, DynChatEventDispatcher, DynHistoryDomainService,
    DynParticipantDirectory, DynWindowSet, DynWindowStateRepository,
};
use crate::domain::participants::models::Participant;
use crate::domain::shared::models::ParticipantId;
use crate::domain::windows::models::Window;
use crate::ChatEvent;

use super::super::{
    OpenedWindow, RestoreWindowsError, WindowsDomainService as WindowsDomainServiceTrait,
};

pub struct WindowsDomainServiceDependencies {
    pub chat_adapter: DynChatAdapter,
    pub ctx: DynAppContext,
    pub event_dispatcher: DynChatEventDispatcher,
    pub history_domain_service: DynHistoryDomainService,
    pub participant_directory: DynParticipantDirectory,
    pub window_set: DynWindowSet,
    pub window_state_repo: DynWindowStateRepository,
}

pub struct WindowsDomainService {
    chat_adapter: DynChatAdapter,
    ctx: DynAppContext,
    event_dispatcher: DynChatEventDispatcher,
    history_domain_service: DynHistoryDomainService,
    participant_directory: DynParticipantDirectory,
    window_set: DynWindowSet,
    window_state_repo: DynWindowStateRepository,
}

impl From<WindowsDomainServiceDependencies> for WindowsDomainService {
    fn from(deps: WindowsDomainServiceDependencies) -> Self {
        Self {
            chat_adapter: deps.chat_adapter,
            ctx: deps.ctx,
            event_dispatcher: deps.event_dispatcher,
            history_domain_service: deps.history_domain_service,
            participant_directory: deps.participant_directory,
            window_set: deps.window_set,
            window_state_repo: deps.window_state_repo,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl WindowsDomainServiceTrait for WindowsDomainService {
    async fn open_window(
        &self,
        participant: Participant,
        focus: bool,
        from_user_click: bool,
    ) -> OpenedWindow {
        if let Some(window) = self.window_set.get(&participant.id) {
            return OpenedWindow {
                window,
                was_created: false,
            };
        }

        let config = &self.ctx.config;

        if from_user_click {
            self.event_dispatcher
                .dispatch_event(ChatEvent::ParticipantClicked {
                    participant: participant.clone(),
                });
        }

        let is_collapsed = !from_user_click && !config.maximize_window_on_new_message;
        let window = Window::new(participant.clone(), config.history_enabled, is_collapsed);

        if !self.window_set.insert(window.clone()) {
            // Another task opened the window in the meantime.
            if let Some(window) = self.window_set.get(&participant.id) {
                return OpenedWindow {
                    window,
                    was_created: false,
                };
            }
        }

        debug!("Opened window for {}.", participant.id);

        if !config.is_viewport_on_mobile_enabled {
            let evicted = self.window_set.truncate(self.ctx.max_windows());
            if !evicted.is_empty() {
                debug!(
                    "Evicted {} window(s) that no longer fit into the viewport.",
                    evicted.len()
                );
            }
        }

        self.persist_windows();

        if focus && !is_collapsed {
            self.event_dispatcher
                .dispatch_event(ChatEvent::WindowFocusRequested {
                    participant_id: participant.id.clone(),
                });
        }

        self.participant_directory.mark_interacted(&participant.id);
        self.event_dispatcher.dispatch_event(ChatEvent::WindowsChanged);
        self.event_dispatcher
            .dispatch_event(ChatEvent::ParticipantChatOpened {
                participant: participant.clone(),
            });

        if config.history_enabled {
            if let Err(err) = self
                .history_domain_service
                .load_history(&participant.id)
                .await
            {
                warn!(
                    "Failed to load the history of {}. {}",
                    participant.id,
                    err.to_string()
                );
            }
        } else {
            let claimed = self
                .window_set
                .update(&participant.id, |window| window.claim_welcome_message())
                .unwrap_or_default();

            if claimed {
                self.chat_adapter.send_welcome_message(&participant.id);
            }
        }

        OpenedWindow {
            window,
            was_created: true,
        }
    }

    fn close_window(&self, participant_id: &ParticipantId) -> Option<Window> {
        let window = self.window_set.remove(participant_id)?;

        debug!("Closed window for {}.", participant_id);
        self.persist_windows();

        self.event_dispatcher.dispatch_event(ChatEvent::WindowsChanged);
        self.event_dispatcher
            .dispatch_event(ChatEvent::ParticipantChatClosed {
                participant: window.participant.clone(),
            });

        Some(window)
    }

    fn normalize_windows(&self) {
        let config = &self.ctx.config;
        let max_windows = self.ctx.max_windows();

        let evicted = self.window_set.truncate(max_windows);
        self.persist_windows();

        let unsupported_viewport = !config.is_viewport_on_mobile_enabled
            && config.hide_friends_list_on_unsupported_viewport
            && max_windows < 1;
        self.ctx
            .unsupported_viewport
            .store(unsupported_viewport, Ordering::Release);

        if !evicted.is_empty() {
            debug!(
                "Evicted {} window(s) after the viewport was resized to {}px.",
                evicted.len(),
                self.ctx.viewport_width()
            );
            self.event_dispatcher.dispatch_event(ChatEvent::WindowsChanged);
        }
    }

    fn persist_windows(&self) {
        if !self.ctx.config.persist_windows_state {
            return;
        }

        if let Err(err) = self
            .window_state_repo
            .set(&self.ctx.local_user_id, &self.window_set.participant_ids())
        {
            error!("Failed to persist the open windows. {}", err.to_string());
        }
    }

    async fn restore_windows(&self) -> Result<(), RestoreWindowsError> {
        if !self.ctx.config.persist_windows_state {
            return Ok(());
        }

        if !self.participant_directory.has_loaded() {
            return Err(RestoreWindowsError::DirectoryNotLoaded);
        }

        let window_ids = self.window_state_repo.get(&self.ctx.local_user_id)?;

        info!("Restoring {} window(s)…", window_ids.len());

        // Windows are inserted at the front, so opening them back to front reproduces the
        // persisted order.
        for id in window_ids.iter().rev() {
            let Some(participant) = self.participant_directory.get(id) else {
                debug!("Skipping window for {} which is not in the friends list.", id);
                continue;
            };

            self.open_window(participant, false, false).await;
        }

        Ok(())
    }
}
