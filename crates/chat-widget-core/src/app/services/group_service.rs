// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::Ordering;

use tracing::{debug, info};

use crate::app::deps::*;
use crate::domain::participants::models::Participant;
use crate::domain::shared::models::ParticipantId;
use crate::domain::windows::services::OpenedWindow;
use crate::ChatEvent;

/// Builds ad-hoc groups from the participants selected in the friends list.
pub struct GroupService {
    ctx: DynAppContext,
    event_dispatcher: DynChatEventDispatcher,
    group_adapter: Option<DynGroupAdapter>,
    windows_domain_service: DynWindowsDomainService,
}

impl From<&AppDependencies> for GroupService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            event_dispatcher: deps.event_dispatcher.clone(),
            group_adapter: deps.group_adapter.clone(),
            windows_domain_service: deps.windows_domain_service.clone(),
        }
    }
}

impl GroupService {
    pub fn is_group_chat_supported(&self) -> bool {
        self.group_adapter.is_some()
    }

    /// Whether the friends list currently offers the group member selection.
    pub fn is_selecting_group_members(&self) -> bool {
        self.ctx.is_selecting_group_members.load(Ordering::Acquire)
    }

    pub fn toggle_selection(&self, participant: Participant, is_checked: bool) {
        self.ctx
            .friends_list_selection
            .write()
            .toggle(participant, is_checked);
        self.event_dispatcher
            .dispatch_event(ChatEvent::ParticipantsChanged);
    }

    pub fn is_selected(&self, participant_id: &ParticipantId) -> bool {
        self.ctx
            .friends_list_selection
            .read()
            .is_selected(participant_id)
    }

    pub fn selected_participants(&self) -> Vec<Participant> {
        self.ctx.friends_list_selection.read().selected().to_vec()
    }

    /// Creates a group from the current selection and opens its window. Returns `None` if nothing
    /// was selected.
    pub async fn confirm_selection(&self) -> Option<OpenedWindow> {
        let group = self.ctx.friends_list_selection.read().build_group();
        let Some(group) = group else {
            debug!("Not creating a group from an empty selection.");
            return None;
        };

        info!("Creating group {}…", group.display_name());

        let opened = self
            .windows_domain_service
            .open_window(group.clone(), false, false)
            .await;

        if let Some(group_adapter) = &self.group_adapter {
            group_adapter.group_created(&group);
        }

        self.cancel_selection();
        Some(opened)
    }

    pub fn cancel_selection(&self) {
        self.ctx.friends_list_selection.write().clear();
        self.ctx
            .is_selecting_group_members
            .store(false, Ordering::Release);
        self.event_dispatcher
            .dispatch_event(ChatEvent::ParticipantsChanged);
    }
}
