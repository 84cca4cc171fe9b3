// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::Ordering;

use tracing::debug;

use crate::app::deps::*;
use crate::domain::messaging::models::Message;
use crate::domain::participants::models::{Participant, ParticipantType};
use crate::domain::shared::models::ParticipantId;
use crate::domain::windows::models::{ScrollDirection, Window};
use crate::domain::windows::services::OpenedWindow;
use crate::domain::workflows::models::{WindowAction, WindowPanel};
use crate::ChatEvent;

pub struct WindowsService {
    ctx: DynAppContext,
    event_dispatcher: DynChatEventDispatcher,
    group_adapter: Option<DynGroupAdapter>,
    participant_directory: DynParticipantDirectory,
    time_provider: DynTimeProvider,
    window_set: DynWindowSet,
    windows_domain_service: DynWindowsDomainService,
}

impl From<&AppDependencies> for WindowsService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            event_dispatcher: deps.event_dispatcher.clone(),
            group_adapter: deps.group_adapter.clone(),
            participant_directory: deps.participant_directory.clone(),
            time_provider: deps.time_provider.clone(),
            window_set: deps.window_set.clone(),
            windows_domain_service: deps.windows_domain_service.clone(),
        }
    }
}

impl WindowsService {
    /// The open windows, most recently opened first.
    pub fn windows(&self) -> Vec<Window> {
        self.window_set.windows()
    }

    pub fn window(&self, participant_id: &ParticipantId) -> Option<Window> {
        self.window_set.get(participant_id)
    }

    pub fn unsupported_viewport(&self) -> bool {
        self.ctx.unsupported_viewport.load(Ordering::Acquire)
    }

    pub fn is_friends_list_collapsed(&self) -> bool {
        self.ctx.is_friends_list_collapsed.load(Ordering::Acquire)
    }

    pub fn toggle_friends_list_collapsed(&self) {
        self.ctx
            .is_friends_list_collapsed
            .fetch_xor(true, Ordering::AcqRel);
        self.event_dispatcher
            .dispatch_event(ChatEvent::ParticipantsChanged);
    }

    /// Opens the window of a participant the user clicked in the friends list.
    pub async fn open_chat_window(&self, participant: Participant) -> OpenedWindow {
        let participant = self
            .participant_directory
            .get(&participant.id)
            .unwrap_or(participant);

        self.windows_domain_service
            .open_window(participant, true, true)
            .await
    }

    pub fn close_chat_window(&self, participant_id: &ParticipantId) {
        self.windows_domain_service.close_window(participant_id);
    }

    /// Closes a window from the keyboard. Focus moves to the closest remaining window.
    pub fn dismiss_chat_window(&self, participant_id: &ParticipantId) {
        if let Some(closest) = self.window_set.closest_window(participant_id) {
            self.event_dispatcher
                .dispatch_event(ChatEvent::WindowFocusRequested {
                    participant_id: closest.id().clone(),
                });
        }
        self.close_chat_window(participant_id);
    }

    pub fn closest_window(&self, participant_id: &ParticipantId) -> Option<Window> {
        self.window_set.closest_window(participant_id)
    }

    pub fn on_viewport_resized(&self, width: u32) {
        debug!("Viewport resized to {}px.", width);
        self.ctx.set_viewport_width(width);
        self.windows_domain_service.normalize_windows();
    }

    pub fn toggle_window_collapsed(&self, participant_id: &ParticipantId) {
        let Some(is_collapsed) = self.window_set.update(participant_id, |window| {
            window.is_collapsed = !window.is_collapsed;
            window.is_collapsed
        }) else {
            return;
        };

        self.dispatch_window_changed(participant_id);

        if !is_collapsed {
            self.event_dispatcher
                .dispatch_event(ChatEvent::ScrollRequested {
                    participant_id: participant_id.clone(),
                    direction: ScrollDirection::Bottom,
                });
        }
    }

    /// Focusing a window marks its unread messages as seen.
    pub fn set_window_focus(&self, participant_id: &ParticipantId, has_focus: bool) {
        let local_user_id = &self.ctx.local_user_id;
        let now = self.time_provider.now();

        let Some(seen) = self.window_set.update(participant_id, |window| {
            window.has_focus = has_focus;
            if has_focus {
                window.mark_unread_as_seen(local_user_id, now)
            } else {
                vec![]
            }
        }) else {
            return;
        };

        self.dispatch_window_changed(participant_id);

        if !seen.is_empty() {
            self.event_dispatcher
                .dispatch_event(ChatEvent::MessagesSeen { messages: seen });
        }
    }

    pub fn toggle_window_focus(&self, participant_id: &ParticipantId) {
        let Some(window) = self.window_set.get(participant_id) else {
            return;
        };
        self.set_window_focus(participant_id, !window.has_focus);
    }

    pub async fn trigger_open_chat_window(&self, participant: Participant) {
        self.open_chat_window(participant).await;
    }

    pub fn trigger_close_chat_window(&self, participant_id: &ParticipantId) {
        self.close_chat_window(participant_id);
    }

    pub fn trigger_toggle_chat_window_visibility(&self, participant_id: &ParticipantId) {
        self.toggle_window_collapsed(participant_id);
    }

    /// Whether the sender's avatar is shown next to the message at `index`. Only the first of
    /// consecutive messages by the same sender shows it.
    pub fn is_avatar_visible(&self, participant_id: &ParticipantId, index: usize) -> bool {
        self.window_set
            .read(participant_id, |window| {
                window.is_avatar_visible(index, &self.ctx.local_user_id)
            })
            .unwrap_or_default()
    }

    pub fn avatar_for_message(&self, participant_id: &ParticipantId, message: &Message) -> Option<String> {
        self.window_set
            .read(participant_id, |window| {
                window
                    .participant
                    .avatar_for_sender(&message.from_id)
                    .map(ToString::to_string)
            })
            .flatten()
    }

    pub fn set_draft(&self, participant_id: &ParticipantId, draft: impl Into<String>) {
        let draft = draft.into();
        self.window_set
            .update(participant_id, |window| window.draft = draft);
    }

    /// The actions offered in a window's option menu.
    pub fn window_actions(&self, participant_id: &ParticipantId) -> Vec<WindowAction> {
        let Some(window) = self.window_set.get(participant_id) else {
            return vec![];
        };

        let mut actions = vec![];

        match window.participant.r#type() {
            ParticipantType::Client => {
                actions.push(WindowAction::EndSession);
                if window.customer.is_associated() {
                    actions.push(WindowAction::DisassociateCustomer);
                } else {
                    actions.push(WindowAction::AssociateCustomer);
                }
            }
            ParticipantType::User if self.group_adapter.is_some() => {
                actions.push(WindowAction::AddPerson)
            }
            ParticipantType::User | ParticipantType::Group => (),
        }

        actions
    }

    /// Shows the panel belonging to `action`, replacing any other visible panel.
    pub fn activate_window_action(&self, participant_id: &ParticipantId, action: WindowAction) {
        let Some(participant) = self.window_set.update(participant_id, |window| {
            window.panel = match action {
                WindowAction::AddPerson => WindowPanel::None,
                WindowAction::EndSession => WindowPanel::EndSession,
                WindowAction::AssociateCustomer => WindowPanel::SearchCustomer,
                WindowAction::DisassociateCustomer => WindowPanel::DisassociateCustomer,
            };
            window.participant.clone()
        }) else {
            return;
        };

        if action == WindowAction::AddPerson {
            self.ctx
                .is_selecting_group_members
                .store(true, Ordering::Release);
            self.ctx
                .friends_list_selection
                .write()
                .toggle(participant, true);
            self.event_dispatcher
                .dispatch_event(ChatEvent::ParticipantsChanged);
        }

        self.dispatch_window_changed(participant_id);
    }

    fn dispatch_window_changed(&self, participant_id: &ParticipantId) {
        self.event_dispatcher
            .dispatch_event(ChatEvent::WindowChanged {
                participant_id: participant_id.clone(),
            });
    }
}
