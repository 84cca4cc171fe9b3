// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::{debug, info};

use crate::app::deps::*;
use crate::domain::shared::models::ParticipantId;
use crate::domain::windows::models::Window;
use crate::domain::workflows::models::WindowPanel;
use crate::ChatEvent;

/// Drives the end-session and customer association workflows of client conversations.
///
/// Requests are only sent to the adapter once the input validated. Their outcome arrives as
/// `AdapterEvent`s.
pub struct CustomerService {
    chat_adapter: DynChatAdapter,
    event_dispatcher: DynChatEventDispatcher,
    window_set: DynWindowSet,
    windows_domain_service: DynWindowsDomainService,
}

impl From<&AppDependencies> for CustomerService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            chat_adapter: deps.chat_adapter.clone(),
            event_dispatcher: deps.event_dispatcher.clone(),
            window_set: deps.window_set.clone(),
            windows_domain_service: deps.windows_domain_service.clone(),
        }
    }
}

impl CustomerService {
    /// Ends the session of a client and closes its window.
    pub fn end_session(&self, participant_id: &ParticipantId) {
        if !self.window_set.contains(participant_id) {
            return;
        }

        info!("Ending session of {}.", participant_id);
        self.chat_adapter.end_session(participant_id);
        self.windows_domain_service.close_window(participant_id);
    }

    pub fn close_end_session(&self, participant_id: &ParticipantId) {
        self.update(participant_id, |window| window.panel = WindowPanel::None);
    }

    pub fn set_customer_search_input(&self, participant_id: &ParticipantId, input: impl Into<String>) {
        let input = input.into();
        self.update(participant_id, |window| window.customer.search_input = input);
    }

    /// Searches for the customer whose tax id was entered. Invalid input sets the workflow's
    /// error instead.
    pub fn search_customer(&self, participant_id: &ParticipantId) {
        let Some(tax_id) = self.update(participant_id, |window| window.customer.begin_search())
        else {
            return;
        };

        let Some(tax_id) = tax_id else {
            debug!("Not searching for a customer since the input is invalid.");
            return;
        };

        self.chat_adapter.search_customer(&tax_id, participant_id);
    }

    pub fn close_customer_search(&self, participant_id: &ParticipantId) {
        self.update(participant_id, |window| {
            window.customer.cancel_search();
            window.panel = WindowPanel::None;
        });
    }

    pub fn associate_customer(&self, participant_id: &ParticipantId) {
        let Some(Some(debtor_id)) = self.update(participant_id, |window| {
            window.customer.begin_associate(participant_id)
        }) else {
            return;
        };

        self.chat_adapter
            .associate_customer(&debtor_id, participant_id);
    }

    pub fn close_associate_customer(&self, participant_id: &ParticipantId) {
        self.update(participant_id, |window| {
            window.customer.cancel_associate();
            window.panel = WindowPanel::None;
        });
    }

    pub fn disassociate_customer(&self, participant_id: &ParticipantId) {
        let is_pending = self
            .update(participant_id, |window| {
                window.customer.begin_disassociate(participant_id)
            })
            .unwrap_or_default();

        if is_pending {
            self.chat_adapter.disassociate_customer(participant_id);
        }
    }

    pub fn close_disassociate_customer(&self, participant_id: &ParticipantId) {
        self.update(participant_id, |window| {
            window.customer.cancel_disassociate();
            window.panel = WindowPanel::None;
        });
    }

    fn update<T>(
        &self,
        participant_id: &ParticipantId,
        handler: impl FnOnce(&mut Window) -> T,
    ) -> Option<T> {
        let result = self.window_set.update(participant_id, handler)?;
        self.event_dispatcher
            .dispatch_event(ChatEvent::WindowChanged {
                participant_id: participant_id.clone(),
            });
        Some(result)
    }
}
