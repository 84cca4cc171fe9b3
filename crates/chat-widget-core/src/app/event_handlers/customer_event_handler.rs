// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::app::deps::{AppDependencies, DynChatEventDispatcher, DynWindowSet};
use crate::app::event_handlers::{AdapterEvent, AdapterEventHandler};
use crate::domain::shared::models::ParticipantId;
use crate::domain::windows::models::Window;
use crate::domain::workflows::models::WindowPanel;
use crate::ChatEvent;

/// Applies the adapter's acknowledgments of customer search, association and disassociation
/// requests to the customer workflow of the matching window.
pub struct CustomerEventHandler {
    event_dispatcher: DynChatEventDispatcher,
    window_set: DynWindowSet,
}

impl From<&AppDependencies> for CustomerEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            event_dispatcher: deps.event_dispatcher.clone(),
            window_set: deps.window_set.clone(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl AdapterEventHandler for CustomerEventHandler {
    fn name(&self) -> &'static str {
        "customer"
    }

    async fn handle_event(&self, event: AdapterEvent) -> Result<Option<AdapterEvent>> {
        match event {
            AdapterEvent::CustomerSearchResult {
                participant_id,
                customer,
            } => self.apply(&participant_id, |window| {
                if !window.customer.handle_search_result(customer) {
                    return false;
                }
                if window.customer.customer().is_some() {
                    window.panel = WindowPanel::AssociateCustomer;
                }
                true
            }),
            AdapterEvent::CustomerAssociated { participant_id } => {
                self.apply(&participant_id, |window| {
                    if !window.customer.handle_associated() {
                        return false;
                    }
                    window.panel = WindowPanel::None;
                    true
                })
            }
            AdapterEvent::CustomerDisassociated { participant_id } => {
                self.apply(&participant_id, |window| {
                    if !window.customer.handle_disassociated() {
                        return false;
                    }
                    window.panel = WindowPanel::SearchCustomer;
                    true
                })
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl CustomerEventHandler {
    fn apply(&self, participant_id: &ParticipantId, transition: impl FnOnce(&mut Window) -> bool) {
        match self.window_set.update(participant_id, transition) {
            None => debug!(
                "Ignoring customer acknowledgment for {} since it has no open window.",
                participant_id
            ),
            Some(false) => debug!(
                "Ignoring stale customer acknowledgment for {}.",
                participant_id
            ),
            Some(true) => self
                .event_dispatcher
                .dispatch_event(ChatEvent::WindowChanged {
                    participant_id: participant_id.clone(),
                }),
        }
    }
}
