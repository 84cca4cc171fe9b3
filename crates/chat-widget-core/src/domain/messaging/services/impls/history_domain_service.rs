// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::app::deps::{
    DynAppContext, DynChatAdapter, DynChatEventDispatcher, DynPagedHistoryChatAdapter,
    DynTimeProvider, DynWindowSet,
};
use crate::domain::messaging::models::Message;
use crate::domain::shared::models::ParticipantId;
use crate::domain::windows::models::ScrollDirection;
use crate::ChatEvent;

use super::super::HistoryDomainService as HistoryDomainServiceTrait;

pub struct HistoryDomainServiceDependencies {
    pub chat_adapter: DynChatAdapter,
    pub ctx: DynAppContext,
    pub event_dispatcher: DynChatEventDispatcher,
    pub paged_history_adapter: Option<DynPagedHistoryChatAdapter>,
    pub time_provider: DynTimeProvider,
    pub window_set: DynWindowSet,
}

pub struct HistoryDomainService {
    chat_adapter: DynChatAdapter,
    ctx: DynAppContext,
    event_dispatcher: DynChatEventDispatcher,
    paged_history_adapter: Option<DynPagedHistoryChatAdapter>,
    time_provider: DynTimeProvider,
    window_set: DynWindowSet,
}

impl From<HistoryDomainServiceDependencies> for HistoryDomainService {
    fn from(deps: HistoryDomainServiceDependencies) -> Self {
        Self {
            chat_adapter: deps.chat_adapter,
            ctx: deps.ctx,
            event_dispatcher: deps.event_dispatcher,
            paged_history_adapter: deps.paged_history_adapter,
            time_provider: deps.time_provider,
            window_set: deps.window_set,
        }
    }
}

/// How a loaded batch of history is merged into its window.
struct HistoryBatch {
    messages: Vec<Message>,
    direction: ScrollDirection,
    force_mark_as_seen: bool,
    /// The requested page size for paged loads.
    page_size: Option<u32>,
}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl HistoryDomainServiceTrait for HistoryDomainService {
    async fn load_history(&self, participant_id: &ParticipantId) -> Result<()> {
        match &self.paged_history_adapter {
            Some(adapter) => self.load_next_page(adapter, participant_id).await,
            None => self.load_complete_history(participant_id).await,
        }
    }
}

impl HistoryDomainService {
    async fn load_complete_history(&self, participant_id: &ParticipantId) -> Result<()> {
        let Some(instance_id) = self.window_set.update(participant_id, |window| {
            window.is_loading_history = true;
            window.instance_id()
        }) else {
            return Ok(());
        };

        let messages = match self.chat_adapter.get_message_history(participant_id).await {
            Ok(messages) => messages,
            Err(err) => {
                if self
                    .window_set
                    .update_instance(participant_id, instance_id, |window| {
                        window.is_loading_history = false
                    })
                    .is_some()
                {
                    self.dispatch_window_changed(participant_id);
                }
                return Err(err);
            }
        };

        self.merge_history(
            participant_id,
            instance_id,
            HistoryBatch {
                messages,
                direction: ScrollDirection::Bottom,
                force_mark_as_seen: false,
                page_size: None,
            },
        );

        Ok(())
    }

    async fn load_next_page(
        &self,
        adapter: &DynPagedHistoryChatAdapter,
        participant_id: &ParticipantId,
    ) -> Result<()> {
        let page_size = self.ctx.config.history_page_size;

        let Some((instance_id, page)) = self.window_set.update(participant_id, |window| {
            window.is_loading_history = true;
            window.history_page += 1;
            (window.instance_id(), window.history_page)
        }) else {
            return Ok(());
        };

        debug!("Loading history page {} of {}…", page, participant_id);

        let messages = match adapter
            .get_message_history_by_page(participant_id, page_size, page)
            .await
        {
            Ok(messages) => messages,
            Err(err) => {
                if self
                    .window_set
                    .update_instance(participant_id, instance_id, |window| {
                        window.is_loading_history = false;
                        window.history_page = window.history_page.saturating_sub(1);
                    })
                    .is_some()
                {
                    self.dispatch_window_changed(participant_id);
                }
                return Err(err);
            }
        };

        self.merge_history(
            participant_id,
            instance_id,
            HistoryBatch {
                messages,
                direction: if page == 1 {
                    ScrollDirection::Bottom
                } else {
                    ScrollDirection::Top
                },
                force_mark_as_seen: true,
                page_size: Some(page_size),
            },
        );

        Ok(())
    }

    fn merge_history(
        &self,
        participant_id: &ParticipantId,
        instance_id: u64,
        batch: HistoryBatch,
    ) {
        let HistoryBatch {
            mut messages,
            direction,
            force_mark_as_seen,
            page_size,
        } = batch;

        let now = self.time_provider.now();
        let received = messages.len();

        for message in messages.iter_mut() {
            message.ensure_type();
        }

        let outcome = self
            .window_set
            .update_instance(participant_id, instance_id, |window| {
                let mut seen = vec![];

                if window.has_focus || force_mark_as_seen {
                    for message in messages.iter_mut().filter(|m| !m.is_seen()) {
                        message.mark_as_seen(now);
                        seen.push(message.clone());
                    }
                }

                window.prepend_history(messages);
                window.is_loading_history = false;
                window.has_more_messages = match page_size {
                    Some(page_size) => received == page_size as usize,
                    None => false,
                };

                (seen, window.claim_welcome_message(), window.is_collapsed)
            });

        let Some((seen, request_welcome_message, is_collapsed)) = outcome else {
            debug!(
                "Discarding history of {} since the window that requested it was closed.",
                participant_id
            );
            return;
        };

        if request_welcome_message {
            self.chat_adapter.send_welcome_message(participant_id);
        }

        self.dispatch_window_changed(participant_id);

        if !is_collapsed {
            self.event_dispatcher
                .dispatch_event(ChatEvent::ScrollRequested {
                    participant_id: participant_id.clone(),
                    direction,
                });
        }

        if !seen.is_empty() {
            self.event_dispatcher
                .dispatch_event(ChatEvent::MessagesSeen { messages: seen });
        }
    }

    fn dispatch_window_changed(&self, participant_id: &ParticipantId) {
        self.event_dispatcher
            .dispatch_event(ChatEvent::WindowChanged {
                participant_id: participant_id.clone(),
            });
    }
}
