// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info};

use crate::app::deps::{
    AppDependencies, DynAppContext, DynChatEventDispatcher, DynNotificationService,
    DynParticipantDirectory, DynTimeProvider, DynWindowSet, DynWindowsDomainService,
};
use crate::app::event_handlers::{AdapterEvent, AdapterEventHandler};
use crate::domain::general::services::BrowserNotification;
use crate::domain::messaging::models::Message;
use crate::domain::participants::models::Participant;
use crate::domain::windows::models::ScrollDirection;
use crate::ChatEvent;

/// Routes incoming messages into their conversation window, opening it if needed.
pub struct MessagesEventHandler {
    ctx: DynAppContext,
    event_dispatcher: DynChatEventDispatcher,
    notification_service: DynNotificationService,
    participant_directory: DynParticipantDirectory,
    time_provider: DynTimeProvider,
    window_set: DynWindowSet,
    windows_domain_service: DynWindowsDomainService,
}

impl From<&AppDependencies> for MessagesEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            event_dispatcher: deps.event_dispatcher.clone(),
            notification_service: deps.notification_service.clone(),
            participant_directory: deps.participant_directory.clone(),
            time_provider: deps.time_provider.clone(),
            window_set: deps.window_set.clone(),
            windows_domain_service: deps.windows_domain_service.clone(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl AdapterEventHandler for MessagesEventHandler {
    fn name(&self) -> &'static str {
        "messages"
    }

    async fn handle_event(&self, event: AdapterEvent) -> Result<Option<AdapterEvent>> {
        match event {
            AdapterEvent::MessageReceived {
                participant,
                message,
            } => self.handle_received_message(participant, message).await,
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

/// What happened to a routed message inside its window.
struct Delivery {
    participant: Participant,
    has_focus: bool,
    is_collapsed: bool,
    seen_message: Option<Message>,
}

impl MessagesEventHandler {
    async fn handle_received_message(&self, participant: Participant, mut message: Message) {
        message.ensure_type();

        // Prefer the roster's instance so that the window follows its status changes.
        let participant = self
            .participant_directory
            .get(&participant.id)
            .unwrap_or(participant);
        let participant_id = participant.id.clone();

        info!("Received message from {}.", participant_id);

        let opened = self
            .windows_domain_service
            .open_window(participant, false, false)
            .await;

        // A freshly opened window loaded its history which contains the message already.
        let should_append = !(opened.was_created && self.ctx.config.history_enabled);
        let now = self.time_provider.now();

        let delivery = self.window_set.update(&participant_id, |window| {
            let mut seen_message = None;

            if should_append {
                if window.has_focus {
                    message.mark_as_seen(now);
                    seen_message = Some(message.clone());
                }
                window.messages.push(message.clone());
            }

            Delivery {
                participant: window.participant.clone(),
                has_focus: window.has_focus,
                is_collapsed: window.is_collapsed,
                seen_message,
            }
        });

        let Some(delivery) = delivery else {
            debug!(
                "Dropping message from {} since its window was closed.",
                participant_id
            );
            return;
        };

        if should_append {
            self.event_dispatcher
                .dispatch_event(ChatEvent::WindowChanged {
                    participant_id: participant_id.clone(),
                });

            if !delivery.is_collapsed {
                self.event_dispatcher
                    .dispatch_event(ChatEvent::ScrollRequested {
                        participant_id: participant_id.clone(),
                        direction: ScrollDirection::Bottom,
                    });
            }

            if let Some(seen_message) = delivery.seen_message.clone() {
                self.event_dispatcher
                    .dispatch_event(ChatEvent::MessagesSeen {
                        messages: vec![seen_message],
                    });
            }
        }

        if delivery.has_focus {
            return;
        }

        self.notify(&delivery, &message);
    }

    fn notify(&self, delivery: &Delivery, message: &Message) {
        let config = &self.ctx.config;

        if config.audio_enabled && !config.audio_source.is_empty() {
            self.notification_service
                .play_message_sound(&config.audio_source);
        }

        let should_show_notification = self.ctx.browser_notifications_bootstrapped()
            && (config.maximize_window_on_new_message || delivery.is_collapsed);

        if should_show_notification {
            self.notification_service
                .show_notification(BrowserNotification::new(
                    &config.localization.browser_notification_title,
                    delivery.participant.display_name(),
                    message.message.clone(),
                    config.browser_notification_icon_source.clone(),
                ));
        }
    }
}
