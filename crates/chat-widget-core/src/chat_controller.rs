// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use tracing::{info, warn};

use chat_widget_wasm_utils::{PinnedFuture, SendUnlessWasm, SyncUnlessWasm};

use crate::app::deps::{
    AppConfig, DynAppContext, DynChatAdapter, DynNotificationService, DynWindowsDomainService,
};
use crate::app::event_handlers::AdapterEventHandlerQueue;
use crate::app::services::{
    CustomerService, GroupService, HistoryService, MessagesService, ParticipantsService,
    WindowsService,
};
use crate::chat_controller_builder::ChatControllerBuilder;
use crate::domain::adapters::{AdapterEvent, AdapterEventCallback};
use crate::domain::general::models::Theme;
use crate::domain::shared::models::ParticipantId;
use crate::ChatEvent;

/// The entry point of the widget. Cheap to clone, all clones share the same state.
#[derive(Clone)]
pub struct ChatController {
    inner: Arc<ChatControllerInner>,
}

pub trait ChatDelegate: SendUnlessWasm + SyncUnlessWasm {
    fn handle_event(&self, controller: ChatController, event: ChatEvent);
}

impl ChatController {
    pub fn builder() -> ChatControllerBuilder {
        ChatControllerBuilder::new()
    }
}

pub struct ChatControllerInner {
    pub customers: CustomerService,
    pub groups: GroupService,
    pub history: HistoryService,
    pub messages: MessagesService,
    pub participants: ParticipantsService,
    pub windows: WindowsService,
    pub(crate) ctx: DynAppContext,
    pub(crate) chat_adapter: DynChatAdapter,
    pub(crate) handler_queue: Arc<AdapterEventHandlerQueue>,
    pub(crate) notification_service: DynNotificationService,
    pub(crate) windows_domain_service: DynWindowsDomainService,
}

impl From<Arc<ChatControllerInner>> for ChatController {
    fn from(inner: Arc<ChatControllerInner>) -> Self {
        ChatController { inner }
    }
}

impl Deref for ChatController {
    type Target = ChatControllerInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Drop for ChatControllerInner {
    fn drop(&mut self) {
        self.ctx.cancel_polling();
    }
}

impl ChatController {
    /// Connects the controller to its adapter and loads the friends list. Windows persisted in a
    /// previous session are restored once the friends list arrived. Calling this more than once
    /// has no effect.
    pub async fn bootstrap(&self) {
        if self.is_bootstrapped() {
            return;
        }

        info!("Bootstrapping chat widget for {}…", self.ctx.local_user_id);

        if self.ctx.config.browser_notifications_enabled
            && self.notification_service.request_permission().await
        {
            self.ctx
                .browser_notifications_bootstrapped
                .store(true, Ordering::Release);
        }

        self.chat_adapter
            .set_event_handler(self.adapter_event_callback());

        if !self.ctx.is_disabled() {
            if let Err(err) = self.participants.activate_friends_list_fetch().await {
                warn!("Failed to load the friends list. {}", err.to_string());
            }
        }

        self.windows_domain_service.normalize_windows();

        self.ctx.is_bootstrapped.store(true, Ordering::Release);
        info!("Chat widget is ready.");
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.ctx.is_bootstrapped()
    }

    pub fn is_disabled(&self) -> bool {
        self.ctx.is_disabled()
    }

    /// Disabling stops polling the friends list. Enabling fetches it again and resumes polling.
    pub async fn set_disabled(&self, is_disabled: bool) {
        let was_disabled = self.ctx.is_disabled.swap(is_disabled, Ordering::AcqRel);

        if is_disabled {
            self.participants.stop_polling();
            return;
        }

        if !was_disabled || !self.is_bootstrapped() {
            return;
        }

        if let Err(err) = self.participants.activate_friends_list_fetch().await {
            warn!("Failed to load the friends list. {}", err.to_string());
        }
    }

    pub fn local_user_id(&self) -> &ParticipantId {
        &self.ctx.local_user_id
    }

    pub fn theme(&self) -> Theme {
        self.ctx.theme
    }

    pub fn config(&self) -> &AppConfig {
        &self.ctx.config
    }
}

impl ChatController {
    fn adapter_event_callback(&self) -> AdapterEventCallback {
        let handler_queue = Arc::downgrade(&self.handler_queue);

        Arc::new(move |event: AdapterEvent| -> PinnedFuture<()> {
            let handler_queue = handler_queue.clone();
            Box::pin(async move {
                // The adapter may outlive the controller.
                let Some(handler_queue) = handler_queue.upgrade() else {
                    return;
                };
                handler_queue.handle_event(event).await
            })
        })
    }
}
