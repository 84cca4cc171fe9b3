// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use thiserror::Error;
use tracing::error;

use crate::app::deps::{
    AppConfig, AppContext, AppDependencies, DynChatAdapter, DynFileUploadAdapter,
    DynGroupAdapter, DynHistoryDomainService, DynKeyValueStore, DynNotificationService,
    DynPagedHistoryChatAdapter, DynTimeProvider, DynWindowStateRepository,
    DynWindowsDomainService,
};
use crate::app::event_handlers::{
    AdapterEventHandlerQueue, CustomerEventHandler, MessagesEventHandler,
    ParticipantsEventHandler,
};
use crate::app::services::{
    CustomerService, GroupService, HistoryService, MessagesService, ParticipantsService,
    WindowsService,
};
use crate::chat_controller::ChatControllerInner;
use crate::domain::general::models::{InvalidThemeError, Theme};
use crate::domain::general::services::{SystemTimeProvider, TimeProvider};
use crate::domain::messaging::services::impls::{
    HistoryDomainService, HistoryDomainServiceDependencies,
};
use crate::domain::participants::ParticipantDirectory;
use crate::domain::shared::models::ParticipantId;
use crate::domain::windows::services::impls::{
    WindowsDomainService, WindowsDomainServiceDependencies,
};
use crate::domain::windows::WindowSet;
use crate::infra::events::ImmediateChatEventDispatcher;
use crate::infra::general::{InMemoryKeyValueStore, SilentNotificationService};
use crate::infra::windows::KeyValueWindowStateRepository;
use crate::{ChatController, ChatDelegate};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BootstrapError {
    #[error("A ChatAdapter is required to build a ChatController.")]
    MissingAdapter,
    #[error("The id of the local user must not be blank.")]
    MissingUserId,
    #[error(transparent)]
    InvalidTheme(#[from] InvalidThemeError),
}

pub struct ChatControllerBuilder {
    chat_adapter: Option<DynChatAdapter>,
    config: AppConfig,
    delegate: Option<Box<dyn ChatDelegate>>,
    file_upload_adapter: Option<DynFileUploadAdapter>,
    group_adapter: Option<DynGroupAdapter>,
    key_value_store: DynKeyValueStore,
    notification_service: DynNotificationService,
    paged_history_adapter: Option<DynPagedHistoryChatAdapter>,
    time_provider: DynTimeProvider,
    user_id: Option<ParticipantId>,
}

impl ChatControllerBuilder {
    pub(crate) fn new() -> Self {
        ChatControllerBuilder {
            chat_adapter: None,
            config: Default::default(),
            delegate: None,
            file_upload_adapter: None,
            group_adapter: None,
            key_value_store: Arc::new(InMemoryKeyValueStore::new()),
            notification_service: Arc::new(SilentNotificationService::default()),
            paged_history_adapter: None,
            time_provider: Arc::new(SystemTimeProvider::default()),
            user_id: None,
        }
    }

    pub fn set_chat_adapter(mut self, chat_adapter: DynChatAdapter) -> Self {
        self.chat_adapter = Some(chat_adapter);
        self
    }

    /// Switches history loading to pages of `AppConfig::history_page_size` messages.
    pub fn set_paged_history_adapter(mut self, adapter: DynPagedHistoryChatAdapter) -> Self {
        self.paged_history_adapter = Some(adapter);
        self
    }

    pub fn set_group_adapter(mut self, adapter: DynGroupAdapter) -> Self {
        self.group_adapter = Some(adapter);
        self
    }

    pub fn set_file_upload_adapter(mut self, adapter: DynFileUploadAdapter) -> Self {
        self.file_upload_adapter = Some(adapter);
        self
    }

    pub fn set_user_id(mut self, user_id: impl Into<ParticipantId>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_key_value_store(mut self, store: DynKeyValueStore) -> Self {
        self.key_value_store = store;
        self
    }

    pub fn set_notification_service(mut self, service: DynNotificationService) -> Self {
        self.notification_service = service;
        self
    }

    pub fn set_time_provider<T: TimeProvider + 'static>(mut self, time_provider: T) -> Self {
        self.time_provider = Arc::new(time_provider);
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ChatDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }

    pub fn build(self) -> Result<ChatController, BootstrapError> {
        let Some(chat_adapter) = self.chat_adapter else {
            error!("ChatController requires a ChatAdapter. Call set_chat_adapter before build.");
            return Err(BootstrapError::MissingAdapter);
        };

        let Some(user_id) = self.user_id.filter(|id| !id.is_blank()) else {
            error!("ChatController requires the id of the local user. Call set_user_id before build.");
            return Err(BootstrapError::MissingUserId);
        };

        let theme = Theme::resolve(&self.config.theme, self.config.custom_theme.as_deref())
            .map_err(|err| {
                error!("{}", err.to_string());
                err
            })?;

        let ctx = Arc::new(AppContext::new(self.config, user_id, theme));
        let event_dispatcher = Arc::new(ImmediateChatEventDispatcher::new(self.delegate));
        let participant_directory = Arc::new(ParticipantDirectory::default());
        let window_set = Arc::new(WindowSet::default());
        let window_state_repo: DynWindowStateRepository =
            Arc::new(KeyValueWindowStateRepository::new(self.key_value_store));

        let history_domain_service: DynHistoryDomainService = Arc::new(HistoryDomainService::from(
            HistoryDomainServiceDependencies {
                chat_adapter: chat_adapter.clone(),
                ctx: ctx.clone(),
                event_dispatcher: event_dispatcher.clone(),
                paged_history_adapter: self.paged_history_adapter.clone(),
                time_provider: self.time_provider.clone(),
                window_set: window_set.clone(),
            },
        ));

        let windows_domain_service: DynWindowsDomainService = Arc::new(WindowsDomainService::from(
            WindowsDomainServiceDependencies {
                chat_adapter: chat_adapter.clone(),
                ctx: ctx.clone(),
                event_dispatcher: event_dispatcher.clone(),
                history_domain_service: history_domain_service.clone(),
                participant_directory: participant_directory.clone(),
                window_set: window_set.clone(),
                window_state_repo: window_state_repo.clone(),
            },
        ));

        let dependencies = AppDependencies {
            chat_adapter,
            ctx,
            event_dispatcher: event_dispatcher.clone(),
            file_upload_adapter: self.file_upload_adapter,
            group_adapter: self.group_adapter,
            history_domain_service,
            notification_service: self.notification_service,
            paged_history_adapter: self.paged_history_adapter,
            participant_directory,
            time_provider: self.time_provider,
            window_set,
            window_state_repo,
            windows_domain_service,
        };

        let handler_queue = Arc::new(AdapterEventHandlerQueue::new());
        handler_queue.set_handlers(vec![
            Box::new(ParticipantsEventHandler::from(&dependencies)),
            Box::new(MessagesEventHandler::from(&dependencies)),
            Box::new(CustomerEventHandler::from(&dependencies)),
        ]);

        let controller_inner = Arc::new(ChatControllerInner {
            customers: CustomerService::from(&dependencies),
            groups: GroupService::from(&dependencies),
            history: HistoryService::from(&dependencies),
            messages: MessagesService::from(&dependencies),
            participants: ParticipantsService::from(&dependencies),
            windows: WindowsService::from(&dependencies),
            ctx: dependencies.ctx.clone(),
            chat_adapter: dependencies.chat_adapter.clone(),
            handler_queue,
            notification_service: dependencies.notification_service.clone(),
            windows_domain_service: dependencies.windows_domain_service.clone(),
        });

        event_dispatcher.set_controller_inner(Arc::downgrade(&controller_inner));

        Ok(ChatController::from(controller_inner))
    }
}
