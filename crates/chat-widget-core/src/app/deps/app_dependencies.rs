// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::app_context::AppContext;
use crate::app::event_handlers::ChatEventDispatcher;
use crate::domain::adapters::{
    ChatAdapter, FileUploadAdapter, GroupAdapter, PagedHistoryChatAdapter,
};
use crate::domain::general::services::{KeyValueStore, NotificationService, TimeProvider};
use crate::domain::messaging::services::HistoryDomainService;
use crate::domain::participants::ParticipantDirectory;
use crate::domain::windows::repos::WindowStateRepository;
use crate::domain::windows::services::WindowsDomainService;
use crate::domain::windows::WindowSet;

pub type DynAppContext = Arc<AppContext>;
pub type DynChatAdapter = Arc<dyn ChatAdapter>;
pub type DynChatEventDispatcher = Arc<dyn ChatEventDispatcher>;
pub type DynFileUploadAdapter = Arc<dyn FileUploadAdapter>;
pub type DynGroupAdapter = Arc<dyn GroupAdapter>;
pub type DynHistoryDomainService = Arc<dyn HistoryDomainService>;
pub type DynKeyValueStore = Arc<dyn KeyValueStore>;
pub type DynNotificationService = Arc<dyn NotificationService>;
pub type DynPagedHistoryChatAdapter = Arc<dyn PagedHistoryChatAdapter>;
pub type DynParticipantDirectory = Arc<ParticipantDirectory>;
pub type DynTimeProvider = Arc<dyn TimeProvider>;
pub type DynWindowSet = Arc<WindowSet>;
pub type DynWindowStateRepository = Arc<dyn WindowStateRepository>;
pub type DynWindowsDomainService = Arc<dyn WindowsDomainService>;

pub struct AppDependencies {
    pub chat_adapter: DynChatAdapter,
    pub ctx: DynAppContext,
    pub event_dispatcher: DynChatEventDispatcher,
    pub file_upload_adapter: Option<DynFileUploadAdapter>,
    pub group_adapter: Option<DynGroupAdapter>,
    pub history_domain_service: DynHistoryDomainService,
    pub notification_service: DynNotificationService,
    pub paged_history_adapter: Option<DynPagedHistoryChatAdapter>,
    pub participant_directory: DynParticipantDirectory,
    pub time_provider: DynTimeProvider,
    pub window_set: DynWindowSet,
    pub window_state_repo: DynWindowStateRepository,
    pub windows_domain_service: DynWindowsDomainService,
}
