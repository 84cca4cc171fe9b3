// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::deps::AppConfig;
pub use chat_controller::{ChatController, ChatDelegate};
pub use chat_controller_builder::{BootstrapError, ChatControllerBuilder};
pub use chat_event::ChatEvent;

#[cfg(feature = "test")]
pub mod test;

pub mod app;
mod chat_controller;
mod chat_controller_builder;
mod chat_event;

#[cfg(feature = "test")]
pub mod domain;
#[cfg(not(feature = "test"))]
pub(crate) mod domain;

#[cfg(feature = "test")]
pub mod infra;
#[cfg(not(feature = "test"))]
pub(crate) mod infra;

pub mod dtos {
    pub use crate::domain::adapters::{
        AdapterEvent, AdapterEventCallback, ChatAdapter, FileUpload, FileUploadAdapter,
        GroupAdapter, PagedHistoryChatAdapter,
    };
    pub use crate::domain::general::models::{Localization, StatusDescription, Theme};
    pub use crate::domain::general::services::{
        BrowserNotification, KeyValueStore, NotificationService, TimeProvider,
    };
    pub use crate::domain::messaging::models::{
        FileAttachment, Message, MessageType, UnreadCount,
    };
    pub use crate::domain::participants::models::{
        Participant, ParticipantKind, ParticipantMetadata, ParticipantProfile, ParticipantStatus,
        ParticipantType, ParticipantWithMetadata,
    };
    pub use crate::domain::shared::models::{DebtorId, ParticipantId};
    pub use crate::domain::windows::models::{ScrollDirection, Window, WindowLayout};
    pub use crate::domain::windows::services::OpenedWindow;
    pub use crate::domain::workflows::models::{
        CustomerRecord, CustomerWorkflow, CustomerWorkflowState, WindowAction, WindowPanel,
    };
    pub use crate::infra::general::InMemoryKeyValueStore;
}
