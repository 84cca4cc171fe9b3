// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use adapter_event::{AdapterEvent, AdapterEventCallback};
pub use chat_adapter::ChatAdapter;
pub use file_upload_adapter::{FileUpload, FileUploadAdapter};
pub use group_adapter::GroupAdapter;
pub use paged_history_chat_adapter::PagedHistoryChatAdapter;

mod adapter_event;
mod chat_adapter;
mod file_upload_adapter;
mod group_adapter;
mod paged_history_chat_adapter;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::chat_adapter::MockChatAdapter;
    pub use super::file_upload_adapter::MockFileUploadAdapter;
    pub use super::group_adapter::MockGroupAdapter;
    pub use super::paged_history_chat_adapter::MockPagedHistoryChatAdapter;
}
