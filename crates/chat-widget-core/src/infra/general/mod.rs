// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_key_value_store::InMemoryKeyValueStore;
pub use silent_notification_service::SilentNotificationService;

mod in_memory_key_value_store;
mod silent_notification_service;
