// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use key_value_store::KeyValueStore;
pub use notification_service::{BrowserNotification, NotificationService};
pub use time_provider::{SystemTimeProvider, TimeProvider};

mod key_value_store;
mod notification_service;
mod time_provider;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::key_value_store::MockKeyValueStore;
    pub use super::notification_service::MockNotificationService;
}
