// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use async_trait::async_trait;

use chat_widget_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

const SHORT_NOTIFICATION_BODY_LENGTH: usize = 50;
const SHORT_NOTIFICATION_DURATION: Duration = Duration::from_secs(5);
const LONG_NOTIFICATION_DURATION: Duration = Duration::from_secs(7);

#[derive(Debug, Clone, PartialEq)]
pub struct BrowserNotification {
    pub title: String,
    pub body: String,
    pub icon: Option<String>,
    /// How long the notification stays visible before it is closed automatically.
    pub close_after: Duration,
}

impl BrowserNotification {
    pub fn new(
        title_prefix: &str,
        sender_name: &str,
        body: impl Into<String>,
        icon: Option<String>,
    ) -> Self {
        let body = body.into();
        let close_after = if body.chars().count() <= SHORT_NOTIFICATION_BODY_LENGTH {
            SHORT_NOTIFICATION_DURATION
        } else {
            LONG_NOTIFICATION_DURATION
        };

        Self {
            title: format!("{} {}", title_prefix, sender_name),
            body,
            icon,
            close_after,
        }
    }
}

/// Side-effect port for audio cues and browser notifications.
#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait NotificationService: SendUnlessWasm + SyncUnlessWasm {
    /// Asks the user for permission to display notifications. Returns `true` if granted.
    async fn request_permission(&self) -> bool;
    fn play_message_sound(&self, source: &str);
    fn show_notification(&self, notification: BrowserNotification);
}
