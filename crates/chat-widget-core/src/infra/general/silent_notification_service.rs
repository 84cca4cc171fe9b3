// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use tracing::debug;

use crate::domain::general::services::{BrowserNotification, NotificationService};

/// Used when the host does not provide a `NotificationService`. Permission is never granted and
/// sounds are skipped.
#[derive(Default)]
pub struct SilentNotificationService {}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl NotificationService for SilentNotificationService {
    async fn request_permission(&self) -> bool {
        false
    }

    fn play_message_sound(&self, source: &str) {
        debug!("Skipping message sound {}.", source);
    }

    fn show_notification(&self, notification: BrowserNotification) {
        debug!("Skipping notification '{}'.", notification.title);
    }
}
