// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::Duration;

use parking_lot::{Mutex, RwLock};

use chat_widget_wasm_utils::PeriodicTask;

use crate::domain::general::models::{Localization, Theme};
use crate::domain::shared::models::ParticipantId;
use crate::domain::windows::models::WindowLayout;
use crate::domain::workflows::models::FriendsListSelection;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Whether the friends list starts collapsed.
    pub is_collapsed: bool,
    /// Windows opened by incoming messages start expanded and trigger browser notifications.
    pub maximize_window_on_new_message: bool,
    pub poll_friends_list: bool,
    pub polling_interval: Duration,
    pub history_enabled: bool,
    /// The number of messages requested per page from a `PagedHistoryChatAdapter`.
    pub history_page_size: u32,
    pub audio_enabled: bool,
    pub audio_source: String,
    pub persist_windows_state: bool,
    pub browser_notifications_enabled: bool,
    pub browser_notification_icon_source: Option<String>,
    pub hide_friends_list: bool,
    pub hide_friends_list_on_unsupported_viewport: bool,
    /// Lets windows stack beyond the viewport. No window is evicted when opening new ones.
    pub is_viewport_on_mobile_enabled: bool,
    /// The name of a built-in theme (`light` or `dark`).
    pub theme: String,
    /// Forces `Theme::Custom` if not empty.
    pub custom_theme: Option<String>,
    pub localization: Localization,
    pub window_layout: WindowLayout,
    pub initial_viewport_width: u32,
}

pub struct AppContext {
    pub config: AppConfig,
    pub local_user_id: ParticipantId,
    pub theme: Theme,
    pub is_bootstrapped: AtomicBool,
    pub is_disabled: AtomicBool,
    pub browser_notifications_bootstrapped: AtomicBool,
    pub is_friends_list_collapsed: AtomicBool,
    /// Set while the user picks the members of a new group in the friends list.
    pub is_selecting_group_members: AtomicBool,
    pub unsupported_viewport: AtomicBool,
    pub search_input: RwLock<String>,
    pub friends_list_selection: RwLock<FriendsListSelection>,
    pub uploads_in_progress: RwLock<HashSet<ParticipantId>>,
    pub polling_task: Mutex<Option<PeriodicTask>>,
    viewport_width: AtomicU32,
}

impl AppContext {
    pub fn new(config: AppConfig, local_user_id: ParticipantId, theme: Theme) -> Self {
        Self {
            local_user_id,
            theme,
            is_bootstrapped: Default::default(),
            is_disabled: Default::default(),
            browser_notifications_bootstrapped: Default::default(),
            is_friends_list_collapsed: AtomicBool::new(config.is_collapsed),
            is_selecting_group_members: Default::default(),
            unsupported_viewport: Default::default(),
            search_input: Default::default(),
            friends_list_selection: Default::default(),
            uploads_in_progress: Default::default(),
            polling_task: Default::default(),
            viewport_width: AtomicU32::new(config.initial_viewport_width),
            config,
        }
    }
}

impl AppContext {
    pub fn viewport_width(&self) -> u32 {
        self.viewport_width.load(Ordering::Relaxed)
    }

    pub fn set_viewport_width(&self, width: u32) {
        self.viewport_width.store(width, Ordering::Relaxed)
    }

    /// The number of windows that fit next to each other in the current viewport.
    pub fn max_windows(&self) -> usize {
        self.config
            .window_layout
            .max_windows(self.viewport_width(), !self.config.hide_friends_list)
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.is_bootstrapped.load(Ordering::Acquire)
    }

    pub fn is_disabled(&self) -> bool {
        self.is_disabled.load(Ordering::Acquire)
    }

    pub fn browser_notifications_bootstrapped(&self) -> bool {
        self.browser_notifications_bootstrapped
            .load(Ordering::Acquire)
    }

    pub fn is_upload_in_progress(&self, participant_id: &ParticipantId) -> bool {
        self.uploads_in_progress.read().contains(participant_id)
    }

    pub fn cancel_polling(&self) {
        if let Some(task) = self.polling_task.lock().take() {
            task.cancel();
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            is_collapsed: false,
            maximize_window_on_new_message: true,
            poll_friends_list: false,
            polling_interval: Duration::from_secs(5),
            history_enabled: true,
            history_page_size: 10,
            audio_enabled: true,
            audio_source: "https://raw.githubusercontent.com/rpaschoal/ng-chat/master/src/ng-chat/assets/notification.wav".to_string(),
            persist_windows_state: true,
            browser_notifications_enabled: true,
            browser_notification_icon_source: None,
            hide_friends_list: false,
            hide_friends_list_on_unsupported_viewport: true,
            is_viewport_on_mobile_enabled: false,
            theme: Theme::Light.to_string(),
            custom_theme: None,
            localization: Localization::default(),
            window_layout: WindowLayout::default(),
            initial_viewport_width: 1920,
        }
    }
}
