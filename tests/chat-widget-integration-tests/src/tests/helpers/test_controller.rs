// chat-widget/chat-widget-integration-tests
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use chat_widget_core::app::deps::DynKeyValueStore;
use chat_widget_core::dtos::InMemoryKeyValueStore;
use chat_widget_core::{AppConfig, ChatController};

use super::{FakeChatAdapter, RecordingDelegate};

pub struct TestController {
    pub controller: ChatController,
    pub adapter: FakeChatAdapter,
    pub delegate: RecordingDelegate,
    pub store: DynKeyValueStore,
}

impl TestController {
    pub fn new(adapter: FakeChatAdapter) -> Self {
        Self::with_config(adapter, AppConfig::default())
    }

    pub fn with_config(adapter: FakeChatAdapter, config: AppConfig) -> Self {
        Self::build(adapter, config, Arc::new(InMemoryKeyValueStore::new()))
    }

    /// Builds a controller for the user "me" that persists its windows into `store`.
    pub fn build(adapter: FakeChatAdapter, config: AppConfig, store: DynKeyValueStore) -> Self {
        let delegate = RecordingDelegate::default();

        let controller = ChatController::builder()
            .set_chat_adapter(Arc::new(adapter.clone()))
            .set_user_id("me")
            .set_config(config)
            .set_key_value_store(store.clone())
            .set_delegate(Some(Box::new(delegate.clone())))
            .build()
            .expect("Failed to build ChatController");

        Self {
            controller,
            adapter,
            delegate,
            store,
        }
    }

    /// The ids of the open windows, most recently opened first.
    pub fn window_ids(&self) -> Vec<String> {
        self.controller
            .windows
            .windows()
            .iter()
            .map(|window| window.id().to_string())
            .collect()
    }
}

impl Deref for TestController {
    type Target = ChatController;

    fn deref(&self) -> &Self::Target {
        &self.controller
    }
}
