// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use chat_widget_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::messaging::models::Message;
use crate::domain::shared::models::ParticipantId;

/// A history source that loads conversations page by page. When one is configured it replaces
/// `ChatAdapter::get_message_history`.
#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait PagedHistoryChatAdapter: SendUnlessWasm + SyncUnlessWasm {
    /// Returns up to `page_size` messages, oldest first. `page` is 1-based, page 1 holding the
    /// most recent messages.
    async fn get_message_history_by_page(
        &self,
        participant_id: &ParticipantId,
        page_size: u32,
        page: u32,
    ) -> Result<Vec<Message>>;
}
