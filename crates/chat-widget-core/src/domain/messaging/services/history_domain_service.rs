// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use chat_widget_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::shared::models::ParticipantId;

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait HistoryDomainService: SendUnlessWasm + SyncUnlessWasm {
    /// Loads the history of the window for `participant_id` and prepends it to its messages.
    ///
    /// With a `PagedHistoryChatAdapter` every call loads the next (older) page and marks the
    /// loaded messages as seen. Otherwise the complete history is loaded and only marked as seen
    /// if the window has focus. If the window is closed before the history arrives, the result is
    /// discarded.
    ///
    /// Requests the welcome message once if the conversation is still empty afterwards.
    async fn load_history(&self, participant_id: &ParticipantId) -> Result<()>;
}
