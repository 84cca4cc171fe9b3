// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use chat_widget_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::shared::models::ParticipantId;

/// Stores the ids of the open windows of a user, in display order.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait WindowStateRepository: SendUnlessWasm + SyncUnlessWasm {
    fn get(&self, user_id: &ParticipantId) -> Result<Vec<ParticipantId>>;
    fn set(&self, user_id: &ParticipantId, window_ids: &[ParticipantId]) -> Result<()>;
}
