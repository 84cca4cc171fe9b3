// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chat_widget_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::participants::models::Participant;

#[cfg_attr(feature = "test", mockall::automock)]
pub trait GroupAdapter: SendUnlessWasm + SyncUnlessWasm {
    /// Called after a window for the new group `group` was opened.
    fn group_created(&self, group: &Participant);
}
