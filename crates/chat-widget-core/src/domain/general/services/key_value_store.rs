// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use chat_widget_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

/// Durable string storage provided by the host (e.g. the browser's local storage).
#[cfg_attr(feature = "test", mockall::automock)]
pub trait KeyValueStore: SendUnlessWasm + SyncUnlessWasm {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
