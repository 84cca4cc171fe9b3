// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use chat_widget_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

pub trait TimeProvider: SendUnlessWasm + SyncUnlessWasm {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Default)]
pub struct SystemTimeProvider {}

impl TimeProvider for SystemTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
