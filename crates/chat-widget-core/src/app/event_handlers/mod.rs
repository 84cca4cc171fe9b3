// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use chat_widget_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

pub use crate::domain::adapters::AdapterEvent;
pub use customer_event_handler::CustomerEventHandler;
pub use event_handler_queue::AdapterEventHandlerQueue;
pub use messages_event_handler::MessagesEventHandler;
pub use participants_event_handler::ParticipantsEventHandler;

use crate::ChatEvent;

mod customer_event_handler;
mod event_handler_queue;
mod messages_event_handler;
mod participants_event_handler;

/// `AdapterEventHandler` is a trait representing a handler for events pushed by the adapter.
///
/// If `handle_event` returns `None`, the event has been consumed and no further processing
/// should be done. If it returns `Some(event)`, the event is passed on to the next handler.
#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
pub trait AdapterEventHandler: SendUnlessWasm + SyncUnlessWasm {
    fn name(&self) -> &'static str;
    async fn handle_event(&self, event: AdapterEvent) -> Result<Option<AdapterEvent>>;
}

#[cfg_attr(feature = "test", mockall::automock)]
pub trait ChatEventDispatcher: SendUnlessWasm + SyncUnlessWasm {
    fn dispatch_event(&self, event: ChatEvent);
}
