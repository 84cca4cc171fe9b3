// chat-widget/chat-widget-integration-tests
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use parking_lot::Mutex;

use chat_widget_core::{ChatController, ChatDelegate, ChatEvent};

#[derive(Clone, Default)]
pub struct RecordingDelegate {
    events: Arc<Mutex<Vec<ChatEvent>>>,
}

impl RecordingDelegate {
    /// Returns the events received so far and resets the log.
    pub fn take_events(&self) -> Vec<ChatEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl ChatDelegate for RecordingDelegate {
    fn handle_event(&self, _controller: ChatController, event: ChatEvent) {
        self.events.lock().push(event)
    }
}
