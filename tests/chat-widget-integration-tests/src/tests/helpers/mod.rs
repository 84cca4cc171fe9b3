// chat-widget/chat-widget-integration-tests
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use fake_chat_adapter::{AdapterCall, FakeChatAdapter};
pub use recording_delegate::RecordingDelegate;
pub use test_controller::TestController;

mod fake_chat_adapter;
mod recording_delegate;
mod test_controller;
