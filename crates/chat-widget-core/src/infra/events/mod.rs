// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use immediate_chat_event_dispatcher::ImmediateChatEventDispatcher;

mod immediate_chat_event_dispatcher;
