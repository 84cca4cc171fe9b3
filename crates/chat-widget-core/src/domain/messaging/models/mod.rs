// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use message::{FileAttachment, Message};
pub use message_type::MessageType;
pub use unread_count::UnreadCount;

mod message;
mod message_type;
mod unread_count;
