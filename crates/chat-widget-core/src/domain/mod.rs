// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod adapters;
pub mod general;
pub mod messaging;
pub mod participants;
pub mod shared;
pub mod windows;
pub mod workflows;
