// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use window_set::WindowSet;

pub mod models;
pub mod repos;
pub mod services;
mod window_set;
