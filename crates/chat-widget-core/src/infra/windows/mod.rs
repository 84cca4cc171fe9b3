// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use key_value_window_state_repository::KeyValueWindowStateRepository;

mod key_value_window_state_repository;
