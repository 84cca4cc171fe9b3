// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use window_state_repository::WindowStateRepository;

mod window_state_repository;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::window_state_repository::MockWindowStateRepository;
}
