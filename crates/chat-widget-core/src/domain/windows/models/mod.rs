// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use scroll_direction::ScrollDirection;
pub use window::Window;
pub use window_layout::WindowLayout;

mod scroll_direction;
mod window;
mod window_layout;
