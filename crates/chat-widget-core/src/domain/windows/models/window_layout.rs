// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

/// Pixel metrics used to derive how many windows fit into the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowLayout {
    pub window_unit_width: u32,
    pub friends_list_width: u32,
}

impl Default for WindowLayout {
    fn default() -> Self {
        Self {
            window_unit_width: 320,
            friends_list_width: 262,
        }
    }
}

impl WindowLayout {
    pub fn max_windows(&self, viewport_width: u32, friends_list_visible: bool) -> usize {
        let reserved = if friends_list_visible {
            self.friends_list_width
        } else {
            0
        };

        (viewport_width.saturating_sub(reserved) / self.window_unit_width.max(1)) as usize
    }
}
