// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

const MAX_DISPLAYED_UNREAD_COUNT: u32 = 99;

/// The number of unread messages of a conversation.
///
/// Displays as an empty string when zero and caps at "99+".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct UnreadCount(u32);

impl UnreadCount {
    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for UnreadCount {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<usize> for UnreadCount {
    fn from(value: usize) -> Self {
        Self(u32::try_from(value).unwrap_or(u32::MAX))
    }
}

impl Display for UnreadCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            0 => Ok(()),
            count if count > MAX_DISPLAYED_UNREAD_COUNT => {
                write!(f, "{}+", MAX_DISPLAYED_UNREAD_COUNT)
            }
            count => write!(f, "{}", count),
        }
    }
}
