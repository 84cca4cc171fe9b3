// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use localization::{Localization, StatusDescription};
pub use theme::{InvalidThemeError, Theme};

mod localization;
mod theme;
