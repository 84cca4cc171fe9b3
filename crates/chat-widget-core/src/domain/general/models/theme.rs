// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Custom,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("\"{0}\" is not a valid theme. Use \"light\", \"dark\" or provide a custom theme.")]
pub struct InvalidThemeError(pub String);

impl Theme {
    /// Resolves the effective theme. A non-empty custom theme always wins, otherwise only the
    /// built-in themes are accepted by name.
    pub fn resolve(name: &str, custom_theme: Option<&str>) -> Result<Self, InvalidThemeError> {
        if custom_theme.is_some_and(|theme| !theme.trim().is_empty()) {
            return Ok(Theme::Custom);
        }

        match name.trim().to_lowercase().parse::<Theme>() {
            Ok(theme @ (Theme::Light | Theme::Dark)) => Ok(theme),
            _ => Err(InvalidThemeError(name.to_string())),
        }
    }
}
