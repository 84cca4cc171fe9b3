// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use windows_domain_service::{OpenedWindow, RestoreWindowsError, WindowsDomainService};

pub mod impls;
mod windows_domain_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::windows_domain_service::MockWindowsDomainService;
}
