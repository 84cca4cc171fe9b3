// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use history_domain_service::HistoryDomainService;

mod history_domain_service;
pub mod impls;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::history_domain_service::MockHistoryDomainService;
}
