// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use customer_service::CustomerService;
pub use group_service::GroupService;
pub use history_service::HistoryService;
pub use messages_service::MessagesService;
pub use participants_service::ParticipantsService;
pub use windows_service::WindowsService;

mod customer_service;
mod group_service;
mod history_service;
mod messages_service;
mod participants_service;
mod windows_service;
