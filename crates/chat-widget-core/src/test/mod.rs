// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use chat_event_recorder::ChatEventRecorder;
pub use constant_time_provider::ConstantTimeProvider;
pub use message_builder::MessageBuilder;
pub use mock_app_dependencies::{
    MockAppDependencies, MockHistoryDomainServiceDependencies,
    MockWindowsDomainServiceDependencies,
};

mod message_builder;

pub mod mock_data {
    pub use super::mock_app_dependencies::{
        mock_local_user_id as local_user_id, mock_reference_date as reference_date,
    };
}
