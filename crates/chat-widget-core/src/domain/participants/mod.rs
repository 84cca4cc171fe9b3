// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use participant_directory::ParticipantDirectory;

pub mod models;
mod participant_directory;
