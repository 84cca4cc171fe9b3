// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};

use anyhow::Result;
use async_trait::async_trait;
use mime::Mime;

use chat_widget_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::messaging::models::Message;
use crate::domain::shared::models::ParticipantId;

#[derive(Clone, PartialEq)]
pub struct FileUpload {
    pub name: String,
    pub media_type: Mime,
    pub data: Vec<u8>,
}

/// Uploads files and returns the message that references the uploaded file.
#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait FileUploadAdapter: SendUnlessWasm + SyncUnlessWasm {
    async fn upload_file(&self, file: FileUpload, participant_id: &ParticipantId)
        -> Result<Message>;
}

impl Debug for FileUpload {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("size", &self.data.len())
            .finish()
    }
}
