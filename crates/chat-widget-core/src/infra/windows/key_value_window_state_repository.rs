// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{Context, Result};

use crate::app::deps::DynKeyValueStore;
use crate::domain::shared::models::ParticipantId;
use crate::domain::windows::repos::WindowStateRepository;

const KEY_PREFIX: &str = "chat-widget-windows";

/// Persists the open windows as a JSON array of participant ids, one entry per local user.
pub struct KeyValueWindowStateRepository {
    store: DynKeyValueStore,
}

impl KeyValueWindowStateRepository {
    pub fn new(store: DynKeyValueStore) -> Self {
        Self { store }
    }

    fn key(user_id: &ParticipantId) -> String {
        format!("{}-{}", KEY_PREFIX, user_id)
    }
}

impl WindowStateRepository for KeyValueWindowStateRepository {
    fn get(&self, user_id: &ParticipantId) -> Result<Vec<ParticipantId>> {
        let Some(value) = self.store.get(&Self::key(user_id))? else {
            return Ok(vec![]);
        };

        serde_json::from_str(&value)
            .with_context(|| format!("Invalid window state stored for {}", user_id))
    }

    fn set(&self, user_id: &ParticipantId, window_ids: &[ParticipantId]) -> Result<()> {
        let value = serde_json::to_string(window_ids)?;
        self.store.set(&Self::key(user_id), &value)
    }
}
