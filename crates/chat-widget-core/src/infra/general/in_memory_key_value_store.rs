// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use anyhow::Result;
use parking_lot::RwLock;

use crate::domain::general::services::KeyValueStore;

/// A `KeyValueStore` which lives as long as the process does.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
