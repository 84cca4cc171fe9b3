// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::OnceLock;

use tracing::{error, warn};

use crate::app::event_handlers::{AdapterEvent, AdapterEventHandler};

/// Runs adapter events through a fixed chain of handlers.
pub struct AdapterEventHandlerQueue {
    handlers: OnceLock<Vec<Box<dyn AdapterEventHandler>>>,
}

impl AdapterEventHandlerQueue {
    pub fn new() -> Self {
        Self {
            handlers: Default::default(),
        }
    }

    /// Installs the handler chain. Subsequent calls are ignored.
    pub fn set_handlers(&self, handlers: Vec<Box<dyn AdapterEventHandler>>) {
        if self.handlers.set(handlers).is_err() {
            warn!("Handlers were already set on AdapterEventHandlerQueue");
        }
    }

    pub async fn handle_event(&self, event: AdapterEvent) {
        let Some(handlers) = self.handlers.get() else {
            warn!("Dropping adapter event since no handlers were set.");
            return;
        };

        let mut event = event;

        for handler in handlers.iter() {
            match handler.handle_event(event).await {
                Ok(None) => return,
                Ok(Some(e)) => event = e,
                Err(err) => {
                    error!(
                        "Event handler '{}' aborted with error: {}",
                        handler.name(),
                        err.to_string()
                    );
                    return;
                }
            }
        }

        warn!("Unhandled adapter event {:?}", event);
    }
}

impl Default for AdapterEventHandlerQueue {
    fn default() -> Self {
        Self::new()
    }
}
