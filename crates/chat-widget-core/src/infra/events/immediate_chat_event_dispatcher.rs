// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::{OnceLock, Weak};

use tracing::warn;

use crate::app::event_handlers::ChatEventDispatcher;
use crate::chat_controller::ChatControllerInner;
use crate::{ChatController, ChatDelegate, ChatEvent};

/// Hands every event synchronously to the delegate.
pub struct ImmediateChatEventDispatcher {
    controller_inner: OnceLock<Weak<ChatControllerInner>>,
    delegate: Option<Box<dyn ChatDelegate>>,
}

impl ImmediateChatEventDispatcher {
    pub fn new(delegate: Option<Box<dyn ChatDelegate>>) -> Self {
        Self {
            controller_inner: Default::default(),
            delegate,
        }
    }

    pub(crate) fn set_controller_inner(&self, controller_inner: Weak<ChatControllerInner>) {
        if self.controller_inner.set(controller_inner).is_err() {
            warn!("Tried to set controller_inner on ImmediateChatEventDispatcher more than once.");
        }
    }
}

impl ChatEventDispatcher for ImmediateChatEventDispatcher {
    fn dispatch_event(&self, event: ChatEvent) {
        let Some(delegate) = &self.delegate else {
            return;
        };

        // Events raised while the controller is being built or torn down have no receiver.
        let Some(controller_inner) = self.controller_inner.get().and_then(Weak::upgrade) else {
            return;
        };

        delegate.handle_event(ChatController::from(controller_inner), event);
    }
}
