// chat-widget/chat-widget-wasm-utils
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable};

use crate::{sleep, spawn, SendUnlessWasm};

/// A repeating timer which invokes `tick` every `interval` until it is cancelled.
///
/// The first tick fires after one full interval. Dropping the task cancels it, so the owner's
/// lifetime bounds the timer's lifetime.
pub struct PeriodicTask {
    abort_handle: AbortHandle,
}

impl PeriodicTask {
    pub fn start<F, Fut>(interval: Duration, tick: F) -> Self
    where
        F: Fn() -> Fut + SendUnlessWasm + 'static,
        Fut: Future<Output = ()> + SendUnlessWasm + 'static,
    {
        let (abort_handle, registration) = AbortHandle::new_pair();

        let task = Abortable::new(
            async move {
                loop {
                    sleep(interval).await;
                    tick().await;
                }
            },
            registration,
        );

        spawn(async move {
            let _ = task.await;
        });

        Self { abort_handle }
    }

    pub fn cancel(&self) {
        self.abort_handle.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort_handle.is_aborted()
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        self.abort_handle.abort();
    }
}
