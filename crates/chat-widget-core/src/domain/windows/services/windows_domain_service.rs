// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use chat_widget_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::participants::models::Participant;
use crate::domain::shared::models::ParticipantId;
use crate::domain::windows::models::Window;

#[derive(Debug, Clone, PartialEq)]
pub struct OpenedWindow {
    /// The window as it looked right after it was found or created.
    pub window: Window,
    pub was_created: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum RestoreWindowsError {
    #[error("Windows can only be restored after the friends list was loaded.")]
    DirectoryNotLoaded,
    #[error(transparent)]
    Load(#[from] anyhow::Error),
}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait WindowsDomainService: SendUnlessWasm + SyncUnlessWasm {
    /// Returns the window for `participant`, creating it if needed.
    ///
    /// A new window is inserted at the front, windows that no longer fit into the viewport are
    /// evicted from the back (unless mobile viewports are enabled) and the set is persisted.
    /// New windows then load their history or, with history disabled, request the welcome
    /// message. The history load is awaited before this method returns.
    async fn open_window(
        &self,
        participant: Participant,
        focus: bool,
        from_user_click: bool,
    ) -> OpenedWindow;

    /// Removes the window, persists the remaining set and dispatches
    /// `ChatEvent::ParticipantChatClosed`.
    fn close_window(&self, participant_id: &ParticipantId) -> Option<Window>;

    /// Evicts windows that exceed the capacity of the current viewport and updates the
    /// unsupported viewport flag.
    fn normalize_windows(&self);

    fn persist_windows(&self);

    /// Re-opens the persisted windows of the local user that are still part of the roster.
    async fn restore_windows(&self) -> Result<(), RestoreWindowsError>;
}
