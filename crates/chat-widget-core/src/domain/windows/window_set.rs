// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::RwLock;

use crate::domain::participants::models::Participant;
use crate::domain::shared::models::ParticipantId;

use super::models::Window;

/// The open conversation windows, most recently opened first.
///
/// There is at most one window per participant id.
#[derive(Default)]
pub struct WindowSet {
    windows: RwLock<Vec<Window>>,
}

impl WindowSet {
    /// Inserts `window` at the front. Returns `false` and leaves the set untouched if a window
    /// for the same participant exists already.
    pub fn insert(&self, window: Window) -> bool {
        let mut windows = self.windows.write();

        if windows.iter().any(|w| w.id() == window.id()) {
            return false;
        }

        windows.insert(0, window);
        true
    }

    /// Evicts windows from the back until at most `max_windows` remain. Returns the evicted
    /// windows.
    pub fn truncate(&self, max_windows: usize) -> Vec<Window> {
        let mut windows = self.windows.write();

        if windows.len() <= max_windows {
            return vec![];
        }

        windows.split_off(max_windows)
    }

    pub fn remove(&self, id: &ParticipantId) -> Option<Window> {
        let mut windows = self.windows.write();
        let idx = windows.iter().position(|w| w.id() == id)?;
        Some(windows.remove(idx))
    }

    pub fn clear(&self) {
        self.windows.write().clear();
    }

    pub fn get(&self, id: &ParticipantId) -> Option<Window> {
        self.windows.read().iter().find(|w| w.id() == id).cloned()
    }

    pub fn contains(&self, id: &ParticipantId) -> bool {
        self.windows.read().iter().any(|w| w.id() == id)
    }

    pub fn position(&self, id: &ParticipantId) -> Option<usize> {
        self.windows.read().iter().position(|w| w.id() == id)
    }

    pub fn len(&self) -> usize {
        self.windows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.read().is_empty()
    }

    pub fn windows(&self) -> Vec<Window> {
        self.windows.read().clone()
    }

    /// The participant ids of all windows in display order.
    pub fn participant_ids(&self) -> Vec<ParticipantId> {
        self.windows.read().iter().map(|w| w.id().clone()).collect()
    }

    /// Runs `handler` with the window identified by `id`. Returns `None` if no such window is
    /// open.
    pub fn update<T>(&self, id: &ParticipantId, handler: impl FnOnce(&mut Window) -> T) -> Option<T> {
        let mut windows = self.windows.write();
        let window = windows.iter_mut().find(|w| w.id() == id)?;
        Some(handler(window))
    }

    /// Like `update` but only runs `handler` if the window identified by `id` is still the
    /// instance identified by `instance_id`.
    pub fn update_instance<T>(
        &self,
        id: &ParticipantId,
        instance_id: u64,
        handler: impl FnOnce(&mut Window) -> T,
    ) -> Option<T> {
        let mut windows = self.windows.write();
        let window = windows
            .iter_mut()
            .find(|w| w.id() == id && w.instance_id() == instance_id)?;
        Some(handler(window))
    }

    /// Runs `handler` with a read-only view of the window identified by `id`.
    pub fn read<T>(&self, id: &ParticipantId, handler: impl FnOnce(&Window) -> T) -> Option<T> {
        let windows = self.windows.read();
        let window = windows.iter().find(|w| w.id() == id)?;
        Some(handler(window))
    }

    /// The window that should receive focus when the window identified by `id` is closed. That is
    /// its left neighbour or, for the first window, the one to its right.
    pub fn closest_window(&self, id: &ParticipantId) -> Option<Window> {
        let windows = self.windows.read();
        let idx = windows.iter().position(|w| w.id() == id)?;

        match idx {
            0 => windows.get(1).cloned(),
            _ => windows.get(idx - 1).cloned(),
        }
    }

    /// Points every window at the participant instance `lookup` returns for its id, so that
    /// windows keep observing status changes after the roster replaced an instance.
    pub fn rebind_participants(&self, lookup: impl Fn(&ParticipantId) -> Option<Participant>) {
        for window in self.windows.write().iter_mut() {
            let Some(participant) = lookup(window.id()) else {
                continue;
            };

            if !participant.is_same_instance(&window.participant) {
                window.participant = participant;
            }
        }
    }
}
