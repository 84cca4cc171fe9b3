// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::debug;

use crate::app::deps::*;
use crate::domain::shared::models::ParticipantId;

pub struct HistoryService {
    history_domain_service: DynHistoryDomainService,
    window_set: DynWindowSet,
}

impl From<&AppDependencies> for HistoryService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            history_domain_service: deps.history_domain_service.clone(),
            window_set: deps.window_set.clone(),
        }
    }
}

impl HistoryService {
    /// Loads the next page of older messages into a window. Does nothing while a load is
    /// running or once the history is exhausted.
    pub async fn load_older_messages(&self, participant_id: &ParticipantId) -> Result<()> {
        let Some(window) = self.window_set.get(participant_id) else {
            return Ok(());
        };

        if window.is_loading_history || !window.has_more_messages {
            debug!(
                "Not loading older messages of {} (loading: {}, exhausted: {}).",
                participant_id, window.is_loading_history, !window.has_more_messages
            );
            return Ok(());
        }

        self.history_domain_service
            .load_history(participant_id)
            .await
    }
}
