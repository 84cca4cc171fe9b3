// chat-widget/chat-widget-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};
use std::ops::Deref;
use std::sync::Arc;

use itertools::Itertools;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::domain::shared::models::ParticipantId;

use super::{ParticipantStatus, ParticipantType};

/// A chattable entity.
///
/// `Participant` is a cheap handle. Clones share the same underlying instance, so a status
/// change made through the directory is observed by every window holding a clone and vice versa.
#[derive(Clone)]
pub struct Participant {
    inner: Arc<ParticipantInner>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParticipantKind {
    User,
    Client,
    Group { members: Vec<Participant> },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantProfile {
    pub display_name: String,
    pub avatar: Option<String>,
    pub email: Option<String>,
    pub code: Option<String>,
    pub company_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantInfo {
    pub id: ParticipantId,
    pub kind: ParticipantKind,
    pub profile: ParticipantProfile,
}

struct ParticipantInner {
    info: ParticipantInfo,
    status: RwLock<ParticipantStatus>,
}

impl Deref for Participant {
    type Target = ParticipantInfo;

    fn deref(&self) -> &Self::Target {
        &self.inner.info
    }
}

impl Participant {
    pub fn new(
        id: impl Into<ParticipantId>,
        kind: ParticipantKind,
        profile: ParticipantProfile,
        status: ParticipantStatus,
    ) -> Self {
        Self {
            inner: Arc::new(ParticipantInner {
                info: ParticipantInfo {
                    id: id.into(),
                    kind,
                    profile,
                },
                status: RwLock::new(status),
            }),
        }
    }

    pub fn user(
        id: impl Into<ParticipantId>,
        display_name: impl Into<String>,
        status: ParticipantStatus,
    ) -> Self {
        Self::new(
            id,
            ParticipantKind::User,
            ParticipantProfile {
                display_name: display_name.into(),
                ..Default::default()
            },
            status,
        )
    }

    pub fn client(
        id: impl Into<ParticipantId>,
        display_name: impl Into<String>,
        status: ParticipantStatus,
    ) -> Self {
        Self::new(
            id,
            ParticipantKind::Client,
            ParticipantProfile {
                display_name: display_name.into(),
                ..Default::default()
            },
            status,
        )
    }

    /// Builds a group from `members`. Its identity is derived from the set of member ids, so the
    /// same selection always yields the same group id regardless of selection order.
    pub fn group(members: Vec<Participant>) -> Self {
        let id = format!(
            "group:{}",
            members.iter().map(|m| m.id.as_str()).sorted().dedup().join(",")
        );
        let display_name = members
            .iter()
            .map(|m| m.profile.display_name.as_str())
            .sorted()
            .join(", ");

        Self::new(
            id,
            ParticipantKind::Group { members },
            ParticipantProfile {
                display_name,
                ..Default::default()
            },
            ParticipantStatus::Online,
        )
    }
}

impl Participant {
    pub fn r#type(&self) -> ParticipantType {
        match self.kind {
            ParticipantKind::User => ParticipantType::User,
            ParticipantKind::Client => ParticipantType::Client,
            ParticipantKind::Group { .. } => ParticipantType::Group,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.profile.display_name
    }

    pub fn status(&self) -> ParticipantStatus {
        *self.inner.status.read()
    }

    pub fn set_status(&self, status: ParticipantStatus) {
        *self.inner.status.write() = status;
    }

    /// The members of a group. Empty for users and clients.
    pub fn members(&self) -> &[Participant] {
        match &self.kind {
            ParticipantKind::Group { members } => members,
            ParticipantKind::User | ParticipantKind::Client => &[],
        }
    }

    /// Returns `true` if both handles point at the very same instance.
    pub fn is_same_instance(&self, other: &Participant) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// The avatar to display next to `sender`'s messages in a conversation with this participant.
    pub fn avatar_for_sender(&self, sender: &ParticipantId) -> Option<&str> {
        match &self.kind {
            ParticipantKind::User => self.profile.avatar.as_deref(),
            ParticipantKind::Client => None,
            ParticipantKind::Group { members } => members
                .iter()
                .find(|member| &member.id == sender)
                .or_else(|| members.first())
                .and_then(|member| member.profile.avatar.as_deref()),
        }
    }
}

impl PartialEq for Participant {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_instance(other)
            || (self.inner.info == other.inner.info && self.status() == other.status())
    }
}

impl Debug for Participant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Participant")
            .field("id", &self.id)
            .field("type", &self.r#type())
            .field("display_name", &self.profile.display_name)
            .field("status", &self.status())
            .finish()
    }
}
