//! Request and response bodies for the REST endpoints.

use arena_core::DocumentIds;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MISSING_ID: &str = "missing document id (`_id` or `id`)";

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A user's membership in an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "WireMember")]
pub struct Member {
    pub user_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMember {
    user_id: Option<String>,
    #[serde(flatten)]
    ids: DocumentIds,
    #[serde(default)]
    username: String,
    email: Option<String>,
    role: String,
    joined_at: Option<DateTime<Utc>>,
}

impl TryFrom<WireMember> for Member {
    type Error = &'static str;

    fn try_from(wire: WireMember) -> Result<Self, Self::Error> {
        let user_id = wire
            .user_id
            .filter(|id| !id.trim().is_empty())
            .or_else(|| wire.ids.into_id())
            .ok_or(MISSING_ID)?;
        Ok(Self {
            user_id,
            username: wire.username,
            email: wire.email,
            role: wire.role,
            joined_at: wire.joined_at,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTournament {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_teams: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "WireTournament")]
pub struct Tournament {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_teams: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireTournament {
    #[serde(flatten)]
    ids: DocumentIds,
    name: String,
    #[serde(alias = "organization")]
    org_id: Option<String>,
    game: Option<String>,
    starts_at: Option<DateTime<Utc>>,
    max_teams: Option<u32>,
    status: Option<String>,
}

impl TryFrom<WireTournament> for Tournament {
    type Error = &'static str;

    fn try_from(wire: WireTournament) -> Result<Self, Self::Error> {
        Ok(Self {
            id: wire.ids.into_id().ok_or(MISSING_ID)?,
            name: wire.name,
            org_id: wire.org_id,
            game: wire.game,
            starts_at: wire.starts_at,
            max_teams: wire.max_teams,
            status: wire.status,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "WireNotification")]
pub struct Notification {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub message: String,
    pub read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireNotification {
    #[serde(flatten)]
    ids: DocumentIds,
    title: Option<String>,
    message: String,
    #[serde(default, alias = "isRead")]
    read: bool,
    created_at: Option<DateTime<Utc>>,
}

impl TryFrom<WireNotification> for Notification {
    type Error = &'static str;

    fn try_from(wire: WireNotification) -> Result<Self, Self::Error> {
        Ok(Self {
            id: wire.ids.into_id().ok_or(MISSING_ID)?,
            title: wire.title,
            message: wire.message,
            read: wire.read,
            created_at: wire.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn member_accepts_backend_id_field() {
        let member: Member = serde_json::from_str(
            r#"{"_id": "u-1", "username": "kai", "role": "org:manager", "joinedAt": "2026-03-01T12:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(member.user_id, "u-1");
        assert_eq!(member.role, "org:manager");
        assert!(member.joined_at.is_some());
    }

    #[test]
    fn documents_with_both_id_keys_decode() {
        let member: Member = serde_json::from_str(
            r#"{"_id": "u-1", "id": "u-1", "username": "kai", "role": "org:member"}"#,
        )
        .unwrap();
        assert_eq!(member.user_id, "u-1");

        let tournament: Tournament = serde_json::from_str(
            r#"{"_id": {"$oid": "t-1"}, "id": "t-1", "name": "Spring Cup", "organization": "A"}"#,
        )
        .unwrap();
        assert_eq!(tournament.id, "t-1");
        assert_eq!(tournament.org_id.as_deref(), Some("A"));

        let note: Notification =
            serde_json::from_str(r#"{"_id": "n-1", "id": "n-1", "message": "hi"}"#).unwrap();
        assert_eq!(note.id, "n-1");
    }

    #[test]
    fn member_user_id_beats_document_id() {
        let member: Member = serde_json::from_str(
            r#"{"_id": "membership-9", "userId": "u-4", "role": "org:owner"}"#,
        )
        .unwrap();
        assert_eq!(member.user_id, "u-4");
    }

    #[test]
    fn document_without_id_is_rejected() {
        let err = serde_json::from_str::<Tournament>(r#"{"name": "Spring Cup"}"#).unwrap_err();
        assert!(err.to_string().contains("missing document id"), "{err}");
    }

    #[test]
    fn new_tournament_omits_unset_fields() {
        let body = serde_json::to_value(NewTournament {
            name: "Spring Cup".into(),
            max_teams: Some(16),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"name": "Spring Cup", "maxTeams": 16}));
    }

    #[test]
    fn notification_read_flag_defaults_false() {
        let note: Notification =
            serde_json::from_str(r#"{"_id": "n-1", "message": "Match starts soon"}"#).unwrap();
        assert!(!note.read);

        let note: Notification =
            serde_json::from_str(r#"{"id": "n-2", "message": "ok", "isRead": true}"#).unwrap();
        assert!(note.read);
    }
}
