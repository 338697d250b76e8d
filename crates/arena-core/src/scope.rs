//! Grant tiers and scope instance identifiers.
//!
//! The backend stores org and team ids as database object ids. Depending on
//! the endpoint they are serialized as plain strings, numbers, or wrapped
//! objects (`{"$oid": "..."}`, `{"_id": "..."}`). Every form is normalized to a
//! trimmed string here so comparisons never depend on the wire shape.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// The tier at which a role grant applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Platform,
    Org,
    Team,
}

impl Scope {
    pub const ALL: [Self; 3] = [Self::Platform, Self::Org, Self::Team];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Platform => "platform",
            Self::Org => "org",
            Self::Team => "team",
        }
    }

    /// Whether grants in this scope are bound to an instance id.
    #[must_use]
    pub const fn is_instance_bound(self) -> bool {
        !matches!(self, Self::Platform)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "platform" => Ok(Self::Platform),
            "org" | "organization" => Ok(Self::Org),
            "team" => Ok(Self::Team),
            other => Err(CoreError::UnknownScope(other.to_string())),
        }
    }
}

/// Normalized identifier of an org or team instance.
///
/// Never empty. Construct with [`ScopeId::new`], which trims and rejects
/// blank input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct ScopeId(String);

impl ScopeId {
    /// Normalize `raw`, returning `None` when nothing is left after trimming.
    #[must_use]
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ScopeId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or_else(|| CoreError::Validation("scope id must not be empty".into()))
    }
}

impl AsRef<str> for ScopeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Every shape an identifier takes on the wire.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Wrapped {
        #[serde(rename = "$oid", alias = "_id", alias = "id")]
        inner: Box<RawId>,
    },
}

impl RawId {
    fn normalize(self) -> String {
        match self {
            Self::Text(text) => text.trim().to_owned(),
            Self::Unsigned(n) => n.to_string(),
            Self::Signed(n) => n.to_string(),
            Self::Wrapped { inner } => inner.normalize(),
        }
    }
}

impl<'de> Deserialize<'de> for ScopeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawId::deserialize(deserializer)?;
        Self::new(raw.normalize()).ok_or_else(|| de::Error::custom("scope id must not be empty"))
    }
}

/// Deserialize an optional scope id, mapping `null`, blank strings and blank
/// wrapped ids to `None`.
pub(crate) fn optional_scope_id<'de, D>(deserializer: D) -> Result<Option<ScopeId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawId>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| ScopeId::new(raw.normalize())))
}

/// The identifier keys a backend document may carry.
///
/// Documents serialize `_id`, and with virtuals enabled a duplicate `id` as
/// well. Flatten this into a wire struct to accept either or both; `_id`
/// wins when both are present.
#[derive(Debug, Default, Deserialize)]
pub struct DocumentIds {
    #[serde(rename = "_id", default, deserialize_with = "optional_id")]
    object_id: Option<String>,
    #[serde(default, deserialize_with = "optional_id")]
    id: Option<String>,
}

impl DocumentIds {
    /// The document id, or `None` when neither key held a non-blank value.
    #[must_use]
    pub fn into_id(self) -> Option<String> {
        self.object_id
            .filter(|id| !id.is_empty())
            .or_else(|| self.id.filter(|id| !id.is_empty()))
    }
}

fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(RawId::normalize))
}
