use thiserror::Error;

/// Errors raised while building core types from untyped input (CLI flags,
/// config values). Wire payloads never produce these: malformed grants are
/// dropped during deserialization instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A scope name outside `platform`, `org`, `team`.
    #[error("unknown scope '{0}' (expected platform, org or team)")]
    UnknownScope(String),

    /// Data failed validation (empty identifiers, malformed role names).
    #[error("Validation error: {0}")]
    Validation(String),
}
