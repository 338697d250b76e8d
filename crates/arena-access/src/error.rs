use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    /// An action name outside the catalog (see `Action::ALL`).
    #[error("unknown action '{0}'")]
    UnknownAction(String),
}
