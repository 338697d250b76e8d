pub mod access;
pub mod auth;
pub mod notifications;
pub mod org;
pub mod tournament;

pub use access::AccessCommands;
pub use auth::AuthCommands;
pub use notifications::NotificationCommands;
pub use org::OrgCommands;
pub use tournament::TournamentCommands;
