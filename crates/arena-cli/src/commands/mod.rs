pub mod access;
pub mod auth;
pub mod dispatch;
pub mod notifications;
pub mod org;
pub mod schema;
pub mod shared;
pub mod tournament;
