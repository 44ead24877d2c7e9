pub mod auth;
pub mod dispatch;
pub mod groups;
pub mod ping;
