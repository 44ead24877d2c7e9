pub mod auth;
pub mod groups;

pub use auth::AuthCommands;
pub use groups::GroupsCommands;
