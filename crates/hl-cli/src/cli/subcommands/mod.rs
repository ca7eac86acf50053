mod admin;
mod auth;
mod community;

pub use admin::{AdminCommands, AdminVerifyArgs};
pub use auth::{AuthCommands, AuthDocumentsArgs, AuthProfileArgs, AuthRegisterArgs, CredentialArgs};
pub use community::{CommunityCommands, CommunityCreateArgs, CommunityUpdateArgs, PageArgs};
