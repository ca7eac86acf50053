//! Entity structs for Hyperlocal domain objects.
//!
//! Field names follow the backend's camelCase JSON. Payload types that need
//! client-side defaulting (`CommunityPayload`) normalize into the types the
//! rest of the client works with.

mod admin;
mod community;
mod user;

pub use admin::{
    AdminCommunityDetail, AdminCommunitySummary, AdminIdentity, UserDetail, UserSummary,
    VerificationDecision, VerificationResult,
};
pub use community::{Community, CommunityMember, CommunityPayload, JoinRequest};
pub use user::User;

pub(crate) mod de {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Int(i64),
    }

    /// Accept ids serialized either as JSON numbers or strings.
    pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match StringOrNumber::deserialize(deserializer)? {
            StringOrNumber::String(s) => s,
            StringOrNumber::Int(n) => n.to_string(),
        })
    }
}
