//! Wire enums for Hyperlocal.
//!
//! All enums serialize as `SCREAMING_SNAKE_CASE`, matching the backend.
//! `as_str()` returns the wire value; `label()` (where present) returns the
//! human-readable form shown in listings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Implements `Display` and `FromStr` in terms of `as_str()` / `ALL`.
macro_rules! wire_enum_impls {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let normalized = raw.trim().replace('-', "_").to_ascii_uppercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str() == normalized)
                    .ok_or_else(|| CoreError::UnknownVariant {
                        kind: stringify!($ty),
                        value: raw.to_string(),
                    })
            }
        }
    };
}

// ---------------------------------------------------------------------------
// VerificationStatus
// ---------------------------------------------------------------------------

/// Identity verification outcome, decided by a super admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    #[default]
    NotVerified,
    Verified,
    Rejected,
}

impl VerificationStatus {
    pub const ALL: [Self; 3] = [Self::NotVerified, Self::Verified, Self::Rejected];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotVerified => "NOT_VERIFIED",
            Self::Verified => "VERIFIED",
            Self::Rejected => "REJECTED",
        }
    }
}

wire_enum_impls!(VerificationStatus);

// ---------------------------------------------------------------------------
// ProfileStep
// ---------------------------------------------------------------------------

/// Stage of the verification wizard as reported by the server.
///
/// ```text
/// PROFILE (25%) → DOCUMENT_VERIFICATION (50%) → REVIEW (75%) → COMPLETE (100%)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileStep {
    Profile,
    DocumentVerification,
    Review,
    Complete,
}

impl ProfileStep {
    pub const ALL: [Self; 4] = [
        Self::Profile,
        Self::DocumentVerification,
        Self::Review,
        Self::Complete,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "PROFILE",
            Self::DocumentVerification => "DOCUMENT_VERIFICATION",
            Self::Review => "REVIEW",
            Self::Complete => "COMPLETE",
        }
    }

    /// Completion percentage the backend assigns on entering this step.
    #[must_use]
    pub const fn percentage(self) -> u8 {
        match self {
            Self::Profile => 25,
            Self::DocumentVerification => 50,
            Self::Review => 75,
            Self::Complete => 100,
        }
    }
}

wire_enum_impls!(ProfileStep);

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Platform-level role of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    Admin,
    Superadmin,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::User, Self::Admin, Self::Superadmin];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
            Self::Superadmin => "SUPERADMIN",
        }
    }
}

wire_enum_impls!(Role);

// ---------------------------------------------------------------------------
// CommunityCategory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommunityCategory {
    Neighbourhood,
    Society,
    College,
    Office,
    InterestGroup,
    Other,
}

impl CommunityCategory {
    pub const ALL: [Self; 6] = [
        Self::Neighbourhood,
        Self::Society,
        Self::College,
        Self::Office,
        Self::InterestGroup,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neighbourhood => "NEIGHBOURHOOD",
            Self::Society => "SOCIETY",
            Self::College => "COLLEGE",
            Self::Office => "OFFICE",
            Self::InterestGroup => "INTEREST_GROUP",
            Self::Other => "OTHER",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Neighbourhood => "Neighbourhood",
            Self::Society => "Society / Apartment",
            Self::College => "College / Campus",
            Self::Office => "Office / Workplace",
            Self::InterestGroup => "Interest Group",
            Self::Other => "Other",
        }
    }
}

wire_enum_impls!(CommunityCategory);

// ---------------------------------------------------------------------------
// JoinPolicy
// ---------------------------------------------------------------------------

/// Whether joining a community takes effect immediately or waits for an admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JoinPolicy {
    #[default]
    Open,
    ApprovalRequired,
}

impl JoinPolicy {
    pub const ALL: [Self; 2] = [Self::Open, Self::ApprovalRequired];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::ApprovalRequired => "APPROVAL_REQUIRED",
        }
    }
}

wire_enum_impls!(JoinPolicy);

// ---------------------------------------------------------------------------
// CommunityStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommunityStatus {
    #[default]
    Active,
    Inactive,
}

impl CommunityStatus {
    pub const ALL: [Self; 2] = [Self::Active, Self::Inactive];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }
}

wire_enum_impls!(CommunityStatus);

// ---------------------------------------------------------------------------
// MembershipStatus
// ---------------------------------------------------------------------------

/// The caller's membership state in a community. Absent on the wire means approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipStatus {
    #[default]
    Approved,
    Pending,
}

impl MembershipStatus {
    pub const ALL: [Self; 2] = [Self::Approved, Self::Pending];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "APPROVED",
            Self::Pending => "PENDING",
        }
    }
}

wire_enum_impls!(MembershipStatus);

// ---------------------------------------------------------------------------
// CommunityRole
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommunityRole {
    Admin,
    #[default]
    Member,
}

impl CommunityRole {
    pub const ALL: [Self; 2] = [Self::Admin, Self::Member];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Member => "MEMBER",
        }
    }
}

wire_enum_impls!(CommunityRole);
