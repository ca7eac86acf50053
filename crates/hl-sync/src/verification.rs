//! Verification-step router.
//!
//! Maps server-reported wizard progress to the screen the user should see
//! next. Stateless; the same input always yields the same route.

use std::fmt;

use hl_core::entities::User;
use hl_core::enums::ProfileStep;
use serde::Serialize;

/// Where the user belongs in the onboarding flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationRoute {
    Login,
    Profile,
    Documents,
    Review,
    Dashboard,
}

impl VerificationRoute {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Profile => "/verify/profile",
            Self::Documents => "/verify/documents",
            Self::Review => "/verify/pending",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Short human label for terminal output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Login => "sign in",
            Self::Profile => "complete your profile",
            Self::Documents => "upload verification documents",
            Self::Review => "documents under review",
            Self::Dashboard => "verified",
        }
    }

    const fn for_step(step: ProfileStep) -> Self {
        match step {
            ProfileStep::Profile => Self::Profile,
            ProfileStep::DocumentVerification => Self::Documents,
            ProfileStep::Review => Self::Review,
            ProfileStep::Complete => Self::Dashboard,
        }
    }
}

impl fmt::Display for VerificationRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Route from `currentStep` and completion percentage.
///
/// A present step always wins; an unrecognized step string routes to the
/// profile step. A blank step counts as absent. With no step, completion of
/// at least 75 means review, at least 50 means documents, anything lower
/// means profile.
#[must_use]
pub fn route_for_progress(current_step: Option<&str>, completion: u8) -> VerificationRoute {
    match current_step.map(str::trim).filter(|step| !step.is_empty()) {
        Some(raw) => raw
            .parse::<ProfileStep>()
            .map_or(VerificationRoute::Profile, VerificationRoute::for_step),
        None if completion >= 75 => VerificationRoute::Review,
        None if completion >= 50 => VerificationRoute::Documents,
        None => VerificationRoute::Profile,
    }
}

/// Route for the session user's wizard progress.
#[must_use]
pub fn route_for(user: &User) -> VerificationRoute {
    route_for_progress(user.current_step.as_deref(), user.profile_completion)
}

/// Coarser routing used for the top-level "continue" action.
///
/// Works from the session flags rather than `currentStep`.
#[must_use]
pub fn route_for_user(user: Option<&User>) -> VerificationRoute {
    match user {
        None => VerificationRoute::Login,
        Some(u) if u.is_verified => VerificationRoute::Dashboard,
        Some(u) if u.has_submitted_documents => VerificationRoute::Review,
        Some(u) if u.profile_completion >= 50 => VerificationRoute::Documents,
        Some(_) => VerificationRoute::Profile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("PROFILE"), 90, VerificationRoute::Profile)]
    #[case(Some("DOCUMENT_VERIFICATION"), 0, VerificationRoute::Documents)]
    #[case(Some("REVIEW"), 0, VerificationRoute::Review)]
    #[case(Some("REVIEW"), 100, VerificationRoute::Review)]
    #[case(Some("COMPLETE"), 0, VerificationRoute::Dashboard)]
    #[case(Some("ONBOARDING"), 80, VerificationRoute::Profile)]
    #[case(Some(""), 80, VerificationRoute::Review)]
    #[case(Some("  "), 50, VerificationRoute::Documents)]
    #[case(None, 80, VerificationRoute::Review)]
    #[case(None, 75, VerificationRoute::Review)]
    #[case(None, 74, VerificationRoute::Documents)]
    #[case(None, 50, VerificationRoute::Documents)]
    #[case(None, 49, VerificationRoute::Profile)]
    #[case(None, 0, VerificationRoute::Profile)]
    fn progress_routes(
        #[case] step: Option<&str>,
        #[case] completion: u8,
        #[case] expected: VerificationRoute,
    ) {
        assert_eq!(route_for_progress(step, completion), expected);
        assert_eq!(route_for_progress(step, completion), expected, "idempotent");
    }

    #[test]
    fn paths() {
        assert_eq!(VerificationRoute::Review.path(), "/verify/pending");
        assert_eq!(VerificationRoute::Dashboard.to_string(), "/dashboard");
    }

    #[test]
    fn navbar_routing() {
        assert_eq!(route_for_user(None), VerificationRoute::Login);

        let mut user = User {
            profile_completion: 25,
            ..User::default()
        };
        assert_eq!(route_for_user(Some(&user)), VerificationRoute::Profile);

        user.profile_completion = 50;
        assert_eq!(route_for_user(Some(&user)), VerificationRoute::Documents);

        user.has_submitted_documents = true;
        assert_eq!(route_for_user(Some(&user)), VerificationRoute::Review);

        user.is_verified = true;
        assert_eq!(route_for_user(Some(&user)), VerificationRoute::Dashboard);
    }

    #[test]
    fn session_user_routes_by_step() {
        let user = User {
            current_step: Some("REVIEW".into()),
            profile_completion: 10,
            ..User::default()
        };
        assert_eq!(route_for(&user), VerificationRoute::Review);
    }
}
