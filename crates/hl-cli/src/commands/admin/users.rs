use hl_client::UserFilter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PageArgs;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_optional;
use crate::context::AppContext;
use crate::output::output;

const DEFAULT_PAGE_SIZE: u32 = 10;

/// Borrowed view of the `admin users` flags.
pub struct UserFilterArgs<'a> {
    pub page: &'a PageArgs,
    pub sort_by: &'a str,
    pub sort_dir: &'a str,
    pub email: Option<&'a str>,
    pub name: Option<&'a str>,
    pub role: Option<&'a str>,
    pub status: Option<&'a str>,
    pub step: Option<&'a str>,
}

impl UserFilterArgs<'_> {
    fn to_filter(&self, global_limit: Option<u32>) -> anyhow::Result<UserFilter> {
        Ok(UserFilter {
            page: self.page.page,
            size: effective_limit(self.page.size, global_limit, DEFAULT_PAGE_SIZE),
            sort_by: self.sort_by.to_string(),
            sort_dir: self.sort_dir.to_string(),
            email: self.email.map(str::to_string),
            name: self.name.map(str::to_string),
            role: parse_optional(self.role, "role")?,
            verification_status: parse_optional(self.status, "verification status")?,
            current_step: parse_optional(self.step, "step")?,
        })
    }
}

pub async fn list(args: &UserFilterArgs<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = args.to_filter(flags.limit)?;
    let users = ctx.sync.client().list_users(&filter).await?;
    output(&users, flags.format)
}

pub async fn show(user_id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = ctx.sync.client().user_detail(user_id).await?;
    output(&user, flags.format)
}

#[cfg(test)]
mod tests {
    use hl_core::enums::{ProfileStep, VerificationStatus};

    use super::UserFilterArgs;
    use crate::cli::subcommands::PageArgs;

    fn args<'a>(page: &'a PageArgs, status: Option<&'a str>) -> UserFilterArgs<'a> {
        UserFilterArgs {
            page,
            sort_by: "createdAt",
            sort_dir: "desc",
            email: None,
            name: Some("lisa"),
            role: None,
            status,
            step: Some("document-verification"),
        }
    }

    #[test]
    fn flags_become_typed_filter() {
        let page = PageArgs { page: 1, size: None };
        let filter = args(&page, Some("not-verified"))
            .to_filter(Some(25))
            .expect("filter should build");

        assert_eq!(filter.page, 1);
        assert_eq!(filter.size, 25);
        assert_eq!(filter.name.as_deref(), Some("lisa"));
        assert_eq!(filter.verification_status, Some(VerificationStatus::NotVerified));
        assert_eq!(filter.current_step, Some(ProfileStep::DocumentVerification));
    }

    #[test]
    fn unknown_status_is_rejected_before_any_request() {
        let page = PageArgs { page: 0, size: Some(5) };
        let err = args(&page, Some("pending-ish"))
            .to_filter(None)
            .expect_err("status should not parse");
        assert!(err.to_string().contains("invalid verification status"));
    }
}
