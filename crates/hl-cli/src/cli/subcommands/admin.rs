use clap::{Args, Subcommand};

use crate::cli::subcommands::{CredentialArgs, PageArgs};

/// Super-admin console commands. All of them use the admin token.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// Sign in as a super admin.
    Login(CredentialArgs),
    /// Clear the stored admin token.
    Logout,
    /// List users awaiting or past verification.
    Users {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long, default_value = "createdAt")]
        sort_by: String,
        #[arg(long, default_value = "desc")]
        sort_dir: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        name: Option<String>,
        /// user, admin, superadmin
        #[arg(long)]
        role: Option<String>,
        /// not-verified, verified, rejected
        #[arg(long)]
        status: Option<String>,
        /// profile, document-verification, review, complete
        #[arg(long)]
        step: Option<String>,
    },
    /// Show one user with document links.
    User { user_id: i64 },
    /// Approve or reject a user's identity documents.
    Verify(AdminVerifyArgs),
    /// List all communities.
    Communities {
        #[command(flatten)]
        page: PageArgs,
        /// active or inactive
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one community with its admins and members.
    Community { id: i64 },
    /// Activate or deactivate a community.
    CommunityStatus { id: i64, status: String },
    /// Delete a community permanently.
    DeleteCommunity {
        id: i64,
        /// Required; deletion cannot be undone.
        #[arg(long)]
        yes: bool,
    },
    /// List a community's members.
    CommunityMembers {
        id: i64,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Clone, Debug, Args)]
pub struct AdminVerifyArgs {
    pub user_id: i64,
    #[arg(long, conflicts_with = "reject", required_unless_present = "reject")]
    pub approve: bool,
    /// Reject with this reason.
    #[arg(long, value_name = "REASON")]
    pub reject: Option<String>,
}
