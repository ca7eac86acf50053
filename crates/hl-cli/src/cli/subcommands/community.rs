use clap::{Args, Subcommand};

/// Community membership and community-admin commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CommunityCommands {
    /// List your communities grouped as admin / member / pending.
    List {
        /// Only show pending join requests.
        #[arg(long)]
        pending: bool,
    },
    /// Join with an invite code such as GRN-8821.
    Join { code: String },
    /// Create a community; you become its admin.
    Create(CommunityCreateArgs),
    /// Show one community.
    Show { id: String },
    /// Leave a community.
    Leave { id: String },
    /// List approved members.
    Members {
        id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// List pending join requests (community admins).
    Requests { id: String },
    /// Approve a join request.
    Approve { id: String, membership_id: i64 },
    /// Reject a join request.
    Reject { id: String, membership_id: i64 },
    /// Remove a member.
    Remove { id: String, membership_id: i64 },
    /// Edit name, description and category.
    Update(CommunityUpdateArgs),
    /// Set the join policy: open or approval-required.
    Policy { id: String, policy: String },
    /// Set the status: active or inactive.
    Status { id: String, status: String },
    /// Poll for accepted or declined join requests until interrupted.
    Watch {
        /// Seconds between polls (defaults to `sync.poll_interval_secs`).
        #[arg(long)]
        interval: Option<u64>,
    },
}

#[derive(Clone, Debug, Args)]
pub struct PageArgs {
    /// Zero-based page number.
    #[arg(long, default_value_t = 0)]
    pub page: u32,
    /// Page size (falls back to --limit, then 20).
    #[arg(long)]
    pub size: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct CommunityCreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: String,
    /// neighbourhood, society, college, office, interest-group, other
    #[arg(long, default_value = "neighbourhood")]
    pub category: String,
    /// open or approval-required
    #[arg(long, default_value = "open")]
    pub join_policy: String,
}

#[derive(Clone, Debug, Args)]
pub struct CommunityUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub category: String,
}
