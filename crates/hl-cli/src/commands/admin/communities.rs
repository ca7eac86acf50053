use anyhow::bail;
use hl_client::CommunityFilter;
use hl_core::enums::CommunityStatus;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PageArgs;
use crate::commands::community::page_request;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{parse_enum, parse_optional};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct DeleteOutput {
    id: i64,
    deleted: bool,
}

pub async fn list(
    page: &PageArgs,
    status: Option<&str>,
    search: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = CommunityFilter {
        page: page.page,
        size: effective_limit(page.size, flags.limit, 10),
        status: parse_optional::<CommunityStatus>(status, "status")?,
        search: search.map(str::to_string),
    };
    let communities = ctx.sync.client().admin_communities(&filter).await?;
    output(&communities, flags.format)
}

pub async fn show(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let community = ctx.sync.client().admin_community(id).await?;
    output(&community, flags.format)
}

pub async fn set_status(
    id: i64,
    status: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = parse_enum(status, "status")?;
    let community = ctx
        .sync
        .client()
        .set_admin_community_status(id, status)
        .await?;
    output(&community, flags.format)
}

pub async fn delete(id: i64, yes: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !yes {
        bail!("deleting community {id} cannot be undone; re-run with --yes");
    }
    ctx.sync.client().delete_admin_community(id).await?;
    tracing::info!(id, "community deleted");
    output(&DeleteOutput { id, deleted: true }, flags.format)
}

pub async fn members(
    id: i64,
    page: &PageArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let members = ctx
        .sync
        .client()
        .admin_community_members(id, page_request(page, flags))
        .await?;
    output(&members, flags.format)
}
