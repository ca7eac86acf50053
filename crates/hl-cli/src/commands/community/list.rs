use hl_core::entities::Community;
use hl_core::enums::{CommunityCategory, CommunityStatus, JoinPolicy};
use hl_sync::Partition;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::truncate_to;
use crate::context::AppContext;
use crate::output::output;

/// One community as listed, tagged with the caller's relationship to it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CommunityRow {
    pub id: String,
    pub name: String,
    pub relation: &'static str,
    pub code: String,
    pub category: Option<CommunityCategory>,
    pub join_policy: JoinPolicy,
    pub status: CommunityStatus,
    pub member_count: u64,
    pub pending_count: u64,
}

impl CommunityRow {
    pub fn new(community: &Community, relation: &'static str) -> Self {
        Self {
            id: community.id.clone(),
            name: community.name.clone(),
            relation,
            code: community.code.clone(),
            category: community.category,
            join_policy: community.join_policy,
            status: community.status,
            member_count: community.member_count,
            pending_count: community.pending_count,
        }
    }
}

#[derive(Serialize)]
struct CommunityListOutput {
    communities: Vec<CommunityRow>,
}

/// Admin first, then member, then pending; input order within each group.
fn rows(partition: &Partition, pending_only: bool) -> Vec<CommunityRow> {
    let pending = partition
        .pending
        .iter()
        .map(|c| CommunityRow::new(c, "pending"));
    if pending_only {
        return pending.collect();
    }
    partition
        .admin
        .iter()
        .map(|c| CommunityRow::new(c, "admin"))
        .chain(partition.member.iter().map(|c| CommunityRow::new(c, "member")))
        .chain(pending)
        .collect()
}

pub async fn run(pending_only: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let communities = ctx.sync.my_communities().await?;
    let mut communities = rows(&Partition::of(&communities), pending_only);
    truncate_to(&mut communities, flags.limit);
    output(&CommunityListOutput { communities }, flags.format)
}

#[cfg(test)]
mod tests {
    use hl_core::entities::{Community, CommunityPayload};
    use hl_sync::Partition;
    use pretty_assertions::assert_eq;

    use super::rows;

    fn community(json: serde_json::Value) -> Community {
        serde_json::from_value::<CommunityPayload>(json)
            .expect("payload should parse")
            .normalize()
    }

    #[test]
    fn groups_admin_member_pending() {
        let list = vec![
            community(serde_json::json!({"id": 1, "name": "Tech Hub", "membershipStatus": "PENDING"})),
            community(serde_json::json!({"id": 2, "name": "Maple"})),
            community(serde_json::json!({"id": 3, "name": "Green Valley", "admin": true})),
        ];
        let partition = Partition::of(&list);

        let all = rows(&partition, false);
        let order: Vec<(&str, &str)> = all.iter().map(|r| (r.id.as_str(), r.relation)).collect();
        assert_eq!(order, vec![("3", "admin"), ("2", "member"), ("1", "pending")]);

        let pending = rows(&partition, true);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].name, "Tech Hub");
    }
}
