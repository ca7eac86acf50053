//! Membership reconciliation.
//!
//! A fetched community list is split into admin / member / pending sets, and
//! successive fetches are compared to detect pending join requests that were
//! accepted or declined in the meantime.

use std::collections::BTreeMap;

use hl_core::entities::Community;
use serde::Serialize;

/// The caller's communities split by relationship. The three sets are
/// disjoint; a record that is both admin and pending counts as admin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Partition {
    pub admin: Vec<Community>,
    pub member: Vec<Community>,
    pub pending: Vec<Community>,
}

impl Partition {
    /// Split `communities`, preserving input order within each set.
    #[must_use]
    pub fn of(communities: &[Community]) -> Self {
        let mut partition = Self::default();
        for community in communities {
            if community.is_admin {
                partition.admin.push(community.clone());
            } else if community.is_pending() {
                partition.pending.push(community.clone());
            } else {
                partition.member.push(community.clone());
            }
        }
        partition
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.admin.len() + self.member.len() + self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Admin and member communities, i.e. those the caller can enter.
    pub fn joined(&self) -> impl Iterator<Item = &Community> {
        self.admin.iter().chain(self.member.iter())
    }
}

/// A pending join request that resolved between two fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
    Accepted { id: String, name: String },
    Declined { id: String, name: String },
}

impl Transition {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Accepted { id, .. } | Self::Declined { id, .. } => id,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Accepted { name, .. } | Self::Declined { name, .. } => name,
        }
    }
}

/// Result of reconciling one successful fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    pub partition: Partition,
    pub transitions: Vec<Transition>,
}

/// Remembers which communities were pending on the previous successful fetch.
///
/// The first reconcile only records a baseline, so no transitions are
/// reported for requests that resolved before tracking started.
#[derive(Debug, Clone, Default)]
pub struct MembershipTracker {
    previous_pending: BTreeMap<String, String>,
    session: u64,
}

impl MembershipTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the snapshot; the next reconcile only records a baseline.
    pub fn reset(&mut self) {
        self.previous_pending.clear();
    }

    /// Stop tracking `id`, e.g. after the caller withdrew the request.
    ///
    /// Returns whether `id` was pending in the snapshot.
    pub fn forget(&mut self, id: &str) -> bool {
        self.previous_pending.remove(id).is_some()
    }

    /// Reset when the signed-in session differs from the one last reconciled.
    pub fn follow_session(&mut self, session: u64) {
        if self.session != session {
            self.reset();
            self.session = session;
        }
    }

    /// Pending id → name from the last successful fetch.
    #[must_use]
    pub const fn pending_snapshot(&self) -> &BTreeMap<String, String> {
        &self.previous_pending
    }

    /// Partition `communities` and report resolved requests since the last call.
    ///
    /// Call only with the result of a successful fetch; after a failed fetch
    /// simply skip the call so the previous snapshot is kept.
    pub fn reconcile(&mut self, communities: &[Community]) -> Reconciliation {
        let partition = Partition::of(communities);

        let mut transitions = Vec::new();
        for (id, name) in &self.previous_pending {
            match communities.iter().find(|c| &c.id == id) {
                None => transitions.push(Transition::Declined {
                    id: id.clone(),
                    name: name.clone(),
                }),
                Some(current) if !current.is_pending() || current.is_admin => {
                    transitions.push(Transition::Accepted {
                        id: id.clone(),
                        name: current.name.clone(),
                    });
                }
                Some(_) => {}
            }
        }

        self.previous_pending = partition
            .pending
            .iter()
            .map(|c| (c.id.clone(), c.name.clone()))
            .collect();

        for transition in &transitions {
            tracing::info!(?transition, "pending membership resolved");
        }

        Reconciliation {
            partition,
            transitions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hl_core::enums::MembershipStatus;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn community(id: &str, name: &str, is_admin: bool, pending: bool) -> Community {
        Community {
            id: id.into(),
            name: name.into(),
            code: String::new(),
            invite_code: None,
            description: None,
            category: None,
            status: hl_core::enums::CommunityStatus::Active,
            join_policy: hl_core::enums::JoinPolicy::Open,
            member_count: 0,
            pending_count: 0,
            created_at: None,
            is_admin,
            membership_status: if pending {
                MembershipStatus::Pending
            } else {
                MembershipStatus::Approved
            },
            admins: Vec::new(),
        }
    }

    fn ids(list: &[Community]) -> Vec<&str> {
        list.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn partition_splits_by_role_and_status() {
        let list = vec![
            community("1", "Green Valley", true, false),
            community("2", "Maple", false, false),
            community("3", "Tech Hub", false, true),
        ];
        let partition = Partition::of(&list);
        assert_eq!(ids(&partition.admin), vec!["1"]);
        assert_eq!(ids(&partition.member), vec!["2"]);
        assert_eq!(ids(&partition.pending), vec!["3"]);
        assert_eq!(partition.joined().count(), 2);
    }

    #[test]
    fn admin_wins_over_pending() {
        let partition = Partition::of(&[community("1", "Odd", true, true)]);
        assert_eq!(ids(&partition.admin), vec!["1"]);
        assert!(partition.pending.is_empty());
    }

    #[test]
    fn first_fetch_is_baseline_only() {
        let mut tracker = MembershipTracker::new();
        let result = tracker.reconcile(&[community("3", "Tech Hub", false, true)]);
        assert!(result.transitions.is_empty());
        assert_eq!(tracker.pending_snapshot().get("3").map(String::as_str), Some("Tech Hub"));
    }

    #[test]
    fn still_pending_reports_nothing() {
        let mut tracker = MembershipTracker::new();
        tracker.reconcile(&[community("3", "Tech Hub", false, true)]);
        let result = tracker.reconcile(&[community("3", "Tech Hub", false, true)]);
        assert!(result.transitions.is_empty());
    }

    #[test]
    fn accepted_uses_current_name() {
        let mut tracker = MembershipTracker::new();
        tracker.reconcile(&[community("3", "Tech Hub", false, true)]);
        let result = tracker.reconcile(&[community("3", "Tech Hub Collective", false, false)]);
        assert_eq!(
            result.transitions,
            vec![Transition::Accepted {
                id: "3".into(),
                name: "Tech Hub Collective".into()
            }]
        );
    }

    #[test]
    fn forgotten_request_is_not_reported_as_declined() {
        let mut tracker = MembershipTracker::new();
        tracker.reconcile(&[community("3", "Tech Hub", false, true)]);
        assert!(tracker.forget("3"));
        assert!(!tracker.forget("3"));
        assert!(tracker.reconcile(&[]).transitions.is_empty());
    }

    #[test]
    fn new_session_starts_from_a_fresh_baseline() {
        let mut tracker = MembershipTracker::new();
        tracker.reconcile(&[community("3", "Tech Hub", false, true)]);

        tracker.follow_session(0);
        assert_eq!(tracker.pending_snapshot().len(), 1);

        tracker.follow_session(1);
        assert!(tracker.pending_snapshot().is_empty());
        assert!(tracker.reconcile(&[]).transitions.is_empty());
    }

    /// Every list of up to `len` records over all (admin, pending) combinations.
    fn all_lists(len: u32) -> Vec<Vec<Community>> {
        (0..4_u32.pow(len))
            .map(|code| {
                (0..len)
                    .map(|i| {
                        let flags = (code >> (2 * i)) & 0b11;
                        community(&i.to_string(), "C", flags & 0b01 != 0, flags & 0b10 != 0)
                    })
                    .collect()
            })
            .collect()
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    fn partition_is_disjoint_and_complete(#[case] len: u32) {
        for list in all_lists(len) {
            let partition = Partition::of(&list);
            let mut seen: Vec<&str> = ids(&partition.admin)
                .into_iter()
                .chain(ids(&partition.member))
                .chain(ids(&partition.pending))
                .collect();
            seen.sort_unstable();
            let mut expected = ids(&list);
            expected.sort_unstable();
            // Equal sorted id lists with unique ids: disjoint sets whose union is the input.
            assert_eq!(seen, expected);

            for c in &partition.pending {
                assert!(c.is_pending() && !c.is_admin);
            }
            for c in &partition.member {
                assert!(!c.is_pending() && !c.is_admin);
            }
            assert!(partition.admin.iter().all(|c| c.is_admin));
        }
    }

    #[test]
    fn declined_uses_remembered_name() {
        let mut tracker = MembershipTracker::new();
        tracker.reconcile(&[community("3", "Tech Hub", false, true)]);
        let result = tracker.reconcile(&[]);
        assert_eq!(
            result.transitions,
            vec![Transition::Declined {
                id: "3".into(),
                name: "Tech Hub".into()
            }]
        );
        assert!(tracker.pending_snapshot().is_empty());
    }
}
