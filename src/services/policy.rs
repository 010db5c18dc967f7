use crate::domain::models::{
    Candidate, Group, GroupKind, GroupTable, IgnoreList, MonitorList, RepoRef, RepoType,
};

/// Ignore/monitor lists and group relevance, loaded once per run.
#[derive(Debug, Default)]
pub struct Policy {
    pub ignore: IgnoreList,
    pub monitor: MonitorList,
    pub groups: GroupTable,
}

impl Policy {
    /// Repos in the ignore list or in the monitor list are never reported.
    pub fn is_relevant_repo(&self, full_name: &str) -> bool {
        !self.ignore.repos.contains_key(full_name) && !self.monitor.contains_key(full_name)
    }

    pub fn has_relevant_spec(&self, candidate: &Candidate) -> bool {
        !self.ignore.specs.contains_key(&candidate.spec)
    }

    /// Working groups are tracked unless flagged off; community groups are
    /// watched only when flagged on.
    pub fn is_browser_relevant(&self, group: &Group) -> bool {
        match group.kind {
            GroupKind::WorkingGroup => self
                .groups
                .working_groups
                .get(&group.name)
                .copied()
                .unwrap_or(true),
            GroupKind::CommunityGroup => self
                .groups
                .community_groups
                .get(&group.name)
                .copied()
                .unwrap_or(false),
            GroupKind::Other => false,
        }
    }
}

impl RepoType {
    /// The string form matches on substring, as in `"rec-track, note"`.
    pub fn includes(&self, wanted: &str) -> bool {
        match self {
            RepoType::One(t) => t.contains(wanted),
            RepoType::Many(ts) => ts.iter().any(|t| t == wanted),
        }
    }
}

pub fn has_repo_type(repo: &RepoRef, wanted: &str) -> bool {
    repo.w3c
        .as_ref()
        .and_then(|m| m.repo_type.as_ref())
        .map(|t| t.includes(wanted))
        .unwrap_or(false)
}
