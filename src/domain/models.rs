use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// A (repository, spec URL) pair not yet present in the known-spec index.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub repo: String,
    pub spec: String,
}

/// `report.json` published by validate-repos.
#[derive(Debug, Deserialize, Default)]
pub struct ValidationReport {
    #[serde(default)]
    pub groups: BTreeMap<String, Group>,
    #[serde(default)]
    pub repos: Vec<RepoRef>,
}

impl ValidationReport {
    /// Groups with numeric keys first, ascending by value, then the rest by
    /// key. This is the property order of the published JSON object.
    pub fn groups_in_order(&self) -> Vec<(&str, &Group)> {
        let mut groups: Vec<(&str, &Group)> =
            self.groups.iter().map(|(k, g)| (k.as_str(), g)).collect();
        groups.sort_by_key(|(k, _)| match k.parse::<u32>() {
            Ok(n) => (0, n, ""),
            Err(_) => (1, 0, *k),
        });
        groups
    }
}

/// W3C group ids are numeric in some documents and strings in others.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GroupId(pub String);

impl<'de> Deserialize<'de> for GroupId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => GroupId(n.to_string()),
            Raw::Text(s) => GroupId(s),
        })
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    #[serde(rename = "working group", alias = "working-group")]
    WorkingGroup,
    #[serde(rename = "community group", alias = "community-group")]
    CommunityGroup,
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Group {
    /// Falls back to the key of the `groups` object when absent.
    #[serde(default)]
    pub id: Option<GroupId>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GroupKind,
    #[serde(default)]
    pub repos: Vec<GroupRepo>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GroupRepo {
    #[serde(rename = "fullName")]
    pub full_name: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RepoRef {
    pub owner: Owner,
    pub name: String,
    #[serde(default)]
    pub homepage_url: Option<String>,
    #[serde(default)]
    pub w3c: Option<W3cMeta>,
}

impl RepoRef {
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.login, self.name)
    }

    /// Declared homepage; an empty string counts as none.
    pub fn homepage(&self) -> Option<&str> {
        self.homepage_url.as_deref().filter(|h| !h.is_empty())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Owner {
    pub login: String,
}

/// Contents of a repository's `w3c.json`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct W3cMeta {
    #[serde(rename = "repo-type", default)]
    pub repo_type: Option<RepoType>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum RepoType {
    One(String),
    Many(Vec<String>),
}

/// One entry of the spec-dashboard repo map.
#[derive(Debug, Deserialize, Clone)]
pub struct RepoMapSpec {
    pub url: String,
    #[serde(rename = "recTrack", default)]
    pub rec_track: bool,
    #[serde(default)]
    pub group: Option<GroupId>,
}

pub type RepoMap = BTreeMap<String, Vec<RepoMapSpec>>;

/// WHATWG `db.json`.
#[derive(Debug, Deserialize, Default)]
pub struct WhatwgDb {
    #[serde(default)]
    pub workstreams: Vec<Workstream>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Workstream {
    pub id: String,
    #[serde(default)]
    pub standards: Vec<Standard>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Standard {
    pub href: String,
}

/// One entry of the known-spec index.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SpecEntry {
    #[serde(default)]
    pub shortname: Option<String>,
    #[serde(default)]
    pub nightly: Option<SpecLink>,
    #[serde(default)]
    pub release: Option<SpecLink>,
    pub series: SeriesRef,
    #[serde(default)]
    pub series_version: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SpecLink {
    pub url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SeriesRef {
    pub shortname: String,
}

/// Shortname data derived from a spec URL.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShortnameData {
    pub shortname: String,
    pub series: SeriesRef,
    pub series_version: Option<String>,
}

/// `ignore.json`: both tables map a key to a free-form reason.
#[derive(Debug, Deserialize, Default)]
pub struct IgnoreList {
    #[serde(default)]
    pub repos: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub specs: BTreeMap<String, serde_json::Value>,
}

/// `monitor-repos.json`: repos temporarily left out of the checklist.
pub type MonitorList = BTreeMap<String, serde_json::Value>;

/// `groups.toml`: group name to relevance flag.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct GroupTable {
    #[serde(default)]
    pub working_groups: BTreeMap<String, bool>,
    #[serde(default)]
    pub community_groups: BTreeMap<String, bool>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MatchRule {
    NightlyPrefix,
    Release,
    MoreRecentLevel,
}

impl MatchRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchRule::NightlyPrefix => "nightly-prefix",
            MatchRule::Release => "release",
            MatchRule::MoreRecentLevel => "more-recent-level",
        }
    }
}

#[derive(Serialize)]
pub struct LookupMatch {
    pub shortname: Option<String>,
    pub nightly: Option<String>,
    pub rule: MatchRule,
}

#[derive(Serialize)]
pub struct LookupReport {
    pub url: String,
    pub known: bool,
    pub matches: Vec<LookupMatch>,
}
