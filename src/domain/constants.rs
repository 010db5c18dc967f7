pub const REPORT_URL: &str = "https://w3c.github.io/validate-repos/report.json";
pub const REPO_MAP_URL: &str = "https://w3c.github.io/spec-dashboard/repo-map.json";
pub const WHATWG_DB_URL: &str = "https://raw.githubusercontent.com/whatwg/sg/master/db.json";

pub const DEFAULT_INDEX_PATH: &str = "index.json";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const IGNORE_FILE: &str = "ignore.json";
pub const MONITOR_FILE: &str = "monitor-repos.json";
pub const GROUPS_FILE: &str = "groups.toml";

/// Name of the CI variable receiving the rendered checklist.
pub const DEFAULT_EXPORT_VAR: &str = "candidate_list";

pub const REC_TRACK: &str = "rec-track";
pub const CG_REPORT: &str = "cg-report";

pub const GITHUB_BASE: &str = "https://github.com";
