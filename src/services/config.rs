use crate::domain::constants::{GROUPS_FILE, IGNORE_FILE, MONITOR_FILE};
use crate::domain::models::{GroupTable, IgnoreList, MonitorList, SpecEntry};
use crate::services::matcher::SpecIndex;
use crate::services::policy::Policy;
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::path::Path;

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("unable to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
}

pub fn load_group_table(path: &Path) -> anyhow::Result<GroupTable> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("unable to read {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("invalid TOML in {}", path.display()))
}

/// Loads `ignore.json`, `monitor-repos.json` and `groups.toml` from `data_dir`.
pub fn load_policy(data_dir: &Path) -> anyhow::Result<Policy> {
    let ignore: IgnoreList = read_json(&data_dir.join(IGNORE_FILE))?;
    let monitor: MonitorList = read_json(&data_dir.join(MONITOR_FILE))?;
    let groups = load_group_table(&data_dir.join(GROUPS_FILE))?;
    tracing::debug!(
        ignored_repos = ignore.repos.len(),
        ignored_specs = ignore.specs.len(),
        monitored_repos = monitor.len(),
        "policy loaded"
    );
    Ok(Policy {
        ignore,
        monitor,
        groups,
    })
}

pub fn load_index(path: &Path) -> anyhow::Result<SpecIndex> {
    let entries: Vec<SpecEntry> = read_json(path)?;
    let index = SpecIndex::new(entries);
    tracing::info!(entries = index.len(), path = %path.display(), "spec index loaded");
    Ok(index)
}
