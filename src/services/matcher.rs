use crate::domain::models::{Candidate, MatchRule, ShortnameData, SpecEntry};
use crate::services::shortname::compute_shortname;
use std::cmp::Ordering;

/// Level information inferred from a candidate URL.
///
/// `Unclassified` is the fail-open fallback: a URL whose shortname cannot
/// be derived never matches by level, so it stays in the checklist instead
/// of being dropped silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelInference {
    Known(ShortnameData),
    Unclassified,
}

impl LevelInference {
    pub fn of(url: &str) -> Self {
        match compute_shortname(url) {
            Ok(data) => LevelInference::Known(data),
            Err(e) => {
                tracing::debug!(url, error = %e, "no level inferred");
                LevelInference::Unclassified
            }
        }
    }
}

/// Trailing zero components are dropped: `2`, `2.0` and `2.0.0` are one level.
fn parse_version(v: &str) -> Option<Vec<u64>> {
    let mut parts: Vec<u64> = v
        .split('.')
        .map(|part| part.parse().ok())
        .collect::<Option<_>>()?;
    while parts.len() > 1 && parts.last() == Some(&0) {
        parts.pop();
    }
    Some(parts)
}

fn compare_versions(a: &str, b: &str) -> Option<Ordering> {
    Some(parse_version(a)?.cmp(&parse_version(b)?))
}

/// True when `entry` is in the candidate's series at an equal or higher level.
pub fn has_more_recent_level(entry: &SpecEntry, inferred: &LevelInference) -> bool {
    let LevelInference::Known(data) = inferred else {
        return false;
    };
    if entry.series.shortname != data.series.shortname {
        return false;
    }
    match (entry.series_version.as_deref(), data.series_version.as_deref()) {
        (Some(known), Some(candidate)) => {
            matches!(compare_versions(known, candidate), Some(Ordering::Greater | Ordering::Equal))
        }
        _ => false,
    }
}

/// The known-spec index.
#[derive(Debug, Default)]
pub struct SpecIndex {
    entries: Vec<SpecEntry>,
}

impl SpecIndex {
    pub fn new(entries: Vec<SpecEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn rule_for(entry: &SpecEntry, url: &str, inferred: &LevelInference) -> Option<MatchRule> {
        if entry
            .nightly
            .as_ref()
            .map(|n| n.url.starts_with(url))
            .unwrap_or(false)
        {
            return Some(MatchRule::NightlyPrefix);
        }
        if entry
            .release
            .as_ref()
            .map(|r| r.url == url)
            .unwrap_or(false)
        {
            return Some(MatchRule::Release);
        }
        if has_more_recent_level(entry, inferred) {
            return Some(MatchRule::MoreRecentLevel);
        }
        None
    }

    /// Every entry matching `url`, with the first rule that matched.
    pub fn matches(&self, url: &str) -> Vec<(&SpecEntry, MatchRule)> {
        let inferred = LevelInference::of(url);
        self.entries
            .iter()
            .filter_map(|e| Self::rule_for(e, url, &inferred).map(|rule| (e, rule)))
            .collect()
    }

    pub fn has_unknown_spec(&self, candidate: &Candidate) -> bool {
        let inferred = LevelInference::of(&candidate.spec);
        let known = self
            .entries
            .iter()
            .find_map(|e| Self::rule_for(e, &candidate.spec, &inferred));
        match known {
            Some(rule) => {
                tracing::debug!(repo = %candidate.repo, spec = %candidate.spec, ?rule, "already indexed");
                false
            }
            None => true,
        }
    }
}
