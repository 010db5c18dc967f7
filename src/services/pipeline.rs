//! The discovery pipeline.
//!
//! Every stage returns its own ordered list of candidates; `merge`
//! concatenates them in stage order and sorts once by spec URL.

use crate::domain::constants::{CG_REPORT, REC_TRACK};
use crate::domain::models::{Candidate, GroupId, GroupKind, RepoMap, RepoRef, WhatwgDb};
use crate::services::canonical::{canonicalize_gh_url, canonicalize_tr_url, to_gh_url};
use crate::services::fetch::Sources;
use crate::services::matcher::SpecIndex;
use crate::services::policy::{has_repo_type, Policy};
use std::collections::HashSet;

/// Per-run inputs shared by every stage.
pub struct Pipeline<'a> {
    pub index: &'a SpecIndex,
    pub policy: &'a Policy,
}

/// Browser-relevant groups of one kind, with their resolved ids.
struct SelectedGroups<'s> {
    ids: HashSet<GroupId>,
    repo_names: Vec<&'s str>,
}

impl<'a> Pipeline<'a> {
    fn keep(&self, candidate: &Candidate) -> bool {
        self.index.has_unknown_spec(candidate) && self.policy.has_relevant_spec(candidate)
    }

    fn select_groups<'s>(&self, sources: &'s Sources, kind: GroupKind) -> SelectedGroups<'s> {
        let mut ids = HashSet::new();
        let mut repo_names = Vec::new();
        for (key, group) in sources.report.groups_in_order() {
            if group.kind != kind || !self.policy.is_browser_relevant(group) {
                continue;
            }
            ids.insert(group.id.clone().unwrap_or_else(|| GroupId(key.to_string())));
            repo_names.extend(group.repos.iter().map(|r| r.full_name.as_str()));
        }
        SelectedGroups { ids, repo_names }
    }

    fn resolve_repos<'s>(&self, sources: &'s Sources, names: &[&str]) -> Vec<&'s RepoRef> {
        names
            .iter()
            .filter(|name| self.policy.is_relevant_repo(name))
            .filter_map(|name| {
                let found = sources.report.repos.iter().find(|r| r.full_name() == *name);
                if found.is_none() {
                    tracing::warn!(repo = %name, "group repo missing from the report, skipped");
                }
                found
            })
            .collect()
    }

    /// Candidates from repository homepages, then from probed GitHub Pages
    /// URLs for repositories without one.
    fn repo_candidates<P>(&self, repos: &[&RepoRef], probe: &P) -> anyhow::Result<Vec<Candidate>>
    where
        P: Fn(&Candidate) -> anyhow::Result<Option<Candidate>> + Sync,
    {
        let mut out = Vec::new();
        for repo in repos.iter().filter(|r| r.homepage().is_some()) {
            let candidate = canonicalize_gh_url(repo)?;
            if self.keep(&candidate) {
                out.push(candidate);
            }
        }

        let unprobed: Vec<Candidate> = repos
            .iter()
            .filter(|r| r.homepage().is_none())
            .map(|r| to_gh_url(r))
            .filter(|c| self.keep(c))
            .collect();
        out.extend(probe_all(&unprobed, probe)?);
        Ok(out)
    }

    fn repo_map_candidates(
        &self,
        repo_map: &RepoMap,
        wg_ids: &HashSet<GroupId>,
    ) -> anyhow::Result<Vec<Candidate>> {
        let mut out = Vec::new();
        for (repo, specs) in repo_map {
            for spec in specs {
                let tracked = spec.group.as_ref().map(|g| wg_ids.contains(g)).unwrap_or(false);
                if !spec.rec_track || !tracked {
                    continue;
                }
                let candidate = Candidate {
                    repo: repo.clone(),
                    spec: canonicalize_tr_url(&spec.url)?,
                };
                if self.keep(&candidate) {
                    out.push(candidate);
                }
            }
        }
        Ok(out)
    }

    fn whatwg_candidates(&self, db: &WhatwgDb) -> Vec<Candidate> {
        db.workstreams
            .iter()
            .filter_map(|w| match w.standards.first() {
                Some(s) => Some(Candidate {
                    repo: format!("whatwg/{}", w.id),
                    spec: s.href.clone(),
                }),
                None => {
                    tracing::warn!(workstream = %w.id, "workstream lists no standard, skipped");
                    None
                }
            })
            .filter(|c| self.keep(c))
            .collect()
    }

    pub fn run<P>(&self, sources: &Sources, probe: &P) -> anyhow::Result<Vec<Candidate>>
    where
        P: Fn(&Candidate) -> anyhow::Result<Option<Candidate>> + Sync,
    {
        let wgs = self.select_groups(sources, GroupKind::WorkingGroup);
        let cgs = self.select_groups(sources, GroupKind::CommunityGroup);
        tracing::info!(
            working_groups = wgs.ids.len(),
            community_groups = cgs.ids.len(),
            "groups selected"
        );

        let rec_track: Vec<&RepoRef> = self
            .resolve_repos(sources, &wgs.repo_names)
            .into_iter()
            .filter(|r| has_repo_type(r, REC_TRACK))
            .collect();
        let wg = self.repo_candidates(&rec_track, probe)?;
        tracing::info!(candidates = wg.len(), repos = rec_track.len(), "working group repos");

        let mapped = self.repo_map_candidates(&sources.repo_map, &wgs.ids)?;
        tracing::info!(candidates = mapped.len(), "repo map");

        let cg_specs: Vec<&RepoRef> = self
            .resolve_repos(sources, &cgs.repo_names)
            .into_iter()
            .filter(|r| r.w3c.is_none() || has_repo_type(r, CG_REPORT))
            .collect();
        let cg = self.repo_candidates(&cg_specs, probe)?;
        tracing::info!(candidates = cg.len(), repos = cg_specs.len(), "community group repos");

        let whatwg = self.whatwg_candidates(&sources.whatwg);
        tracing::info!(candidates = whatwg.len(), "WHATWG standards");

        Ok(merge(vec![wg, mapped, cg, whatwg]))
    }
}

/// Probes every candidate concurrently; results keep input order.
pub fn probe_all<P>(candidates: &[Candidate], probe: &P) -> anyhow::Result<Vec<Candidate>>
where
    P: Fn(&Candidate) -> anyhow::Result<Option<Candidate>> + Sync,
{
    let results: Vec<anyhow::Result<Option<Candidate>>> = std::thread::scope(|scope| {
        let handles: Vec<_> = candidates
            .iter()
            .map(|c| scope.spawn(move || probe(c)))
            .collect();
        handles
            .into_iter()
            .map(|h| {
                h.join()
                    .unwrap_or_else(|_| Err(anyhow::anyhow!("probe thread panicked")))
            })
            .collect()
    });

    let mut found = Vec::new();
    for result in results {
        if let Some(c) = result? {
            found.push(c);
        }
    }
    Ok(found)
}

/// Concatenates stage outputs and sorts them by spec URL. The sort is
/// stable and does not deduplicate.
pub fn merge(stages: Vec<Vec<Candidate>>) -> Vec<Candidate> {
    let mut all: Vec<Candidate> = stages.into_iter().flatten().collect();
    all.sort_by(|a, b| a.spec.cmp(&b.spec));
    all
}
