use crate::domain::models::{Candidate, RepoMap, ValidationReport, WhatwgDb};
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Where the three remote documents live.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub report: String,
    pub repo_map: String,
    pub whatwg_db: String,
}

/// The remote documents of one run.
#[derive(Debug, Default)]
pub struct Sources {
    pub report: ValidationReport,
    pub repo_map: RepoMap,
    pub whatwg: WhatwgDb,
}

pub struct Fetcher {
    client: reqwest::blocking::Client,
}

impl Fetcher {
    /// `timeout` of `None` waits indefinitely.
    pub fn new(timeout: Option<Duration>) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("find-specs/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> anyhow::Result<T> {
        let resp = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("GET {} failed", url))?
            .error_for_status()?;
        let body = resp.text()?;
        serde_json::from_str(&body).with_context(|| format!("invalid JSON from {}", url))
    }

    /// Fetches the documents one after the other.
    pub fn load_sources(&self, endpoints: &Endpoints) -> anyhow::Result<Sources> {
        let report: ValidationReport = self.get_json(&endpoints.report)?;
        tracing::info!(
            groups = report.groups.len(),
            repos = report.repos.len(),
            "validation report fetched"
        );
        let repo_map: RepoMap = self.get_json(&endpoints.repo_map)?;
        tracing::info!(repos = repo_map.len(), "repo map fetched");
        let whatwg: WhatwgDb = self.get_json(&endpoints.whatwg_db)?;
        tracing::info!(workstreams = whatwg.workstreams.len(), "WHATWG db fetched");
        Ok(Sources {
            report,
            repo_map,
            whatwg,
        })
    }

    /// Resolves a synthesized URL. A success status yields the candidate at
    /// its final (post-redirect) URL; any other status yields `None`.
    pub fn has_existing_spec(&self, candidate: &Candidate) -> anyhow::Result<Option<Candidate>> {
        let resp = self
            .client
            .get(&candidate.spec)
            .send()
            .with_context(|| format!("probe of {} failed", candidate.spec))?;
        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(spec = %candidate.spec, %status, "probe found nothing");
            return Ok(None);
        }
        Ok(Some(Candidate {
            repo: candidate.repo.clone(),
            spec: resp.url().to_string(),
        }))
    }
}
