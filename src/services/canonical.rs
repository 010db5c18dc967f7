use crate::domain::models::{Candidate, RepoRef};
use anyhow::Context;
use url::Url;

fn force_https(url: &mut Url) {
    // Switching between special and non-special schemes is refused; the URL
    // keeps its scheme in that case.
    if url.set_scheme("https").is_err() {
        tracing::debug!(url = %url, "scheme left unchanged");
    }
}

/// Candidate built from a repository's declared homepage.
///
/// A top-level path without trailing slash (`/spec`) gets one appended so
/// that it compares equal to the published nightly URL.
pub fn canonicalize_gh_url(repo: &RepoRef) -> anyhow::Result<Candidate> {
    let full_name = repo.full_name();
    let raw = repo
        .homepage()
        .with_context(|| format!("{} declares no homepage", full_name))?;
    let mut url = Url::parse(raw)
        .with_context(|| format!("invalid homepage URL for {}: {}", full_name, raw))?;
    force_https(&mut url);

    let path = url.path().to_string();
    if path.rfind('/') == Some(0) && path.len() > 1 {
        url.set_path(&format!("{}/", path));
    }

    Ok(Candidate {
        repo: full_name,
        spec: url.to_string(),
    })
}

pub fn canonicalize_tr_url(raw: &str) -> anyhow::Result<String> {
    let mut url = Url::parse(raw).with_context(|| format!("invalid spec URL: {}", raw))?;
    force_https(&mut url);
    Ok(url.to_string())
}

/// Conventional GitHub Pages location for a repository without homepage.
pub fn to_gh_url(repo: &RepoRef) -> Candidate {
    Candidate {
        repo: repo.full_name(),
        spec: format!(
            "https://{}.github.io/{}/",
            repo.owner.login.to_ascii_lowercase(),
            repo.name
        ),
    }
}
