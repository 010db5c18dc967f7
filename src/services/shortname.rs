//! Shortname derivation for spec URLs.
//!
//! Maps the URL shapes used by W3C, WHATWG, TC39, Khronos, CSS/SVG drafts
//! and IETF documents to a shortname, then splits a trailing level off to
//! get the series shortname and version.

use crate::domain::models::{SeriesRef, ShortnameData};
use regex::{Captures, Regex};
use std::sync::LazyLock;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ShortnameError {
    #[error("cannot extract meaningful name from {0}")]
    UnrecognizedUrl(String),
    #[error("specification name contains unexpected characters: {name} (extracted from {url})")]
    UnexpectedCharacters { name: String, url: String },
}

type NameBuilder = fn(&Captures) -> String;

fn group(c: &Captures, i: usize) -> String {
    c.get(i).map(|m| m.as_str().to_string()).unwrap_or_default()
}

fn first(c: &Captures) -> String {
    group(c, 1)
}

fn tc39(c: &Captures) -> String {
    format!("tc39-{}", group(c, 1))
}

fn extension(c: &Captures) -> String {
    format!("{}-{}", group(c, 1), group(c, 2))
}

fn svg(c: &Captures) -> String {
    format!("svg-{}", group(c, 1))
}

// First match wins.
static URL_SHAPES: LazyLock<Vec<(Regex, NameBuilder)>> = LazyLock::new(|| {
    let shapes: [(&str, NameBuilder); 11] = [
        (r"^https?://(?:www\.)?w3\.org/TR/([^/]+)/$", first),
        (r"//([^/]+)\.spec\.whatwg\.org/", first),
        (r"//tc39\.es/proposal-([^/]+)/$", tc39),
        (r"^https://registry\.khronos\.org/webgl/extensions/([^/]+)/$", first),
        (r"/.*\.github\.io/([^/]+)/(extensions?)\.html$", extension),
        (r"/.*\.github\.io/(?:webappsec-)?([^/]+)/", first),
        (r"/drafts\.(?:csswg|fxtf|css-houdini)\.org/([^/]+)/", first),
        (r"/svgwg\.org/specs/(?:svg-)?([^/]+)/", svg),
        (r"/www\.rfc-editor\.org/rfc/(rfc[0-9]+)", first),
        (r"/httpwg\.org/specs/(rfc[0-9]+)\.html", first),
        (r"/datatracker\.ietf\.org/doc/html/draft-ietf-[^-]+-([^/]+)", first),
    ];
    shapes
        .into_iter()
        .map(|(pattern, build)| (Regex::new(pattern).expect("static url shape"), build))
        .collect()
});

static VALID_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[\w-]+|[\w-]*-v?\d+\.\d+)$").expect("static name pattern")
});

static LEVEL_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)-v?(\d+(?:\.\d+)?)$").expect("static level pattern")
});

fn extract_name(url: &str) -> Result<String, ShortnameError> {
    for (re, build) in URL_SHAPES.iter() {
        if let Some(c) = re.captures(url) {
            return Ok(build(&c));
        }
    }
    if !url.contains('/') {
        return Ok(url.to_string());
    }
    Err(ShortnameError::UnrecognizedUrl(url.to_string()))
}

pub fn compute_shortname(url: &str) -> Result<ShortnameData, ShortnameError> {
    let name = extract_name(url)?;
    if !VALID_NAME.is_match(&name) {
        return Err(ShortnameError::UnexpectedCharacters {
            name,
            url: url.to_string(),
        });
    }

    let (series, version) = match LEVEL_SUFFIX.captures(&name) {
        Some(c) => (group(&c, 1), Some(group(&c, 2))),
        None => (name.clone(), None),
    };

    Ok(ShortnameData {
        shortname: name,
        series: SeriesRef { shortname: series },
        series_version: version,
    })
}
