//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `canonical.rs`: homepage/TR URL canonicalization, GitHub Pages URLs.
//! - `shortname.rs`: shortname/series/version derivation for spec URLs.
//! - `matcher.rs`: known-spec index and the unknown-spec test.
//! - `policy.rs`: ignore/monitor lists, group relevance, repo types.
//! - `config.rs`: loading the index and the data directory.
//! - `fetch.rs`: remote documents and existence probes.
//! - `pipeline.rs`: discovery stages, concurrent probing, merge.
//! - `output.rs`: checklist rendering, JSON/text output helpers.
//! - `ci_export.rs`: CI variable export.
//! - `logging.rs`: tracing subscriber setup.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod canonical;
pub mod ci_export;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod matcher;
pub mod output;
pub mod pipeline;
pub mod policy;
pub mod shortname;
