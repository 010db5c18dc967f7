//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep the wire shapes of every remote and local document in one place.
//! - Avoid duplicated type definitions between the pipeline and the commands.
//! - Make `--json` output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs`: report/index/config documents, `Candidate`, output structs.
//! - `constants.rs`: endpoints, default paths, repo-type names.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! `Candidate` is the `--json` output row. Keep it synchronized with
//! `docs/contracts/candidates.schema.json`.

pub mod constants;
pub mod models;
