//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `find.rs`: the discovery run (default command).
//! - `inspect.rs`: `shortname` and `lookup` diagnostics.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod find;
pub mod inspect;

pub use find::handle_find_command;
pub use inspect::handle_inspect_commands;
