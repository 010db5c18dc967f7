use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::models::*;
pub use services::canonical::canonicalize_tr_url;
pub use services::ci_export::{export_variable, ExportTarget};
pub use services::config::{load_index, load_policy};
pub use services::fetch::{Endpoints, Fetcher};
pub use services::logging::init_logging;
pub use services::output::{checklist_line, print_one, print_out, render_checklist};
pub use services::pipeline::Pipeline;
pub use services::shortname::compute_shortname;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    if handle_inspect_commands(&cli)? {
        return Ok(());
    }
    handle_find_command(&cli)
}
