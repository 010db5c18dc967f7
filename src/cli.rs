use crate::domain::constants::{
    DEFAULT_DATA_DIR, DEFAULT_EXPORT_VAR, DEFAULT_INDEX_PATH, REPORT_URL, REPO_MAP_URL,
    WHATWG_DB_URL,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "find-specs",
    version,
    about = "Find W3C/WHATWG specifications missing from the known-spec index"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(short, long, global = true, help = "Enable debug logging (RUST_LOG overrides)")]
    pub verbose: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_INDEX_PATH,
        help = "Known-spec index (JSON array of specs)"
    )]
    pub index: PathBuf,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_DATA_DIR,
        help = "Directory holding ignore.json, monitor-repos.json and groups.toml"
    )]
    pub data_dir: PathBuf,
    #[arg(long, global = true, default_value = REPORT_URL, help = "Repository validation report")]
    pub report_url: String,
    #[arg(long, global = true, default_value = REPO_MAP_URL, help = "Spec dashboard repo map")]
    pub repo_map_url: String,
    #[arg(long, global = true, default_value = WHATWG_DB_URL, help = "WHATWG standards database")]
    pub whatwg_db_url: String,
    #[arg(long, global = true, help = "HTTP timeout in seconds (none by default)")]
    pub timeout_secs: Option<u64>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Run the discovery pipeline and print the checklist (default)")]
    Find(FindArgs),
    #[command(about = "Print the shortname, series and level derived from a spec URL")]
    Shortname { url: String },
    #[command(about = "List the index entries matching a spec URL")]
    Lookup { url: String },
}

#[derive(Args, Debug, Clone)]
pub struct FindArgs {
    #[arg(long, default_value_t = false, help = "Do not export the CI variable")]
    pub no_export: bool,
    #[arg(long, default_value = DEFAULT_EXPORT_VAR, help = "Name of the exported CI variable")]
    pub export_var: String,
}

impl Default for FindArgs {
    fn default() -> Self {
        Self {
            no_export: false,
            export_var: DEFAULT_EXPORT_VAR.to_string(),
        }
    }
}
