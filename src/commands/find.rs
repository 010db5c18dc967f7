use crate::*;
use std::time::Duration;

pub fn handle_find_command(cli: &Cli) -> anyhow::Result<()> {
    let args = match &cli.command {
        Some(Commands::Find(args)) => args.clone(),
        _ => FindArgs::default(),
    };

    let index = load_index(&cli.index)?;
    let policy = load_policy(&cli.data_dir)?;
    if index.is_empty() {
        tracing::warn!(path = %cli.index.display(), "spec index is empty");
    }

    let fetcher = Fetcher::new(cli.timeout_secs.map(Duration::from_secs))?;
    let sources = fetcher.load_sources(&Endpoints {
        report: cli.report_url.clone(),
        repo_map: cli.repo_map_url.clone(),
        whatwg_db: cli.whatwg_db_url.clone(),
    })?;

    let pipeline = Pipeline {
        index: &index,
        policy: &policy,
    };
    let candidates = pipeline.run(&sources, &|c: &Candidate| fetcher.has_existing_spec(c))?;
    tracing::info!(candidates = candidates.len(), "checklist ready");

    if !args.no_export {
        let target = ExportTarget::from_env();
        if cli.json && target == ExportTarget::WorkflowCommand {
            tracing::warn!("GITHUB_ENV is not set; export skipped in JSON mode");
        } else {
            let checklist = render_checklist(&candidates);
            export_variable(&target, &args.export_var, &checklist, &mut std::io::stdout())?;
        }
    }

    print_out(cli.json, &candidates, checklist_line)
}
