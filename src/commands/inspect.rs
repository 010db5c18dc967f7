use crate::*;

pub fn handle_inspect_commands(cli: &Cli) -> anyhow::Result<bool> {
    match &cli.command {
        Some(Commands::Shortname { url }) => {
            let data = compute_shortname(url)?;
            print_one(cli.json, data, |d| {
                format!(
                    "{}\t{}\t{}",
                    d.shortname,
                    d.series.shortname,
                    d.series_version.as_deref().unwrap_or("n/a")
                )
            })?;
        }
        Some(Commands::Lookup { url }) => {
            let index = load_index(&cli.index)?;
            let url = canonicalize_tr_url(url)?;
            let matches: Vec<LookupMatch> = index
                .matches(&url)
                .into_iter()
                .map(|(entry, rule)| LookupMatch {
                    shortname: entry.shortname.clone(),
                    nightly: entry.nightly.as_ref().map(|n| n.url.clone()),
                    rule,
                })
                .collect();
            let report = LookupReport {
                known: !matches.is_empty(),
                url,
                matches,
            };
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else if !report.known {
                println!("{} is not in the index", report.url);
            } else {
                for m in &report.matches {
                    println!(
                        "{}\t{}\t{}",
                        m.shortname.as_deref().unwrap_or("n/a"),
                        m.nightly.as_deref().unwrap_or("n/a"),
                        m.rule.as_str()
                    );
                }
            }
        }
        _ => return Ok(false),
    }
    Ok(true)
}
