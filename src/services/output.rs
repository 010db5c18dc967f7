use crate::domain::constants::GITHUB_BASE;
use crate::domain::models::{Candidate, JsonOut};
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// One Markdown task-list line.
pub fn checklist_line(c: &Candidate) -> String {
    format!("- [ ] {} from [{}]({}/{})", c.spec, c.repo, GITHUB_BASE, c.repo)
}

pub fn render_checklist(candidates: &[Candidate]) -> String {
    candidates
        .iter()
        .map(checklist_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::{checklist_line, render_checklist};
    use crate::domain::models::Candidate;

    #[test]
    fn line_links_the_repository() {
        let c = Candidate {
            repo: "w3c/example-spec".into(),
            spec: "https://example.com/spec/".into(),
        };
        assert_eq!(
            checklist_line(&c),
            "- [ ] https://example.com/spec/ from [w3c/example-spec](https://github.com/w3c/example-spec)"
        );
    }

    #[test]
    fn lines_are_newline_joined() {
        let cs = vec![
            Candidate {
                repo: "a/b".into(),
                spec: "https://a/".into(),
            },
            Candidate {
                repo: "c/d".into(),
                spec: "https://c/".into(),
            },
        ];
        assert_eq!(
            render_checklist(&cs),
            "- [ ] https://a/ from [a/b](https://github.com/a/b)\n- [ ] https://c/ from [c/d](https://github.com/c/d)"
        );
        assert_eq!(render_checklist(&[]), "");
    }
}
