#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::thread;
use tempfile::TempDir;
use tiny_http::{Header, Response, Server, StatusCode};

/// The remote documents served to the binary.
pub struct Documents {
    pub report: Value,
    pub repo_map: Value,
    pub db: Value,
}

impl Default for Documents {
    fn default() -> Self {
        Self {
            report: fixture_report(),
            repo_map: json!({
                "w3c/csswg-drafts": [
                    {"url": "http://www.w3.org/TR/css-new-1/", "recTrack": true, "group": 32061},
                    {"url": "https://www.w3.org/TR/css-old/", "recTrack": false, "group": 32061}
                ],
                "w3c/auto": [
                    {"url": "https://www.w3.org/TR/vehicle/", "recTrack": true, "group": 76043}
                ]
            }),
            db: json!({"workstreams": [
                {"id": "html", "standards": [{"href": "https://html.spec.whatwg.org/"}]},
                {"id": "empty", "standards": []}
            ]}),
        }
    }
}

pub struct TestEnv {
    _tmp: TempDir,
    pub index: PathBuf,
    pub data_dir: PathBuf,
    pub github_env: PathBuf,
    pub base: String,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_documents(Documents::default())
    }

    pub fn with_documents(docs: Documents) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let data_dir = tmp.path().join("data");
        fs::create_dir_all(&data_dir).expect("create data dir");
        fs::write(
            data_dir.join("ignore.json"),
            json!({
                "repos": {"w3c/ignored-repo": "obsolete"},
                "specs": {"https://w3c.github.io/ignored-spec/": "published elsewhere"}
            })
            .to_string(),
        )
        .expect("write ignore list");
        fs::write(
            data_dir.join("monitor-repos.json"),
            json!({"w3c/monitored": {"comment": "too early"}}).to_string(),
        )
        .expect("write monitor list");
        fs::write(
            data_dir.join("groups.toml"),
            r#"
[working-groups]
"Automotive Working Group" = false

[community-groups]
"Web Platform Incubator Community Group" = true
"#,
        )
        .expect("write group table");

        let env = Self {
            index: tmp.path().join("index.json"),
            data_dir,
            github_env: tmp.path().join("github_env"),
            base: serve(docs),
            _tmp: tmp,
        };
        env.write_index(&fixture_index());
        env
    }

    pub fn write_index(&self, entries: &Value) {
        fs::write(&self.index, entries.to_string()).expect("write index");
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// The binary pointed at the fixture server, with `GITHUB_ENV` set.
    pub fn cmd(&self) -> Command {
        self.cmd_with_paths("/report.json", "/repo-map.json", "/db.json")
    }

    /// Like `cmd`, with each document fetched from the given server path.
    pub fn cmd_with_paths(&self, report: &str, repo_map: &str, db: &str) -> Command {
        let mut cmd = cargo_bin_cmd!("find-specs");
        cmd.env_remove("RUST_LOG")
            .env("GITHUB_ENV", &self.github_env)
            .arg("--index")
            .arg(&self.index)
            .arg("--data-dir")
            .arg(&self.data_dir)
            .args(["--report-url", &self.url(report)])
            .args(["--repo-map-url", &self.url(repo_map)])
            .args(["--whatwg-db-url", &self.url(db)])
            .args(["--timeout-secs", "10"]);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn stdout_lines(&self, args: &[&str]) -> Vec<String> {
        let out = self
            .cmd()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out)
            .expect("utf8 stdout")
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn exported(&self) -> String {
        fs::read_to_string(&self.github_env).unwrap_or_default()
    }
}

/// Serves the documents on an ephemeral port; unknown paths answer 404.
fn serve(docs: Documents) -> String {
    let server = Server::http("127.0.0.1:0").expect("http server");
    let base = format!("http://{}", server.server_addr());
    let routes: HashMap<&'static str, String> = HashMap::from([
        ("/report.json", docs.report.to_string()),
        ("/repo-map.json", docs.repo_map.to_string()),
        ("/db.json", docs.db.to_string()),
    ]);
    thread::spawn(move || {
        for req in server.incoming_requests() {
            let _ = match routes.get(req.url()) {
                Some(body) => req.respond(
                    Response::from_string(body.as_str()).with_header(
                        Header::from_bytes("Content-Type", "application/json")
                            .expect("content type header"),
                    ),
                ),
                None => req.respond(Response::empty(StatusCode(404))),
            };
        }
    });
    base
}

/// Every repository carries a homepage so no run reaches out to GitHub Pages.
pub fn fixture_report() -> Value {
    json!({
        "groups": {
            "32061": {
                "id": 32061, "name": "CSS Working Group", "type": "working group",
                "repos": [
                    {"fullName": "w3c/example-spec"},
                    {"fullName": "w3c/indexed-spec"},
                    {"fullName": "w3c/ignored-repo"},
                    {"fullName": "w3c/spec-ignored"},
                    {"fullName": "w3c/monitored"},
                    {"fullName": "w3c/a-note"},
                    {"fullName": "w3c/gone"}
                ]
            },
            "76043": {
                "id": 76043, "name": "Automotive Working Group", "type": "working group",
                "repos": [{"fullName": "w3c/auto"}]
            },
            "80485": {
                "id": "80485", "name": "Web Platform Incubator Community Group",
                "type": "community group",
                "repos": [{"fullName": "WICG/bare"}, {"fullName": "WICG/notes"}]
            },
            "99999": {
                "id": 99999, "name": "Some Other Community Group", "type": "community group",
                "repos": [{"fullName": "w3c/other-cg"}]
            }
        },
        "repos": [
            repo("w3c", "example-spec", "http://example.com/spec/", Some("rec-track")),
            repo("w3c", "indexed-spec", "https://w3c.github.io/indexed-spec/", Some("rec-track")),
            repo("w3c", "ignored-repo", "https://w3c.github.io/ignored-repo/", Some("rec-track")),
            repo("w3c", "spec-ignored", "https://w3c.github.io/ignored-spec/", Some("rec-track")),
            repo("w3c", "monitored", "https://w3c.github.io/monitored/", Some("rec-track")),
            repo("w3c", "a-note", "https://w3c.github.io/a-note/", Some("note")),
            repo("w3c", "auto", "https://w3c.github.io/auto/", Some("rec-track")),
            repo("WICG", "bare", "https://wicg.github.io/bare", None),
            repo("WICG", "notes", "https://wicg.github.io/notes/", Some("note")),
            repo("w3c", "other-cg", "https://w3c.github.io/other-cg/", None)
        ]
    })
}

pub fn repo(owner: &str, name: &str, homepage: &str, repo_type: Option<&str>) -> Value {
    let mut r = json!({
        "owner": {"login": owner},
        "name": name,
        "homepageUrl": homepage,
    });
    if let Some(t) = repo_type {
        r["w3c"] = json!({"repo-type": t});
    }
    r
}

pub fn fixture_index() -> Value {
    json!([
        {
            "url": "https://w3c.github.io/indexed-spec/",
            "shortname": "indexed-spec",
            "nightly": {"url": "https://w3c.github.io/indexed-spec/"},
            "series": {"shortname": "indexed-spec"}
        },
        {
            "url": "https://www.w3.org/TR/css-grid-2/",
            "shortname": "css-grid-2",
            "nightly": {"url": "https://drafts.csswg.org/css-grid-2/"},
            "release": {"url": "https://www.w3.org/TR/css-grid-2/"},
            "series": {"shortname": "css-grid"},
            "seriesVersion": "2"
        }
    ])
}

/// The checklist produced from the default documents and index.
pub const EXPECTED_CHECKLIST: [&str; 4] = [
    "- [ ] https://example.com/spec/ from [w3c/example-spec](https://github.com/w3c/example-spec)",
    "- [ ] https://html.spec.whatwg.org/ from [whatwg/html](https://github.com/whatwg/html)",
    "- [ ] https://wicg.github.io/bare/ from [WICG/bare](https://github.com/WICG/bare)",
    "- [ ] https://www.w3.org/TR/css-new-1/ from [w3c/csswg-drafts](https://github.com/w3c/csswg-drafts)",
];
