//! Exports a value as a CI environment variable using the GitHub Actions
//! protocol: a heredoc entry appended to `$GITHUB_ENV`, or the legacy
//! `::set-env` workflow command when that file is not available.

use std::io::Write;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("unable to append to {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to write workflow command: {0}")]
    Command(#[source] std::io::Error),
    #[error("variable name must not contain the delimiter {0}")]
    DelimiterInName(String),
    #[error("variable value must not contain the delimiter {0}")]
    DelimiterInValue(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    EnvFile(PathBuf),
    WorkflowCommand,
}

impl ExportTarget {
    pub fn from_env() -> Self {
        match std::env::var_os("GITHUB_ENV") {
            Some(path) if !path.is_empty() => ExportTarget::EnvFile(PathBuf::from(path)),
            _ => ExportTarget::WorkflowCommand,
        }
    }
}

/// Fresh `ghadelimiter_<32 hex>` marker for one heredoc entry.
pub fn delimiter() -> String {
    format!("ghadelimiter_{}", hex::encode(rand::random::<u128>().to_be_bytes()))
}

pub fn env_file_entry(name: &str, value: &str, delimiter: &str) -> Result<String, ExportError> {
    if name.contains(delimiter) {
        return Err(ExportError::DelimiterInName(delimiter.to_string()));
    }
    if value.contains(delimiter) {
        return Err(ExportError::DelimiterInValue(delimiter.to_string()));
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

pub fn workflow_command(name: &str, value: &str) -> String {
    format!(
        "::set-env name={}::{}",
        escape_property(name),
        escape_data(value)
    )
}

pub fn export_variable(
    target: &ExportTarget,
    name: &str,
    value: &str,
    out: &mut impl Write,
) -> Result<(), ExportError> {
    match target {
        ExportTarget::EnvFile(path) => {
            let entry = env_file_entry(name, value, &delimiter())?;
            let io_err = |source| ExportError::EnvFile {
                path: path.clone(),
                source,
            };
            let mut file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(io_err)?;
            file.write_all(entry.as_bytes()).map_err(io_err)?;
        }
        ExportTarget::WorkflowCommand => {
            writeln!(out, "{}", workflow_command(name, value)).map_err(ExportError::Command)?;
        }
    }
    tracing::debug!(name, target = ?target, "variable exported");
    Ok(())
}
