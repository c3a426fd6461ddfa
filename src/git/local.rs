use super::{Commit, CommitQuery, CommitSource, parse_log_output};
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

/// Reads history by running the `git` executable.
#[derive(Debug, Clone)]
pub struct LocalGitSource {
    program: String,
}

impl Default for LocalGitSource {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
        }
    }
}

impl LocalGitSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_program(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }
}

impl CommitSource for LocalGitSource {
    fn commits(&self, repo: &Path, query: &CommitQuery) -> AppResult<Vec<Commit>> {
        let output = Command::new(&self.program)
            .arg("-C")
            .arg(repo)
            .arg("log")
            .arg(format!("--author={}", query.author))
            .arg(format!("--since={}", query.since.format("%Y-%m-%d")))
            .arg(format!("--until={} 23:59:59", query.until.format("%Y-%m-%d")))
            .arg("--pretty=format:%ad|%s")
            .arg("--date=short")
            .output()
            .map_err(|e| AppError::Git(format!("cannot run {}: {}", self.program, e)))?;

        if !output.status.success() {
            return Err(AppError::Git(format!(
                "{}: {}",
                repo.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let name = repo
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| repo.display().to_string());

        Ok(parse_log_output(&name, &String::from_utf8_lossy(&output.stdout)))
    }
}
