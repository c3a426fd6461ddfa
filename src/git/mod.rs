//! Import work-log drafts from the commit history of local git repositories.

mod local;

pub use local::LocalGitSource;

use crate::errors::AppResult;
use crate::models::LogEntry;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Messages quoted in a drafted description.
const MAX_MESSAGES: usize = 5;

const ISSUE_KEYWORDS: [&str; 4] = ["error", "bug", "fail", "fix"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub date: NaiveDate,
    pub message: String,
    /// Repository directory name
    pub repo: String,
}

#[derive(Debug, Clone)]
pub struct CommitQuery {
    pub author: String,
    pub since: NaiveDate,
    pub until: NaiveDate,
}

pub trait CommitSource {
    fn commits(&self, repo: &Path, query: &CommitQuery) -> AppResult<Vec<Commit>>;
}

/// One drafted log entry per day with commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDraft {
    pub date: NaiveDate,
    pub description: String,
    pub problem: Option<String>,
    pub solution: Option<String>,
}

impl ImportDraft {
    pub fn into_entry(self, activity_code: &str) -> LogEntry {
        LogEntry::new(
            self.date,
            activity_code,
            &self.description,
            self.problem.as_deref(),
            self.solution.as_deref(),
        )
    }
}

/// Immediate subdirectories of `dir` that hold a `.git` entry, sorted.
pub fn discover_repositories(dir: &Path) -> AppResult<Vec<PathBuf>> {
    let mut repos = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() && path.join(".git").exists() {
            repos.push(path);
        }
    }
    repos.sort();
    Ok(repos)
}

/// Parse `git log --pretty=format:%ad|%s --date=short` output.
/// Lines without a `|` or with an unparsable date are ignored.
pub fn parse_log_output(repo: &str, output: &str) -> Vec<Commit> {
    output
        .lines()
        .filter_map(|line| {
            let (date, message) = line.split_once('|')?;
            let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
            Some(Commit {
                date,
                message: message.trim().to_string(),
                repo: repo.to_string(),
            })
        })
        .collect()
}

/// Group commits by day (ascending) and draft one entry per day.
pub fn summarize(commits: &[Commit]) -> Vec<ImportDraft> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&Commit>> = BTreeMap::new();
    for c in commits {
        by_date.entry(c.date).or_default().push(c);
    }

    by_date
        .into_iter()
        .map(|(date, day)| {
            let repos: BTreeSet<&str> = day.iter().map(|c| c.repo.as_str()).collect();
            let repos = repos.into_iter().collect::<Vec<_>>().join(", ");
            let messages: Vec<&str> = day.iter().map(|c| c.message.as_str()).collect();

            let description = format!(
                "Worked on {} repository. {}.",
                repos,
                messages
                    .iter()
                    .take(MAX_MESSAGES)
                    .copied()
                    .collect::<Vec<_>>()
                    .join(". ")
            );

            let issue = messages.iter().find(|m| {
                let lower = m.to_lowercase();
                ISSUE_KEYWORDS.iter().any(|k| lower.contains(k))
            });

            ImportDraft {
                date,
                description,
                problem: issue.map(|_| "Encountered technical issues.".to_string()),
                solution: issue.map(|m| format!("Resolved: {m}")),
            }
        })
        .collect()
}

/// Outcome of scanning several repositories.
#[derive(Debug, Default)]
pub struct ImportScan {
    pub commits: Vec<Commit>,
    /// Repositories that could not be read, with the reason.
    pub failures: Vec<(PathBuf, String)>,
}

/// Collect commits from every repository; a failing repository is recorded
/// and skipped.
pub fn collect_commits<S: CommitSource>(
    source: &S,
    repos: &[PathBuf],
    query: &CommitQuery,
) -> ImportScan {
    let mut scan = ImportScan::default();
    for repo in repos {
        match source.commits(repo, query) {
            Ok(mut c) => scan.commits.append(&mut c),
            Err(e) => scan.failures.push((repo.clone(), e.to_string())),
        }
    }
    scan
}
