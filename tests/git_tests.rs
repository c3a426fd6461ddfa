mod common;

use common::date;
use std::env;
use std::fs;
use std::path::PathBuf;
use worklogbook::git::{
    Commit, CommitQuery, LocalGitSource, collect_commits, discover_repositories, parse_log_output,
    summarize,
};

fn commit(d: &str, repo: &str, message: &str) -> Commit {
    Commit {
        date: date(d),
        message: message.to_string(),
        repo: repo.to_string(),
    }
}

#[test]
fn test_parse_log_output_ignores_malformed_lines() {
    let out = "2025-11-03|Add parser\n\
               not a commit line\n\
               2025-11-04|Fix crash | when empty\n\
               yesterday|Bad date\n";

    let commits = parse_log_output("api", out);
    assert_eq!(
        commits,
        vec![
            commit("2025-11-03", "api", "Add parser"),
            commit("2025-11-04", "api", "Fix crash | when empty"),
        ]
    );
}

#[test]
fn test_summarize_groups_by_day() {
    let commits = vec![
        commit("2025-11-04", "web", "Tweak layout"),
        commit("2025-11-03", "api", "Add parser"),
        commit("2025-11-03", "web", "Add form"),
        commit("2025-11-03", "api", "Add docs"),
    ];

    let drafts = summarize(&commits);
    assert_eq!(drafts.len(), 2);

    assert_eq!(drafts[0].date, date("2025-11-03"));
    assert_eq!(
        drafts[0].description,
        "Worked on api, web repository. Add parser. Add form. Add docs."
    );
    assert_eq!(drafts[0].problem, None);
    assert_eq!(drafts[0].solution, None);

    assert_eq!(drafts[1].date, date("2025-11-04"));
    assert_eq!(drafts[1].description, "Worked on web repository. Tweak layout.");
}

#[test]
fn test_summarize_limits_messages_and_detects_issues() {
    let commits: Vec<Commit> = [
        "Start", "Refactor", "Fix BUG in login", "Docs", "Cleanup", "Sixth", "Build failure fix",
    ]
    .iter()
    .map(|m| commit("2025-11-05", "api", m))
    .collect();

    let drafts = summarize(&commits);
    assert_eq!(drafts.len(), 1);
    assert_eq!(
        drafts[0].description,
        "Worked on api repository. Start. Refactor. Fix BUG in login. Docs. Cleanup."
    );
    assert_eq!(drafts[0].problem.as_deref(), Some("Encountered technical issues."));
    assert_eq!(drafts[0].solution.as_deref(), Some("Resolved: Fix BUG in login"));

    let entry = drafts[0].clone().into_entry("1.1");
    assert_eq!(entry.activity_code, "1.1");
    assert_eq!(entry.week_ending, date("2025-11-09"));
}

fn scratch_dir(name: &str) -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push(format!("{name}_worklogbook_git"));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_discover_repositories() {
    let dir = scratch_dir("discover");
    fs::create_dir_all(dir.join("beta").join(".git")).unwrap();
    fs::create_dir_all(dir.join("alpha").join(".git")).unwrap();
    fs::create_dir_all(dir.join("plain")).unwrap();
    fs::write(dir.join("notes.txt"), "x").unwrap();

    let repos = discover_repositories(&dir).unwrap();
    assert_eq!(repos, vec![dir.join("alpha"), dir.join("beta")]);
}

#[test]
fn test_failing_repository_is_skipped() {
    let dir = scratch_dir("failing");
    fs::create_dir_all(dir.join("repo").join(".git")).unwrap();

    let source = LocalGitSource::with_program("worklogbook-missing-git-binary");
    let query = CommitQuery {
        author: "dev@example.com".to_string(),
        since: date("2025-11-01"),
        until: date("2025-11-30"),
    };

    let repos = discover_repositories(&dir).unwrap();
    let scan = collect_commits(&source, &repos, &query);
    assert!(scan.commits.is_empty());
    assert_eq!(scan.failures.len(), 1);
    assert_eq!(scan.failures[0].0, dir.join("repo"));
}
