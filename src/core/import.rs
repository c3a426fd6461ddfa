use crate::db::journal::Journal;
use crate::errors::AppResult;
use crate::git::{CommitQuery, CommitSource, ImportDraft, collect_commits, discover_repositories, summarize};
use crate::store::EntryStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::table::{Column, Table};
use std::path::Path;

pub struct ImportLogic;

impl ImportLogic {
    /// Scan the repositories under `dir`, draft one entry per day with
    /// commits and print the drafts.
    pub fn draft<C: CommitSource>(
        source: &C,
        dir: &Path,
        query: &CommitQuery,
    ) -> AppResult<Vec<ImportDraft>> {
        let repos = discover_repositories(dir)?;
        if repos.is_empty() {
            warning(format!("No git repositories found in {}", dir.display()));
            return Ok(Vec::new());
        }
        info(format!("Found {} git repositories", repos.len()));

        let scan = collect_commits(source, &repos, query);
        for (repo, reason) in &scan.failures {
            warning(format!("Error reading {}: {}", repo.display(), reason));
        }

        let drafts = summarize(&scan.commits);
        if drafts.is_empty() {
            warning("No commits found.");
            return Ok(drafts);
        }

        let mut table = Table::new(vec![
            Column::new("DATE"),
            Column::wrapped("DESCRIPTION", 60),
            Column::wrapped("PROBLEMS", 24),
            Column::wrapped("SOLUTIONS", 30),
        ]);
        for d in &drafts {
            table.add_row(vec![
                d.date.to_string(),
                d.description.clone(),
                d.problem.clone().unwrap_or_default(),
                d.solution.clone().unwrap_or_default(),
            ]);
        }
        print!("{}", table.render());

        Ok(drafts)
    }

    pub fn save<S: EntryStore>(
        store: &mut S,
        journal: Option<&Journal>,
        drafts: Vec<ImportDraft>,
        activity_code: &str,
    ) -> AppResult<usize> {
        let entries = drafts
            .into_iter()
            .map(|d| d.into_entry(activity_code))
            .collect();
        let count = store.append_many(entries)?;

        success(format!("Successfully imported {count} logs!"));

        if let Some(j) = journal {
            j.note("import", "git", &format!("{count} entries imported"));
        }

        Ok(count)
    }
}
