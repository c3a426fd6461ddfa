use crate::errors::{AppError, AppResult};
use crate::models::LogEntry;
use crate::store::{EntryStore, with_entry};
use crate::utils::date::parse_date;
use crate::utils::path::ensure_parent_dir;
use csv::{ReaderBuilder, Writer, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const HEADERS: [&str; 7] = [
    "Date",
    "Day",
    "Week_Ending",
    "Activity_Code",
    "Description",
    "Problems",
    "Solutions",
];

/// One CSV row, kept as plain strings so that hand-edited files still load.
#[derive(Debug, Serialize, Deserialize)]
struct EntryRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Day")]
    day: String,
    #[serde(rename = "Week_Ending")]
    week_ending: String,
    #[serde(rename = "Activity_Code")]
    activity_code: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Problems", default)]
    problems: String,
    #[serde(rename = "Solutions", default)]
    solutions: String,
}

impl EntryRecord {
    fn from_entry(e: &LogEntry) -> Self {
        Self {
            date: e.date.format("%Y-%m-%d").to_string(),
            day: e.day_name.clone(),
            week_ending: e.week_ending.format("%Y-%m-%d").to_string(),
            activity_code: e.activity_code.clone(),
            description: e.description.clone(),
            problems: e.problem.clone().unwrap_or_default(),
            solutions: e.solution.clone().unwrap_or_default(),
        }
    }

    /// Stored `Day` and `Week_Ending` are kept as-is, even when they disagree
    /// with `Date`; the filler reports such rows instead of silently fixing them.
    fn into_entry(self, line: usize) -> AppResult<LogEntry> {
        let date = parse_date(&self.date)
            .ok_or_else(|| AppError::InvalidDate(format!("line {line}: '{}'", self.date)))?;
        let week_ending = parse_date(&self.week_ending).ok_or_else(|| {
            AppError::InvalidDate(format!("line {line}: '{}'", self.week_ending))
        })?;

        Ok(LogEntry {
            date,
            day_name: self.day.trim().to_uppercase(),
            week_ending,
            activity_code: self.activity_code,
            description: self.description,
            problem: non_empty(self.problems),
            solution: non_empty(self.solutions),
        })
    }
}

/// A CSV line that could not be turned into an entry. The line stays in the
/// file untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based; the header is line 1.
    pub line: usize,
    pub reason: String,
}

/// Outcome of a lenient load.
#[derive(Debug, Clone, Default)]
pub struct LoadedEntries {
    pub entries: Vec<LogEntry>,
    pub rejected: Vec<RejectedLine>,
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}

/// Flat CSV file with the columns
/// `Date, Day, Week_Ending, Activity_Code, Description, Problems, Solutions`.
#[derive(Debug, Clone)]
pub struct CsvEntryStore {
    path: PathBuf,
}

impl CsvEntryStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with just the header row when it is missing.
    pub fn ensure_exists(&self) -> AppResult<()> {
        if self.path.exists() {
            return Ok(());
        }
        ensure_parent_dir(&self.path)?;
        let mut wtr = Writer::from_path(&self.path)?;
        wtr.write_record(HEADERS)?;
        wtr.flush()?;
        Ok(())
    }

    /// Every readable entry plus the lines that were skipped. A row whose
    /// `Date` or `Week_Ending` does not parse, or that does not deserialize
    /// at all, is reported instead of failing the load.
    pub fn load_checked(&self) -> AppResult<LoadedEntries> {
        self.ensure_exists()?;

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?;

        let headers = rdr.headers()?.clone();
        let mut loaded = LoadedEntries::default();
        for (i, rec) in rdr.records().enumerate() {
            // header is line 1
            let mut line = i + 2;
            let parsed = rec.map_err(AppError::from).and_then(|r| {
                if let Some(pos) = r.position() {
                    line = pos.line() as usize;
                }
                r.deserialize::<EntryRecord>(Some(&headers))?
                    .into_entry(line)
            });
            match parsed {
                Ok(entry) => loaded.entries.push(entry),
                Err(e) => loaded.rejected.push(RejectedLine {
                    line,
                    reason: e.to_string(),
                }),
            }
        }

        Ok(loaded)
    }

    /// Add rows at the end of the file without rewriting the existing ones.
    fn append_records(&self, entries: &[LogEntry]) -> AppResult<()> {
        self.ensure_exists()?;

        let existing = fs::read(&self.path)?;
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        if existing.is_empty() {
            file.write_all(format!("{}\n", HEADERS.join(",")).as_bytes())?;
        } else if existing.last() != Some(&b'\n') {
            file.write_all(b"\n")?;
        }

        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
        for e in entries {
            wtr.serialize(EntryRecord::from_entry(e))?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl EntryStore for CsvEntryStore {
    fn load_all(&self) -> AppResult<Vec<LogEntry>> {
        Ok(self.load_checked()?.entries)
    }

    fn write_all(&mut self, entries: &[LogEntry]) -> AppResult<()> {
        ensure_parent_dir(&self.path)?;

        let mut wtr = Writer::from_path(&self.path)?;
        if entries.is_empty() {
            wtr.write_record(HEADERS)?;
        }
        for e in entries {
            wtr.serialize(EntryRecord::from_entry(e))?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> AppResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Malformed lines already in the file are kept as they are.
    fn append(&mut self, entry: LogEntry) -> AppResult<()> {
        let checked = with_entry(Vec::new(), entry)?;
        self.append_records(&checked)
    }

    fn append_many(&mut self, entries: Vec<LogEntry>) -> AppResult<usize> {
        let mut checked = Vec::with_capacity(entries.len());
        for e in entries {
            checked = with_entry(checked, e)?;
        }
        self.append_records(&checked)?;
        Ok(checked.len())
    }
}
