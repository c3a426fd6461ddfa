use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::journal::Journal;
use crate::errors::AppResult;
use crate::store::CsvEntryStore;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (the file is skipped in test mode)
///  - the entries CSV (header only)
///  - the SQLite journal
pub fn handle(cli: &Cli) -> AppResult<()> {
    // 1️⃣ configuration
    let cfg = Config::init_all(cli.entries.clone(), cli.journal.clone(), cli.test)?;

    println!("⚙️  Initializing worklogbook…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }

    // 2️⃣ entries store
    let store = CsvEntryStore::new(cfg.entries_file_path());
    store.ensure_exists()?;
    println!("🗒️  Entries     : {}", store.path().display());

    // 3️⃣ journal
    let journal_path = cfg.journal_file_path();
    let journal = Journal::open(&journal_path)?;
    println!("🗄️  Journal     : {}", journal_path.display());

    // 4️⃣ internal log (non-blocking)
    if let Err(e) = journal.record(
        "init",
        "worklogbook initialized",
        &format!("Entries at {}", store.path().display()),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success("worklogbook initialization completed!");
    Ok(())
}
