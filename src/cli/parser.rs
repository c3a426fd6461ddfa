use clap::{Parser, Subcommand};

/// Command-line interface definition for worklogbook
/// Keep a daily work log and fill industrial placement record books with it
#[derive(Parser)]
#[command(
    name = "worklogbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "A work-log CLI: record daily entries and fill week-block Excel record books",
    long_about = None
)]
pub struct Cli {
    /// Override the entries CSV path (useful for tests or custom stores)
    #[arg(global = true, long = "entries", value_name = "FILE")]
    pub entries: Option<String>,

    /// Override the internal journal path
    #[arg(global = true, long = "journal", value_name = "FILE")]
    pub journal: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, the entries file and the journal
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record one day of work
    Add {
        /// Date of the work (YYYY-MM-DD)
        date: String,

        #[arg(long = "desc", help = "What was done that day")]
        description: String,

        /// Activity code, e.g. 4.2 (see `activities`)
        #[arg(long = "code", help = "Activity code (default from config)")]
        code: Option<String>,

        #[arg(long = "problem", help = "Problem encountered")]
        problem: Option<String>,

        #[arg(long = "solution", help = "Solution found")]
        solution: Option<String>,
    },

    /// Record a whole week at once; days without a description are skipped
    AddWeek {
        /// Any date of the week (YYYY-MM-DD); the week runs Monday to Sunday
        week: String,

        #[arg(long, help = "Monday's description")]
        mon: Option<String>,

        #[arg(long, help = "Tuesday's description")]
        tue: Option<String>,

        #[arg(long, help = "Wednesday's description")]
        wed: Option<String>,

        #[arg(long, help = "Thursday's description")]
        thu: Option<String>,

        #[arg(long, help = "Friday's description")]
        fri: Option<String>,

        #[arg(long, help = "Saturday's description")]
        sat: Option<String>,

        #[arg(long, help = "Sunday's description")]
        sun: Option<String>,

        /// Activity code for every day, e.g. 4.2 or "4.2 - Program code"
        #[arg(long = "code", help = "Activity code for the week (default from config)")]
        code: Option<String>,

        #[arg(long = "day-code", value_name = "DAY=CODE", help = "Activity code of one day, e.g. wed=4.3")]
        day_codes: Vec<String>,

        #[arg(long = "problem", value_name = "DAY=TEXT", help = "Problem encountered on one day")]
        problems: Vec<String>,

        #[arg(long = "solution", value_name = "DAY=TEXT", help = "Solution found on one day")]
        solutions: Vec<String>,
    },

    /// List stored entries
    List {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM              → entire month (e.g. "2025-11")
        /// - YYYY-MM-DD           → specific day (e.g. "2025-11-03")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY-MM:YYYY-MM      → month range (e.g. "2025-10:2025-12")
        /// - YYYY-MM-DD:YYYY-MM-DD→ day range   (e.g. "2025-11-01:2025-11-15")
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        range: Option<String>,

        #[arg(long, help = "Print entries as JSON")]
        json: bool,
    },

    /// Show the activity code table
    Activities,

    /// Delete every stored entry
    Reset {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show where the week blocks of a template are
    Scan {
        #[arg(long, value_name = "FILE", help = "Template workbook (default from config)")]
        template: Option<String>,
    },

    /// Write a blank record book template
    Template {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, default_value_t = 5, help = "Number of week blocks")]
        weeks: u32,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Fill a record book template with the stored entries
    Fill {
        /// Months to generate (same syntax as `list --range`).
        /// If omitted, every month holding an entry is generated.
        #[arg(long, conflicts_with_all = ["from", "to", "in_place"])]
        range: Option<String>,

        #[arg(long, value_name = "DATE", requires = "to")]
        from: Option<String>,

        #[arg(long, value_name = "DATE", requires = "from")]
        to: Option<String>,

        #[arg(long, value_name = "FILE", help = "Template workbook (default from config)")]
        template: Option<String>,

        #[arg(long, value_name = "FILE", conflicts_with = "overwrite")]
        out: Option<String>,

        #[arg(long, help = "Save the result over the template itself")]
        overwrite: bool,

        #[arg(long = "in-place", help = "Fill the template's existing blocks instead of generating month sheets")]
        in_place: bool,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Draft entries from the commit history of local git repositories
    Import {
        #[arg(long, value_name = "DIR", help = "Directory holding the repositories (default from config)")]
        dir: Option<String>,

        #[arg(long, help = "Git author (name or email; default from config)")]
        author: Option<String>,

        #[arg(long, value_name = "DATE")]
        since: String,

        #[arg(long, value_name = "DATE")]
        until: String,

        #[arg(long, help = "Activity code for saved drafts (default 1.1)")]
        code: Option<String>,

        #[arg(long, help = "Append the drafts to the stored entries")]
        save: bool,
    },

    /// Print the internal journal
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
