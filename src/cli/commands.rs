use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wk", about = concat!("[/] weekdo v", env!("CARGO_PKG_VERSION"), " - your week is plain text"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different root directory (skips the persisted config)
    #[arg(short = 'C', long = "root-dir", global = true)]
    pub root_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Choose and persist the directory holding your day files
    Init(InitArgs),
    /// Show the week grid
    Week(WeekArgs),
    /// Show one day's tasks
    List(DayArgs),
    /// Add a task to a day
    Add(AddArgs),
    /// Toggle a task's checkbox
    Toggle(TaskArgs),
    /// Edit a task's estimate/actual/reason
    Edit(EditArgs),
    /// Delete a task
    Delete(TaskArgs),
    /// Create the file for a missing day
    Touch(DayArgs),
    /// Show per-day and week totals
    Stats(DayArgs),
    /// Poll for external changes and reload on drift
    Watch(WatchArgs),
}

// ---------------------------------------------------------------------------
// Args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct InitArgs {
    /// Directory to store day files in (must be under your home directory)
    pub dir: String,
}

#[derive(Args)]
pub struct WeekArgs {
    /// Anchor date (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub date: Option<String>,
    /// Show the previous week
    #[arg(long, conflicts_with = "next")]
    pub prev: bool,
    /// Show the next week
    #[arg(long)]
    pub next: bool,
}

#[derive(Args)]
pub struct DayArgs {
    /// Date (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    pub text: String,
    /// Date (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Args)]
pub struct TaskArgs {
    /// Task identifier (the hex id shown by `wk list`)
    pub id: String,
    /// Date (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task identifier
    pub id: String,
    /// Date (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub date: Option<String>,
    /// Estimated minutes (empty string clears)
    #[arg(long)]
    pub est: Option<String>,
    /// Actual minutes (empty string clears)
    #[arg(long)]
    pub act: Option<String>,
    /// Reason, required when actual exceeds estimate (empty string clears)
    #[arg(long)]
    pub reason: Option<String>,
}

#[derive(Args)]
pub struct WatchArgs {
    /// Anchor date for the watched week (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub date: Option<String>,
    /// Poll interval in seconds (default: from config)
    #[arg(long)]
    pub interval: Option<u64>,
}
