use clap::{Parser, Subcommand};
use std::path::PathBuf;

use worklog::cli;
use worklog::error::WorklogError;

#[derive(Parser)]
#[command(name = "worklog", version)]
#[command(about = "Track workday start/end times, breaks and notes", long_about = None)]
struct Cli {
    /// Path to config file (defaults to ~/.config/worklog/worklog.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new workday entry for today
    Start,
    /// Mark today's workday as finished
    End,
    /// Add a note to today's entry
    #[command(args_conflicts_with_subcommands = true)]
    Note {
        #[command(subcommand)]
        command: Option<NoteCommands>,

        /// Note contents
        text: Option<String>,

        /// Comma-separated tags
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },
    /// Manage breaks on today's entry
    Break {
        #[command(subcommand)]
        command: BreakCommands,
    },
    /// Render a workday report
    Report {
        /// Report the current ISO week
        #[arg(long)]
        week: bool,

        /// Report a calendar month (defaults to the current one)
        #[arg(
            long,
            value_name = "YYYY-MM",
            num_args = 0..=1,
            default_missing_value = "",
            conflicts_with = "week"
        )]
        month: Option<String>,
    },
    /// Show progress of the current workday
    Status,
    /// Export journal data to JSON or CSV files
    Export {
        #[command(subcommand)]
        command: ExportCommands,
    },
    /// Adjust an entry's start/end times
    Edit {
        /// Date of the entry to edit (YYYY-MM-DD, defaults to today)
        date: Option<String>,

        /// New start time (HH:MM)
        #[arg(long, value_name = "HH:MM")]
        start: Option<String>,

        /// New end time (HH:MM)
        #[arg(long, value_name = "HH:MM")]
        end: Option<String>,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum NoteCommands {
    /// Replace a note on today's entry by its index
    Edit {
        /// Zero-based index of the note to replace
        index: usize,

        /// New note contents
        text: String,
    },
}

#[derive(Subcommand)]
enum ExportCommands {
    /// Export break data, one row per break
    Breaks(ExportArgs),
    /// Export timesheet data, one row per day
    Timesheet(ExportArgs),
}

#[derive(clap::Args)]
struct ExportArgs {
    /// Export format (json or csv)
    #[arg(short, long, default_value = "json")]
    format: String,

    /// Output filename (default: auto-generated)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Specific date to export (YYYY-MM-DD)
    #[arg(short, long)]
    date: Option<String>,

    /// Export the last N days
    #[arg(short, long)]
    last: Option<u32>,
}

#[derive(Subcommand)]
enum BreakCommands {
    /// Open a new break
    Start {
        /// Reason for the break
        reason: String,
    },
    /// Close the most recent break
    Stop,
    /// List breaks for a day
    List {
        /// Date to list (YYYY-MM-DD, defaults to today)
        date: Option<String>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize a worklog.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Start => cli::start::run(cli.config),
        Commands::End => cli::end::run(cli.config),
        Commands::Note {
            command,
            text,
            tags,
        } => match command {
            Some(NoteCommands::Edit { index, text }) => cli::note::edit(cli.config, index, text),
            None => match text {
                Some(text) => cli::note::run(cli.config, text, tags),
                None => Err(WorklogError::Validation {
                    field: "note".to_string(),
                    reason: "note text is required".to_string(),
                }),
            },
        },
        Commands::Break { command } => match command {
            BreakCommands::Start { reason } => cli::breaks::start(cli.config, reason),
            BreakCommands::Stop => cli::breaks::stop(cli.config),
            BreakCommands::List { date } => cli::breaks::list(cli.config, date),
        },
        Commands::Report { week, month } => cli::report::run(cli.config, week, month),
        Commands::Status => cli::status::run(cli.config),
        Commands::Export { command } => match command {
            ExportCommands::Breaks(args) => cli::export::breaks(
                cli.config,
                args.format,
                args.output,
                args.date,
                args.last,
            ),
            ExportCommands::Timesheet(args) => cli::export::timesheet(
                cli.config,
                args.format,
                args.output,
                args.date,
                args.last,
            ),
        },
        Commands::Edit { date, start, end } => cli::edit::run(cli.config, date, start, end),
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
