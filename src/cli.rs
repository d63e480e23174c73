use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Birthday countdown tool.
#[derive(Parser)]
#[command(name = "bday", version, about = "Days until the next birthday")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Reference date in YYYY-MM-DD form; defaults to today.
    #[arg(long, global = true, value_name = "DATE")]
    pub today: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Countdown for a single birth date.
    Next(NextArgs),
    /// List all records from a JSON file with their countdowns.
    List(ListArgs),
    /// Show one record with age and countdown.
    Show(ShowArgs),
}

/// Arguments for the `next` subcommand.
#[derive(clap::Args)]
pub struct NextArgs {
    /// Birth date in YYYY-MM-DD form.
    pub birthday: String,
}

/// Arguments for the `list` subcommand.
#[derive(clap::Args)]
pub struct ListArgs {
    /// Path to the JSON records file.
    #[arg(short, long, default_value = "birthdays.json")]
    pub file: PathBuf,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Record id to show.
    pub id: u64,

    /// Path to the JSON records file.
    #[arg(short, long, default_value = "birthdays.json")]
    pub file: PathBuf,
}
