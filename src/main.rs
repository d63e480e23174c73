mod age;
mod cli;
mod countdown;
mod date;
mod error;
mod logging;
mod records;
mod render;

use std::process;

use anyhow::{Context, Result, anyhow};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use tracing::debug;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let reference = resolve_reference(cli.today.as_deref())?;
    debug!(%reference, "reference date resolved");

    match cli.command {
        Command::Next(args) => {
            let birth = date::parse_iso(&args.birthday).context("invalid birth date")?;
            let days = countdown::days_until_next_birthday(birth, reference);
            println!("{}", render::countdown_message(days));
        }
        Command::List(args) => {
            let records = records::load(&args.file)?;
            print!("{}", render::list(&records, reference));
        }
        Command::Show(args) => {
            let records = records::load(&args.file)?;
            let record = records::find(&records, args.id)
                .ok_or_else(|| anyhow!("no record with id {}", args.id))?;
            print!("{}", render::detail(record, reference));
        }
    }

    Ok(())
}

/// The reference date: an explicit `--today` override, otherwise the system
/// clock. The clock is read only here so everything below stays pure.
fn resolve_reference(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(s) => date::parse_iso(s).context("invalid --today date"),
        None => Ok(Utc::now().date_naive()),
    }
}
