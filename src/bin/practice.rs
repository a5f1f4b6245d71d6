//! Interactive practice table.
//!
//! Reads one command per line from stdin and prints the table after each.
//! Type `help` for the command list.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use poker_coach::practice::{Command, RaiseTracking, Table, TableConfig, TableView};

#[derive(Parser, Debug)]
#[command(name = "practice", about = "Play practice hands from the cutoff")]
struct Args {
    /// JSON table config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible deals
    #[arg(long)]
    seed: Option<u64>,

    /// Track the minimum re-raise the legacy way
    #[arg(long)]
    legacy_raise: bool,

    /// Print the table as JSON instead of text
    #[arg(long)]
    json: bool,
}

const HELP: &str = "\
commands:
  fold              fold the hand
  call | check      call the outstanding bet or check
  raise <bb>        raise to a total of <bb> big blinds
  new               deal a new hand
  ask <question>    ask the coach about this spot
  show              print the table
  history           print the hand history
  quit              leave the table";

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => TableConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => TableConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.legacy_raise {
        config = config.with_raise_tracking(RaiseTracking::Legacy);
    }

    let mut table = Table::new(config);
    print_table(&table, args.json)?;

    let stdin = io::stdin();
    let mut out = io::stdout();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim().to_ascii_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "help" | "h" => {
                println!("{}", HELP);
                continue;
            }
            "show" => {
                print_table(&table, args.json)?;
                continue;
            }
            "history" => {
                for entry in &table.state().history {
                    println!("{}", entry);
                }
                continue;
            }
            _ => {}
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{} (type 'help')", e);
                continue;
            }
        };

        match table.dispatch(command) {
            Ok(_) => print_table(&table, args.json)?,
            Err(e) => println!("{}", e),
        }
    }

    let stats = &table.state().stats;
    println!(
        "Session: {} hands, {} won, {:.1} BB",
        stats.hands_played, stats.hands_won, stats.total_profit
    );
    Ok(())
}

fn print_table(table: &Table, json: bool) -> anyhow::Result<()> {
    let view = TableView::project(table.state());
    if json {
        println!("{}", view.to_json()?);
    } else {
        println!("{}", view);
    }
    Ok(())
}
