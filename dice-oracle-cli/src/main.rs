use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use dice_oracle::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value = None)]
    seed: Option<u64>,

    /// Roll this many batches, print the result and exit instead of prompting
    #[arg(short, long, default_value = None)]
    rolls: Option<usize>,

    /// Write the session log as JSON to this file on exit
    #[arg(short, long, value_name = "FILE")]
    log_output: Option<PathBuf>,

    /// Also log each roll and each rejected undo
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Roll,
    Back,
    Reset,
    Stats,
    State,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "r" | "roll" | "" => Some(Command::Roll),
            "b" | "back" => Some(Command::Back),
            "x" | "reset" => Some(Command::Reset),
            "s" | "stats" => Some(Command::Stats),
            "state" => Some(Command::State),
            "h" | "help" | "?" => Some(Command::Help),
            "q" | "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

const HELP: &str = "\
commands:
  roll  (r, or just enter)  roll a new batch of dice
  back  (b)                 undo the last roll
  reset (x)                 clear all counts and history
  stats (s)                 compare observed outcomes with fair-dice odds
  state                     print the current state as JSON
  help  (h)                 show this message
  quit  (q)                 leave";

fn print_scoreboard<S>(out: &mut impl Write, session: &Session<S>) -> anyhow::Result<()> {
    let board = Scoreboard::new(session.state(), session.can_revert());
    writeln!(out, "{}", board)?;
    Ok(())
}

fn print_odds(out: &mut impl Write, state: &GameState) -> anyhow::Result<()> {
    let report = OddsReport::from_state(state)?;
    let mut buf = String::new();
    report.pretty_print(&mut buf)?;
    writeln!(out, "{}", buf)?;
    Ok(())
}

fn prompt(out: &mut impl Write, can_revert: bool) -> anyhow::Result<()> {
    if can_revert {
        write!(out, "[roll/back/reset/stats/quit]> ")?;
    } else {
        write!(out, "[roll/reset/stats/quit]> ")?;
    }
    out.flush()?;
    Ok(())
}

fn run_batch<S: DieSource>(session: &mut Session<S>, rolls: usize) -> anyhow::Result<()> {
    log::info!("Rolling {} batches...", rolls);
    let start = chrono::Utc::now();
    for _ in 0..rolls {
        session.advance();
    }
    let elapsed = chrono::Utc::now() - start;
    log::info!(
        "Rolled {} batches in {} ms",
        rolls,
        elapsed.num_milliseconds()
    );

    let mut out = std::io::stdout().lock();
    print_scoreboard(&mut out, session)?;
    print_odds(&mut out, session.state())?;
    Ok(())
}

fn run_interactive<S: DieSource>(
    session: &mut Session<S>,
    input: impl BufRead,
    mut out: impl Write,
) -> anyhow::Result<()> {
    writeln!(out, "{}", HELP)?;
    print_scoreboard(&mut out, session)?;
    prompt(&mut out, session.can_revert())?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = Command::parse(&line) else {
            writeln!(out, "unknown command {:?}, try `help`", line.trim())?;
            prompt(&mut out, session.can_revert())?;
            continue;
        };
        log::debug!("Command: {:?}", command);

        match command {
            Command::Roll => {
                session.advance();
                print_scoreboard(&mut out, session)?;
            }
            Command::Back => match session.revert() {
                Ok(_) => print_scoreboard(&mut out, session)?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            Command::Reset => {
                session.reset();
                print_scoreboard(&mut out, session)?;
            }
            Command::Stats => print_odds(&mut out, session.state())?,
            Command::State => {
                serde_json::to_writer_pretty(&mut out, session.state())?;
                writeln!(out)?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => break,
        }
        prompt(&mut out, session.can_revert())?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::builder()
        .format_timestamp_secs()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();
    log::debug!("Starting with args: {:?}", args);

    let roller = match args.seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            Roller::from_seed(seed)
        }
        None => Roller::new(),
    };
    let mut session = Session::new(roller);

    let run = match args.rolls {
        Some(rolls) => run_batch(&mut session, rolls),
        None => run_interactive(
            &mut session,
            std::io::stdin().lock(),
            std::io::stdout().lock(),
        ),
    };

    finish(&session, args.log_output.as_deref(), run)
}

/// Writes the session log, if asked to, whether or not the run succeeded.
fn finish<S>(
    session: &Session<S>,
    log_output: Option<&Path>,
    run: anyhow::Result<()>,
) -> anyhow::Result<()> {
    if let Some(path) = log_output {
        session.save_log(path)?;
        log::info!(
            "Session log ({} entries) written to {}",
            session.log().len(),
            path.display()
        );
    }
    run
}
