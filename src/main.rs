//! Workout Journal Shell
//!
//! Interactive terminal client. Runs the same flow as the web page: load
//! the latest sessions, select the first, show its sets and chart, then
//! create/add/delete with a full refetch after every change.

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use workout_journal::terminal::{bootstrap, format_sessions, format_sets, print_notices, StdinConfirm};
use workout_journal::{
    format_timestamp, ChartMetric, ChartSeries, JournalClient, JournalController, LoadPhase,
};

#[derive(Parser)]
#[command(name = "workout-journal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive workout journal")]
struct Args {
    /// API base URL (overrides config and JOURNAL_API_BASE)
    #[arg(long)]
    api_url: Option<String>,

    /// Identity sent in the x-user-id header
    #[arg(long)]
    user_id: Option<String>,

    /// Config file (default: ~/.config/workout-journal/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

const HELP: &str = "\
Commands:
  ls                    list sessions (* = selected)
  use <session-id>      select a session
  note <text>           set the note used for new sessions and sets
  new [note]            create a session and select it
  add <weight> <reps>   add a set to the selected session
  rm <seq>              delete a set
  drop                  delete the selected session and its sets
  sets                  show sets of the selected session
  chart [volume|wr]     chart the selected session (wr = weight and reps)
  reload                refetch sessions and sets
  help                  this text
  quit                  exit";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = bootstrap(args.config.as_deref(), args.api_url, args.user_id)?;

    println!("Workout Journal v{} ({})", env!("CARGO_PKG_VERSION"), settings.base_url);
    println!("Type `help` for commands.");
    println!();

    let client = JournalClient::new(settings.clone())?;
    let mut journal = JournalController::new(client);
    let confirm = StdinConfirm::default();

    journal.mount().await;
    print_notices(&journal.view_mut().take_notices());
    show_overview(&journal);

    let stdin = io::stdin();
    loop {
        print!("{}> ", journal.view().selected().unwrap_or(""));
        io::stdout().flush().context("writing prompt")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("reading command")? == 0 {
            break;
        }
        let line = line.trim();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match cmd {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "help" | "?" => println!("{}", HELP),
            "ls" | "sessions" => {
                print!("{}", format_sessions(journal.view().sessions(), journal.view().selected()))
            }
            "use" => {
                journal.select_session(Some(rest.to_string())).await;
                show_sets(&journal, ChartMetric::Volume);
            }
            "note" => journal.view_mut().form.note = rest.to_string(),
            "new" => {
                if !rest.is_empty() {
                    journal.view_mut().form.note = rest.to_string();
                }
                journal.create_session().await;
                show_sets(&journal, ChartMetric::Volume);
            }
            "add" => {
                let mut parts = rest.split_whitespace();
                journal.view_mut().form.weight = parts.next().unwrap_or("").to_string();
                journal.view_mut().form.reps = parts.next().unwrap_or("").to_string();
                if journal.view().selected().is_none() {
                    println!("Select a session first (`use <id>` or `new`).");
                }
                journal.add_set().await;
                show_sets(&journal, ChartMetric::Volume);
            }
            "rm" => match rest.parse::<u64>() {
                Ok(seq) => {
                    journal.delete_set(seq, &confirm).await;
                    show_sets(&journal, ChartMetric::Volume);
                }
                Err(_) => println!("Usage: rm <seq>"),
            },
            "drop" => {
                journal.delete_session(&confirm).await;
                show_overview(&journal);
            }
            "sets" => show_sets(&journal, ChartMetric::Volume),
            "chart" => {
                let metric = match rest {
                    "wr" | "weight" | "reps" => ChartMetric::WeightAndReps,
                    _ => ChartMetric::Volume,
                };
                println!("{}", ChartSeries::from_sets(journal.view().sets(), metric).render_text(40));
            }
            "reload" => {
                journal.mount().await;
                journal.refresh_sets().await;
                show_overview(&journal);
            }
            other => println!("Unknown command `{}`. Type `help`.", other),
        }

        print_notices(&journal.view_mut().take_notices());
    }

    Ok(())
}

fn show_overview(journal: &JournalController<JournalClient>) {
    let view = journal.view();
    if view.sessions_phase() == LoadPhase::Loaded {
        print!("{}", format_sessions(view.sessions(), view.selected()));
        println!();
    }
    if view.selected().is_some() {
        show_sets(journal, ChartMetric::Volume);
    }
}

fn show_sets(journal: &JournalController<JournalClient>, metric: ChartMetric) {
    let view = journal.view();
    let Some(id) = view.selected() else {
        return;
    };

    match view.current_session() {
        Some(session) => println!(
            "Sets - {}{}  (updated: {})",
            id,
            session.note_text().map(|n| format!(" {}", n)).unwrap_or_default(),
            format_timestamp(session.display_timestamp())
        ),
        None => println!("Sets - {}", id),
    }

    print!("{}", format_sets(view.sets()));
    println!();
    println!("{}", ChartSeries::from_sets(view.sets(), metric).render_text(40));
}
