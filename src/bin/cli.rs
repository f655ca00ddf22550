//! Workout Journal CLI
//!
//! One-shot commands against the workout API:
//! - List sessions and sets
//! - Create and delete sessions
//! - Add and delete sets
//! - Chart a session
//! - Check API status

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use workout_journal::terminal::{bootstrap, format_sessions, format_sets, StdinConfirm};
use workout_journal::{
    parse_set_input, ApiSettings, ChartMetric, ChartSeries, Confirm, CreateSetRequest, JournalApi,
    JournalClient, SessionView, SESSION_LIST_LIMIT, SET_LIST_LIMIT,
};

#[derive(Parser)]
#[command(name = "journal-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Record workout sessions and sets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config and JOURNAL_API_BASE)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Identity sent in the x-user-id header
    #[arg(long, global = true)]
    pub user_id: Option<String>,

    /// Config file (default: ~/.config/workout-journal/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MetricArg {
    /// weight × reps
    Volume,
    /// Raw weight and reps
    WeightReps,
}

impl From<MetricArg> for ChartMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Volume => ChartMetric::Volume,
            MetricArg::WeightReps => ChartMetric::WeightAndReps,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List recent sessions
    Sessions {
        #[arg(short, long, default_value_t = SESSION_LIST_LIMIT)]
        limit: usize,
    },

    /// Create a session
    NewSession {
        /// Free-text note, e.g. "chest day"
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Delete a session and all of its sets
    DeleteSession {
        session_id: String,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// List the sets of a session, newest first
    Sets {
        session_id: String,
        #[arg(short, long, default_value_t = SET_LIST_LIMIT)]
        limit: usize,
    },

    /// Add a set to a session
    AddSet {
        session_id: String,
        /// Weight lifted, e.g. 42.5
        #[arg(short, long)]
        weight: String,
        /// Repetitions, a whole number
        #[arg(short, long)]
        reps: String,
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Delete one set of a session
    DeleteSet {
        session_id: String,
        seq: u64,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Chart a session's sets in order
    Chart {
        session_id: String,
        #[arg(short, long, value_enum, default_value_t = MetricArg::Volume)]
        metric: MetricArg,
        /// Bar width in columns
        #[arg(short, long, default_value_t = 40)]
        width: usize,
    },

    /// Show API status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let command = match cli.command {
        Commands::Config { output } => return write_config(output),
        command => command,
    };

    let settings = bootstrap(cli.config.as_deref(), cli.api_url, cli.user_id)?;
    run(command, settings, cli.format == OutputFormat::Json).await
}

fn write_config(output: Option<PathBuf>) -> anyhow::Result<()> {
    let config = workout_journal::generate_default_config();
    match output {
        Some(path) => {
            // Create parent directory if needed
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, &config)?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", config),
    }
    Ok(())
}

async fn run(command: Commands, settings: &ApiSettings, json: bool) -> anyhow::Result<()> {
    let client = JournalClient::new(settings.clone())?;

    match command {
        Commands::Sessions { limit } => {
            let sessions = client.list_sessions(limit).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&sessions)?);
            } else {
                print!("{}", format_sessions(&sessions, None));
            }
        }

        Commands::NewSession { note } => {
            let note = note.filter(|n| !n.trim().is_empty());
            let created = client.create_session(note).await?;
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "sessionId": created.session_id,
                        "createdAt": created.created_at,
                    })
                );
            } else {
                println!("Created session {}", created.session_id);
            }
        }

        Commands::DeleteSession { session_id, yes } => {
            let confirm = StdinConfirm { assume_yes: yes };
            if !confirm.confirm(&SessionView::delete_session_prompt(&session_id)) {
                println!("Cancelled");
                return Ok(());
            }
            client.delete_session(&session_id).await?;
            println!("Deleted session {}", session_id);
        }

        Commands::Sets { session_id, limit } => {
            let sets = client.list_sets(&session_id, limit).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&sets)?);
            } else {
                print!("{}", format_sets(&sets));
            }
        }

        Commands::AddSet {
            session_id,
            weight,
            reps,
            note,
        } => {
            let input = parse_set_input(&weight, &reps)?;
            client
                .create_set(
                    &session_id,
                    CreateSetRequest {
                        weight: input.weight,
                        reps: input.reps,
                        note: note.filter(|n| !n.trim().is_empty()),
                    },
                )
                .await?;

            let sets = client.list_sets(&session_id, SET_LIST_LIMIT).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&sets)?);
            } else {
                println!("Added {} kg × {} reps", input.weight, input.reps);
                print!("{}", format_sets(&sets));
            }
        }

        Commands::DeleteSet {
            session_id,
            seq,
            yes,
        } => {
            let confirm = StdinConfirm { assume_yes: yes };
            if !confirm.confirm(&SessionView::delete_set_prompt(seq)) {
                println!("Cancelled");
                return Ok(());
            }
            client.delete_set(&session_id, seq).await?;
            println!("Deleted set #{}", seq);
        }

        Commands::Chart {
            session_id,
            metric,
            width,
        } => {
            let sets = client.list_sets(&session_id, SET_LIST_LIMIT).await?;
            let series = ChartSeries::from_sets(&sets, metric.into());
            if json {
                let points: Vec<serde_json::Value> = series
                    .points
                    .iter()
                    .map(|p| {
                        let mut obj = serde_json::Map::new();
                        obj.insert("seq".to_string(), p.seq.into());
                        for (name, value) in series.names().iter().zip(&p.values) {
                            obj.insert(name.to_string(), (*value).into());
                        }
                        serde_json::Value::Object(obj)
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&points)?);
            } else {
                print!("{}", series.render_text(width));
                if series.is_empty() {
                    println!();
                }
            }
        }

        Commands::Status => {
            let status = client
                .health()
                .await
                .with_context(|| format!("cannot reach the workout API at {}", settings.base_url))?;
            if !status.ok {
                bail!("API at {} reports not ok", settings.base_url);
            }
            println!("Workout Journal v{}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("API:   {}", settings.base_url);
            println!("Stage: {}", status.stage.as_deref().unwrap_or("unknown"));
            println!("User:  {}", settings.user_id);
        }

        Commands::Config { output } => write_config(output)?,
    }

    Ok(())
}
