//! Terminal helpers shared by the binaries
//!
//! Startup (config, logging, process-wide settings), y/N confirmation on
//! stdin, and plain-text tables.

use anyhow::Context;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::api::{init_settings, ApiSettings};
use crate::config::Config;
use crate::controller::Confirm;
use crate::models::{format_timestamp, Session, WorkoutSet};
use crate::view::{Notice, NoticeLevel};

/// Load configuration, apply flag overrides, start logging and install the
/// process-wide API settings. Call once, first thing in `main`.
pub fn bootstrap(
    config_path: Option<&Path>,
    api_url: Option<String>,
    user_id: Option<String>,
) -> anyhow::Result<&'static ApiSettings> {
    let mut config = Config::load_default(config_path).context("loading configuration")?;
    if let Some(url) = api_url {
        config.api.base_url = url;
    }
    if let Some(user) = user_id {
        config.api.user_id = user;
    }

    crate::logging::init(&config.logging);

    let settings = init_settings(config.api.settings());
    tracing::debug!(base_url = %settings.base_url, user_id = %settings.user_id, "API settings");
    Ok(settings)
}

/// Asks on stderr, reads the answer from stdin. Anything but y/yes is no.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirm {
    /// Skip the question and answer yes
    pub assume_yes: bool,
}

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{} [y/N] ", prompt);
        let _ = io::stderr().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Print notifications the way a toast would show them
pub fn print_notices(notices: &[Notice]) {
    for notice in notices {
        let marker = match notice.level {
            NoticeLevel::Success => "✓",
            NoticeLevel::Warning => "⚠",
            NoticeLevel::Error => "✕",
        };
        eprintln!("{} {}", marker, notice.message);
    }
}

/// Session list as a table; `selected` is marked with `*`
pub fn format_sessions(sessions: &[Session], selected: Option<&str>) -> String {
    if sessions.is_empty() {
        return "No sessions yet. Create one with `new <note>`.\n".to_string();
    }

    let mut out = format!(
        "  {:<28} {:<20} {:>5}  {}\n",
        "Session", "Updated", "Sets", "Note"
    );
    out.push_str(&format!("{}\n", "-".repeat(70)));
    for s in sessions {
        let marker = if Some(s.session_id.as_str()) == selected { "*" } else { " " };
        out.push_str(&format!(
            "{} {:<28} {:<20} {:>5}  {}\n",
            marker,
            s.session_id,
            format_timestamp(s.display_timestamp()),
            s.display_set_count(),
            s.note_text().unwrap_or("-")
        ));
    }
    out
}

/// Set list, newest first as the API returns it
pub fn format_sets(sets: &[WorkoutSet]) -> String {
    if sets.is_empty() {
        return "No sets yet.\n".to_string();
    }

    let mut out = String::new();
    for set in sets {
        out.push_str(&format!(
            "{:<40} {}\n",
            set.summary(),
            format_timestamp(set.created_at)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("no"));
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        assert!(StdinConfirm { assume_yes: true }.confirm("Delete?"));
    }

    #[test]
    fn test_format_sessions_marks_selection() {
        let sessions = vec![
            Session {
                session_id: "s1".to_string(),
                created_at: 1_700_000_000,
                last_updated_at: None,
                set_count: Some(4),
                note: Some("chest".to_string()),
            },
            Session {
                session_id: "s2".to_string(),
                created_at: 1_700_000_000,
                last_updated_at: None,
                set_count: None,
                note: None,
            },
        ];
        let table = format_sessions(&sessions, Some("s2"));
        let rows: Vec<&str> = table.lines().skip(2).collect();
        assert!(rows[0].starts_with("  s1"));
        assert!(rows[0].ends_with("chest"));
        assert!(rows[1].starts_with("* s2"));
        assert!(rows[1].ends_with("-"));
    }

    #[test]
    fn test_empty_lists() {
        assert!(format_sessions(&[], None).starts_with("No sessions yet"));
        assert_eq!(format_sets(&[]), "No sets yet.\n");
    }
}
