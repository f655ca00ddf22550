//! # Workout Journal
//!
//! Client for a remote workout API: record training sessions and the sets
//! within them, list and chart them.
//!
//! ## Modules
//!
//! - [`models`]: sessions, sets and the endpoint bodies
//! - [`api`]: the [`JournalApi`] trait, endpoint paths, connection settings
//! - [`client`]: reqwest implementation of [`JournalApi`] (feature `client`)
//! - [`chart`]: volume / weight / reps series ordered by set sequence
//! - [`input`]: weight and reps parsing
//! - [`view`]: page state and its transitions
//! - [`controller`]: async driver tying the view to an API
//! - [`config`], [`logging`], [`terminal`]: settings files, log output and
//!   terminal helpers for the binaries (feature `cli`)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use workout_journal::{ApiSettings, JournalClient, JournalController};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = JournalClient::new(ApiSettings::new("http://localhost:3000", "demo"))?;
//!     let mut journal = JournalController::new(client);
//!
//!     // Latest sessions, first one selected, its sets loaded
//!     journal.mount().await;
//!
//!     journal.view_mut().form.weight = "42.5".to_string();
//!     journal.view_mut().form.reps = "10".to_string();
//!     journal.add_set().await;
//!
//!     for set in journal.view().sets() {
//!         println!("{}", set.summary());
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod controller;
pub mod error;
pub mod input;
pub mod models;
pub mod view;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "cli")]
pub mod config;
#[cfg(feature = "cli")]
pub mod logging;
#[cfg(feature = "cli")]
pub mod terminal;

// Re-export top-level types for convenience
pub use api::{
    init_settings, paths, settings, ApiSettings, JournalApi, DEFAULT_API_BASE, DEFAULT_USER_ID,
    SESSION_LIST_LIMIT, SET_LIST_LIMIT, USER_ID_HEADER,
};

pub use chart::{volume_series, ChartMetric, ChartPoint, ChartSeries, EMPTY_CHART_MESSAGE};

pub use controller::{Confirm, JournalController};

pub use error::{JournalError, JournalResult};

pub use input::{parse_set_input, SetInput, INVALID_SET_INPUT};

pub use models::{
    format_timestamp, ApiStatus, CreateSessionRequest, CreateSessionResponse, CreateSetRequest,
    ItemsResponse, Session, WorkoutSet,
};

pub use view::{
    FormInputs, LoadPhase, Notice, NoticeLevel, PendingSet, SessionView, SetsTicket,
};

#[cfg(feature = "client")]
pub use client::JournalClient;

#[cfg(feature = "cli")]
pub use config::{generate_default_config, ApiConfig, Config, ConfigError, LoggingConfig};
