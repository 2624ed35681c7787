pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod services;

use chrono::{DateTime, Utc};
use std::io::{BufRead, Write};
use tracing::{info, info_span};
use uuid::Uuid;

use crate::config::Config;
use crate::controllers::Console;
use crate::error::ShellError;
use crate::models::StatisticsSnapshot;
use crate::services::{PricingPolicy, RoomState};

// State of one console session
pub struct AppState {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub config: Config,
    pub room: RoomState,
}

impl AppState {
    pub fn new(config: Config, room: RoomState) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
            config,
            room,
        }
    }
}

/// Runs one full session: room setup, then the menu loop.
///
/// Returns the final statistics, or `None` when the input ended before
/// the room was built.
pub fn run_session<R: BufRead, W: Write>(
    config: Config,
    input: R,
    output: W,
) -> Result<Option<StatisticsSnapshot>, ShellError> {
    let mut console = Console::new(input, output);
    let pricing = PricingPolicy::from(&config.pricing);

    let room = match controllers::setup::build_room(&mut console, pricing) {
        Ok(room) => room,
        Err(ShellError::InputClosed) => {
            info!("Console input closed before the room was set up");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    let mut state = AppState::new(config, room);
    let span = info_span!(
        "session",
        id = %state.session_id,
        log_format = ?state.config.app.log_format,
        full_price = state.config.pricing.full_price,
        discount_price = state.config.pricing.discount_price
    );
    let _guard = span.enter();
    info!("Session started at {}", state.started_at.to_rfc3339());

    controllers::run(&mut console, &mut state)?;

    let snapshot = state.room.statistics_snapshot();
    match serde_json::to_string(&snapshot) {
        Ok(summary) => info!(
            "Session finished after {}s: {}",
            (Utc::now() - state.started_at).num_seconds(),
            summary
        ),
        Err(e) => tracing::warn!("Could not serialize session summary: {:?}", e),
    }
    Ok(Some(snapshot))
}
