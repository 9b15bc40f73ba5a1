//! TUI mode for managing a workspace's app repositories.
//!
//! This module provides the entry point for the interactive terminal
//! interface that lists, searches, creates, edits, and deletes repositories.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use apprepo::tui::i18n::MessageCatalog;
use apprepo::tui::{RepoManagerApp, ScreenContext, set_screen_context};
use apprepo::{AppRepoConfig, ConsoleError, HttpConsoleGateway};

use super::{Connection, workspace};

/// Runs the repository management screen.
///
/// # Errors
///
/// Returns an error if:
/// - The server URL, token, or workspace is missing or invalid
/// - The HTTP client cannot be built
/// - The TUI fails to initialise
pub async fn run(config: &AppRepoConfig) -> Result<(), ConsoleError> {
    let connection = Connection::from_config(config)?;
    let workspace = workspace(config)?;
    let gateway =
        HttpConsoleGateway::for_token(&connection.token, &connection.locator, config.timeout())?;

    let stored = set_screen_context(ScreenContext {
        gateway: Arc::new(gateway),
        workspace,
        limit: config.limit,
        localizer: Arc::new(MessageCatalog::english()),
    });
    if !stored {
        tracing::debug!("screen context already set, keeping the existing one");
    }

    run_tui().await.map_err(|error| ConsoleError::Terminal {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `RepoManagerApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // RepoManagerApp::init() reads the screen context and requests page one.
    let program = Program::<RepoManagerApp>::builder()
        .alt_screen(true)
        .build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
