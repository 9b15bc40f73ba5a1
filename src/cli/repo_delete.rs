//! Repository deletion operation.

use std::io::{self, Write};
use std::time::Duration;

use apprepo::{
    AccessToken, AppRepoConfig, ConsoleError, ConsoleLocator, HttpConsoleGateway, RepoGateway,
    RepoIntake,
};

use super::output::write_delete_summary;
use super::{Connection, workspace};

/// Deletes the repositories listed in `delete_repos` with one request.
///
/// # Errors
///
/// Returns a configuration error when no identifiers are listed or the
/// connection settings are incomplete, and the gateway's error if the
/// request fails.
pub async fn run(config: &AppRepoConfig) -> Result<(), ConsoleError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(config, HttpConsoleGateway::for_token, &mut stdout).await
}

/// Deletes repositories using a custom gateway builder.
///
/// This function is exposed for testing with mock gateways.
pub async fn run_with_gateway_builder<G, F, W>(
    config: &AppRepoConfig,
    build_gateway: F,
    writer: &mut W,
) -> Result<(), ConsoleError>
where
    G: RepoGateway,
    F: FnOnce(&AccessToken, &ConsoleLocator, Duration) -> Result<G, ConsoleError>,
    W: Write,
{
    let ids = config.delete_targets()?;
    let connection = Connection::from_config(config)?;
    let workspace = workspace(config)?;

    let gateway = build_gateway(&connection.token, &connection.locator, config.timeout())?;
    let intake = RepoIntake::new(&gateway, workspace);
    intake.delete_ids(&ids).await?;

    write_delete_summary(writer, intake.workspace(), &ids)
}
