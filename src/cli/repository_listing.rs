//! Workspace repository listing operation.

use std::io::{self, Write};
use std::time::Duration;

use apprepo::{
    AccessToken, AppRepoConfig, ConsoleError, ConsoleLocator, HttpConsoleGateway,
    ListParameters, RepoGateway, RepoIntake, TableRequest,
};

use super::output::write_repo_listing;
use super::{Connection, workspace};

/// Lists one page of repositories for the configured workspace.
///
/// # Errors
///
/// Returns a configuration error if the server, token, or workspace is
/// missing, and the gateway's error if the request fails.
pub async fn run(config: &AppRepoConfig) -> Result<(), ConsoleError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(config, HttpConsoleGateway::for_token, &mut stdout).await
}

/// Lists repositories using a custom gateway builder.
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
    let connection = Connection::from_config(config)?;
    let workspace = workspace(config)?;

    let gateway = build_gateway(&connection.token, &connection.locator, config.timeout())?;
    let intake = RepoIntake::new(&gateway, workspace);

    let page = intake.list(&table_request(config)).await?;
    write_repo_listing(writer, &page, intake.workspace(), config.keyword.as_deref())
}

/// Translates the 1-based configured page into table state.
fn table_request(config: &AppRepoConfig) -> TableRequest {
    TableRequest::new(ListParameters::repositories())
        .with_page_index(config.page.saturating_sub(1))
        .with_limit(config.limit)
        .with_keyword(config.keyword.as_deref())
}
