//! Scenario state and helpers that drive the repository screen against a
//! mock console.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use apprepo::tui::i18n::MessageCatalog;
use apprepo::tui::messages::AppMsg;
use apprepo::tui::{RepoManagerApp, ScreenContext};
use apprepo::{AccessToken, ConsoleLocator, HttpConsoleGateway, WorkspaceName};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use wiremock::{Mock, MockServer, Request};

use super::runtime::{SharedRuntime, ensure_runtime_and_console};

pub(crate) type StepResult = Result<(), Box<dyn Error>>;

#[derive(ScenarioState, Default)]
pub(crate) struct ManagementState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) console: Slot<MockServer>,
    pub(crate) app: Slot<RepoManagerApp>,
}

pub(crate) fn ensure_console(state: &ManagementState) -> Result<SharedRuntime, Box<dyn Error>> {
    Ok(ensure_runtime_and_console(&state.runtime, &state.console)?)
}

pub(crate) fn mount(state: &ManagementState, mock: Mock) -> StepResult {
    let runtime = ensure_console(state)?;
    state
        .console
        .with_ref(|server| runtime.block_on(mock.mount(server)))
        .ok_or("mock console not started")?;
    Ok(())
}

/// Builds a screen for workspace `demo` talking to the mock console over
/// HTTP.
pub(crate) fn screen_for(state: &ManagementState) -> Result<RepoManagerApp, Box<dyn Error>> {
    let uri = state
        .console
        .with_ref(MockServer::uri)
        .ok_or("mock console not started")?;
    let locator = ConsoleLocator::parse(&uri)?;
    let token = AccessToken::new("bdd-token")?;
    let gateway = HttpConsoleGateway::for_token(&token, &locator, Duration::from_secs(5))?;

    Ok(RepoManagerApp::with_context(ScreenContext {
        gateway: Arc::new(gateway),
        workspace: WorkspaceName::new("demo")?,
        limit: 10,
        localizer: Arc::new(MessageCatalog::english()),
    }))
}

/// Feeds a message to the screen and runs each follow-up command to
/// completion, the way the program loop would.
pub(crate) fn dispatch(state: &ManagementState, msg: AppMsg) -> StepResult {
    let runtime = state.runtime.get().ok_or("runtime not initialised")?;
    state
        .app
        .with_mut(|app| {
            let mut next = Some(msg);
            while let Some(current) = next.take() {
                next = app
                    .handle_message(&current)
                    .and_then(|cmd| runtime.block_on(cmd))
                    .and_then(|boxed| boxed.downcast::<AppMsg>().ok())
                    .map(|found| *found);
            }
        })
        .ok_or("repository screen not loaded")?;
    Ok(())
}

fn received(state: &ManagementState, verb: &str) -> Result<Vec<Request>, Box<dyn Error>> {
    let runtime = state.runtime.get().ok_or("runtime not initialised")?;
    let requests = state
        .console
        .with_ref(|server| runtime.block_on(server.received_requests()))
        .ok_or("mock console not started")?
        .unwrap_or_default();
    Ok(requests
        .into_iter()
        .filter(|request| request.method.as_str() == verb)
        .collect())
}

/// The JSON id arrays of every DELETE the console received.
pub(crate) fn deletion_bodies(state: &ManagementState) -> Result<Vec<Vec<String>>, Box<dyn Error>> {
    received(state, "DELETE")?
        .iter()
        .map(|request| serde_json::from_slice::<Vec<String>>(&request.body).map_err(Into::into))
        .collect()
}

/// The `conditions` query value of every list request, in order.
pub(crate) fn listed_conditions(state: &ManagementState) -> Result<Vec<String>, Box<dyn Error>> {
    Ok(received(state, "GET")?
        .iter()
        .filter_map(|request| {
            request
                .url
                .query_pairs()
                .find(|(key, _)| key == "conditions")
                .map(|(_, value)| value.into_owned())
        })
        .collect())
}
