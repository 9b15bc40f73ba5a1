//! Behavioural tests for CLI configuration loading.

use apprepo::config::CONSOLE_TOKEN_ENV;
use apprepo::{AppRepoConfig, ConsoleError, OperationMode, RepoId};
use ortho_config::MergeComposer;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::{Map, Value, json};

/// State for CLI configuration scenarios.
///
/// Layers are kept as JSON objects because `MergeComposer` is not `Clone`;
/// the composer is rebuilt in `build_config`.
#[derive(ScenarioState, Default)]
struct ConfigState {
    env_layer: Slot<Map<String, Value>>,
    cli_layer: Slot<Map<String, Value>>,
    config: Slot<AppRepoConfig>,
    token: Slot<Result<String, ConsoleError>>,
}

#[fixture]
fn config_state() -> ConfigState {
    ConfigState::default()
}

fn add_to_layer(layer: &Slot<Map<String, Value>>, key: &str, value: &str) {
    let mut fields = layer.get().unwrap_or_default();
    fields.insert(key.to_owned(), Value::from(value.trim_matches('"')));
    layer.set(fields);
}

fn built_config(state: &ConfigState) -> AppRepoConfig {
    state
        .config
        .get()
        .unwrap_or_else(|| panic!("configuration has not been built"))
}

// --- Given steps ---

#[given("an empty configuration")]
fn empty_configuration(config_state: &ConfigState) {
    config_state.env_layer.set(Map::new());
}

#[given("an environment workspace {workspace}")]
fn env_workspace(config_state: &ConfigState, workspace: String) {
    add_to_layer(&config_state.env_layer, "workspace", &workspace);
}

#[given("a command line workspace {workspace}")]
fn cli_workspace(config_state: &ConfigState, workspace: String) {
    add_to_layer(&config_state.cli_layer, "workspace", &workspace);
}

#[given("a command line deletion list {ids}")]
fn cli_deletion_list(config_state: &ConfigState, ids: String) {
    add_to_layer(&config_state.cli_layer, "delete_repos", &ids);
}

#[given("a command line app id {app_id}")]
fn cli_app_id(config_state: &ConfigState, app_id: String) {
    add_to_layer(&config_state.cli_layer, "app_id", &app_id);
}

// --- When steps ---

#[when("the configuration is built")]
fn build_config(config_state: &ConfigState) {
    let mut composer = MergeComposer::new();
    composer.push_defaults(json!({ "server_url": null, "token": null }));
    if let Some(env) = config_state.env_layer.get() {
        composer.push_environment(Value::Object(env));
    }
    if let Some(cli) = config_state.cli_layer.get() {
        composer.push_cli(Value::Object(cli));
    }

    let config = AppRepoConfig::merge_from_layers(composer.layers())
        .unwrap_or_else(|error| panic!("failed to merge configuration: {error}"));
    config_state.config.set(config);
}

#[when("the token is resolved with CONSOLE_TOKEN set to {token}")]
fn resolve_with_env_token(config_state: &ConfigState, token: String) {
    let config = built_config(config_state);
    let _guard = env_lock::lock_env([(CONSOLE_TOKEN_ENV, Some(token.trim_matches('"')))]);
    config_state.token.set(config.resolve_token());
}

#[when("the token is resolved without CONSOLE_TOKEN")]
fn resolve_without_env_token(config_state: &ConfigState) {
    let config = built_config(config_state);
    let _guard = env_lock::lock_env([(CONSOLE_TOKEN_ENV, None::<&str>)]);
    config_state.token.set(config.resolve_token());
}

// --- Then steps ---

#[then("the workspace is {workspace}")]
fn workspace_is(config_state: &ConfigState, workspace: String) {
    assert_eq!(
        built_config(config_state).workspace.as_deref(),
        Some(workspace.trim_matches('"'))
    );
}

#[then("the operation mode is listing")]
fn mode_is_listing(config_state: &ConfigState) {
    assert_eq!(
        built_config(config_state).operation_mode(),
        OperationMode::RepoListing
    );
}

#[then("the operation mode is delete")]
fn mode_is_delete(config_state: &ConfigState) {
    assert_eq!(
        built_config(config_state).operation_mode(),
        OperationMode::DeleteRepos
    );
}

#[then("the deletion targets are {ids}")]
fn deletion_targets_are(config_state: &ConfigState, ids: String) {
    let targets = built_config(config_state)
        .delete_targets()
        .unwrap_or_else(|error| panic!("deletion list should parse: {error}"));
    let names: Vec<&str> = targets.iter().map(RepoId::as_str).collect();
    assert_eq!(names.join(","), ids.trim_matches('"'));
}

#[then("the resolved token is {token}")]
fn resolved_token_is(config_state: &ConfigState, token: String) {
    let resolved = config_state
        .token
        .get()
        .unwrap_or_else(|| panic!("token has not been resolved"));
    assert_eq!(resolved.ok().as_deref(), Some(token.trim_matches('"')));
}

#[then("the token is reported missing")]
fn token_reported_missing(config_state: &ConfigState) {
    let resolved = config_state
        .token
        .get()
        .unwrap_or_else(|| panic!("token has not been resolved"));
    assert_eq!(resolved, Err(ConsoleError::MissingToken));
}

#[then("validation fails mentioning {field}")]
fn validation_fails(config_state: &ConfigState, field: String) {
    let error = built_config(config_state)
        .validate()
        .err()
        .unwrap_or_else(|| panic!("validation should fail"));
    assert!(
        matches!(
            error,
            ConsoleError::Configuration { ref message }
                if message.contains(field.trim_matches('"'))
        ),
        "unexpected error: {error:?}"
    );
}

// --- Scenarios ---

#[scenario(path = "tests/features/cli_config.feature", index = 0)]
fn cli_workspace_overrides_env(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 1)]
fn deletion_list_selects_delete_mode(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 2)]
fn shared_token_variable_is_used(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 3)]
fn missing_token_is_reported(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 4)]
fn review_target_needs_both_ids(config_state: ConfigState) {
    let _ = config_state;
}
