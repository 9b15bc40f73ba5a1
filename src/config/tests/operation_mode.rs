//! Tests for operation mode selection.

use rstest::rstest;

use crate::AppRepoConfig;
use crate::config::OperationMode;

fn config_with(
    review_target: bool,
    delete_repos: Option<&str>,
    tui: bool,
) -> AppRepoConfig {
    AppRepoConfig {
        app_id: review_target.then(|| "app-1".to_owned()),
        version_id: review_target.then(|| "appv-1".to_owned()),
        delete_repos: delete_repos.map(ToOwned::to_owned),
        tui,
        ..Default::default()
    }
}

#[rstest]
#[case::default_is_listing(config_with(false, None, false), OperationMode::RepoListing)]
#[case::tui_flag(config_with(false, None, true), OperationMode::RepoTui)]
#[case::delete_beats_tui(config_with(false, Some("repo-a"), true), OperationMode::DeleteRepos)]
#[case::review_beats_everything(
    config_with(true, Some("repo-a"), true),
    OperationMode::SubmitReview
)]
fn operation_mode_priority(#[case] config: AppRepoConfig, #[case] expected: OperationMode) {
    assert_eq!(config.operation_mode(), expected);
}

#[rstest]
fn half_review_target_does_not_select_review_mode() {
    let config = AppRepoConfig {
        app_id: Some("app-1".to_owned()),
        ..Default::default()
    };

    assert_eq!(config.operation_mode(), OperationMode::RepoListing);
}
