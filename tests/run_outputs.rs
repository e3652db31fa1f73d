mod common;

use common::{at, status, FakeApi};
use ghds::history::Args;
use ghds::run_with;

fn args() -> Args {
    Args {
        owner: "autorama".to_string(),
        repo: "nsf".to_string(),
        ref_: "main".to_string(),
    }
}

#[test]
fn reports_latest_deployment_and_status() {
    let api = FakeApi::default()
        .with_deployment(1, "main", at(10), vec![status(5, "inactive", at(12))])
        .with_deployment(2, "main", at(20), vec![status(6, "success", at(22))]);

    let (id, state) = run_with(&api, &args()).unwrap();

    assert_eq!(id, "2");
    assert_eq!(state, "success");
}

#[test]
fn deployment_without_statuses_reports_empty_status() {
    let api = FakeApi::default().with_deployment(7, "main", at(10), Vec::new());

    let (id, state) = run_with(&api, &args()).unwrap();

    assert_eq!(id, "7");
    assert_eq!(state, "");
}

#[test]
fn empty_history_maps_to_empty_outputs() {
    let api = FakeApi::default();

    let (id, state) = run_with(&api, &args()).unwrap();

    assert_eq!(id, "");
    assert_eq!(state, "");
}

#[test]
fn fetch_failure_maps_to_empty_outputs() {
    let mut api = FakeApi::default().with_deployment(1, "main", at(10), Vec::new());
    api.fail_deployments = true;

    let (id, state) = run_with(&api, &args()).unwrap();

    assert_eq!(id, "");
    assert_eq!(state, "");
}
