//! In-memory fake of the GitHub deployments API for integration tests.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use url::Url;

use ghds::error::FetchError;
use ghds::github::{DeploymentRecord, DeploymentsApi, StatusRecord};

#[derive(Default)]
pub struct FakeApi {
    pub deployments: Vec<DeploymentRecord>,
    pub statuses: HashMap<i64, Vec<StatusRecord>>,
    pub fail_deployments: bool,
    pub fail_statuses: bool,
}

impl FakeApi {
    pub fn with_deployment(
        mut self,
        id: i64,
        ref_: &str,
        created_at: Option<DateTime<Utc>>,
        statuses: Vec<StatusRecord>,
    ) -> Self {
        self.deployments.push(DeploymentRecord {
            id: Some(id),
            ref_: Some(ref_.to_string()),
            environment: Some("production".to_string()),
            created_at,
        });
        self.statuses.insert(id, statuses);
        self
    }
}

fn transport_error() -> FetchError {
    // any constructible error will do; the fetcher must pass it through
    FetchError::Url(Url::parse("deployments").unwrap_err())
}

impl DeploymentsApi for FakeApi {
    fn list_deployments(
        &self,
        _owner: &str,
        _repo: &str,
        ref_: &str,
    ) -> Result<Vec<DeploymentRecord>, FetchError> {
        if self.fail_deployments {
            return Err(transport_error());
        }
        Ok(self
            .deployments
            .iter()
            .filter(|d| d.ref_.as_deref() == Some(ref_))
            .cloned()
            .collect())
    }

    fn list_statuses(
        &self,
        _owner: &str,
        _repo: &str,
        deployment_id: i64,
    ) -> Result<Vec<StatusRecord>, FetchError> {
        if self.fail_statuses {
            return Err(transport_error());
        }
        Ok(self
            .statuses
            .get(&deployment_id)
            .cloned()
            .unwrap_or_default())
    }
}

pub fn at(secs: i64) -> Option<DateTime<Utc>> {
    Some(Utc.timestamp_opt(secs, 0).unwrap())
}

pub fn status(id: i64, state: &str, created_at: Option<DateTime<Utc>>) -> StatusRecord {
    StatusRecord {
        id: Some(id),
        state: Some(state.to_string()),
        created_at,
    }
}
