//! Deployment history: data model, fetch assembly and ordering.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::FetchError;
use crate::github::{DeploymentRecord, DeploymentsApi, StatusRecord};

/// One state transition of a deployment.
#[derive(Serialize, Debug, Clone)]
pub struct Status {
    pub id: Option<i64>,
    pub state: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A deployment with its status history, most recent status first.
#[derive(Serialize, Debug, Clone)]
pub struct Deployment {
    pub id: Option<i64>,
    #[serde(rename = "ref")]
    pub ref_: Option<String>,
    pub environment: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub statuses: Vec<Status>,
}

impl Deployment {
    /// The most recent status, if any.
    pub fn last_status(&self) -> Option<&Status> {
        self.statuses.first()
    }
}

impl From<StatusRecord> for Status {
    fn from(r: StatusRecord) -> Self {
        Status {
            id: r.id,
            state: r.state,
            created_at: r.created_at,
        }
    }
}

impl From<DeploymentRecord> for Deployment {
    fn from(r: DeploymentRecord) -> Self {
        Deployment {
            id: r.id,
            ref_: r.ref_,
            environment: r.environment,
            created_at: r.created_at,
            statuses: Vec::new(),
        }
    }
}

/// Deployments ordered most recent first.
pub type History = Vec<Deployment>;

/// Repository coordinates plus the ref to filter deployments by.
pub struct Args {
    pub owner: String,
    pub repo: String,
    pub ref_: String,
}

pub trait Recency {
    fn created_at(&self) -> Option<DateTime<Utc>>;
}

impl Recency for Deployment {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl Recency for Status {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

/// Stable sort, most recent `created_at` first. Records without a
/// timestamp order after every timestamped one; ties keep fetch order.
pub fn sort_by_recency<T: Recency>(items: &mut [T]) {
    items.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
}

/// Fetch the deployments for a ref and, per deployment, its statuses,
/// assembled into a `History` ordered most recent first (statuses too).
///
/// An empty history is a valid result. Any client error aborts the whole
/// fetch; no partial history is returned.
pub fn fetch_history(client: &impl DeploymentsApi, args: &Args) -> Result<History, FetchError> {
    let records = client.list_deployments(&args.owner, &args.repo, &args.ref_)?;

    let mut history: History = Vec::with_capacity(records.len());
    for record in records {
        // A record without an id has no statuses endpoint to query.
        let raw_statuses = match record.id {
            Some(id) => client.list_statuses(&args.owner, &args.repo, id)?,
            None => Vec::new(),
        };

        let mut statuses: Vec<Status> = raw_statuses.into_iter().map(Status::from).collect();
        sort_by_recency(&mut statuses);

        let mut deployment = Deployment::from(record);
        deployment.statuses = statuses;
        history.push(deployment);
    }

    sort_by_recency(&mut history);
    Ok(history)
}
