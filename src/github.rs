use chrono::{DateTime, Utc};
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use url::{ParseError, Url};

use crate::error::FetchError;

const API_BASE_URL: &str = "https://api.github.com/";

/// A deployment as returned by the GitHub deployments endpoint.
#[derive(Deserialize, Debug, Clone)]
pub struct DeploymentRecord {
    pub id: Option<i64>,
    #[serde(rename = "ref")]
    pub ref_: Option<String>,
    pub environment: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A deployment status as returned by the statuses endpoint.
#[derive(Deserialize, Debug, Clone)]
pub struct StatusRecord {
    pub id: Option<i64>,
    pub state: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// The two read operations the history fetcher needs from GitHub.
pub trait DeploymentsApi {
    fn list_deployments(
        &self,
        owner: &str,
        repo: &str,
        ref_: &str,
    ) -> Result<Vec<DeploymentRecord>, FetchError>;

    fn list_statuses(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: i64,
    ) -> Result<Vec<StatusRecord>, FetchError>;
}

pub struct ApiClient {
    token: String,
}

impl ApiClient {
    pub fn new(token: String) -> Self {
        return ApiClient { token };
    }

    fn build_url(&self, owner: &str, repo: &str, part: &str) -> Result<Url, ParseError> {
        return Url::parse(API_BASE_URL)?
            .join("repos/")?
            .join(format!("{owner}/").as_str())?
            .join(format!("{repo}/").as_str())?
            .join(part);
    }

    fn make_get_request(
        &self,
        url: &Url,
        query: &[(&str, &str)],
    ) -> Result<Response, reqwest::Error> {
        let client = Client::new();
        let req = client
            .get(url.clone())
            .header("Accept", "application/vnd.github+json")
            .header("X-Github-API-Version", "2022-11-28")
            .header("User-Agent", "ghds")
            .bearer_auth(self.token.clone())
            .query(query);
        return req.send();
    }
}

impl DeploymentsApi for ApiClient {
    fn list_deployments(
        &self,
        owner: &str,
        repo: &str,
        ref_: &str,
    ) -> Result<Vec<DeploymentRecord>, FetchError> {
        let url = self.build_url(owner, repo, "deployments")?;
        let records = self
            .make_get_request(&url, &[("ref", ref_)])?
            .error_for_status()?
            .json::<Vec<DeploymentRecord>>()?;
        return Ok(records);
    }

    fn list_statuses(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: i64,
    ) -> Result<Vec<StatusRecord>, FetchError> {
        let url = self.build_url(
            owner,
            repo,
            format!("deployments/{deployment_id}/statuses").as_str(),
        )?;
        let records = self
            .make_get_request(&url, &[])?
            .error_for_status()?
            .json::<Vec<StatusRecord>>()?;
        return Ok(records);
    }
}
