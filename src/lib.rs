//! Report the most recent GitHub deployment and its status for a ref.

pub mod error;
pub mod github;
pub mod history;
pub mod select;

use tracing::info;

use crate::github::DeploymentsApi;
use crate::history::Args;

/// The pipeline outputs: a decimal deployment id and a status label,
/// both empty when there is no result to report.
pub type Outputs = (String, String);

/// Top-level entry point for the CI run. Recoverable failures (transport,
/// auth, malformed repo string, empty history) are logged and mapped to
/// empty outputs; only a serialization fault of the diagnostic history
/// dump is surfaced as an error.
pub fn run(token: &str, repo: &str, ref_: &str) -> Result<Outputs, serde_json::Error> {
    let Some((owner, name)) = split_repo(repo) else {
        info!(repo, "repository is not in 'owner/repo' form");
        return Ok(empty_outputs());
    };

    let client = github::ApiClient::new(token.to_string());
    let args = Args {
        owner,
        repo: name,
        ref_: ref_.to_string(),
    };
    run_with(&client, &args)
}

/// Same as [`run`] but over any [`DeploymentsApi`] implementation.
pub fn run_with(client: &impl DeploymentsApi, args: &Args) -> Result<Outputs, serde_json::Error> {
    let history = match history::fetch_history(client, args) {
        Ok(history) => history,
        Err(err) => {
            info!("unable to get deployment history: {err}");
            return Ok(empty_outputs());
        }
    };

    if history.is_empty() {
        info!("no deployment history found");
        return Ok(empty_outputs());
    }

    // Corrupted in-memory state; the one fatal fault.
    let dump = serde_json::to_string_pretty(&history)?;
    info!("ordered deployment history:\n{dump}");

    let (id, status) = select::latest_unconditional(&history);
    let id = id.map(|v| v.to_string()).unwrap_or_default();
    Ok((id, status))
}

fn empty_outputs() -> Outputs {
    (String::new(), String::new())
}

fn split_repo(repo: &str) -> Option<(String, String)> {
    let (owner, name) = repo.split_once('/')?;
    Some((owner.trim().to_string(), name.trim().to_string()))
}
