use std::fs::OpenOptions;
use std::io::Write;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Report the most recent deployment of a repository and its status
#[derive(Parser, Debug)]
#[command(version,about,long_about=None)]
struct Args {
    /// The repository (owner/repo)
    #[arg(env = "INPUT_REPO")]
    repo: String,

    /// The ref (branch, tag or commit) the deployments target
    #[arg(value_name = "REF", env = "INPUT_REF")]
    ref_: String,

    /// The github token to use
    #[arg(short, long, env = "INPUT_GITHUB-TOKEN")]
    token: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let (deployment_id, status) = match ghds::run(&args.token, &args.repo, &args.ref_) {
        Ok(outputs) => outputs,
        Err(err) => {
            error!("failed to render deployment history: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = write_outputs(&deployment_id, &status) {
        error!("failed to write outputs: {err}");
        std::process::exit(1);
    }
}

/// Write the action outputs to $GITHUB_OUTPUT when running under a CI
/// runner, falling back to stdout for local use.
fn write_outputs(deployment_id: &str, status: &str) -> std::io::Result<()> {
    match std::env::var_os("GITHUB_OUTPUT") {
        Some(path) => {
            let mut file = OpenOptions::new().append(true).create(true).open(path)?;
            writeln!(file, "deployment_id={deployment_id}")?;
            writeln!(file, "status={status}")?;
        }
        None => {
            println!("deployment_id={deployment_id}");
            println!("status={status}");
        }
    }
    Ok(())
}
