mod analysis;
mod error;
mod github;
mod rank;
mod repo_ref;
mod report;
#[cfg(test)]
mod test_utils;

use analysis::aggregate::{analyze_commits, RunSummary};
use chrono::{Duration, Utc};
use clap::Parser;
use error::Result;
use github::client::GitHubClient;
use log::warn;
use repo_ref::RepoRef;

#[derive(Parser)]
#[command(
    name = "forkscout",
    about = "Surveys a repository's forks and classifies their recent commits"
)]
struct Cli {
    #[arg(help = "Repository reference: owner/name or a github.com URL")]
    repo: String,

    #[arg(long, short, env = "GITHUB_TOKEN", help = "GitHub API token")]
    token: Option<String>,

    #[arg(long, default_value_t = rank::MAX_ANALYZED_FORKS, help = "Analyze at most this many top-starred forks")]
    max_forks: usize,

    #[arg(long, help = "Only consider commits from the last N days")]
    since_days: Option<i64>,

    #[arg(long, default_value_t = 1, help = "Seconds to pause between fork analyses")]
    delay_secs: u64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let repo = RepoRef::parse(&cli.repo)?;
    let client = GitHubClient::new(cli.token.as_deref())?;
    let since = cli
        .since_days
        .map(|days| (Utc::now() - Duration::days(days)).to_rfc3339());

    let forks = client.fetch_forks(&repo).await?;
    if forks.is_empty() {
        println!("No forks found for {repo}");
        print!("{}", report::summary_report(&RunSummary::new(0)));
        return Ok(());
    }

    let mut summary = RunSummary::new(forks.len());
    let selected = rank::top_forks(forks, cli.max_forks);
    println!(
        "Analyzing top {} of {} forks of {repo}\n",
        selected.len(),
        summary.forks_discovered
    );

    for (idx, fork) in selected.iter().enumerate() {
        if idx > 0 {
            tokio::time::sleep(std::time::Duration::from_secs(cli.delay_secs)).await;
        }

        let commits = match client
            .fetch_commits(
                &fork.owner.login,
                &fork.name,
                &fork.default_branch,
                since.as_deref(),
            )
            .await
        {
            Ok(commits) => commits,
            Err(e) => {
                warn!("commit fetch for {} failed: {e}", fork.full_name);
                println!("Skipping {}: commit history unavailable\n", fork.full_name);
                continue;
            }
        };
        if commits.is_empty() {
            println!("Skipping {}: no recent commits\n", fork.full_name);
            continue;
        }

        let analysis = analyze_commits(commits);
        print!("{}", report::fork_report(fork, &analysis));
        println!();
        summary.record(&analysis);
    }

    print!("{}", report::summary_report(&summary));
    Ok(())
}
