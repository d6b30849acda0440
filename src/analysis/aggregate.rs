use crate::analysis::categorize::{categorize, Category};
use crate::github::types::Commit;

/// Classified view of one fork's recent commits. Category lists hold
/// display labels (`"[author] first-line"`) in commit-fetch order; every
/// commit is retained in `commits` whether or not it matched a category.
#[derive(Debug, Default)]
pub struct ForkAnalysis {
    pub features: Vec<String>,
    pub bugfixes: Vec<String>,
    pub ideas: Vec<String>,
    pub commits: Vec<Commit>,
}

pub fn analyze_commits(commits: Vec<Commit>) -> ForkAnalysis {
    let mut analysis = ForkAnalysis::default();
    for commit in commits {
        let label = format!("[{}] {}", commit.author, first_line(&commit.message));
        match categorize(&commit.message).primary() {
            Some(Category::Feature) => analysis.features.push(label),
            Some(Category::Bugfix) => analysis.bugfixes.push(label),
            Some(Category::Idea) => analysis.ideas.push(label),
            None => {}
        }
        analysis.commits.push(commit);
    }
    analysis
}

fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or("")
}

/// Run-level totals, threaded through the fork loop and read once at
/// the end of the run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub forks_discovered: usize,
    pub forks_analyzed: usize,
    pub features: usize,
    pub bugfixes: usize,
    pub ideas: usize,
}

impl RunSummary {
    pub fn new(forks_discovered: usize) -> Self {
        Self {
            forks_discovered,
            ..Self::default()
        }
    }

    pub fn record(&mut self, analysis: &ForkAnalysis) {
        self.forks_analyzed += 1;
        self.features += analysis.features.len();
        self.bugfixes += analysis.bugfixes.len();
        self.ideas += analysis.ideas.len();
    }

    pub fn total_insights(&self) -> usize {
        self.features + self.bugfixes + self.ideas
    }
}
