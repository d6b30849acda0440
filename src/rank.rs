use crate::github::types::Fork;

pub const MAX_ANALYZED_FORKS: usize = 10;

/// Top `cap` forks by star count, descending. The sort is stable, so
/// forks with equal stars keep their API-provided relative order.
pub fn top_forks(mut forks: Vec<Fork>, cap: usize) -> Vec<Fork> {
    forks.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    forks.truncate(cap);
    forks
}
