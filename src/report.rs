use crate::analysis::aggregate::{ForkAnalysis, RunSummary};
use crate::github::types::Fork;
use std::fmt::Write;

const MAX_LABELS_SHOWN: usize = 10;

pub fn fork_report(fork: &Fork, analysis: &ForkAnalysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", fork.full_name);
    let _ = writeln!(
        out,
        "stars: {} | forks: {} | last updated: {}",
        fork.stargazers_count,
        fork.forks_count,
        fork.updated_at.format("%Y-%m-%d")
    );

    let sections = [
        ("Features", &analysis.features),
        ("Bugfixes", &analysis.bugfixes),
        ("Improvement ideas", &analysis.ideas),
    ];
    let mut any = false;
    for (title, labels) in sections {
        if labels.is_empty() {
            continue;
        }
        any = true;
        let _ = writeln!(out, "{title} ({}):", labels.len());
        for label in labels.iter().take(MAX_LABELS_SHOWN) {
            let _ = writeln!(out, "  {label}");
        }
        if labels.len() > MAX_LABELS_SHOWN {
            let _ = writeln!(out, "  ... and {} more", labels.len() - MAX_LABELS_SHOWN);
        }
    }
    if !any {
        let _ = writeln!(out, "no significant changes detected");
    }
    out
}

pub fn summary_report(summary: &RunSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== Summary ==");
    let _ = writeln!(out, "forks discovered: {}", summary.forks_discovered);
    let _ = writeln!(out, "forks analyzed: {}", summary.forks_analyzed);
    let _ = writeln!(out, "features: {}", summary.features);
    let _ = writeln!(out, "bugfixes: {}", summary.bugfixes);
    let _ = writeln!(out, "improvement ideas: {}", summary.ideas);
    let _ = writeln!(out, "total insights: {}", summary.total_insights());
    out
}
