//! Heuristic commit-message classification. Matching is substring
//! containment on the lowercased message; the tables are data so new
//! patterns are a one-line change.

pub const FEATURE_PATTERNS: &[&str] = &[
    "feat:",
    "feature:",
    "add:",
    "implement",
    "new:",
    "enhancement:",
    "support for",
    "introduce",
    "enable",
    "allow",
];

pub const BUGFIX_PATTERNS: &[&str] = &[
    "fix:",
    "bug:",
    "patch:",
    "hotfix:",
    "repair",
    "resolve",
    "correct",
    "issue",
    "problem",
    "error",
    "crash",
    "failure",
];

pub const IDEA_PATTERNS: &[&str] = &[
    "improve:",
    "refactor:",
    "optimize:",
    "performance:",
    "cleanup:",
    "update:",
    "upgrade:",
    "modernize",
    "simplify",
    "enhance",
    "better",
];

/// Independent per-category detection for one commit message. A message
/// can match several categories; final assignment is the aggregator's
/// job via [`Detection::primary`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Detection {
    pub feature: bool,
    pub bugfix: bool,
    pub idea: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Feature,
    Bugfix,
    Idea,
}

impl Detection {
    /// Reduce the three-way detection to a single assignment by
    /// precedence feature > bugfix > idea.
    pub fn primary(self) -> Option<Category> {
        if self.feature {
            Some(Category::Feature)
        } else if self.bugfix {
            Some(Category::Bugfix)
        } else if self.idea {
            Some(Category::Idea)
        } else {
            None
        }
    }
}

pub fn categorize(message: &str) -> Detection {
    let lower = message.to_lowercase();
    let matches = |patterns: &[&str]| patterns.iter().any(|p| lower.contains(p));
    Detection {
        feature: matches(FEATURE_PATTERNS),
        bugfix: matches(BUGFIX_PATTERNS),
        idea: matches(IDEA_PATTERNS),
    }
}
