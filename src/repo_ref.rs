use crate::error::{ForkscoutError, Result};
use std::fmt;

const HOST: &str = "github.com";

/// Parsed (owner, name) pair identifying a repository on the hosting domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    /// Parse a user-supplied reference. Accepted forms, first match wins:
    /// `https://github.com/owner/name`, `github.com/owner/name`, or bare
    /// `owner/name`. A trailing `.git` on the name and a trailing `/` on
    /// the host forms are tolerated.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        parse_segments(trimmed).ok_or_else(|| {
            log::debug!("rejected repository reference: {trimmed}");
            ForkscoutError::InvalidRepoRef(trimmed.to_string())
        })
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

fn parse_segments(input: &str) -> Option<RepoRef> {
    let had_scheme = input.starts_with("https://") || input.starts_with("http://");
    let rest = input
        .strip_prefix("https://")
        .or_else(|| input.strip_prefix("http://"))
        .unwrap_or(input);

    // With a scheme the host is mandatory; without one it is optional.
    let rest = match rest.strip_prefix(HOST).and_then(|r| r.strip_prefix('/')) {
        Some(r) => r,
        None if had_scheme => return None,
        None => rest,
    };

    let rest = rest.strip_suffix('/').unwrap_or(rest);
    let (owner, name) = rest.split_once('/')?;
    let name = name.strip_suffix(".git").unwrap_or(name);

    if owner.is_empty() || name.is_empty() || name.contains('/') {
        return None;
    }

    Some(RepoRef {
        owner: owner.to_string(),
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_forms_agree() {
        let expected = RepoRef {
            owner: "user".to_string(),
            name: "project".to_string(),
        };
        for form in [
            "https://github.com/user/project",
            "http://github.com/user/project",
            "https://github.com/user/project.git",
            "https://github.com/user/project/",
            "github.com/user/project",
            "github.com/user/project.git",
            "user/project",
            "user/project.git",
            "  user/project  ",
        ] {
            assert_eq!(RepoRef::parse(form).unwrap(), expected, "form: {form}");
        }
    }

    #[test]
    fn wrong_host_rejected() {
        assert!(RepoRef::parse("https://gitlab.com/user/project").is_err());
    }

    #[test]
    fn deep_path_rejected() {
        assert!(RepoRef::parse("github.com/user/project/tree/main").is_err());
    }

    #[test]
    fn missing_segments_rejected() {
        for bad in ["", "justaname", "user/", "/project", "https://github.com/user"] {
            assert!(RepoRef::parse(bad).is_err(), "input: {bad}");
        }
    }

    #[test]
    fn error_lists_accepted_forms() {
        let msg = RepoRef::parse("nonsense").unwrap_err().to_string();
        assert!(msg.contains("https://github.com/<owner>/<name>"));
        assert!(msg.contains("github.com/<owner>/<name>"));
        assert!(msg.contains("<owner>/<name>"));
    }

    #[test]
    fn display_round_trip() {
        let r = RepoRef::parse("user/project").unwrap();
        assert_eq!(r.to_string(), "user/project");
    }
}
