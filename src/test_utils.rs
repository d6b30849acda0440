#![cfg(test)]

use crate::github::types::{Commit, Fork, Owner};
use chrono::{DateTime, Utc};

pub fn make_fork(name: &str, stars: u64) -> Fork {
    Fork {
        name: name.to_string(),
        full_name: format!("user/{name}"),
        owner: Owner {
            login: "user".to_string(),
        },
        description: String::new(),
        stargazers_count: stars,
        forks_count: stars / 2,
        updated_at: DateTime::UNIX_EPOCH,
        default_branch: "main".to_string(),
        html_url: format!("https://github.com/user/{name}"),
        clone_url: format!("https://github.com/user/{name}.git"),
    }
}

pub fn make_commit(message: &str, author: &str) -> Commit {
    Commit {
        sha: format!("{:040x}", message.len()),
        message: message.to_string(),
        author: author.to_string(),
        date: Utc::now(),
    }
}
