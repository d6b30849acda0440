use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// One fork of the surveyed repository, as decoded from a fork-list record.
#[derive(Clone, Debug, Deserialize)]
pub struct Fork {
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub owner: Owner,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub description: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default = "epoch")]
    pub updated_at: DateTime<Utc>,
    #[serde(default = "default_branch")]
    pub default_branch: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub clone_url: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub login: String,
}

/// Flattened commit: author identity and date are pulled up from the
/// nested record so the rest of the crate never sees the API shape.
#[derive(Clone, Debug)]
pub struct Commit {
    pub sha: String,
    pub message: String,
    pub author: String,
    pub date: DateTime<Utc>,
}

impl From<CommitRecord> for Commit {
    fn from(record: CommitRecord) -> Self {
        let author = record.commit.author.unwrap_or_default();
        Self {
            sha: record.sha,
            message: record.commit.message,
            author: author.name,
            date: author.date.unwrap_or_else(epoch),
        }
    }
}

/// Wire shape of one entry in a commit-list response.
#[derive(Clone, Debug, Deserialize)]
pub struct CommitRecord {
    pub sha: String,
    pub commit: CommitDetail,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CommitDetail {
    #[serde(default)]
    pub message: String,
    pub author: Option<CommitAuthor>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CommitAuthor {
    #[serde(default)]
    pub name: String,
    pub date: Option<DateTime<Utc>>,
}

fn epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

fn default_branch() -> String {
    "main".to_string()
}

fn null_to_empty<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}
