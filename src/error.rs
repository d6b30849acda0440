use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForkscoutError {
    #[error(
        "invalid repository reference '{0}': expected one of \
         https://github.com/<owner>/<name>, github.com/<owner>/<name>, \
         or <owner>/<name>"
    )]
    InvalidRepoRef(String),

    #[error("github error: {0}")]
    Api(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("decode error: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, ForkscoutError>;
