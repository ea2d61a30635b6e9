use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every way a fetch-and-save can fail. Callers report it as a single
/// category; the variant only records which step broke.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to stat {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
impl FetchError {
    /// True for failures that happened on the local filesystem rather than the network.
    pub(crate) fn is_filesystem(&self) -> bool {
        matches!(
            self,
            FetchError::Create { .. } | FetchError::Write { .. } | FetchError::Metadata { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filesystem_errors_name_the_path() {
        let err = FetchError::Create {
            path: PathBuf::from("public/data/status.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };

        assert!(err.is_filesystem());
        let text = err.to_string();
        assert!(text.starts_with("failed to create public/data/status.json"), "{}", text);
        assert!(text.contains("No such file or directory"));
    }
}
