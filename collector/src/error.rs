use std::path::PathBuf;

/// Failure taxonomy for one collection run.
///
/// Each variant maps to a pipeline stage; nothing downstream of a failed
/// stage runs, so a `Fetch`/`Parse` error guarantees no file was touched.
#[derive(Debug, thiserror::Error)]
pub enum PullError {
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    FetchStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("malformed SDN document: {0}")]
    Parse(#[from] quick_xml::Error),

    #[error("writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
