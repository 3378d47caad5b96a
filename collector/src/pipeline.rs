use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;

use crate::classifier::{self, ChainMap};
use crate::error::PullError;
use crate::writer::DEFAULT_OUTPUT_DIR;
use crate::{fetcher, sdn, writer};

/// Everything one run needs; defaults reproduce the published endpoint and
/// directory layout.
#[derive(Debug, Clone)]
pub struct PullOptions {
    pub url: String,
    pub output_dir: PathBuf,
    pub timeout: Duration,
}

impl Default for PullOptions {
    fn default() -> Self {
        PullOptions {
            url: fetcher::sdn_url(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct PullReport {
    pub total: usize,
    pub per_chain: Vec<(String, usize)>,
    pub unrecognized: usize,
    pub files: Vec<PathBuf>,
}

/// One collection run: fetch, parse, classify, write.
///
/// Stops at the first failure; fetch and parse errors mean nothing was
/// written. Files from a prior run are replaced one by one as the write
/// phase progresses, so a write failure can leave a mixed directory.
pub async fn run(options: &PullOptions) -> Result<PullReport, PullError> {
    let body = fetcher::fetch_sdn(&options.url, options.timeout).await?;

    let records = sdn::identity_records(&body)?;
    tracing::debug!(target: "pull", "parsed {} identity records", records.len());

    let chain_map = ChainMap::from_env();
    let lists = classifier::classify(&records, &chain_map);
    tracing::info!(
        target: "pull",
        "classified {} wallet addresses across {} chains ({} unrecognized)",
        lists.complete.len(),
        lists.by_chain.len(),
        lists.unrecognized.len(),
    );

    let files = writer::write_lists(&options.output_dir, &lists, Utc::now())?;

    Ok(PullReport {
        total: lists.complete.len(),
        per_chain: lists
            .by_chain
            .iter()
            .map(|(chain, addresses)| (chain.clone(), addresses.len()))
            .collect(),
        unrecognized: lists.unrecognized.len(),
        files,
    })
}
