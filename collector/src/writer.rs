use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::classifier::WalletLists;
use crate::error::PullError;

/// Default directory for the generated lists. It must already exist; the
/// collector never creates it.
pub const DEFAULT_OUTPUT_DIR: &str = "OFAC_Sanctioned_Wallet_Lists";

fn list_path(dir: &Path, index: usize, label: &str) -> PathBuf {
    dir.join(format!("{index}_{label}_Sanctioned_Wallet_List.txt"))
}

fn write_list(
    dir: &Path,
    index: usize,
    label: &str,
    stamp: DateTime<Utc>,
    addresses: &[String],
) -> Result<PathBuf, PullError> {
    let path = list_path(dir, index, label);
    let mut body = format!("# Last Updated: {}\n\n", stamp.format("%Y-%m-%d %H:%M:%S UTC"));
    for address in addresses {
        body.push_str(address);
        body.push('\n');
    }
    std::fs::write(&path, body).map_err(|source| PullError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::info!(target: "write", "wrote {} addresses to {}", addresses.len(), path.display());
    Ok(path)
}

/// Write the numbered list files, truncating any previous run's output.
///
/// `1_Complete_...` always comes first; chain files count up from 2 in
/// first-seen order; the unrecognized file takes the next index and is only
/// written when the group is non-empty. All files in one run share `stamp`.
pub fn write_lists(
    dir: &Path,
    lists: &WalletLists,
    stamp: DateTime<Utc>,
) -> Result<Vec<PathBuf>, PullError> {
    let mut written = Vec::new();
    written.push(write_list(dir, 1, "Complete", stamp, &lists.complete)?);

    let mut index = 1;
    for (chain, addresses) in &lists.by_chain {
        index += 1;
        written.push(write_list(dir, index, chain, stamp, addresses)?);
    }

    if !lists.unrecognized.is_empty() {
        index += 1;
        written.push(write_list(
            dir,
            index,
            "Unrecognized_Blockchain",
            stamp,
            &lists.unrecognized,
        )?);
    }

    Ok(written)
}
