//! `goa download <query>` — download a tar bundle of all matching files.

use std::path::Path;

use anyhow::Result;

use crate::cli::fetch_cmd::{report_download, resolve_credential};
use crate::client::ArchiveClient;
use crate::endpoint::FetchKind;

/// Run the download command.
pub async fn run(
    client: &ArchiveClient,
    query: &str,
    tar: Option<&str>,
    dir: &Path,
    keydir: Option<&Path>,
    anonymous: bool,
) -> Result<()> {
    let credential = resolve_credential(keydir, anonymous)?;
    let name = client
        .fetch_file(query, dir, FetchKind::Download, tar, credential.as_ref())
        .await?;

    report_download(&name, dir);
    Ok(())
}
