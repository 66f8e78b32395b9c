//! `goa fetch <file>` — download a single data file or its preview image.

use std::path::Path;

use anyhow::Result;

use crate::auth::{self, Credential};
use crate::cli::output;
use crate::client::ArchiveClient;
use crate::endpoint::FetchKind;

/// Run the fetch command.
pub async fn run(
    client: &ArchiveClient,
    file: &str,
    preview: bool,
    dir: &Path,
    keydir: Option<&Path>,
    anonymous: bool,
) -> Result<()> {
    let kind = if preview {
        FetchKind::Preview
    } else {
        FetchKind::File
    };

    let credential = resolve_credential(keydir, anonymous)?;
    let name = client
        .fetch_file(file, dir, kind, None, credential.as_ref())
        .await?;

    report_download(&name, dir);
    Ok(())
}

/// Load the session credential for a download command.
///
/// An explicit `--keydir` must load or the command fails; the
/// home-directory default is best-effort, since public data needs no
/// cookie.
pub(crate) fn resolve_credential(
    keydir: Option<&Path>,
    anonymous: bool,
) -> Result<Option<Credential>> {
    if anonymous {
        return Ok(None);
    }
    match keydir {
        Some(dir) => Ok(Some(auth::load_credential(Some(dir))?)),
        None => match auth::load_credential(None) {
            Ok(credential) => Ok(Some(credential)),
            Err(e) => {
                tracing::debug!("no session credential, fetching anonymously: {e}");
                Ok(None)
            }
        },
    }
}

pub(crate) fn report_download(name: &str, dir: &Path) {
    if output::is_json() {
        output::print_json(&serde_json::json!({
            "file": name,
            "dir": dir,
        }));
    } else if !output::is_quiet() {
        println!("{name} downloaded.");
    }
}
