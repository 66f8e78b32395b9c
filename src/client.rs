//! The archive client: four stateless request/response operations.
//!
//! Each call issues exactly one GET and waits for it to complete. There is
//! no retry, batching, caching, or timeout of the client's own; transport
//! failures surface unwrapped and non-success statuses become
//! [`Error::Request`] carrying the response body.

use std::path::Path;

use futures::StreamExt;
use reqwest::header;
use serde_json::{Map, Value};
use tokio::io::AsyncWriteExt;

use crate::auth::Credential;
use crate::endpoint::{FetchKind, ListFormat};
use crate::error::{Error, Result};

/// Root URL of the archive service.
pub const ARCHIVE_BASE: &str = "https://archive.gemini.edu";

/// Name of the session cookie that authorizes proprietary-data access.
pub const SESSION_COOKIE: &str = "gemini_archive_session";

/// Tar filename used when a download request names none.
const DEFAULT_TAR_NAME: &str = "gemini_data.tar";

/// A single record from the JSON file endpoints. Field schema is the
/// server's contract; the client does not validate it.
pub type FileRecord = Map<String, Value>;

/// Client for the Gemini Observatory Archive HTTP API.
///
/// Cheap to clone; holds no mutable state between calls.
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    http: reqwest::Client,
    base: String,
}

impl Default for ArchiveClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveClient {
    /// Client against the production archive at [`ARCHIVE_BASE`].
    pub fn new() -> Self {
        Self::with_base(ARCHIVE_BASE)
    }

    /// Client against an alternate base URL (mirrors, test servers).
    pub fn with_base(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("goa-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self { http, base }
    }

    fn endpoint_url(&self, keyword: &str, request: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base,
            keyword,
            request.trim_start_matches('/')
        )
    }

    /// Query one of the JSON file endpoints.
    ///
    /// `request` is an archive search fragment such as
    /// `/canonical/GN-2010B-Q-22/GMOS-N/20101231`; it must not itself
    /// contain an endpoint keyword. Returns the records in server order
    /// with their fields unvalidated.
    pub async fn query_file_list(
        &self,
        request: &str,
        format: ListFormat,
    ) -> Result<Vec<FileRecord>> {
        let url = self.endpoint_url(format.keyword(), request);
        tracing::debug!(%url, "file list query");

        let response = self.http.get(&url).send().await?;
        let response = check_status(response).await?;

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(Error::Decode)
    }

    /// Query the calibration association endpoint (`calmgr`).
    ///
    /// Returns the raw XML bytes unparsed; interpreting them is the
    /// caller's concern (see [`crate::manifest`] for a ready-made parser).
    pub async fn query_calibration_manifest(&self, request: &str) -> Result<Vec<u8>> {
        let url = self.endpoint_url("calmgr", request);
        tracing::debug!(%url, "calibration manifest query");

        let response = self.http.get(&url).send().await?;
        let response = check_status(response).await?;

        Ok(response.bytes().await?.to_vec())
    }

    /// Download a data file, preview image, or tar bundle into `target_dir`.
    ///
    /// The output filename is derived from the request (or from `tar_name`
    /// for [`FetchKind::Download`]) and returned on success. The HTTP
    /// status is checked before the file is created, so a failed request
    /// leaves nothing behind; a failure mid-stream leaves the partial file
    /// in place. Callers needing atomicity should target a scratch
    /// directory and rename afterwards.
    ///
    /// The session cookie is always sent, with an empty value when no
    /// `credential` is supplied (public data needs none).
    pub async fn fetch_file(
        &self,
        request: &str,
        target_dir: &Path,
        kind: FetchKind,
        tar_name: Option<&str>,
        credential: Option<&Credential>,
    ) -> Result<String> {
        let filename = derived_filename(kind, request, tar_name);

        // The archive serves decompressed files under the stripped name,
        // so file/preview requests go out without the .bz2 part.
        let path_request = match kind {
            FetchKind::Download => request.to_string(),
            FetchKind::File | FetchKind::Preview => stripped_request(request),
        };

        let url = self.endpoint_url(kind.keyword(), &path_request);
        tracing::debug!(%url, %kind, file = %filename, "file fetch");

        let cookie = format!(
            "{SESSION_COOKIE}={}",
            credential.map(Credential::as_str).unwrap_or("")
        );

        let response = self
            .http
            .get(&url)
            .header(header::COOKIE, cookie)
            .send()
            .await?;
        let response = check_status(response).await?;

        let dest = target_dir.join(&filename);
        let mut file = tokio::fs::File::create(&dest)
            .await
            .map_err(|source| Error::Write {
                path: dest.clone(),
                source,
            })?;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk)
                .await
                .map_err(|source| Error::Write {
                    path: dest.clone(),
                    source,
                })?;
        }
        file.flush().await.map_err(|source| Error::Write {
            path: dest.clone(),
            source,
        })?;

        tracing::debug!(path = %dest.display(), "download complete");
        Ok(filename)
    }
}

/// Fail non-success responses, preserving the body text for diagnostics.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::Request {
        status: status.as_u16(),
        body,
    })
}

/// Remove every occurrence of `.bz2` from the request string.
///
/// Substring removal, not suffix removal: `a.bz2b.fits.bz2` becomes
/// `ab.fits`. Archive filenames only ever carry `.bz2` as a compression
/// suffix, so in practice the two agree.
fn stripped_request(request: &str) -> String {
    request.replace(".bz2", "")
}

/// Output filename for a fetch.
fn derived_filename(kind: FetchKind, request: &str, tar_name: Option<&str>) -> String {
    match kind {
        FetchKind::Download => tar_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_TAR_NAME)
            .to_string(),
        FetchKind::File => stripped_request(request),
        FetchKind::Preview => format!("{}.jpeg", stripped_request(request)),
    }
}
