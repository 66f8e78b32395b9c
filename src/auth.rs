//! Session credential for proprietary data access.
//!
//! The archive authenticates downloads with a browser session cookie
//! (`gemini_archive_session`). The cookie value lives in a hidden
//! `.goa_auth` file so it is never embedded in code: log in at the archive
//! web interface, copy the cookie value from the browser's storage
//! inspector, and store it in `~/.goa_auth` (or any directory passed as
//! `keydir`). Public data needs no credential.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Name of the credential file inside the key directory.
pub const CREDENTIAL_FILE: &str = ".goa_auth";

/// An opaque archive session token.
///
/// Held in memory only for the duration of the calls that use it; never
/// persisted or mutated by the client.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Credential(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// The token authorizes proprietary-data access; keep it out of debug logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(..)")
    }
}

/// Read the session credential from `<keydir>/.goa_auth`.
///
/// `keydir` defaults to the home directory, resolved at call time. The
/// file contents are used verbatim; the archive cookie is opaque and no
/// structure is assumed.
pub fn load_credential(keydir: Option<&Path>) -> Result<Credential> {
    let dir = match keydir {
        Some(dir) => dir.to_path_buf(),
        None => dirs::home_dir().unwrap_or_else(|| PathBuf::from("/tmp")),
    };
    let path = dir.join(CREDENTIAL_FILE);

    let token = std::fs::read_to_string(&path).map_err(|source| Error::CredentialRead {
        path: path.clone(),
        source,
    })?;

    Ok(Credential(token))
}
