//! Endpoint allow-lists for the archive URL namespace.
//!
//! The archive routes requests by a leading path keyword
//! (`jsonfilelist`, `jsonsummary`, `calmgr`, `file`, `preview`,
//! `download`). The keyword sets are closed; anything else is rejected
//! before a request is built.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Shape of a JSON file query: brief listing or full metadata summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    /// `jsonfilelist` — filename plus file/data sizes.
    FileList,
    /// `jsonsummary` — full per-file metadata, equivalent to the
    /// interactive search form.
    FileSummary,
}

impl ListFormat {
    const KEYWORDS: &'static [&'static str] = &["jsonfilelist", "jsonsummary"];

    /// URL path keyword for this format.
    pub fn keyword(self) -> &'static str {
        match self {
            ListFormat::FileList => "jsonfilelist",
            ListFormat::FileSummary => "jsonsummary",
        }
    }
}

impl FromStr for ListFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "jsonfilelist" => Ok(ListFormat::FileList),
            "jsonsummary" => Ok(ListFormat::FileSummary),
            _ => Err(Error::invalid_option(s, Self::KEYWORDS)),
        }
    }
}

impl fmt::Display for ListFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// What to fetch from the archive's download namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// `file` — a single decompressed data file.
    File,
    /// `preview` — a rendered JPEG preview of the file.
    Preview,
    /// `download` — a tar archive of every file matching the query.
    Download,
}

impl FetchKind {
    const KEYWORDS: &'static [&'static str] = &["file", "preview", "download"];

    /// URL path keyword for this fetch kind.
    pub fn keyword(self) -> &'static str {
        match self {
            FetchKind::File => "file",
            FetchKind::Preview => "preview",
            FetchKind::Download => "download",
        }
    }
}

impl FromStr for FetchKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "file" => Ok(FetchKind::File),
            "preview" => Ok(FetchKind::Preview),
            "download" => Ok(FetchKind::Download),
            _ => Err(Error::invalid_option(s, Self::KEYWORDS)),
        }
    }
}

impl fmt::Display for FetchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
