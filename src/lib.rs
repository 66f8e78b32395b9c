// Copyright 2026 GOA Client Contributors
// SPDX-License-Identifier: Apache-2.0

//! Client library for the Gemini Observatory Archive HTTP API.
//!
//! Queries the archive's JSON file-list endpoints, retrieves calibration
//! association manifests, and downloads data files, preview images, and tar
//! bundles. Proprietary data requires a session cookie stored in a
//! `.goa_auth` file (see [`auth`]); public data needs no credential.

pub mod auth;
pub mod cli;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod manifest;

pub use auth::Credential;
pub use client::ArchiveClient;
pub use endpoint::{FetchKind, ListFormat};
pub use error::{Error, Result};
