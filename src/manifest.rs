//! Calibration manifest parsing.
//!
//! The `calmgr` endpoint answers with an XML document listing each science
//! dataset that matched the query together with its associated calibration
//! files. [`ArchiveClient::query_calibration_manifest`] returns those bytes
//! unparsed; this module is the caller-side interpretation, matching by
//! local tag name so the archive's namespace declarations do not matter.
//!
//! [`ArchiveClient::query_calibration_manifest`]: crate::ArchiveClient::query_calibration_manifest

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Serialize;

use crate::error::Result;

/// One calibration file associated with a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Calibration {
    /// Calibration type, e.g. `bias`, `flat`, `photometric_standard`.
    pub caltype: String,
    pub datalabel: String,
    pub filename: String,
    pub md5: String,
    /// Direct download URL for the calibration file.
    pub url: String,
}

/// A science dataset and its associated calibrations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dataset {
    pub datalabel: String,
    pub filename: String,
    pub md5: String,
    pub calibrations: Vec<Calibration>,
}

/// Parse a calibration manifest document into its datasets.
///
/// Fields absent from the document stay empty; only malformed XML is an
/// error.
pub fn parse(xml: &[u8]) -> Result<Vec<Dataset>> {
    let text = String::from_utf8_lossy(xml);
    let mut reader = Reader::from_str(&text);
    reader.config_mut().trim_text(true);

    let mut datasets = Vec::new();
    let mut dataset: Option<Dataset> = None;
    let mut calibration: Option<Calibration> = None;
    let mut field: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
                match name.as_str() {
                    "dataset" => dataset = Some(Dataset::default()),
                    "calibration" => calibration = Some(Calibration::default()),
                    _ => field = Some(name),
                }
            }
            Event::Text(t) => {
                if let Some(name) = field.as_deref() {
                    let value = t.unescape().unwrap_or_default().into_owned();
                    if let Some(cal) = calibration.as_mut() {
                        assign_calibration(cal, name, value);
                    } else if let Some(ds) = dataset.as_mut() {
                        assign_dataset(ds, name, value);
                    }
                }
            }
            Event::End(end) => {
                match end.local_name().as_ref() {
                    b"calibration" => {
                        if let (Some(ds), Some(cal)) = (dataset.as_mut(), calibration.take()) {
                            ds.calibrations.push(cal);
                        }
                    }
                    b"dataset" => {
                        if let Some(ds) = dataset.take() {
                            datasets.push(ds);
                        }
                    }
                    _ => field = None,
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(datasets)
}

fn assign_dataset(dataset: &mut Dataset, field: &str, value: String) {
    match field {
        "datalabel" => dataset.datalabel = value,
        "filename" => dataset.filename = value,
        "md5" => dataset.md5 = value,
        _ => {}
    }
}

fn assign_calibration(cal: &mut Calibration, field: &str, value: String) {
    match field {
        "caltype" => cal.caltype = value,
        "datalabel" => cal.datalabel = value,
        "filename" => cal.filename = value,
        "md5" => cal.md5 = value,
        "url" => cal.url = value,
        _ => {}
    }
}
