//! `goa list <query>` — query the archive file list or full summary.

use anyhow::Result;
use serde_json::Value;

use crate::cli::output;
use crate::client::{ArchiveClient, FileRecord};
use crate::endpoint::ListFormat;

/// Run the list command.
pub async fn run(client: &ArchiveClient, query: &str, full: bool) -> Result<()> {
    let format = if full {
        ListFormat::FileSummary
    } else {
        ListFormat::FileList
    };

    let records = client.query_file_list(query, format).await?;

    if output::is_json() {
        let array = records.into_iter().map(Value::Object).collect();
        output::print_json(&Value::Array(array));
        return Ok(());
    }

    if records.is_empty() {
        if !output::is_quiet() {
            eprintln!("  No files matched '{query}'.");
        }
        return Ok(());
    }

    if full {
        print_summary(&records);
    } else {
        print_brief(&records);
    }

    Ok(())
}

fn print_brief(records: &[FileRecord]) {
    for record in records {
        println!("{}", text(record, "filename"));
        println!(
            "-- file size: {}, data size: {}",
            number(record, "file_size"),
            number(record, "data_size")
        );
    }
}

fn print_summary(records: &[FileRecord]) {
    println!(
        "{:<24} {:<26} {:<12} {:<8} {}",
        "Filename", "Data Label", "ObsClass", "QA", "Object"
    );
    let mut total_data_size: u64 = 0;
    for record in records {
        total_data_size += number(record, "data_size");
        println!(
            "{:<24} {:<26} {:<12} {:<8} {}",
            text(record, "name"),
            text(record, "data_label"),
            text(record, "observation_class"),
            text(record, "qa_state"),
            text(record, "object"),
        );
    }
    println!("Total data size: {total_data_size}");
}

fn text<'a>(record: &'a FileRecord, key: &str) -> &'a str {
    record.get(key).and_then(Value::as_str).unwrap_or("-")
}

fn number(record: &FileRecord, key: &str) -> u64 {
    record.get(key).and_then(Value::as_u64).unwrap_or(0)
}
