//! `goa cal <query>` — show calibration associations for a query.

use std::io::Write;

use anyhow::Result;

use crate::cli::output;
use crate::client::ArchiveClient;
use crate::manifest;

/// Run the cal command.
pub async fn run(client: &ArchiveClient, query: &str, raw: bool) -> Result<()> {
    let xml = client.query_calibration_manifest(query).await?;

    if raw {
        std::io::stdout().write_all(&xml)?;
        return Ok(());
    }

    let datasets = manifest::parse(&xml)?;

    if output::is_json() {
        output::print_json(&serde_json::to_value(&datasets)?);
        return Ok(());
    }

    if datasets.is_empty() {
        if !output::is_quiet() {
            eprintln!("  No calibration associations for '{query}'.");
        }
        return Ok(());
    }

    for dataset in &datasets {
        println!(
            "{} {} {}",
            dataset.datalabel, dataset.filename, dataset.md5
        );
        for cal in &dataset.calibrations {
            println!(
                "  {:<22} {:<24} {:<24} {}",
                cal.caltype, cal.datalabel, cal.filename, cal.url
            );
        }
        println!();
    }

    Ok(())
}
