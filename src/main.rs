// Copyright 2026 GOA Client Contributors
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use goa_client::{cli, client, ArchiveClient};

#[derive(Parser)]
#[command(
    name = "goa",
    about = "goa — client for the Gemini Observatory Archive",
    version,
    after_help = "Run 'goa <command> --help' for details on each command.\nQueries are archive search fragments, e.g. /canonical/GN-2010B-Q-22/GMOS-N/20101231."
)]
struct Cli {
    /// Output results as JSON (machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Archive base URL
    #[arg(long, global = true, default_value = client::ARCHIVE_BASE)]
    base: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List files matching an archive search query
    List {
        /// Search query, e.g. "/canonical/GN-2010B-Q-22/GMOS-N/20101231"
        query: String,
        /// Full metadata summary instead of the brief file list
        #[arg(long)]
        full: bool,
    },
    /// Show calibration associations for a query
    Cal {
        /// Search query, optionally ending in a calibration type,
        /// e.g. ".../20101231/photometric_standard"
        query: String,
        /// Dump the manifest XML verbatim instead of parsing it
        #[arg(long)]
        raw: bool,
    },
    /// Download a single data file or its preview image
    Fetch {
        /// Archive filename, e.g. "N20101231S0123.fits.bz2"
        file: String,
        /// Fetch the rendered JPEG preview instead of the data file
        #[arg(long)]
        preview: bool,
        /// Directory for the downloaded file
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        /// Directory containing the .goa_auth credential file
        #[arg(long)]
        keydir: Option<PathBuf>,
        /// Skip the session cookie (public data only)
        #[arg(long)]
        anonymous: bool,
    },
    /// Download a tar bundle of all files matching a query
    Download {
        /// Search query, e.g. "/canonical/GN-2010B-Q-22/GMOS-N/20101231"
        query: String,
        /// Name for the tar file
        #[arg(long)]
        tar: Option<String>,
        /// Directory for the downloaded bundle
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        /// Directory containing the .goa_auth credential file
        #[arg(long)]
        keydir: Option<PathBuf>,
        /// Skip the session cookie (public data only)
        #[arg(long)]
        anonymous: bool,
    },
    /// Check the local environment (credential file)
    Doctor {
        /// Directory containing the .goa_auth credential file
        #[arg(long)]
        keydir: Option<PathBuf>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global flags via environment variables so all modules can check them
    if cli.json {
        std::env::set_var("GOA_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("GOA_QUIET", "1");
    }
    if cli.verbose {
        std::env::set_var("GOA_VERBOSE", "1");
    }

    init_tracing(cli.verbose);

    let archive = ArchiveClient::with_base(&cli.base);

    let result = match cli.command {
        Commands::List { query, full } => cli::list_cmd::run(&archive, &query, full).await,
        Commands::Cal { query, raw } => cli::cal_cmd::run(&archive, &query, raw).await,
        Commands::Fetch {
            file,
            preview,
            dir,
            keydir,
            anonymous,
        } => {
            cli::fetch_cmd::run(
                &archive,
                &file,
                preview,
                &dir,
                keydir.as_deref(),
                anonymous,
            )
            .await
        }
        Commands::Download {
            query,
            tar,
            dir,
            keydir,
            anonymous,
        } => {
            cli::download_cmd::run(
                &archive,
                &query,
                tar.as_deref(),
                &dir,
                keydir.as_deref(),
                anonymous,
            )
            .await
        }
        Commands::Doctor { keydir } => cli::doctor::run(keydir.as_deref()).await,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "goa", &mut std::io::stdout());
            Ok(())
        }
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        if !cli::output::is_quiet() && !cli::output::is_json() {
            eprintln!("  Error: {e:#}");
        }
        if cli::output::is_json() {
            cli::output::print_json(&serde_json::json!({
                "error": true,
                "message": format!("{e:#}"),
            }));
        }
        std::process::exit(1);
    }

    result
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "goa_client=debug"
    } else {
        "goa_client=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
