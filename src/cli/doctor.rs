//! Local environment readiness check.

use std::path::Path;

use anyhow::Result;

use crate::auth;
use crate::client;

/// Check the credential file and report readiness.
pub async fn run(keydir: Option<&Path>) -> Result<()> {
    println!("GOA Doctor");
    println!("==========");
    println!();

    let os = std::env::consts::OS;
    let arch = std::env::consts::ARCH;
    println!("OS:   {os}");
    println!("Arch: {arch}");
    println!();

    match auth::load_credential(keydir) {
        Ok(_) => {
            println!("[OK] Session credential found ({})", auth::CREDENTIAL_FILE);
            println!();
            println!("Status: READY (authenticated)");
        }
        Err(e) => {
            println!("[!!] {e}");
            println!(
                "     Log in at {} and store the value of the '{}' cookie",
                client::ARCHIVE_BASE,
                client::SESSION_COOKIE
            );
            println!(
                "     in a file named {} in your home directory.",
                auth::CREDENTIAL_FILE
            );
            println!();
            println!("Status: READY (public data only)");
        }
    }

    Ok(())
}
