use std::process::Command;

use anyhow::{Context, Result};

/// Workspace crates, leaves first. Each must compile with only its own
/// dependencies so the layering stays intact.
const PACKAGES: &[&str] = &["forte-domain", "forte-core", "forte-infra", "forte-api"];

/// Check that every crate compiles on its own.
pub fn check_packages() -> Result<()> {
    println!("Checking {} workspace crates in isolation...", PACKAGES.len());

    for (index, package) in PACKAGES.iter().enumerate() {
        println!("\n[{}/{}] cargo check -p {package} --all-targets", index + 1, PACKAGES.len());

        let status = Command::new("cargo")
            .args(["check", "-p", package, "--all-targets"])
            .status()
            .with_context(|| format!("Failed to run cargo check for '{package}'"))?;

        if !status.success() {
            anyhow::bail!("Crate '{package}' failed to compile on its own");
        }

        println!("✅ {package} compiled successfully");
    }

    println!("\n✅ All {} crates compile in isolation!", PACKAGES.len());

    Ok(())
}
