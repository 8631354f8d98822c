//! Host tool validation before a run touches the build directory.
//!
//! Failing early on a missing bundler or `git` beats a mid-run rollback.

use anyhow::{bail, Result};

use crate::mode::PackagingMode;

/// Check that the external tools the run will invoke exist on PATH.
pub fn check_host_tools(mode: PackagingMode, bundler_program: &str) -> Result<()> {
    let mut required = vec![bundler_program];
    if mode.is_publish() {
        required.push("git");
    }

    let missing: Vec<&str> = required
        .into_iter()
        .filter(|tool| which::which(tool).is_err())
        .collect();

    if !missing.is_empty() {
        bail!("Missing required host tools: {}", missing.join(", "));
    }

    Ok(())
}
