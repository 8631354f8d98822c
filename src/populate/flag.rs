//! Build-time flag handling.
//!
//! The bundled output branches on `IS_DEV` in the source constants file,
//! so the flag must be written before the bundler runs.

use anyhow::{bail, Context, Result};
use std::fs;

use crate::error::PackError;
use crate::layout::ProjectLayout;
use crate::mode::PackagingMode;

const FLAG_PREFIX: &str = "export const IS_DEV";

/// Rewrite the `IS_DEV` line of the constants file to match the mode.
pub fn write_dev_flag(layout: &ProjectLayout, mode: PackagingMode) -> Result<(), PackError> {
    write_dev_flag_inner(layout, mode).map_err(PackError::population)
}

fn write_dev_flag_inner(layout: &ProjectLayout, mode: PackagingMode) -> Result<()> {
    let path = layout.constants_path();
    let content = fs::read_to_string(&path)
        .with_context(|| format!("reading constants file '{}'", path.display()))?;

    let mut replaced = false;
    let mut out = String::with_capacity(content.len());
    for line in content.lines() {
        if line.starts_with(FLAG_PREFIX) {
            out.push_str(&format!(
                "{} = {};",
                FLAG_PREFIX,
                mode.is_development()
            ));
            replaced = true;
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }

    if !replaced {
        bail!(
            "constants file '{}' has no '{}' line to update",
            path.display(),
            FLAG_PREFIX
        );
    }

    fs::write(&path, out)
        .with_context(|| format!("writing constants file '{}'", path.display()))
}
