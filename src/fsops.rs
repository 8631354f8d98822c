//! Filesystem primitives shared by the stager and the backup store.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Recursively copy `src` into `dst`, preserving symlinks as symlinks.
///
/// `dst` is created if missing; existing files under it are overwritten.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    for entry in WalkDir::new(src) {
        let entry =
            entry.with_context(|| format!("walking directory tree '{}'", src.display()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .with_context(|| format!("resolving path relative to '{}'", src.display()))?;
        let target = dst.join(relative);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("creating directory '{}'", target.display()))?;
        } else if file_type.is_symlink() {
            #[cfg(unix)]
            {
                let link_target = fs::read_link(entry.path())
                    .with_context(|| format!("reading symlink '{}'", entry.path().display()))?;
                if target.is_symlink() || target.exists() {
                    fs::remove_file(&target)
                        .with_context(|| format!("replacing '{}'", target.display()))?;
                }
                std::os::unix::fs::symlink(&link_target, &target)
                    .with_context(|| format!("creating symlink '{}'", target.display()))?;
            }
            #[cfg(not(unix))]
            anyhow::bail!(
                "cannot copy symlink '{}' on this platform",
                entry.path().display()
            );
        } else {
            fs::copy(entry.path(), &target).with_context(|| {
                format!(
                    "copying '{}' to '{}'",
                    entry.path().display(),
                    target.display()
                )
            })?;
        }
    }

    Ok(())
}

/// Delete everything under `dir` while keeping `dir` itself.
///
/// Clearing in place avoids a window where the directory root is absent
/// and observable by concurrent tooling.
pub fn clear_dir(dir: &Path) -> Result<()> {
    for entry in
        fs::read_dir(dir).with_context(|| format!("reading directory '{}'", dir.display()))?
    {
        let entry =
            entry.with_context(|| format!("iterating directory '{}'", dir.display()))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .with_context(|| format!("inspecting '{}'", path.display()))?;
        if file_type.is_dir() {
            fs::remove_dir_all(&path)
                .with_context(|| format!("removing directory '{}'", path.display()))?;
        } else {
            fs::remove_file(&path)
                .with_context(|| format!("removing file '{}'", path.display()))?;
        }
    }

    Ok(())
}
