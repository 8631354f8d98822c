//! Backup store: a single snapshot of the build directory at a fixed
//! sibling path.
//!
//! The snapshot is made by copying, never by renaming, so a crash while
//! the backup is being written leaves the build directory untouched. The
//! cost is a full-tree copy per run, which is acceptable for a directory
//! of extension assets.

use anyhow::{Context, Result};
use std::fs;

use crate::error::PackError;
use crate::fsops;
use crate::layout::ProjectLayout;
use crate::report::Reporter;

/// Snapshot the build directory into the backup path, replacing any stale
/// backup wholesale. No-op when the build directory does not exist.
pub fn create(layout: &ProjectLayout, reporter: &dyn Reporter) -> Result<(), PackError> {
    if !layout.build_dir().is_dir() {
        return Ok(());
    }
    reporter.start("Creating build directory backup");
    create_inner(layout).map_err(PackError::stage)?;
    reporter.succeed();
    Ok(())
}

fn create_inner(layout: &ProjectLayout) -> Result<()> {
    let backup = layout.backup_dir();
    if backup.exists() {
        fs::remove_dir_all(&backup)
            .with_context(|| format!("removing stale backup '{}'", backup.display()))?;
    }
    fsops::copy_tree(&layout.build_dir(), &backup)
        .with_context(|| format!("copying build directory to '{}'", backup.display()))
}

/// Replace the build directory with the backed-up state.
///
/// Safe to call from a failure handler: the build directory may be
/// half-written or already gone. No-op when no backup exists.
pub fn restore(layout: &ProjectLayout, reporter: &dyn Reporter) -> Result<(), PackError> {
    if !layout.backup_dir().is_dir() {
        return Ok(());
    }
    reporter.start("Restoring build directory from backup");
    restore_inner(layout).map_err(PackError::stage)?;
    reporter.succeed();
    Ok(())
}

fn restore_inner(layout: &ProjectLayout) -> Result<()> {
    let build = layout.build_dir();
    if build.exists() {
        fs::remove_dir_all(&build)
            .with_context(|| format!("removing damaged build directory '{}'", build.display()))?;
    }
    fsops::copy_tree(&layout.backup_dir(), &build)
        .with_context(|| format!("copying backup back to '{}'", build.display()))
}

/// Delete the backup. Idempotent; no-op when none exists.
pub fn discard(layout: &ProjectLayout, reporter: &dyn Reporter) -> Result<(), PackError> {
    let backup = layout.backup_dir();
    if !backup.exists() {
        return Ok(());
    }
    reporter.start("Removing build directory backup");
    fs::remove_dir_all(&backup)
        .with_context(|| format!("removing backup '{}'", backup.display()))
        .map_err(PackError::stage)?;
    reporter.succeed();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::SilentReporter;
    use tempfile::TempDir;

    fn layout_with_build(content: &[(&str, &str)]) -> (TempDir, ProjectLayout) {
        let temp = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp.path());
        for (path, data) in content {
            let full = layout.build_dir().join(path);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(full, data).unwrap();
        }
        (temp, layout)
    }

    #[test]
    fn test_create_copies_the_build_tree() {
        let (_temp, layout) =
            layout_with_build(&[("a.txt", "alpha"), ("sub/b.txt", "beta")]);

        create(&layout, &SilentReporter).unwrap();

        assert_eq!(
            fs::read_to_string(layout.backup_dir().join("a.txt")).unwrap(),
            "alpha"
        );
        assert_eq!(
            fs::read_to_string(layout.backup_dir().join("sub/b.txt")).unwrap(),
            "beta"
        );
    }

    #[test]
    fn test_create_overwrites_a_stale_backup() {
        let (_temp, layout) = layout_with_build(&[("current.txt", "now")]);
        fs::create_dir_all(layout.backup_dir()).unwrap();
        fs::write(layout.backup_dir().join("old.txt"), "stale").unwrap();

        create(&layout, &SilentReporter).unwrap();

        assert!(!layout.backup_dir().join("old.txt").exists());
        assert!(layout.backup_dir().join("current.txt").exists());
    }

    #[test]
    fn test_create_without_build_dir_is_a_noop() {
        let temp = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp.path());

        create(&layout, &SilentReporter).unwrap();

        assert!(!layout.backup_dir().exists());
    }

    #[test]
    fn test_restore_replaces_a_half_written_build_dir() {
        let (_temp, layout) = layout_with_build(&[("good.txt", "good")]);
        create(&layout, &SilentReporter).unwrap();

        // Simulate a run that died mid-population.
        fs::remove_file(layout.build_dir().join("good.txt")).unwrap();
        fs::write(layout.build_dir().join("partial.txt"), "junk").unwrap();

        restore(&layout, &SilentReporter).unwrap();

        assert_eq!(
            fs::read_to_string(layout.build_dir().join("good.txt")).unwrap(),
            "good"
        );
        assert!(!layout.build_dir().join("partial.txt").exists());
    }

    #[test]
    fn test_restore_works_when_build_dir_is_gone() {
        let (_temp, layout) = layout_with_build(&[("good.txt", "good")]);
        create(&layout, &SilentReporter).unwrap();
        fs::remove_dir_all(layout.build_dir()).unwrap();

        restore(&layout, &SilentReporter).unwrap();

        assert_eq!(
            fs::read_to_string(layout.build_dir().join("good.txt")).unwrap(),
            "good"
        );
    }

    #[test]
    fn test_restore_without_backup_is_a_noop() {
        let (_temp, layout) = layout_with_build(&[("a.txt", "alpha")]);

        restore(&layout, &SilentReporter).unwrap();

        assert_eq!(
            fs::read_to_string(layout.build_dir().join("a.txt")).unwrap(),
            "alpha"
        );
    }

    #[test]
    fn test_discard_after_create_leaves_no_backup() {
        let (_temp, layout) = layout_with_build(&[("a.txt", "alpha")]);
        create(&layout, &SilentReporter).unwrap();

        discard(&layout, &SilentReporter).unwrap();

        assert!(!layout.backup_dir().exists());
    }

    #[test]
    fn test_discard_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp.path());

        discard(&layout, &SilentReporter).unwrap();
        discard(&layout, &SilentReporter).unwrap();
    }
}
