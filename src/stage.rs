//! Directory stager: brings the build directory into its prepared state
//! before population.
//!
//! After a successful [`prepare`] the build directory exists, is empty
//! except for an empty `icons` subdirectory, and (if it pre-existed) a
//! byte-identical backup of its prior contents sits in the backup path.

use anyhow::{Context, Result};
use std::fs;

use crate::backup;
use crate::error::PackError;
use crate::fsops;
use crate::layout::{ProjectLayout, ICONS_SUBDIR};
use crate::report::Reporter;

/// What the stager found when it started, needed by the rollback
/// controller to honor the restore-on-failure guarantee.
#[derive(Debug, Clone, Copy)]
pub struct StageOutcome {
    /// Whether the build directory existed before this run.
    pub pre_existed: bool,
}

/// Back up (when present), clear in place or create, then recreate the
/// required `icons` substructure.
pub fn prepare(layout: &ProjectLayout, reporter: &dyn Reporter) -> Result<StageOutcome, PackError> {
    let build = layout.build_dir();
    let pre_existed = build.is_dir();

    if pre_existed {
        backup::create(layout, reporter)?;
        reporter.start("Clearing build directory");
        fsops::clear_dir(&build)
            .with_context(|| format!("clearing build directory '{}'", build.display()))
            .map_err(PackError::stage)?;
        reporter.succeed();
    } else {
        reporter.start("Creating build directory");
        fs::create_dir_all(&build)
            .with_context(|| format!("creating build directory '{}'", build.display()))
            .map_err(PackError::stage)?;
        reporter.succeed();
    }

    let icons = layout.build_icons_dir();
    fs::create_dir_all(&icons)
        .with_context(|| format!("creating '{}' subdirectory '{}'", ICONS_SUBDIR, icons.display()))
        .map_err(PackError::stage)?;

    Ok(StageOutcome { pre_existed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::SilentReporter;
    use std::collections::BTreeSet;
    use tempfile::TempDir;

    fn entries(layout: &ProjectLayout) -> BTreeSet<String> {
        walkdir::WalkDir::new(layout.build_dir())
            .into_iter()
            .map(|e| {
                e.unwrap()
                    .path()
                    .strip_prefix(layout.build_dir())
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect()
    }

    #[test]
    fn test_prepare_creates_a_missing_build_dir() {
        let temp = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp.path());

        let outcome = prepare(&layout, &SilentReporter).unwrap();

        assert!(!outcome.pre_existed);
        assert!(layout.build_dir().is_dir());
        assert!(layout.build_icons_dir().is_dir());
        assert!(!layout.backup_dir().exists());
    }

    #[test]
    fn test_prepare_backs_up_and_clears_existing_content() {
        let temp = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp.path());
        fs::create_dir_all(layout.build_dir().join("old")).unwrap();
        fs::write(layout.build_dir().join("old/stale.js"), "stale").unwrap();

        let outcome = prepare(&layout, &SilentReporter).unwrap();

        assert!(outcome.pre_existed);
        assert_eq!(
            fs::read_to_string(layout.backup_dir().join("old/stale.js")).unwrap(),
            "stale"
        );
        assert!(!layout.build_dir().join("old").exists());
        assert!(layout.build_icons_dir().is_dir());
    }

    #[test]
    fn test_prepare_converges_from_absent_and_from_empty() {
        let temp_a = TempDir::new().unwrap();
        let layout_a = ProjectLayout::new(temp_a.path());
        prepare(&layout_a, &SilentReporter).unwrap();

        let temp_b = TempDir::new().unwrap();
        let layout_b = ProjectLayout::new(temp_b.path());
        fs::create_dir_all(layout_b.build_dir()).unwrap();
        prepare(&layout_b, &SilentReporter).unwrap();

        assert_eq!(entries(&layout_a), entries(&layout_b));
        assert_eq!(
            entries(&layout_a),
            BTreeSet::from(["".to_string(), "icons".to_string()])
        );
    }
}
