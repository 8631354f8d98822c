//! Project layout: every path the packager reads or writes, derived from
//! the extension's base directory.

use std::path::{Path, PathBuf};

pub const BUILD_DIR_NAME: &str = "build";
pub const BACKUP_DIR_NAME: &str = "build_backup";
pub const ICONS_SUBDIR: &str = "icons";
pub const PACKAGES_DIR_NAME: &str = "packages";

/// Filesystem layout of an extension checkout.
///
/// The build directory and its backup are process-exclusive while a run is
/// in progress; no lock file is taken.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    base_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Source tree root containing the manifest and per-feature subfolders.
    pub fn src_dir(&self) -> PathBuf {
        self.base_dir.join("src")
    }

    /// Icon assets, both release and work-in-progress variants.
    pub fn icons_dir(&self) -> PathBuf {
        self.base_dir.join(ICONS_SUBDIR)
    }

    /// The staged output tree.
    pub fn build_dir(&self) -> PathBuf {
        self.base_dir.join(BUILD_DIR_NAME)
    }

    /// Snapshot of the build directory's prior state, sibling to it.
    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join(BACKUP_DIR_NAME)
    }

    /// Destination for versioned release archives.
    pub fn packages_dir(&self) -> PathBuf {
        self.base_dir.join(PACKAGES_DIR_NAME)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.src_dir().join("manifest.json")
    }

    /// The build-time flag file the bundler output branches on.
    pub fn constants_path(&self) -> PathBuf {
        self.src_dir().join("utils").join("constants.ts")
    }

    pub fn build_icons_dir(&self) -> PathBuf {
        self.build_dir().join(ICONS_SUBDIR)
    }
}
