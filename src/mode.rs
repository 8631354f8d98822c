use std::fmt;

/// Build variant selected once per run from the CLI.
///
/// The mode decides which icon family, manifest fields, and archive
/// destination the population and finalize steps use. Backup and restore
/// behave identically in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackagingMode {
    /// Local build loaded via `about:debugging`; work-in-progress icons,
    /// name suffixed so the installed copy is distinguishable.
    Development,
    /// Release build destined for the add-on store.
    Publish,
}

impl PackagingMode {
    pub fn is_publish(self) -> bool {
        matches!(self, PackagingMode::Publish)
    }

    pub fn is_development(self) -> bool {
        matches!(self, PackagingMode::Development)
    }
}

impl fmt::Display for PackagingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackagingMode::Development => write!(f, "development"),
            PackagingMode::Publish => write!(f, "publish"),
        }
    }
}
