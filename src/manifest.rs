//! Reading, rewriting, and exporting the extension manifest.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::PackError;
use crate::layout::ProjectLayout;
use crate::mode::PackagingMode;

/// Canonical addon title used for release builds.
pub const ADDON_TITLE: &str = "Split Tabs";

/// Suffix appended to the title so a locally installed development build
/// is distinguishable from the store version.
pub const DEVELOPMENT_SUFFIX: &str = " - Development";

/// The extension manifest. Only `name` and `version` are rewritten; every
/// other field round-trips untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    #[serde(flatten)]
    rest: serde_json::Map<String, serde_json::Value>,
}

impl Manifest {
    /// Rewrite the mode-dependent fields. Publish builds get the canonical
    /// title and the operator-supplied version; development builds keep
    /// their version and get the suffixed title.
    pub fn apply_mode(mut self, mode: PackagingMode, new_version: Option<&str>) -> Self {
        match mode {
            PackagingMode::Publish => {
                self.name = ADDON_TITLE.to_string();
                if let Some(version) = new_version {
                    self.version = version.to_string();
                }
            }
            PackagingMode::Development => {
                self.name = format!("{ADDON_TITLE}{DEVELOPMENT_SUFFIX}");
            }
        }
        self
    }
}

/// Read and parse the source manifest.
pub fn load(layout: &ProjectLayout) -> Result<Manifest, PackError> {
    load_inner(layout).map_err(PackError::manifest_read)
}

fn load_inner(layout: &ProjectLayout) -> Result<Manifest> {
    let path = layout.manifest_path();
    let bytes =
        fs::read(&path).with_context(|| format!("reading manifest '{}'", path.display()))?;
    serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing manifest '{}'", path.display()))
}

/// Write the updated manifest into the build directory.
pub fn export(layout: &ProjectLayout, manifest: &Manifest) -> Result<(), PackError> {
    export_inner(layout, manifest).map_err(PackError::manifest_write)
}

fn export_inner(layout: &ProjectLayout, manifest: &Manifest) -> Result<()> {
    let path = layout.build_dir().join("manifest.json");
    let json = serde_json::to_string_pretty(manifest)
        .context("serializing updated manifest")?;
    fs::write(&path, json)
        .with_context(|| format!("writing manifest '{}'", path.display()))
}
