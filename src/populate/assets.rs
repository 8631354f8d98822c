//! Static asset copies, driven by declarative source→destination maps.
//!
//! New files are added by extending a map, not by editing control flow.
//! Every destination is a flat path in the build root (or its `icons`
//! subfolder); the maps never overlap with the bundler's output names.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::error::PackError;
use crate::layout::ProjectLayout;
use crate::mode::PackagingMode;

/// Markup/script/style fragments not produced by the bundler:
/// (path relative to `src/`, destination name in the build root).
pub const STATIC_FILES: &[(&str, &str)] = &[
    ("split-view/content-script.js", "content-script.js"),
    ("split-view/split-view.html", "split-view.html"),
    ("split-view/styles.css", "styles.css"),
    ("popup/popup.html", "popup.html"),
    ("popup/popup.js", "popup.js"),
    ("settings/settings.html", "settings.html"),
    ("settings/settings.js", "settings.js"),
    ("styles/reset.css", "reset.css"),
];

/// Icon set: destination name plus the variant used per mode. Development
/// builds ship the "work-in-progress" family under the release names so
/// the manifest needs no per-mode icon paths.
pub struct IconSpec {
    pub dest: &'static str,
    pub release: &'static str,
    pub development: &'static str,
}

pub const ICON_FILES: &[IconSpec] = &[
    IconSpec {
        dest: "icon-32.png",
        release: "icon-32.png",
        development: "wip-icon-32.png",
    },
    IconSpec {
        dest: "icon-48.png",
        release: "icon-48.png",
        development: "wip-icon-48.png",
    },
    IconSpec {
        dest: "browser-action-icon.svg",
        release: "browser-action-icon.svg",
        development: "wip-browser-action-icon.svg",
    },
];

/// Copy the static source fragments into the build root.
pub fn copy_static_files(layout: &ProjectLayout) -> Result<(), PackError> {
    copy_static_files_inner(layout).map_err(PackError::population)
}

fn copy_static_files_inner(layout: &ProjectLayout) -> Result<()> {
    let src_dir = layout.src_dir();
    let build_dir = layout.build_dir();
    for (source, dest) in STATIC_FILES {
        copy_file(&src_dir.join(source), &build_dir.join(dest))?;
    }
    Ok(())
}

/// Copy the icon family selected by the mode into `build/icons`.
pub fn copy_icons(layout: &ProjectLayout, mode: PackagingMode) -> Result<(), PackError> {
    copy_icons_inner(layout, mode).map_err(PackError::population)
}

fn copy_icons_inner(layout: &ProjectLayout, mode: PackagingMode) -> Result<()> {
    let icons_dir = layout.icons_dir();
    let dest_dir = layout.build_icons_dir();
    for icon in ICON_FILES {
        let source = match mode {
            PackagingMode::Publish => icon.release,
            PackagingMode::Development => icon.development,
        };
        copy_file(&icons_dir.join(source), &dest_dir.join(icon.dest))?;
    }
    Ok(())
}

fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    if !src.is_file() {
        bail!("source file not found: {}", src.display());
    }
    fs::copy(src, dst)
        .with_context(|| format!("copying '{}' to '{}'", src.display(), dst.display()))?;
    Ok(())
}
