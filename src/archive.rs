//! Archive creation: compresses the finished build directory into a zip
//! and writes a SHA-256 checksum sidecar next to it.
//!
//! Development builds produce a fixed-name `extension.zip` at the project
//! root; publish builds produce a dated, versioned archive under
//! `packages/`.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use time::macros::format_description;
use time::OffsetDateTime;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::PackError;
use crate::layout::ProjectLayout;
use crate::mode::PackagingMode;
use crate::report::Reporter;

pub const DEV_ARCHIVE_NAME: &str = "extension.zip";
const PUBLISH_ARCHIVE_PREFIX: &str = "split-tabs";
const CHECKSUM_EXTENSION: &str = "zip.sha256";

/// Paths produced by a successful compression.
#[derive(Debug)]
pub struct ArchiveOutput {
    pub archive: PathBuf,
    pub checksum: PathBuf,
}

/// Delete a leftover development archive from a previous run.
pub fn remove_stale_dev_archive(
    layout: &ProjectLayout,
    reporter: &dyn Reporter,
) -> Result<(), PackError> {
    let path = layout.base_dir().join(DEV_ARCHIVE_NAME);
    if !path.is_file() {
        return Ok(());
    }
    reporter.start("Cleaning up old extension.zip");
    fs::remove_file(&path)
        .with_context(|| format!("removing old archive '{}'", path.display()))
        .map_err(PackError::compression)?;
    reporter.succeed();
    Ok(())
}

/// Compress the build directory into the mode-appropriate archive and
/// write its checksum sidecar.
pub fn compress(
    layout: &ProjectLayout,
    mode: PackagingMode,
    version: &str,
    reporter: &dyn Reporter,
) -> Result<ArchiveOutput, PackError> {
    reporter.start("Compressing build directory");
    let output = compress_inner(layout, mode, version).map_err(PackError::compression)?;
    reporter.succeed();
    Ok(output)
}

fn compress_inner(
    layout: &ProjectLayout,
    mode: PackagingMode,
    version: &str,
) -> Result<ArchiveOutput> {
    let build = layout.build_dir();
    let path = archive_path(layout, mode, version)?;

    let file = File::create(&path)
        .with_context(|| format!("creating archive '{}'", path.display()))?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(&build) {
        let entry = entry
            .with_context(|| format!("walking build directory '{}'", build.display()))?;
        let relative = entry
            .path()
            .strip_prefix(&build)
            .with_context(|| format!("resolving path relative to '{}'", build.display()))?;
        if relative.as_os_str().is_empty() {
            continue;
        }
        let name = relative.to_string_lossy();

        if entry.file_type().is_dir() {
            writer
                .add_directory(name.as_ref(), options)
                .with_context(|| format!("adding directory '{name}' to archive"))?;
        } else {
            writer
                .start_file(name.as_ref(), options)
                .with_context(|| format!("adding '{name}' to archive"))?;
            let mut source = File::open(entry.path())
                .with_context(|| format!("opening '{}'", entry.path().display()))?;
            io::copy(&mut source, &mut writer)
                .with_context(|| format!("compressing '{name}'"))?;
        }
    }

    writer
        .finish()
        .with_context(|| format!("finishing archive '{}'", path.display()))?;

    let checksum = write_checksum(&path)?;
    Ok(ArchiveOutput {
        archive: path,
        checksum,
    })
}

fn archive_path(layout: &ProjectLayout, mode: PackagingMode, version: &str) -> Result<PathBuf> {
    match mode {
        PackagingMode::Development => Ok(layout.base_dir().join(DEV_ARCHIVE_NAME)),
        PackagingMode::Publish => {
            let format = format_description!("[year]-[month]-[day]");
            let date = OffsetDateTime::now_utc()
                .format(&format)
                .context("formatting archive date")?;
            let packages = layout.packages_dir();
            fs::create_dir_all(&packages).with_context(|| {
                format!("creating packages directory '{}'", packages.display())
            })?;
            Ok(packages.join(format!("{PUBLISH_ARCHIVE_PREFIX}-{version}-{date}.zip")))
        }
    }
}

/// Checksum format matches `sha256sum` output so the archive can be
/// verified with `sha256sum -c` from its directory.
fn write_checksum(archive: &Path) -> Result<PathBuf> {
    let mut file = File::open(archive)
        .with_context(|| format!("opening archive '{}'", archive.display()))?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)
        .with_context(|| format!("hashing archive '{}'", archive.display()))?;
    let hex: String = hasher
        .finalize()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect();

    let filename = archive
        .file_name()
        .context("resolving archive file name")?
        .to_string_lossy();
    let path = archive.with_extension(CHECKSUM_EXTENSION);
    fs::write(&path, format!("{hex}  {filename}\n"))
        .with_context(|| format!("writing checksum '{}'", path.display()))?;
    Ok(path)
}
