//! Rollback controller: wraps the prepare→populate→finalize sequence and
//! owns the single failure boundary.
//!
//! Components raise typed errors and never terminate the process; this
//! module catches the first failure, restores the build directory from
//! backup, and hands the error to the caller. Centralizing the handling
//! here is what guarantees the restore-on-failure invariant no matter
//! which step failed.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::archive;
use crate::backup;
use crate::error::PackError;
use crate::layout::ProjectLayout;
use crate::mode::PackagingMode;
use crate::populate::{self, bundler::DEFAULT_BUNDLER};
use crate::report::Reporter;
use crate::stage::{self, StageOutcome};

/// Immutable inputs for one packaging run.
///
/// Interactive values (the publish version) are collected by the CLI
/// before the run starts; the pipeline itself never blocks on input.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub mode: PackagingMode,
    /// Version to stamp on publish builds.
    pub new_version: Option<String>,
    /// Bundler command line, program first. Data rather than control flow
    /// so tests can substitute a stub.
    pub bundler: Vec<String>,
}

impl BuildRequest {
    pub fn new(mode: PackagingMode) -> Self {
        Self {
            mode,
            new_version: None,
            bundler: DEFAULT_BUNDLER.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn bundler_program(&self) -> &str {
        self.bundler.first().map(String::as_str).unwrap_or_default()
    }
}

/// What a successful run produced.
#[derive(Debug)]
pub struct RunReport {
    pub mode: PackagingMode,
    /// Version of the exported manifest.
    pub version: String,
    pub archive: PathBuf,
    pub checksum: PathBuf,
}

enum Phase {
    Staging,
    Populating,
    Finalizing,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Staging => write!(f, "staging"),
            Phase::Populating => write!(f, "population"),
            Phase::Finalizing => write!(f, "finalizing"),
        }
    }
}

/// Run a full packaging cycle.
///
/// On success the backup is discarded and the report returned. On failure
/// the build directory is put back to its pre-run state: restored from
/// backup when it pre-existed, removed when this run created it. The
/// backup is kept on the failure path so the operator's last-known-good
/// build survives for inspection or retry.
pub fn run(
    layout: &ProjectLayout,
    request: &BuildRequest,
    reporter: &dyn Reporter,
) -> Result<RunReport, PackError> {
    let mut phase = Phase::Staging;
    let mut staged: Option<StageOutcome> = None;

    match drive(layout, request, reporter, &mut phase, &mut staged) {
        Ok(report) => {
            backup::discard(layout, reporter)?;
            Ok(report)
        }
        Err(err) => {
            reporter.fail(&format!("packaging failed during {phase}"));
            recover(layout, staged, reporter);
            Err(err)
        }
    }
}

fn drive(
    layout: &ProjectLayout,
    request: &BuildRequest,
    reporter: &dyn Reporter,
    phase: &mut Phase,
    staged: &mut Option<StageOutcome>,
) -> Result<RunReport, PackError> {
    if request.mode.is_development() {
        archive::remove_stale_dev_archive(layout, reporter)?;
    }

    *phase = Phase::Staging;
    *staged = Some(stage::prepare(layout, reporter)?);

    *phase = Phase::Populating;
    let manifest = populate::populate(layout, request, reporter)?;

    *phase = Phase::Finalizing;
    let output = archive::compress(layout, request.mode, &manifest.version, reporter)?;

    Ok(RunReport {
        mode: request.mode,
        version: manifest.version,
        archive: output.archive,
        checksum: output.checksum,
    })
}

/// Best-effort recovery; a failed restore is reported but never masks the
/// original error.
fn recover(layout: &ProjectLayout, staged: Option<StageOutcome>, reporter: &dyn Reporter) {
    match staged {
        Some(StageOutcome { pre_existed: false }) => {
            // The run created the directory, so there is no prior state to
            // restore; drop the half-written tree instead.
            let build = layout.build_dir();
            if build.exists() {
                if let Err(err) = fs::remove_dir_all(&build) {
                    reporter.fail(&format!(
                        "could not remove partial build directory '{}': {err}",
                        build.display()
                    ));
                }
            }
        }
        _ => {
            if let Err(err) = backup::restore(layout, reporter) {
                reporter.fail(&format!(
                    "restore failed, build directory may be inconsistent: {err}"
                ));
            }
        }
    }
}
