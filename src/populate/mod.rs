//! Population driver: fills the prepared build directory.
//!
//! Steps run in a fixed order, each atomic-or-abort:
//! 1. write the `IS_DEV` flag (consumed by the bundler, so it goes first)
//! 2. invoke the bundler
//! 3. copy static source fragments
//! 4. copy the mode-appropriate icon family
//! 5. export the rewritten manifest
//!
//! No step retries; the first failure propagates and the rollback
//! controller owns cleanup.

pub mod assets;
pub mod bundler;
pub mod flag;

use crate::error::PackError;
use crate::layout::ProjectLayout;
use crate::manifest::{self, Manifest};
use crate::pipeline::BuildRequest;
use crate::report::Reporter;

/// Run every population step against the prepared build directory and
/// return the manifest that was exported into it.
pub fn populate(
    layout: &ProjectLayout,
    request: &BuildRequest,
    reporter: &dyn Reporter,
) -> Result<Manifest, PackError> {
    reporter.start("Updating constants file");
    flag::write_dev_flag(layout, request.mode)?;
    reporter.succeed();

    reporter.start("Running bundler");
    bundler::run_bundler(layout, &request.bundler)?;
    reporter.succeed();

    reporter.start("Copying static files");
    assets::copy_static_files(layout)?;
    reporter.succeed();

    reporter.start("Copying icons");
    assets::copy_icons(layout, request.mode)?;
    reporter.succeed();

    reporter.start("Reading current manifest file");
    let manifest = manifest::load(layout)?;
    reporter.succeed();

    let manifest = manifest.apply_mode(request.mode, request.new_version.as_deref());

    reporter.start("Exporting manifest to build directory");
    manifest::export(layout, &manifest)?;
    reporter.succeed();

    Ok(manifest)
}
