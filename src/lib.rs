//! Packaging tool for the Split Tabs browser extension.
//!
//! Turns the extension source tree into a distributable artifact: an
//! unpacked `build/` directory plus a zip archive, for local development
//! or public release.
//!
//! The crate is organized around the build-directory lifecycle:
//!
//! - **Backup store** ([`backup`]) - single snapshot of the build
//!   directory at a fixed sibling path
//! - **Directory stager** ([`stage`]) - backup, in-place clear, and
//!   recreation of the required substructure
//! - **Population driver** ([`populate`]) - flag update, bundler
//!   invocation, and declarative asset copies
//! - **Rollback controller** ([`pipeline`]) - the single failure boundary
//!   that restores the pre-run state when any step fails
//!
//! Invariant: when control returns to the caller, the build directory is
//! either a complete consistent tree or absent, never half-populated.
//!
//! # Example
//!
//! ```rust,ignore
//! use addon_builder::{pipeline, BuildRequest, PackagingMode, ProjectLayout, SilentReporter};
//!
//! let layout = ProjectLayout::new(std::env::current_dir()?);
//! let request = BuildRequest::new(PackagingMode::Development);
//! let report = pipeline::run(&layout, &request, &SilentReporter)?;
//! println!("archive at {}", report.archive.display());
//! ```

pub mod archive;
pub mod backup;
pub mod error;
pub mod fsops;
pub mod layout;
pub mod manifest;
pub mod mode;
pub mod pipeline;
pub mod populate;
pub mod preflight;
pub mod process;
pub mod publish;
pub mod report;
pub mod stage;

pub use error::PackError;
pub use layout::ProjectLayout;
pub use mode::PackagingMode;
pub use pipeline::{BuildRequest, RunReport};
pub use report::{Reporter, SilentReporter, SpinnerReporter};
