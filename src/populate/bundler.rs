//! External module-bundler invocation.

use anyhow::{bail, Context, Result};

use crate::error::PackError;
use crate::layout::ProjectLayout;
use crate::process::Cmd;

/// Default bundler invocation, run from the project root.
pub const DEFAULT_BUNDLER: &[&str] = &["npx", "webpack"];

/// Run the bundler command from the project root, letting its output
/// stream to the terminal. A non-zero exit fails the step; no timeout is
/// applied, so a hung bundler blocks the run.
pub fn run_bundler(layout: &ProjectLayout, command: &[String]) -> Result<(), PackError> {
    run_bundler_inner(layout, command).map_err(PackError::population)
}

fn run_bundler_inner(layout: &ProjectLayout, command: &[String]) -> Result<()> {
    let Some((program, args)) = command.split_first() else {
        bail!("bundler command is empty");
    };

    Cmd::new(program)
        .args(args)
        .dir(layout.base_dir())
        .error_msg(format!("bundler '{program}' failed"))
        .run()
        .with_context(|| format!("bundling sources in '{}'", layout.base_dir().display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn command(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_bundler_runs_in_the_project_root() {
        let temp = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp.path());
        fs::create_dir_all(layout.build_dir()).unwrap();

        run_bundler(
            &layout,
            &command(&["sh", "-c", "printf bundled > build/out.js"]),
        )
        .unwrap();

        assert_eq!(
            fs::read_to_string(layout.build_dir().join("out.js")).unwrap(),
            "bundled"
        );
    }

    #[test]
    fn test_nonzero_exit_fails_the_step() {
        let temp = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp.path());

        let err = run_bundler(&layout, &command(&["sh", "-c", "exit 3"])).unwrap_err();

        assert!(matches!(err, PackError::Population(_)));
        assert!(err.to_string().contains("exit code 3"));
    }

    #[test]
    fn test_empty_command_is_rejected() {
        let temp = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp.path());

        let err = run_bundler(&layout, &[]).unwrap_err();

        assert!(matches!(err, PackError::Population(_)));
    }
}
