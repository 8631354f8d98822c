//! Post-build collaborators: operator prompts, version-control push, and
//! browser launch.
//!
//! Everything here runs outside the rollback boundary; by the time these
//! steps execute the build directory and archive are already final.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::process::Command;

use crate::layout::ProjectLayout;
use crate::process::Cmd;

/// Add-on store submission page opened after a publish run.
pub const SUBMIT_URL: &str =
    "https://addons.mozilla.org/fr/developers/addon/split-tabs/versions/submit/";

/// Local extension debugging page opened after a development run.
pub const DEBUG_URL: &str = "about:debugging#/runtime/this-firefox";

/// Ask the operator for the version to publish.
pub fn prompt_new_version(current_version: &str) -> Result<String> {
    println!("Current version of the extension: {current_version}");
    prompt_line("Enter new version number:")
}

/// Yes/no confirmation before pushing the release commit.
pub fn confirm_push() -> Result<bool> {
    println!("\nPush changes to github ?");
    let answer = prompt_line("(y/n):")?;
    Ok(answer == "y")
}

fn prompt_line(prompt: &str) -> Result<String> {
    println!("{prompt}");
    print!("> ");
    io::stdout().flush().context("flushing prompt")?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("reading operator input")?;
    Ok(line.trim().to_string())
}

/// Commit and push the released state with a `Version <v>` message.
pub fn push_release(layout: &ProjectLayout, version: &str) -> Result<()> {
    let root = layout.base_dir();
    Cmd::new("git").arg("add").arg(".").dir(root).run()?;
    Cmd::new("git")
        .arg("commit")
        .arg("-m")
        .arg(format!("Version {version}"))
        .dir(root)
        .run()?;
    Cmd::new("git")
        .args(["push", "origin", "master"])
        .dir(root)
        .error_msg("git push failed")
        .run()?;
    Ok(())
}

/// Open the given URL in Firefox, degrading to a printed hint when the
/// browser cannot be launched on this host.
pub fn open_in_firefox(url: &str) {
    let launch: Option<(&str, Vec<&str>)> = if cfg!(target_os = "linux") {
        Some(("firefox", vec!["-url", url]))
    } else if cfg!(target_os = "macos") {
        Some(("open", vec!["-a", "Firefox", url]))
    } else if cfg!(target_os = "windows") {
        Some((
            "C:\\Program Files\\Mozilla Firefox\\firefox.exe",
            vec!["-url", url],
        ))
    } else {
        None
    };

    match launch {
        Some((program, args)) => {
            if Command::new(program).args(&args).status().is_err() {
                println!("Could not find Firefox. Please open {url} manually.");
            }
        }
        None => println!("Unsupported platform. Please open {url} manually."),
    }
}
