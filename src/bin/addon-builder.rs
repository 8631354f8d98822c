use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use addon_builder::{
    manifest, pipeline, preflight, publish, BuildRequest, PackagingMode, ProjectLayout,
    SpinnerReporter,
};

#[derive(Parser)]
#[command(name = "addon-builder")]
#[command(about = "Packages the Split Tabs browser extension")]
#[command(version)]
struct Cli {
    /// Package for public release instead of local development
    #[arg(short = 'p', long)]
    publish: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mode = if cli.publish {
        PackagingMode::Publish
    } else {
        PackagingMode::Development
    };

    match run(mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("\nFailed to build extension, terminating...\n");
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(mode: PackagingMode) -> Result<()> {
    println!(">> Packaging for {mode} <<\n");

    let base_dir = std::env::current_dir().context("resolving current directory")?;
    let layout = ProjectLayout::new(base_dir);
    let mut request = BuildRequest::new(mode);

    preflight::check_host_tools(mode, request.bundler_program())?;

    // The publish version is prompted up front so the pipeline itself
    // never blocks on input.
    if mode.is_publish() {
        let current = manifest::load(&layout)?;
        request.new_version = Some(publish::prompt_new_version(&current.version)?);
    }

    let reporter = SpinnerReporter::new();
    let report = pipeline::run(&layout, &request, &reporter)?;
    println!("\nArchive written to {}", report.archive.display());

    match mode {
        PackagingMode::Publish => {
            if publish::confirm_push()? {
                publish::push_release(&layout, &report.version)?;
                println!("Changes pushed to github");
            }
            publish::open_in_firefox(publish::SUBMIT_URL);
        }
        PackagingMode::Development => {
            publish::open_in_firefox(publish::DEBUG_URL);
        }
    }

    println!("\nPackaging complete");
    Ok(())
}
