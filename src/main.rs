//! bplate's main application entry point.
//! Handles command-line argument parsing and dispatches to the library operations.

use std::path::Path;

use bplate::{
    capture::{capture, CaptureOptions},
    cli::{get_args, Args, Command},
    error::{default_error_handler, Result},
    materialize::materialize,
    paths::resolve_data_root,
    prompt::DialoguerPrompter,
    storage::Storage,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Opens the storage under `data_dir`, or under the default data root.
fn open_storage(data_dir: Option<&Path>) -> Result<Storage> {
    let storage = Storage::new(resolve_data_root(data_dir.map(Path::to_path_buf))?);
    log::debug!("Using data directory '{}'", storage.root().display());
    Ok(storage)
}

/// Main application logic execution.
///
/// # Arguments
/// * `args` - Parsed command line arguments
///
/// # Returns
/// * `Result<()>` - Success or error status of the command
fn run(args: Args) -> Result<()> {
    let prompt = DialoguerPrompter::new();

    let data_dir = args.data_dir.as_deref();

    match args.command {
        Command::New { path, name } => {
            println!("[i] Creating new boilerplate...");
            let options = CaptureOptions { name, skip_confirm: args.yes };
            let report = capture(&open_storage(data_dir)?, &prompt, &path, &options)?;

            if report.sidecar_written {
                println!("Wrote configuration file to '{}'.", path.display());
            }
            println!(
                "Copied files from '{}' to '{}'.",
                report.capture_root.display(),
                report.info.path.display()
            );
            println!("Successfully copied {} files.", report.files_copied);
            println!("[!] Boilerplate '{}' created successfully.", report.info.name());
        }
        Command::Delete { name } => {
            let path = open_storage(data_dir)?.delete(&prompt, &name, args.yes)?;
            log::debug!("Deleted '{}'", path.display());
            println!("[!] Deleted boilerplate '{name}' successfully.");
        }
        Command::List => {
            let boilerplates = open_storage(data_dir)?.list()?;
            for info in &boilerplates {
                println!("* {}", info.name());
            }

            let count = boilerplates.len();
            if count > 0 {
                println!("\n{count} boilerplates listed.");
            } else {
                println!("\nNo boilerplates listed.");
            }
        }
        Command::Init { name, path } => {
            let report = materialize(&open_storage(data_dir)?, &name, &path)?;
            println!("Successfully copied {} files.", report.files_copied);
            println!(
                "[!] Boilerplate '{}' generated in '{}'.",
                report.info.name(),
                report.destination.display()
            );
        }
        Command::Show { name } => {
            let info = open_storage(data_dir)?.get(&name)?;
            println!("{}", info.config);
        }
        Command::Version { platform } => {
            println!("bplate {}", env!("CARGO_PKG_VERSION"));
            if platform {
                println!(
                    "Platform: {} ({}, {})",
                    std::env::consts::OS,
                    std::env::consts::ARCH,
                    std::env::consts::FAMILY
                );
            }
        }
    }

    Ok(())
}
