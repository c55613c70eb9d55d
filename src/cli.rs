//! Command-line interface implementation for bplate.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::DATA_DIR_ENV;
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for bplate.
#[derive(Parser, Debug)]
#[command(author, version, about = "bplate: store and generate boilerplates within seconds", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding stored boilerplates (defaults to ~/.bplate-data)
    #[arg(long, global = true, value_name = "DIR", env = DATA_DIR_ENV)]
    pub data_dir: Option<PathBuf>,

    /// Skip confirmation prompts before overwriting or deleting boilerplates
    #[arg(short, long, global = true)]
    pub yes: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Creates and stores a new boilerplate from a directory.
    ///
    /// The name is read from the directory's bplate_config.json when present,
    /// otherwise it is taken from --name or asked for.
    New {
        /// Directory containing the boilerplate code
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Name of the boilerplate when the directory has no configuration file
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Deletes a stored boilerplate.
    Delete {
        /// Name of the boilerplate to delete
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Shows the list of all available boilerplates.
    List,

    /// Generates a stored boilerplate into a directory.
    Init {
        /// Name of the boilerplate to generate
        #[arg(value_name = "NAME")]
        name: String,

        /// Directory the boilerplate is generated in; created if missing
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Shows the details of a stored boilerplate.
    Show {
        /// Name of the boilerplate
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Prints the bplate version.
    Version {
        /// Also print platform information
        #[arg(short, long)]
        platform: bool,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments or the subcommand are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::MissingRequiredArgument | ErrorKind::MissingSubcommand => {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            }
            _ => e.exit(),
        },
    }
}
