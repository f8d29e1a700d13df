use clap::{Parser, Subcommand, ValueEnum};
use packver_core::{to_string, to_value, to_value_from_str, SemanticVersion, VersionField};
use std::error::Error;
use std::io;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct MainArguments {
    #[clap(subcommand)]
    command: MainCommand,
    /// Print packed values as zero padded hexadecimal
    #[arg(long, global = true)]
    hex: bool,
}

////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BumpField {
    Major,
    Minor,
    Patch,
}

impl From<BumpField> for VersionField {
    fn from(field: BumpField) -> Self {
        match field {
            BumpField::Major => Self::Major,
            BumpField::Minor => Self::Minor,
            BumpField::Patch => Self::Patch,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Subcommand)]
enum MainCommand {
    /// Pack a dotted version into its integer form
    Pack {
        #[arg(value_name = "VERSION")]
        text: String,
    },
    /// Pack separate major, minor and patch numbers
    PackParts {
        #[arg(allow_negative_numbers = true)]
        major: i32,
        #[arg(allow_negative_numbers = true)]
        minor: i32,
        #[arg(allow_negative_numbers = true)]
        patch: i32,
    },
    /// Print the dotted form of a packed integer
    Unpack {
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },
    /// Check whether NEXT is a single step successor of PREVIOUS
    Check {
        previous: SemanticVersion,
        next: SemanticVersion,
    },
    /// Advance one field of a version
    Bump {
        field: BumpField,
        #[arg(value_name = "VERSION")]
        current: SemanticVersion,
    },
}

////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Eq, PartialEq)]
struct CommandOutput {
    text: String,
    success: bool,
}

impl CommandOutput {
    fn success(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }

    fn failure(text: String) -> Self {
        Self {
            text,
            success: false,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////

fn format_value(value: i32, hex: bool) -> String {
    if hex {
        format!("{:#010x}", value)
    } else {
        value.to_string()
    }
}

fn execute(command: MainCommand, hex: bool) -> Result<CommandOutput, Box<dyn Error>> {
    let output = match command {
        MainCommand::Pack { text } => {
            CommandOutput::success(format_value(to_value_from_str(&text)?, hex))
        }
        MainCommand::PackParts {
            major,
            minor,
            patch,
        } => CommandOutput::success(format_value(to_value(major, minor, patch)?, hex)),
        MainCommand::Unpack { value } => CommandOutput::success(to_string(value)),
        MainCommand::Check { previous, next } => {
            if next.is_compatible_with(&previous) {
                CommandOutput::success(String::from("compatible"))
            } else {
                CommandOutput::failure(String::from("incompatible"))
            }
        }
        MainCommand::Bump { field, current } => {
            CommandOutput::success(current.with_incremented(field.into())?.to_string())
        }
    };

    Ok(output)
}

////////////////////////////////////////////////////////////////////////////////////////////////////

fn main() -> Result<ExitCode, Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let arguments = MainArguments::parse();

    debug!(command = ?arguments.command, hex = arguments.hex, "executing command");

    let output = execute(arguments.command, arguments.hex)?;

    debug!(success = output.success, "command finished");

    println!("{}", output.text);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

////////////////////////////////////////////////////////////////////////////////////////////////////
