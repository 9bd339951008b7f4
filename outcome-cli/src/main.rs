//! # outcome CLI
//!
//! Small programs built on `outcome-core`.
//!
//! Usage:
//!   outcome lines <DIR>
//!   outcome parse <TEXT>
//!
//! Examples:
//!   outcome lines src
//!   outcome -v parse 1234

mod lines;
mod logger;
mod parse;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "outcome")]
#[command(author, version, about = "Drive outcome-core from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every line of every file below a directory
    Lines {
        /// Directory to walk
        #[arg(required = true)]
        dir: PathBuf,
    },
    /// Parse text as an integer
    Parse {
        /// Text to parse
        #[arg(required = true)]
        text: String,
    },
}

fn run(command: Commands) -> outcome_error::Result<()> {
    match command {
        Commands::Lines { dir } => {
            for line in lines::all_lines(&dir).get_or_throw()? {
                println!("{}", line);
            }
        }
        Commands::Parse { text } => {
            let number = parse::parse_number(&text).get_or_throw()?;
            println!("{}", number);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logger::init(logger::level_for(cli.verbose, cli.quiet)) {
        eprintln!("failed to install logger: {}", e);
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            log::debug!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from(["outcome", "-q", "parse", "12"]).unwrap();
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Parse { text } if text == "12"));
    }

    #[test]
    fn test_run_reports_failure() {
        let err = run(Commands::Parse { text: "twelve".into() }).unwrap_err();
        assert!(err.to_string().contains("'twelve' is not a number"));

        let dir = tempfile::tempdir().unwrap();
        assert!(run(Commands::Lines { dir: dir.path().to_path_buf() }).is_ok());
    }
}
