use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use pkgspec::application::{ResolveAction, ResolveOptions};
use pkgspec::document::DEFAULT_SECTION;
use pkgspec::error::{EXIT_FAILURE, Error};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// pkgspec - host tool package spec resolver
///
/// Print the Python packages from a host-tools YAML file that apply to one
/// operating system, one per line: a direct URL, a `name==version` pin, or a
/// bare name.
///
/// Examples:
///   pkgspec tools.yml linux
///   pkgspec --section debug_packages ~/hosttools/tools.yml windows
#[derive(Parser, Debug)]
#[command(author, version = env!("PKGSPEC_VERSION"), about)]
struct Cli {
    /// Host-tools YAML file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Operating system key, as used in each entry's `os` mapping
    #[arg(value_name = "OS")]
    pub os: String,

    /// Top-level key holding the package list
    #[arg(long, value_name = "KEY", default_value = DEFAULT_SECTION)]
    pub section: String,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_FAILURE),
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<Error>() {
            Some(typed) => {
                eprintln!("{}", typed);
                ExitCode::from(typed.exit_code())
            }
            None => {
                eprintln!("Error: {:#}", err);
                ExitCode::from(EXIT_FAILURE)
            }
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    let runtime = pkgspec::runtime::RealRuntime;
    let options = ResolveOptions::new(cli.config, cli.os).with_section(cli.section);
    let mut stdout = io::stdout().lock();

    ResolveAction::new(&runtime).run(&options, &mut stdout)?;
    Ok(())
}
