use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use colored::Colorize;
use pourover_lib::{Error, ProfileStore, Recipe, Taste, repository::config::CoreConfig};
use tracing::warn;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod profile;

#[derive(Parser, Debug)]
#[command(name = "pourover")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Override the directory saved profiles are kept in
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Get advice for how a brew tasted
    Suggest {
        #[arg(value_enum)]
        taste: Taste,
    },
    /// Operate on saved profiles
    #[command(subcommand)]
    Profile(profile::Command),
    /// Show the pour-over recipe
    Recipe,
}

fn main() -> ExitCode {
    // Human friendly panicking in release mode
    human_panic::setup_panic!();

    // Logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            exit_code(&err).into()
        }
    }
}

fn run(cli: Cli) -> pourover_lib::Result<()> {
    match cli.command {
        Command::Suggest { taste } => {
            if let Some(advice) = advice(taste) {
                println!("{advice}");
            }
            Ok(())
        }
        Command::Profile(cmd) => {
            let cfg = resolve_config(cli.data_dir, CoreConfig::load)?;
            let store = ProfileStore::open(&cfg)?;
            profile::handle(store, &cfg, cmd)
        }
        Command::Recipe => {
            println!("{}", "Recipe".bold());
            for (i, step) in Recipe::default().steps().iter().enumerate() {
                println!("{:>2}. {step}", i + 1);
            }
            Ok(())
        }
    }
}

/// The line `suggest` prints, if any. A good or unset taste shows nothing.
fn advice(taste: Taste) -> Option<&'static str> {
    Some(taste.suggestion()).filter(|suggestion| !suggestion.is_empty())
}

/// Load the configuration, applying a `--data-dir` override.
///
/// With an override the XDG directories aren't needed, so a configuration that can't be
/// loaded falls back to the defaults.
fn resolve_config(
    data_dir: Option<PathBuf>,
    load: impl FnOnce() -> pourover_lib::Result<CoreConfig>,
) -> pourover_lib::Result<CoreConfig> {
    let Some(data_dir) = data_dir else {
        return load();
    };

    let mut cfg = load().unwrap_or_else(|err| {
        warn!("Using default configuration: {err}");
        CoreConfig::default()
    });
    cfg.data_dir = Some(data_dir);

    Ok(cfg)
}

fn exit_code(err: &Error) -> sysexits::ExitCode {
    match err {
        Error::NoHome => sysexits::ExitCode::Config,
        Error::InvalidKey(_) => sysexits::ExitCode::Software,
        Error::Io(_) => sysexits::ExitCode::IoErr,
        Error::Json(_) | Error::TomlSerialize(_) => sysexits::ExitCode::DataErr,
    }
}
