//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use portico_core::config;
use portico_core::logging::{self, LogTarget};

mod commands;

#[derive(Parser)]
#[command(name = "portico")]
#[command(version)]
#[command(about = "Terminal login shell backed by a mock authentication service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in without the terminal UI and print the resulting session
    Login {
        /// Username to authenticate with
        #[arg(short, long)]
        username: String,

        /// Password to authenticate with
        #[arg(short, long, env = "PORTICO_PASSWORD", hide_env_values = true)]
        password: String,

        /// Print the session snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Print a fresh config built from defaults
    Generate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // Config commands must work even when the file on disk is broken.
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Generate => commands::config::generate(),
        },

        Some(Commands::Login {
            username,
            password,
            json,
        }) => {
            let config = config::Config::load().context("load config")?;
            logging::init(&config.log, LogTarget::Stderr).context("init logging")?;
            let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
            rt.block_on(commands::login::run(&username, &password, json, &config))
        }

        // default to the interactive shell
        None => {
            let config = config::Config::load().context("load config")?;
            let _log_guard = logging::init(&config.log, LogTarget::File(config.log.file_path()))
                .context("init logging")?;
            let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
            let _rt_guard = rt.enter();
            commands::interactive::run(&config)
        }
    }
}
