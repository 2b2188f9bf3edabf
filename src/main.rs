use anyhow::Result;
use clap::{Parser, Subcommand};

use jciphers::ciphers::Direction;
use jciphers::cli::{handle_cipher_command, handle_config_command, CipherCommands};
use jciphers::config::{paths::CipherPaths, settings::Settings};
use jciphers::logging;

#[derive(Parser)]
#[command(
    name = "jciphers",
    author = "Jonathan Ferreira",
    version,
    about = "Interactive terminal playground for classical ciphers",
    long_about = "jciphers teaches and demonstrates classical ciphers: the Caesar \
                  shift, Mlecchita Vikaalpa substitution, the Vigenère cipher and \
                  the rail fence transposition. Run it without arguments for the \
                  interactive menu."
)]
struct Cli {
    /// Tracing filter for diagnostics on stderr (e.g. "debug")
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu
    Menu,

    /// Encrypt a message
    Encrypt {
        /// Print the result as JSON
        #[arg(long, global = true)]
        json: bool,

        #[command(subcommand)]
        cipher: CipherCommands,
    },

    /// Decrypt a message
    Decrypt {
        /// Print the result as JSON
        #[arg(long, global = true)]
        json: bool,

        #[command(subcommand)]
        cipher: CipherCommands,
    },

    /// Show current configuration and paths
    Config {
        /// Write the current settings to disk
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = CipherPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    logging::init(&logging::resolve_filter(
        cli.log_level.as_deref(),
        &settings.log_level,
    ));

    match cli.command {
        None | Some(Commands::Menu) => jciphers::menu::run_interactive(&settings)?,
        Some(Commands::Encrypt { json, cipher }) => {
            handle_cipher_command(Direction::Encrypt, cipher, json)?
        }
        Some(Commands::Decrypt { json, cipher }) => {
            handle_cipher_command(Direction::Decrypt, cipher, json)?
        }
        Some(Commands::Config { init }) => handle_config_command(&paths, &settings, init)?,
    }

    Ok(())
}
