mod commands;
mod input;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eventbrief_core::config::EventbriefConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "eventbrief")]
#[command(about = "Pull upcoming events out of research briefs and turn them into calendar invites")]
#[command(version)]
struct Cli {
    /// Use this config file instead of ~/.config/eventbrief/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every date found in the input
    Dates {
        /// Input file ("-" or omitted for stdin)
        file: Option<PathBuf>,
    },
    /// Drop lines that mention dates before today
    Filter {
        /// Input file ("-" or omitted for stdin)
        file: Option<PathBuf>,

        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        today: Option<String>,
    },
    /// Extract events from a brief
    Events {
        /// Input file ("-" or omitted for stdin)
        file: Option<PathBuf>,

        /// Tag marking event bullets (defaults to extract.tag from config)
        #[arg(long)]
        tag: Option<String>,

        /// Only keep events on or after the reference date
        #[arg(long)]
        upcoming: bool,

        /// Reference date for --upcoming (YYYY-MM-DD), defaults to today
        #[arg(long, requires = "upcoming")]
        today: Option<String>,

        /// Print records as a JSON array
        #[arg(long, conflicts_with = "prompt")]
        json: bool,

        /// Print records as chat-prompt context lines
        #[arg(long)]
        prompt: bool,
    },
    /// Generate an .ics invite for one event
    Invite {
        /// Event title
        #[arg(short, long)]
        title: String,

        /// Start (e.g. "2026-03-20T14:00", "2026-03-20", "Mar 20, 2026"), taken as UTC
        #[arg(short, long)]
        start: String,

        /// Length in hours (defaults to invite.duration_hours from config)
        #[arg(short, long)]
        duration: Option<f64>,

        #[arg(long)]
        description: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(long)]
        url: Option<String>,

        /// Reuse a uid to update an invite that was already sent
        #[arg(long)]
        uid: Option<String>,

        /// Write the invite here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a commented default config file if none exists
    Init,
    /// Print the config file location
    Path,
    /// Print the effective settings
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let creating = matches!(
        cli.command,
        Commands::Config {
            action: ConfigAction::Init | ConfigAction::Path
        }
    );
    let config = load_config(cli.config.as_deref(), creating)?;
    init_logging(cli.verbose, &config.log_level);
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Dates { file } => commands::dates::run(file.as_deref()),
        Commands::Filter { file, today } => commands::filter::run(file.as_deref(), today),
        Commands::Events {
            file,
            tag,
            upcoming,
            today,
            json,
            prompt,
        } => {
            let tag = tag.unwrap_or_else(|| config.extract.tag.clone());
            let format = if json {
                commands::events::Format::Json
            } else if prompt {
                commands::events::Format::Prompt
            } else {
                commands::events::Format::List
            };
            let reference = if upcoming {
                Some(commands::reference_date(today.as_deref())?)
            } else {
                None
            };
            commands::events::run(file.as_deref(), &tag, reference, format)
        }
        Commands::Invite {
            title,
            start,
            duration,
            description,
            location,
            url,
            uid,
            output,
        } => commands::invite::run(
            commands::invite::InviteArgs {
                title,
                start,
                duration,
                description,
                location,
                url,
                uid,
            },
            &config.invite,
            output.as_deref(),
        ),
        Commands::Config { action } => match action {
            ConfigAction::Init => commands::config::init(cli.config.as_deref()),
            ConfigAction::Path => commands::config::path(cli.config.as_deref()),
            ConfigAction::Show => commands::config::show(&config),
        },
    }
}

/// An explicit config file must exist, unless it is the one being created.
fn load_config(explicit: Option<&Path>, creating: bool) -> Result<EventbriefConfig> {
    match explicit {
        Some(path) if creating && !path.exists() => Ok(EventbriefConfig::default()),
        Some(path) => EventbriefConfig::load_from(path)
            .with_context(|| format!("Could not load config from {}", path.display())),
        None => Ok(EventbriefConfig::load()?),
    }
}

/// RUST_LOG wins, then -v, then log_level from config.
fn init_logging(verbose: u8, configured: &str) {
    let fallback = match verbose {
        0 => configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
