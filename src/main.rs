mod commands;
mod input;

use std::path::PathBuf;

use anyhow::Result;
use calevent_core::config::CalEventConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "calevent")]
#[command(about = "Turn event options into iCalendar (.ics) documents")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the document for an options JSON file
    Render {
        /// Options JSON file ("-" or omitted reads stdin)
        input: Option<PathBuf>,
    },
    /// Write the document for an options JSON file and print its path
    Write {
        /// Options JSON file ("-" or omitted reads stdin)
        input: Option<PathBuf>,

        /// Directory to write into (requires a filename)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Output filename, overriding the one in the options
        #[arg(short, long)]
        filename: Option<String>,
    },
    /// Build a single event from flags
    New {
        /// Event name (SUMMARY)
        #[arg(short, long)]
        name: Option<String>,

        /// Start date/time (e.g. "2025-03-20T15:00:00Z")
        #[arg(short, long)]
        start: Option<String>,

        /// End date/time (defaults to two hours after the start)
        #[arg(short, long)]
        end: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Organizer as "Name <email>"
        #[arg(long)]
        organizer: Option<String>,

        /// Attendee as "Name <email>" (repeatable)
        #[arg(short, long = "attendee")]
        attendees: Vec<String>,

        /// Request a response from every attendee
        #[arg(long)]
        rsvp: bool,

        /// Write the event to a file instead of printing it
        #[arg(short, long)]
        write: bool,

        /// Directory to write into (requires a filename)
        #[arg(short, long, requires = "write")]
        dir: Option<PathBuf>,

        /// Output filename
        #[arg(short, long, requires = "write")]
        filename: Option<String>,
    },
    /// Show the config file location
    Config {
        /// Create a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CalEventConfig::load().unwrap_or_else(|e| {
        eprintln!("Ignoring config: {}", e);
        CalEventConfig::default()
    });

    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Render { input } => commands::render::run(input.as_deref()),
        Commands::Write {
            input,
            dir,
            filename,
        } => commands::write::run(input.as_deref(), dir, filename, &config).await,
        Commands::New {
            name,
            start,
            end,
            location,
            description,
            organizer,
            attendees,
            rsvp,
            write,
            dir,
            filename,
        } => {
            let args = commands::new::NewArgs {
                name,
                start,
                end,
                location,
                description,
                organizer,
                attendees,
                rsvp,
            };
            let target = write.then_some(commands::new::WriteTarget { dir, filename });
            commands::new::run(args, target, &config).await
        }
        Commands::Config { init } => commands::config::run(init),
    }
}

/// Logs go to stderr so `render` output stays clean.
/// RUST_LOG wins over the config file; `--verbose` wins over both.
fn init_logging(config: &CalEventConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
