use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::EngineKind;

mod commands;
mod config;
mod markup;
mod paths;
mod render;
mod store;
mod util;
mod wiki;

#[derive(Parser)]
#[command(version, about = "A tiny wiki that renders MediaWiki-style markup")]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    command: WikiCommand,
}

#[derive(Parser)]
struct InitArgs {
    /// The path to initialize the wiki in
    path: PathBuf,

    /// Whether to create the directory if it doesn't exist
    #[arg(short, long, default_value = "false")]
    create: bool,
}

#[derive(Parser)]
struct RenderArgs {
    /// Markup file to render; reads stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Wrap the fragment in the page template
    #[arg(short, long, default_value = "false")]
    full: bool,

    /// Page title for `--full` (defaults to the file name)
    #[arg(short, long)]
    title: Option<String>,

    /// Markup engine to use instead of the configured one
    #[arg(short, long, value_enum)]
    engine: Option<EngineKind>,

    /// Escape HTML in the markup text
    #[arg(long, default_value = "false")]
    escape_html: bool,

    /// The path to the configuration file
    #[arg(short, long)]
    config_file: Option<PathBuf>,
}

#[derive(Parser)]
struct ServeArgs {
    /// The address to bind to (overrides `server.bind`)
    #[arg(short, long)]
    bind: Option<String>,

    /// The port to bind to (overrides `server.port`)
    #[arg(short, long)]
    port: Option<u16>,

    /// Open the wiki in the default browser
    #[arg(short, long, default_value = "false")]
    open: bool,

    /// Serve the built-in sample page instead of the pages directory
    #[arg(long, default_value = "false")]
    demo: bool,

    /// The path to the configuration file
    #[arg(short, long)]
    config_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum WikiCommand {
    /// Initialize a new wiki
    Init(InitArgs),

    /// Render markup to HTML on stdout
    Render(RenderArgs),

    /// Serve the wiki on a local port
    Serve(ServeArgs),
}

/// Log to stderr. `RUST_LOG` wins over the verbosity flags when set.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    match args.command {
        WikiCommand::Init(args) => {
            commands::init::run(&args).await?;
        }
        WikiCommand::Render(args) => {
            commands::render::run(&args).await?;
        }
        WikiCommand::Serve(args) => {
            commands::serve::run(&args).await?;
        }
    }

    Ok(())
}
