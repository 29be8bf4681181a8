use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use summit_cms::Config;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "summit", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Content repository name (default: p2backpack)
    #[arg(long, global = true)]
    repository: Option<String>,

    /// API root, overriding the one derived from the repository name
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Log every API request
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Check which documents the content repository publishes
    ///
    /// Looks up the navigation, landing and about singleton documents one
    /// after another and lists every published document by type:
    ///
    /// - Navigation: number of links, and each link's label, kind and target
    /// - Landing: ID, type and number of slices
    /// - About: ID and number of slices
    ///
    /// A document that cannot be fetched is reported as not found and the
    /// check moves on. The command always exits successfully; a failure to
    /// list documents is printed to stderr.
    Check,
    /// Show the steps for publishing the landing page
    ///
    /// Prints the manual Slice Machine and dashboard steps, then reports
    /// the current navigation links and whether a landing document exists.
    Setup,
    /// Print the styling theme in the CSS build tool's config shape
    Theme {
        /// Theme file (TOML) to use instead of the built-in theme
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = commands::theme::ThemeFormat::Json)]
        format: commands::theme::ThemeFormat,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

fn init_logging(config: &Config, verbose: bool) -> Result<()> {
    let opts = if verbose {
        twyg::OptsBuilder::new()
            .coloured(config.logging.coloured())
            .level(twyg::LogLevel::Debug)
            .build()
            .map_err(|e| anyhow::anyhow!("Invalid logging options: {e:?}"))?
    } else {
        config.logging.clone()
    };
    twyg::setup(opts).map_err(|e| anyhow::anyhow!("Failed to set up logging: {e:?}"))?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()
        .context("Failed to load configuration")?
        .with_overrides(cli.repository, cli.endpoint);

    init_logging(&config, cli.verbose)?;
    log::debug!(
        "Repository {} via {}",
        config.repository_name,
        config.api_endpoint.as_deref().unwrap_or("derived endpoint")
    );

    match cli.command {
        Commands::Check => {
            commands::run_check(&config).await?;
        }
        Commands::Setup => {
            commands::run_setup(&config).await?;
        }
        Commands::Theme { file, format } => {
            commands::show_theme(file, format)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config)?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
