use super::common::{CountryArgs, ViewModeArgs};
use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookdash")]
#[command(about = "Explore a book rating dataset from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (default: $BOOKDASH_CONFIG or the XDG config dir)")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Dataset CSV (overrides data_path from the config)")]
    pub data: Option<PathBuf>,

    #[arg(long, global = true, help = "Decorative image (overrides image_path from the config)")]
    pub image: Option<PathBuf>,

    #[arg(long, global = true, help = "Do not require the image asset at startup")]
    pub no_image: bool,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(flatten)]
    pub view_mode: ViewModeArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Welcome page
    Home,

    /// KPIs, distributions and rankings
    Dashboard {
        #[command(flatten)]
        countries: CountryArgs,

        #[arg(long, help = "Length of the title rankings (default: top_titles and top_titles_per_country from the config)")]
        top: Option<usize>,
    },

    /// Raw rows filtered by country
    Dataframe {
        #[command(flatten)]
        countries: CountryArgs,

        #[arg(long, default_value = "50", help = "Maximum rows to print (0 = all)")]
        limit: usize,
    },

    /// Top-rated books of one author
    Author {
        /// Case-sensitive text the author name must contain
        name: String,

        #[arg(long, help = "Number of books (default: top_rated_per_author from the config)")]
        top: Option<usize>,
    },

    /// Interactive dashboard
    Tui,

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved configuration
    Show,

    /// Write a config file with default values
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
