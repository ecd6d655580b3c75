//! CLI commands and argument parsing

use crate::models::State;
use clap::{Args, Parser, Subcommand};

/// Data Product Exchange command-line client
#[derive(Parser, Debug)]
#[command(name = "dpx")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Service URL (overrides DATA_PRODUCT_EXCHANGE_URL)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Data products
    #[command(subcommand)]
    Products(ProductsCommand),

    /// Drafts of a data product
    #[command(subcommand)]
    Drafts(DraftsCommand),

    /// Releases of a data product
    #[command(subcommand)]
    Releases(ReleasesCommand),

    /// Catalog initialization
    #[command(subcommand)]
    Init(InitCommand),
}

/// Paging flags shared by the list commands
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Page size
    #[arg(long)]
    pub limit: Option<i64>,

    /// Follow `next` links and print every page
    #[arg(long)]
    pub all: bool,
}

#[derive(Subcommand, Debug)]
pub enum ProductsCommand {
    /// List data products
    List {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Show one data product
    Get {
        /// Data product id
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum DraftsCommand {
    /// List drafts of a data product
    List {
        /// Data product id
        data_product_id: String,

        /// Only drafts whose asset lives in this container
        #[arg(long)]
        container_id: Option<String>,

        /// Only drafts with this version
        #[arg(long)]
        version: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReleasesCommand {
    /// List releases of a data product
    List {
        /// Data product id
        data_product_id: String,

        /// Only releases whose asset lives in this container
        #[arg(long)]
        container_id: Option<String>,

        /// Only releases in this state (repeatable)
        #[arg(long, value_enum)]
        state: Vec<StateArg>,

        /// Only releases with this version
        #[arg(long)]
        version: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum InitCommand {
    /// Show catalog initialization status
    Status {
        /// Container to check
        #[arg(long)]
        container_id: Option<String>,
    },
}

/// Release state filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StateArg {
    Draft,
    Available,
    Retired,
}

impl From<StateArg> for State {
    fn from(arg: StateArg) -> Self {
        match arg {
            StateArg::Draft => State::Draft,
            StateArg::Available => State::Available,
            StateArg::Retired => State::Retired,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
