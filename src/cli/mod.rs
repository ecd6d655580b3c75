//! CLI module
//!
//! Command-line interface for browsing a Data Product Exchange instance.
//!
//! # Commands
//!
//! - `products list|get` - Data products
//! - `drafts list` - Drafts of a data product
//! - `releases list` - Releases of a data product
//! - `init status` - Catalog initialization status

mod commands;
mod runner;

pub use commands::{
    Cli, Commands, DraftsCommand, InitCommand, OutputFormat, PageArgs, ProductsCommand,
    ReleasesCommand, StateArg,
};
pub use runner::Runner;
