//! CLI runner - executes commands

use crate::cli::commands::{
    Cli, Commands, DraftsCommand, InitCommand, OutputFormat, PageArgs, ProductsCommand,
    ReleasesCommand,
};
use crate::config::ServiceConfig;
use crate::error::{Result, ResultExt};
use crate::pagination::{ListOperation, PageItem, PagedOptions, Pager};
use crate::service::{
    DataProductExchangeService, GetDataProductOptions, GetInitializeStatusOptions,
    ListDataProductDraftsOptions, ListDataProductReleasesOptions, ListDataProductsOptions,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Instant;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its result
    pub async fn run(&self) -> Result<()> {
        let config = self
            .service_config()
            .context("Failed to read DATA_PRODUCT_EXCHANGE_* settings")?;
        let output = self.execute(config).await?;
        self.emit(&output)
    }

    /// Environment configuration with the `--url` override applied
    pub fn service_config(&self) -> Result<ServiceConfig> {
        let mut config = ServiceConfig::from_env()?;
        if let Some(url) = &self.cli.url {
            config.service_url = url.trim_end_matches('/').to_string();
        }
        Ok(config)
    }

    /// Run the command against `config` and return the JSON to print
    pub async fn execute(&self, config: ServiceConfig) -> Result<Value> {
        let service = DataProductExchangeService::new(config)?;
        let started = Instant::now();

        let output = match &self.cli.command {
            Commands::Products(ProductsCommand::List { page }) => {
                let mut options = ListDataProductsOptions::new();
                options.limit = page.limit;
                collect(service.data_products_pager(options)?, page).await?
            }
            Commands::Products(ProductsCommand::Get { id }) => {
                let product = service
                    .get_data_product(&GetDataProductOptions::new(id))
                    .await?;
                serde_json::to_value(product)?
            }
            Commands::Drafts(DraftsCommand::List {
                data_product_id,
                container_id,
                version,
                page,
            }) => {
                let mut options = ListDataProductDraftsOptions::new(data_product_id);
                options.asset_container_id.clone_from(container_id);
                options.version.clone_from(version);
                options.limit = page.limit;
                collect(service.data_product_drafts_pager(options)?, page).await?
            }
            Commands::Releases(ReleasesCommand::List {
                data_product_id,
                container_id,
                state,
                version,
                page,
            }) => {
                let mut options = ListDataProductReleasesOptions::new(data_product_id);
                options.asset_container_id.clone_from(container_id);
                options.state = state.iter().map(|s| (*s).into()).collect();
                options.version.clone_from(version);
                options.limit = page.limit;
                collect(service.data_product_releases_pager(options)?, page).await?
            }
            Commands::Init(InitCommand::Status { container_id }) => {
                let mut options = GetInitializeStatusOptions::new();
                options.container_id.clone_from(container_id);
                let status = service.get_initialize_status(&options).await?;
                serde_json::to_value(status)?
            }
        };

        info!(elapsed_ms = started.elapsed().as_millis() as u64, "Command finished");
        Ok(output)
    }

    fn emit(&self, output: &Value) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(output)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(output)?,
        };
        println!("{text}");
        Ok(())
    }
}

/// Fetch one page, or every page with `--all`, and wrap the records
async fn collect<O, S>(mut pager: Pager<'_, O, S>, page: &PageArgs) -> Result<Value>
where
    O: PagedOptions,
    S: ListOperation<O> + ?Sized,
    PageItem<O, S>: Serialize,
{
    let items = if page.all {
        pager.get_all().await?
    } else {
        pager.get_next().await?
    };
    debug!(items = items.len(), pages = pager.pages_fetched(), "Collected records");

    Ok(json!({
        "items": serde_json::to_value(items)?,
        "next_start": pager.cursor(),
        "pages": pager.pages_fetched(),
    }))
}
