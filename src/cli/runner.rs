//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::client::RaitoClient;
use crate::config::SdkConfig;
use crate::context::Context;
use crate::error::{Error, Result, ResultExt};
use crate::pagination::{ExecutionOutcome, ListStream};
use crate::services::access_provider::{
    AccessProviderFilterInput, AccessProviderListOptions, AccessProviderWhatListOptions,
    AccessProviderWhoListOptions,
};
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use tracing::{debug, info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the SDK config named on the command line
    pub fn load_config(&self) -> Result<SdkConfig> {
        SdkConfig::from_file(&self.cli.config)
    }

    /// Log level for the subscriber: DEBUG with `--verbose`, else the config's
    pub fn log_level(&self, config: &SdkConfig) -> tracing::Level {
        if self.cli.verbose {
            tracing::Level::DEBUG
        } else {
            config.log_level.into()
        }
    }

    /// Run the command, writing JSON lines to stdout
    ///
    /// Ctrl-C cancels the in-flight request or listing.
    pub async fn run(&self, config: &SdkConfig) -> Result<()> {
        let client = RaitoClient::new(config)?;
        let (ctx, cancel) = Context::with_cancel();

        let interrupt = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, cancelling");
                interrupt.cancel();
            }
        });
        let _guard = cancel.drop_guard();

        let mut stdout = std::io::stdout();
        self.execute(&client, &ctx, &mut stdout).await
    }

    /// Run the command against `client`, writing JSON lines to `out`
    pub async fn execute<W: Write>(
        &self,
        client: &RaitoClient,
        ctx: &Context,
        out: &mut W,
    ) -> Result<()> {
        let access_providers = client.access_provider();

        match &self.cli.command {
            Commands::Get { id } => {
                let ap = access_providers.get_access_provider(ctx, id).await?;
                emit(out, &ap)
            }
            Commands::List { order_by, search } => {
                let mut options = AccessProviderListOptions::default().with_order(order_by.clone());
                if let Some(search) = search {
                    options = options.with_filter(AccessProviderFilterInput {
                        search: Some(search.clone()),
                        ..Default::default()
                    });
                }
                let stream = access_providers.list_access_providers(ctx, options);
                drain(stream, out).await
            }
            Commands::Who { id } => {
                let stream = access_providers.get_access_provider_who_list(
                    ctx,
                    id,
                    AccessProviderWhoListOptions::default(),
                );
                drain(stream, out).await
            }
            Commands::What { id } => {
                let stream = access_providers.get_access_provider_what_data_object_list(
                    ctx,
                    id,
                    AccessProviderWhatListOptions::default(),
                );
                drain(stream, out).await
            }
            Commands::Delete { id } => {
                access_providers.delete_access_provider(ctx, id).await?;
                info!(id = %id, "Deleted access provider");
                emit(out, &json!({ "deleted": id }))
            }
        }
    }
}

/// Write one JSON line
fn emit<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value).context("failed to encode output")?;
    writeln!(out)?;
    Ok(())
}

/// Print every item of a listing, stopping at the first error
async fn drain<W: Write, T: Serialize>(mut stream: ListStream<T>, out: &mut W) -> Result<()> {
    while let Some(item) = stream.next_item().await {
        emit(out, &item.into_result()?)?;
    }

    let summary = stream.finish().await?;
    debug!(
        pages = summary.pages_fetched,
        items = summary.items_emitted,
        skipped = summary.edges_skipped,
        "Listing finished"
    );

    match summary.outcome {
        ExecutionOutcome::Cancelled => Err(Error::Cancelled),
        _ => Ok(()),
    }
}
