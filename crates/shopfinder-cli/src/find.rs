use std::sync::Arc;
use std::time::Duration;

use shopfinder_core::{identify_product, AppConfig};
use shopfinder_lookup::{
    HistorySink, NoopHistorySink, PgHistorySink, SearchOutcome, SearchSession, ShopLookupClient,
};

use crate::input::{input_source, load_product_input, require_location, InputArgs};
use crate::present::{format_product, format_shops};

/// How long `find` waits for the detached history save before exiting.
const HISTORY_FLUSH_GRACE: Duration = Duration::from_secs(2);

/// Identify a product and print its attributes.
///
/// # Errors
///
/// Returns an error if the input is missing or the image cannot be read.
pub(crate) async fn run_identify(input: &InputArgs) -> anyhow::Result<()> {
    let source = input_source(input)?;
    let product = identify_product(&load_product_input(source).await?).await;
    print!("{}", format_product(&product));
    Ok(())
}

/// Identify a product, look up nearby shops, and print both.
///
/// # Errors
///
/// Returns an error on invalid input or when the lookup endpoint is not
/// configured. Search failures are not errors: they produce sample results.
pub(crate) async fn run_find(
    config: &AppConfig,
    input: &InputArgs,
    location: Option<&str>,
) -> anyhow::Result<()> {
    let location = require_location(location)?;
    let source = input_source(input)?;
    let endpoint = config.require_api_endpoint()?;

    let product = identify_product(&load_product_input(source).await?).await;
    print!("{}", format_product(&product));
    println!();

    let history = history_sink(config).await;
    let client = Arc::new(ShopLookupClient::new(
        &endpoint,
        config.request_timeout_secs,
        &config.user_agent,
        history,
    )?);
    let session = SearchSession::new(Arc::clone(&client));

    match session.search(&product, location).await {
        SearchOutcome::Completed(lookup) => print!("{}", format_shops(&lookup)),
        SearchOutcome::Superseded => println!("search was superseded"),
    }

    client.flush_history(HISTORY_FLUSH_GRACE).await;
    Ok(())
}

/// History goes to Postgres when `DATABASE_URL` is set and reachable;
/// otherwise it is dropped.
async fn history_sink(config: &AppConfig) -> Arc<dyn HistorySink> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::debug!("DATABASE_URL not set; search history disabled");
        return Arc::new(NoopHistorySink);
    };

    let pool_config = shopfinder_db::PoolConfig::from_app_config(config);
    match shopfinder_db::connect_pool(database_url, pool_config).await {
        Ok(pool) => Arc::new(PgHistorySink::new(pool)),
        Err(e) => {
            tracing::warn!(error = %e, "history database unreachable; search history disabled");
            Arc::new(NoopHistorySink)
        }
    }
}
