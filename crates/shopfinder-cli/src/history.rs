use shopfinder_core::AppConfig;

use crate::present::format_history;

/// Print the most recent searches, newest first.
///
/// # Errors
///
/// Returns an error if `DATABASE_URL` is unset or the query fails.
pub(crate) async fn run_history(config: &AppConfig, limit: i64) -> anyhow::Result<()> {
    let database_url = config.require_database_url()?;
    let pool_config = shopfinder_db::PoolConfig::from_app_config(config);
    let pool = shopfinder_db::connect_pool(database_url, pool_config).await?;

    let rows = shopfinder_db::list_recent_searches(&pool, limit).await?;
    print!("{}", format_history(&rows));
    Ok(())
}
