use okd_core::logging::setup_logging;
use okd_core::service::database::require_db;
use okd_core::service::start_http_service;
use okd_register::store::{SqliteUserStore, UserStore};
use okd_register::templates::Templates;
use okd_register::{RegisterService, router};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    let store = SqliteUserStore::new(require_db().await?);
    store.ensure_schema().await?;
    info!(registered = store.list_all().await.len(), "user store ready");

    let service = RegisterService::new(Arc::new(store), Templates::new()?);

    start_http_service(router(service)).await?;

    Ok(())
}
