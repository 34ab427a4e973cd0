//! Connection bootstrap for the remote store.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::StoreConfig;
use crate::errors::domain::DomainError;

/// Open a connection pool against the configured store.
///
/// The returned handle is the client object passed into every gateway
/// operation; the crate keeps no global connection state, so callers may
/// hold as many differently-configured handles as they need. The pool lives
/// as long as the handle does; there is no explicit teardown path.
pub async fn connect(config: &StoreConfig) -> Result<DatabaseConnection, DomainError> {
    info!(endpoint = %config.endpoint(), "Connecting to player data store");

    let mut opts = ConnectOptions::new(config.connection_url());
    opts.sqlx_logging(false);

    Database::connect(opts).await.map_err(DomainError::from)
}
