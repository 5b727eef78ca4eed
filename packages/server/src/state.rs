use std::sync::Arc;

use common::LinkResolver;
use sea_orm::DatabaseConnection;

use crate::config::AppConfig;
use crate::ledger::Ledger;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<AppConfig>,
    pub resolver: Arc<dyn LinkResolver>,
}

impl AppState {
    /// Ledger bound to the shared connection pool.
    pub fn ledger(&self) -> Ledger<'_, DatabaseConnection> {
        Ledger::new(&self.db, self.resolver.as_ref(), &self.config.ledger)
    }
}
