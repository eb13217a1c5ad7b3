use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{Config, ConnectionPool, Hashing, JwtConfig},
    utils::{DependenciesInject, Metrics},
};

#[derive(Clone, Debug)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
    pub registry: Arc<Mutex<Registry>>,
    pub metrics: Arc<Mutex<Metrics>>,
}

impl AppState {
    pub async fn new(pool: ConnectionPool, config: &Config) -> Result<Self> {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let hashing = Arc::new(Hashing::new()) as DynHashing;
        let registry = Arc::new(Mutex::new(Registry::default()));
        let metrics = Arc::new(Mutex::new(Metrics::default()));

        let di_container = {
            let mut registry_guard = registry.lock().await;
            DependenciesInject::new(
                pool,
                hashing,
                jwt_config.clone(),
                metrics.clone(),
                &mut registry_guard,
                config.refund_points_per_unit,
                &config.ranking_update_strategy,
            )
            .await
            .context("Failed to initialize dependency injection container")?
        };

        Ok(Self {
            di_container,
            jwt_config,
            registry,
            metrics,
        })
    }
}
