use crate::{
    modules::{dish::repository::Dish, order::repository::Order},
    utils::{
        store::{self, Record, Store},
        validation,
    },
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::{env, path::PathBuf};
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub url: String,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub dishes: Store<Dish>,
    pub orders: Store<Order>,
}

impl Context {
    pub fn new(app: AppContext, dishes: Store<Dish>, orders: Store<Order>) -> Self {
        Self {
            app,
            dishes,
            orders,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub url: String,
}

#[derive(Clone, Debug, Default)]
pub struct SeedConfig {
    pub dishes: Option<PathBuf>,
    pub orders: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppConfig,
    pub seed: SeedConfig,
}

const DEFAULT_PORT: u16 = 8000;

impl Default for Config {
    fn default() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().unwrap_or_else(|err| {
                tracing::warn!("Invalid PORT number {:?} ({}), using {}", raw, err, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let dishes_seed = env::var("DISHES_SEED_PATH").ok().map(PathBuf::from);
        let orders_seed = env::var("ORDERS_SEED_PATH").ok().map(PathBuf::from);

        Self {
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                url,
            },
            seed: SeedConfig {
                dishes: dishes_seed,
                orders: orders_seed,
            },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

/// Seed records get the same rules as submitted ones; invalid records are
/// dropped.
fn valid_seeds<T: Record + Validate>(label: &str, records: Vec<T>) -> Vec<T> {
    records
        .into_iter()
        .filter(|record| match record.validate() {
            Ok(()) => true,
            Err(errors) => {
                tracing::warn!(
                    "Dropping invalid seed record from {} {}: {}",
                    label,
                    record.id(),
                    validation::first_message(&errors).unwrap_or_else(|| errors.to_string())
                );
                false
            }
        })
        .collect()
}

async fn seeded_store<T>(label: &str, path: Option<PathBuf>) -> Store<T>
where
    T: Record + DeserializeOwned + Validate,
{
    let Some(path) = path else {
        return Store::new();
    };

    match store::load_seed::<T>(&path).await {
        Ok(records) => {
            let records = valid_seeds(label, records);
            tracing::info!("Seeded {} {} from {}", records.len(), label, path.display());
            Store::with_records(records)
        }
        Err(err) => {
            tracing::error!("Failed to seed {} from {}: {}", label, path.display(), err);
            Store::new()
        }
    }
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        let dishes = seeded_store::<Dish>("dishes", self.seed.dishes).await;
        let orders = seeded_store::<Order>("orders", self.seed.orders).await;

        Context::new(
            AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                url: self.app.url,
            },
            dishes,
            orders,
        )
    }
}
