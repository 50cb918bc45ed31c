use std::sync::Arc;

use courier_core::Store;
use courier_messaging::{MessagingClient, MessagingConfig};
use futures::future::join_all;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub fn init_tracing() {
    let log_format = std::env::var("COURIER_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Builds the store, installing the HTTP transport unless it is disabled.
pub fn build_store(config: &MessagingConfig) -> anyhow::Result<Arc<Store>> {
    let store = Arc::new(Store::new());
    if config.is_enabled() {
        let client = MessagingClient::new(config)?;
        store.set_messaging(Some(Arc::new(client)));
        tracing::info!("Messaging service: {}", config.base_url);
    } else {
        tracing::warn!("Messaging service disabled, lookups will be skipped");
    }
    Ok(store)
}

/// Checks every identifier concurrently and returns the final state as JSON.
pub async fn check_all(store: &Arc<Store>, identifiers: &[String]) -> anyhow::Result<String> {
    let lookups = identifiers
        .iter()
        .map(|id| store.spawn_check_for_account(id.as_str()));
    for joined in join_all(lookups).await {
        joined?;
    }
    Ok(serde_json::to_string_pretty(&store.get_state())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disabled() -> MessagingConfig {
        MessagingConfig {
            base_url: String::new(),
            ..MessagingConfig::default()
        }
    }

    #[test]
    fn test_build_store_with_transport() {
        let store = build_store(&MessagingConfig::default()).unwrap();
        assert!(store.has_messaging());
    }

    #[tokio::test]
    async fn test_disabled_transport_records_nothing() {
        let store = build_store(&disabled()).unwrap();
        assert!(!store.has_messaging());

        let json = check_all(&store, &["abc".to_string()]).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, serde_json::json!({ "accounts": { "accounts": {} } }));
    }
}
