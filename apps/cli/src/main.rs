mod main_lib;

use courier_messaging::MessagingConfig;
use main_lib::{build_store, check_all, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let identifiers: Vec<String> = std::env::args().skip(1).collect();
    if identifiers.is_empty() {
        anyhow::bail!("usage: courier <identifier>...");
    }

    let config = MessagingConfig::from_env()?;
    let store = build_store(&config)?;

    tracing::info!("Checking {} identifier(s)", identifiers.len());
    let state = check_all(&store, &identifiers).await?;
    println!("{}", state);
    Ok(())
}
