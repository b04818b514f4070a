mod config;
mod demos;

use config::DemoConfig;
use demos::{
    async_get_example, async_ready_example, async_wait_example, gather_example,
    multiple_async_requests_example,
};
use lusid_client::{ApplicationMetadataApi, ClientConfig, InstrumentsApi, LusidClient};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing() {
    let log_format = std::env::var("LUSID_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}

const SEPARATOR: &str = "--------------------";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let demo_config = DemoConfig::from_env();
    init_tracing();

    let client = LusidClient::new(&ClientConfig::from_env()?)?;
    tracing::info!("Using LUSID at {}", client.base_url());

    let versions = |c: LusidClient| async move { c.get_lusid_versions().await };
    let identifier_types = |c: LusidClient| async move { c.get_instrument_identifier_types().await };

    tracing::info!("Trying asynchronous requests for application metadata endpoint");
    async_get_example(&client, &versions, &demo_config).await;
    tracing::info!("{}", SEPARATOR);
    async_wait_example(&client, &versions, &demo_config).await;
    tracing::info!("{}", SEPARATOR);
    async_ready_example(&client, &versions, &demo_config).await;
    tracing::info!("{}", SEPARATOR);
    multiple_async_requests_example(&client, &versions, &demo_config).await;
    tracing::info!("{}", SEPARATOR);
    gather_example(&client, &versions, &demo_config).await;

    tracing::info!("Trying asynchronous requests for instruments endpoint");
    async_get_example(&client, &identifier_types, &demo_config).await;
    tracing::info!("{}", SEPARATOR);
    async_wait_example(&client, &identifier_types, &demo_config).await;
    tracing::info!("{}", SEPARATOR);
    async_ready_example(&client, &identifier_types, &demo_config).await;
    tracing::info!("{}", SEPARATOR);
    multiple_async_requests_example(&client, &identifier_types, &demo_config).await;
    tracing::info!("{}", SEPARATOR);
    gather_example(&client, &identifier_types, &demo_config).await;

    Ok(())
}
