#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();
    let config = flowhq_server::config::Config::from_env()?;
    flowhq_server::web::start_web_server(config).await
}
