use anyhow::Result;
use summit_cms::{Config, PrismicClient};

pub async fn run_setup(config: &Config) -> Result<()> {
    let client = PrismicClient::from_config(config)?;

    let report = summit_cms::run_setup(
        &client,
        &config.slice_machine_url,
        &config.dashboard_url(),
    )
    .await;

    report.render(&mut std::io::stdout().lock())?;

    Ok(())
}
