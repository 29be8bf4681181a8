use anyhow::Result;
use summit_cms::{Config, PrismicClient};

pub async fn run_check(config: &Config) -> Result<()> {
    let client = PrismicClient::from_config(config)?;

    let report =
        summit_cms::run_check(&client, &config.repository_name, &config.dashboard_url()).await;

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    report.render(&mut stdout.lock(), &mut stderr.lock())?;

    Ok(())
}
