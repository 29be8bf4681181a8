use anyhow::Result;
use summit_cms::{config, Config};

/// Show the current effective configuration.
pub fn show_config(config: &Config) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!(
        "File exists: {}\n",
        if exists { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!("  repository_name: {}", config.repository_name);
    println!(
        "  api_endpoint: {}",
        config.api_endpoint.as_deref().unwrap_or("<derived>")
    );
    println!(
        "  access_token: {}",
        if config.access_token.is_some() { "<set>" } else { "<not set>" }
    );
    println!("  slice_machine_url: {}", config.slice_machine_url);
    println!("  dashboard: {}", config.dashboard_url());
    println!("  logging.level: {:?}", config.logging.level());
    println!("  logging.coloured: {}", config.logging.coloured());

    println!("\nPriority: CLI args > ENV vars (SUMMIT_*) > Config file > Defaults");

    Ok(())
}

/// Show the config file path.
pub fn show_path() -> Result<()> {
    let config_path = config::config_file_path();
    println!("{}", config_path.display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure summit.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
