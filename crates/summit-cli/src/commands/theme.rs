use anyhow::{Context, Result};
use std::path::PathBuf;
use summit_core::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ThemeFormat {
    Json,
    Toml,
}

/// Print the built-in theme, or the one in `file`.
pub fn show_theme(file: Option<PathBuf>, format: ThemeFormat) -> Result<()> {
    let theme = match file {
        Some(path) => {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read theme file {}", path.display()))?;
            Theme::from_toml_str(&contents)
                .with_context(|| format!("Invalid theme file {}", path.display()))?
        }
        None => Theme::summit(),
    };

    match format {
        ThemeFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&theme.to_config_json())?);
        }
        ThemeFormat::Toml => print!("{}", theme.to_toml_string()?),
    }

    Ok(())
}
