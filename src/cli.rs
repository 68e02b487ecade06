use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};
use crate::model::Item;

/// Browse the item feed in the terminal.
#[derive(Debug, Parser)]
#[command(name = "itemdeck", version, about)]
pub struct Cli {
    /// Config file (default: <config dir>/itemdeck/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the endpoint URL from the config file
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Fetch once, print items as tab-separated lines and exit
    #[arg(long)]
    pub plain: bool,
}

impl Cli {
    /// Load the config file, apply command-line overrides, then validate.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(url) = &self.url {
            config.endpoint.url = url.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

/// One `id<TAB>title<TAB>description` line per item.
pub fn format_plain(items: &[Item]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "{}\t{}\t{}\n",
                item.id,
                single_line(&item.title),
                single_line(&item.description)
            )
        })
        .collect()
}

fn single_line(text: &str) -> String {
    text.replace(['\t', '\n', '\r'], " ")
}
