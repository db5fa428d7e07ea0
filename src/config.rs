use project_root::get_project_root;

use figment::{
    Figment,
    providers::{Format, Toml},
};

use std::path::PathBuf;

/// A single, unified struct holding all application settings.
/// It is deserialized from the TOML file.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct Config {
    pub logging: LoggingConfig,
    pub paths: PathsConfig,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct PathsConfig {
    pub cities_file: PathBuf,
    pub output_file: PathBuf,
}

/// Loads configuration from `config/settings.toml` at the project root.
pub fn get_config() -> anyhow::Result<Config> {
    let config_path = get_project_root()?.join("config/settings.toml");
    let figment = Figment::new().merge(Toml::file(config_path));

    let config: Config = figment.extract()?;
    Ok(config)
}
