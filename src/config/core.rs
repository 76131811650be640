use super::Settings;
use super::formats;
use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Json, Toml, Yaml};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

pub struct KcmdlineConfig {
    figment: Figment,
}

impl KcmdlineConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        tracing::trace!("CONFIG LOAD: Starting");

        let user_base = Self::user_config_base_path();
        let mut figment = Figment::new()
            .merge(Toml::string(DEFAULT_CONFIG)) // Embedded defaults
            // User config - support multiple formats
            .merge(Toml::file(format!("{user_base}.toml")))
            .merge(Json::file(format!("{user_base}.json")))
            .merge(Yaml::file(format!("{user_base}.yaml")))
            .merge(Yaml::file(format!("{user_base}.yml")))
            // Repository config - support multiple formats
            .merge(Toml::file("kcmdline.toml"))
            .merge(Json::file("kcmdline.json"))
            .merge(Yaml::file("kcmdline.yaml"))
            .merge(Yaml::file("kcmdline.yml"));

        if let Some(custom_path) = custom_config {
            if !std::path::Path::new(custom_path).exists() {
                anyhow::bail!("Config file not found: {}", custom_path);
            }
            tracing::debug!("Using custom config {}", custom_path);
            figment = figment.merge(formats::auto(custom_path));
        }

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed("KCMDLINE_").split("__"));

        Ok(KcmdlineConfig { figment })
    }

    /// Typed settings extracted from every layer
    pub fn settings(&self) -> Result<Settings> {
        self.figment
            .extract()
            .context("Failed to extract kcmdline configuration")
    }

    /// Get a nested object/section as JSON
    pub fn get_section(&self, path: &str) -> Result<serde_json::Value> {
        Ok(self.figment.extract_inner(path)?)
    }

    /// Get the full merged configuration as a structured value
    pub fn get_full_config(&self) -> Result<serde_json::Value> {
        Ok(self.figment.extract()?)
    }

    fn user_config_base_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/kcmdline/config", home),
            Err(_) => "~/.config/kcmdline/config".to_string(),
        }
    }
}
