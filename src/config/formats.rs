use figment::providers::{Data, Format, Json, Toml, Yaml};
use figment::value::{Dict, Map};
use figment::{Metadata, Profile, Provider};
use std::path::Path;

/// Config file provider picked from the file extension.
///
/// Unknown extensions fall back to sniffing the content, then to TOML.
pub fn auto<P: AsRef<Path>>(path: P) -> impl Provider {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    let format = match extension.as_str() {
        "toml" => ConfigFormat::Toml,
        "json" => ConfigFormat::Json,
        "yaml" | "yml" => ConfigFormat::Yaml,
        _ => std::fs::read_to_string(path)
            .ok()
            .and_then(|content| ConfigFormat::detect(&content))
            .unwrap_or(ConfigFormat::Toml),
    };

    tracing::trace!("Using {:?} provider for {}", format, path.display());
    format.provider(path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    fn provider(self, path: &Path) -> AnyFormat {
        match self {
            ConfigFormat::Toml => AnyFormat::Toml(Toml::file(path)),
            ConfigFormat::Json => AnyFormat::Json(Json::file(path)),
            ConfigFormat::Yaml => AnyFormat::Yaml(Yaml::file(path)),
        }
    }

    /// Guess the format of a config file from its content
    pub fn detect(content: &str) -> Option<Self> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return None;
        }

        if trimmed.starts_with('{') && trimmed.ends_with('}') {
            return Some(ConfigFormat::Json);
        }

        let mut lines = trimmed
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));

        if lines.any(|line| {
            (line.starts_with('[') && line.ends_with(']')) || line.contains('=')
        }) {
            return Some(ConfigFormat::Toml);
        }

        if trimmed.starts_with("---") || trimmed.lines().any(|line| line.contains(':')) {
            return Some(ConfigFormat::Yaml);
        }

        None
    }
}

enum AnyFormat {
    Toml(Data<Toml>),
    Json(Data<Json>),
    Yaml(Data<Yaml>),
}

impl Provider for AnyFormat {
    fn metadata(&self) -> Metadata {
        match self {
            AnyFormat::Toml(p) => p.metadata(),
            AnyFormat::Json(p) => p.metadata(),
            AnyFormat::Yaml(p) => p.metadata(),
        }
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        match self {
            AnyFormat::Toml(p) => p.data(),
            AnyFormat::Json(p) => p.data(),
            AnyFormat::Yaml(p) => p.data(),
        }
    }
}
