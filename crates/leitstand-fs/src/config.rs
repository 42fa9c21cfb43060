//! Format-agnostic document loading and saving

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, NormalizedPath, Result, io};

/// Document formats understood by [`ConfigStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
    Yaml,
}

impl Format {
    /// Detect the format from a path's extension.
    pub fn detect(path: &NormalizedPath) -> Result<Self> {
        let extension = path.extension().unwrap_or("");
        match extension.to_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

/// Format-agnostic document store.
///
/// Settings layers are loaded through it and exported descriptors are saved
/// through it. The format is picked from the file extension.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    /// Create a new ConfigStore.
    pub fn new() -> Self {
        Self
    }

    /// Load a document from a file.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let format = Format::detect(path)?;
        let content = io::read_text(path)?;
        self.parse(path, format, &content)
    }

    /// Parse already-read content as if it came from `path`.
    pub fn parse<T: DeserializeOwned>(
        &self,
        path: &NormalizedPath,
        format: Format,
        content: &str,
    ) -> Result<T> {
        let parse_error = |message: String| Error::ConfigParse {
            path: path.to_native(),
            format: format.label().into(),
            message,
        };
        match format {
            Format::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
            Format::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
            Format::Yaml => serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string())),
        }
    }

    /// Save a document to a file.
    ///
    /// Uses an atomic write.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        let format = Format::detect(path)?;
        let serialize_error = |message: String| Error::ConfigSerialize {
            path: path.to_native(),
            format: format.label().into(),
            message,
        };

        let content = match format {
            Format::Toml => {
                toml::to_string_pretty(value).map_err(|e| serialize_error(e.to_string()))?
            }
            Format::Json => {
                serde_json::to_string_pretty(value).map_err(|e| serialize_error(e.to_string()))?
            }
            Format::Yaml => serde_yaml::to_string(value).map_err(|e| serialize_error(e.to_string()))?,
        };

        io::write_atomic(path, content.as_bytes())
    }
}
