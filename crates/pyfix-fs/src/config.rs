//! Format-aware loading of configuration documents

use crate::{Error, IniDocument, NormalizedPath, Result, io};

/// A parsed configuration file.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigDocument {
    /// `pyproject.toml` and other `.toml` files
    Toml(toml::Table),
    /// `setup.cfg`, `.isort.cfg` and other `.cfg` / `.ini` files
    Ini(IniDocument),
}

impl ConfigDocument {
    /// Human readable format name used in error messages.
    pub fn format_name(&self) -> &'static str {
        match self {
            Self::Toml(_) => "TOML",
            Self::Ini(_) => "INI",
        }
    }
}

/// Loads configuration documents, picking the parser from the extension.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load and parse a configuration file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.cfg`, `.ini` -> INI
    pub fn load(&self, path: &NormalizedPath) -> Result<ConfigDocument> {
        let extension = path.extension().unwrap_or("").to_lowercase();
        let parse: fn(&NormalizedPath, &str) -> Result<ConfigDocument> = match extension.as_str() {
            "toml" => parse_toml,
            "cfg" | "ini" => parse_ini,
            _ => {
                return Err(Error::UnsupportedFormat { extension });
            }
        };

        let content = io::read_text(path)?;
        let document = parse(path, &content)?;
        tracing::debug!(%path, format = document.format_name(), "Loaded config document");
        Ok(document)
    }

    /// Load a configuration file if it exists as a regular file.
    ///
    /// A missing file is `Ok(None)`; a file that exists but does not parse
    /// is an error.
    pub fn load_optional(&self, path: &NormalizedPath) -> Result<Option<ConfigDocument>> {
        if !path.is_file() {
            tracing::debug!(%path, "Config file not present");
            return Ok(None);
        }
        self.load(path).map(Some)
    }
}

fn parse_toml(path: &NormalizedPath, content: &str) -> Result<ConfigDocument> {
    content
        .parse::<toml::Table>()
        .map(ConfigDocument::Toml)
        .map_err(|e| Error::config_parse(path.to_native(), "TOML", e.to_string()))
}

fn parse_ini(path: &NormalizedPath, content: &str) -> Result<ConfigDocument> {
    IniDocument::parse(content)
        .map(ConfigDocument::Ini)
        .map_err(|e| Error::config_parse(path.to_native(), "INI", e.to_string()))
}
