//! Configuration lookup rooted at a project directory

use std::collections::BTreeMap;

use pyfix_fs::{ConfigDocument, ConfigLoader, IniDocument, NormalizedPath, ProjectFile};

use crate::{BlackOption, Error, FormatterId, ResolvedConfig, Result};

/// INI files consulted for isort after `pyproject.toml`, with the section
/// names each one may use, in priority order.
const ISORT_INI_SOURCES: [(ProjectFile, &[&str]); 2] = [
    (ProjectFile::IsortCfg, &["settings", "isort"]),
    (ProjectFile::SetupCfg, &["isort", "tool:isort"]),
];

/// Resolves formatter configuration for one project root.
///
/// `pyproject.toml` is read once when the store is opened, since both
/// formatters consult it. The INI sources are only read when isort
/// resolution reaches them.
#[derive(Debug)]
pub struct ConfigStore {
    root: NormalizedPath,
    loader: ConfigLoader,
    pyproject: Option<toml::Table>,
}

impl ConfigStore {
    /// Open the store for `root`, parsing `pyproject.toml` if it exists.
    ///
    /// # Errors
    ///
    /// A `pyproject.toml` that cannot be read or parsed fails the open.
    pub fn open(root: NormalizedPath) -> Result<Self> {
        let loader = ConfigLoader::new();
        let pyproject = match loader.load_optional(&root.join(ProjectFile::Pyproject))? {
            Some(ConfigDocument::Toml(table)) => Some(table),
            Some(ConfigDocument::Ini(_)) | None => None,
        };

        Ok(Self {
            root,
            loader,
            pyproject,
        })
    }

    /// Resolve the config of either formatter.
    pub fn resolve(&self, formatter: FormatterId) -> Result<ResolvedConfig> {
        match formatter {
            FormatterId::Black => self.resolve_black(),
            FormatterId::Isort => self.resolve_isort(),
        }
    }

    /// Resolve black's options from `[tool.black]`.
    ///
    /// Keys go through [`BlackOption::from_key`]. Unknown keys are dropped,
    /// but a section holding only unknown keys still counts as present.
    pub fn resolve_black(&self) -> Result<ResolvedConfig> {
        let Some(section) = self.tool_section(FormatterId::Black)? else {
            return Ok(ResolvedConfig::absent(FormatterId::Black));
        };

        let mut options = BTreeMap::new();
        for (key, value) in section {
            match BlackOption::from_key(key) {
                Some(option) => {
                    options.insert(option.as_str().to_string(), value.clone());
                }
                None => tracing::debug!(key = %key, "Ignoring unknown [tool.black] key"),
            }
        }

        tracing::debug!(options = options.len(), "Resolved black config from pyproject.toml");
        Ok(ResolvedConfig::from_source(
            FormatterId::Black,
            self.pyproject_path(),
            options,
        ))
    }

    /// Resolve isort's options.
    ///
    /// Sources in priority order: `[tool.isort]` in `pyproject.toml`, then
    /// `.isort.cfg`, then `setup.cfg`. The first non-empty section wins; an
    /// existing file whose section is empty or missing falls through.
    pub fn resolve_isort(&self) -> Result<ResolvedConfig> {
        if let Some(section) = self.tool_section(FormatterId::Isort)? {
            let options = section
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            tracing::debug!("Resolved isort config from pyproject.toml");
            return Ok(ResolvedConfig::from_source(
                FormatterId::Isort,
                self.pyproject_path(),
                options,
            ));
        }

        for (file, section_names) in ISORT_INI_SOURCES {
            let path = self.root.join(file);
            let Some(ConfigDocument::Ini(document)) = self.loader.load_optional(&path)? else {
                continue;
            };

            if let Some(options) = first_non_empty_section(&document, section_names) {
                tracing::debug!(%path, "Resolved isort config");
                return Ok(ResolvedConfig::from_source(FormatterId::Isort, path, options));
            }
            tracing::debug!(%path, "No isort section with entries, trying next source");
        }

        Ok(ResolvedConfig::absent(FormatterId::Isort))
    }

    fn pyproject_path(&self) -> NormalizedPath {
        self.root.join(ProjectFile::Pyproject)
    }

    /// `[tool.<formatter>]` from `pyproject.toml`, if it has entries.
    fn tool_section(&self, formatter: FormatterId) -> Result<Option<&toml::Table>> {
        let Some(pyproject) = &self.pyproject else {
            return Ok(None);
        };
        let Some(tool) = pyproject.get("tool") else {
            return Ok(None);
        };
        let tool = tool.as_table().ok_or_else(|| self.invalid_section("tool"))?;

        match tool.get(formatter.as_str()) {
            None => Ok(None),
            Some(value) => {
                let section = value
                    .as_table()
                    .ok_or_else(|| self.invalid_section(&format!("tool.{}", formatter)))?;
                Ok(Some(section).filter(|s| !s.is_empty()))
            }
        }
    }

    fn invalid_section(&self, section: &str) -> Error {
        Error::InvalidSection {
            path: self.pyproject_path().to_native(),
            section: section.to_string(),
        }
    }
}

fn first_non_empty_section(
    document: &IniDocument,
    names: &[&str],
) -> Option<BTreeMap<String, toml::Value>> {
    names
        .iter()
        .filter_map(|name| document.section(name))
        .find(|section| !section.is_empty())
        .map(|section| {
            section
                .entries()
                .map(|(k, v)| (k.to_string(), toml::Value::String(v.to_string())))
                .collect()
        })
}
