//! The per-formatter outcome of configuration resolution

use std::collections::BTreeMap;

use pyfix_fs::NormalizedPath;

use crate::{BlackOption, FormatterId};

/// Options that apply to one formatter for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Which formatter these options belong to
    pub formatter: FormatterId,

    /// Option name -> value. Black keys use the internal identifiers of
    /// [`BlackOption`]; isort keys are kept as written in the source.
    pub options: BTreeMap<String, toml::Value>,

    /// Whether an on-disk source had a non-empty section for the formatter
    pub present: bool,

    /// The file that supplied the options, when `present`
    pub source: Option<NormalizedPath>,
}

impl ResolvedConfig {
    /// A config with no on-disk source.
    pub fn absent(formatter: FormatterId) -> Self {
        Self {
            formatter,
            options: BTreeMap::new(),
            present: false,
            source: None,
        }
    }

    /// A config supplied by `source`.
    pub fn from_source(
        formatter: FormatterId,
        source: NormalizedPath,
        options: BTreeMap<String, toml::Value>,
    ) -> Self {
        Self {
            formatter,
            options,
            present: true,
            source: Some(source),
        }
    }

    pub fn get(&self, key: &str) -> Option<&toml::Value> {
        self.options.get(key)
    }

    /// Typed lookup for black configs.
    pub fn black(&self, option: BlackOption) -> Option<&toml::Value> {
        self.options.get(option.as_str())
    }

    /// Whether the skip policy lets this formatter run.
    ///
    /// With `require_present` unset every formatter runs; with it set only
    /// formatters that found configuration on disk do.
    pub fn is_active(&self, require_present: bool) -> bool {
        !require_present || self.present
    }
}
