//! Formatter configuration resolution for pyfix
//!
//! Given a project root, [`ConfigStore`] finds the configuration that applies
//! to each formatter and reduces it to a [`ResolvedConfig`]:
//!
//! | formatter | sources, highest priority first |
//! |-----------|---------------------------------|
//! | black     | `pyproject.toml` `[tool.black]` |
//! | isort     | `pyproject.toml` `[tool.isort]`, `.isort.cfg` `[settings]`/`[isort]`, `setup.cfg` `[isort]`/`[tool:isort]` |
//!
//! A source only counts when its section has at least one entry; an empty
//! section falls through to the next source. The resulting
//! [`ResolvedConfig::present`] flag is what the "only format configured
//! projects" policy consults.

pub mod error;
pub mod formatter;
pub mod options;
pub mod resolved;
pub mod store;

pub use error::{Error, Result};
pub use formatter::FormatterId;
pub use options::BlackOption;
pub use resolved::ResolvedConfig;
pub use store::ConfigStore;
