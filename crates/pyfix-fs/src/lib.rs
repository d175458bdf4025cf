//! Filesystem layer for pyfix
//!
//! Everything here is read-only: locating the enclosing project root and
//! loading the TOML and INI documents that carry formatter configuration.

pub mod config;
pub mod constants;
pub mod error;
pub mod ini;
pub mod io;
pub mod path;
pub mod root;

pub use config::{ConfigDocument, ConfigLoader};
pub use constants::ProjectFile;
pub use error::{Error, Result};
pub use ini::{IniDocument, IniSection};
pub use path::NormalizedPath;
pub use root::find_project_root;
