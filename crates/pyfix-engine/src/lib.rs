//! Formatting engine adapters for pyfix
//!
//! black and isort are Python programs. This crate reaches them by running
//! `python -m <module> -` with the source on stdin, behind the
//! [`Formatter`] trait so the pipeline never depends on how an engine is
//! executed.
//!
//! - [`EngineManager`] probes for a Python 3 interpreter and both modules
//!   once at startup
//! - [`BlackEngine`] and [`IsortEngine`] translate a resolved config into
//!   command-line options and classify engine failures

pub mod black;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod isort;
pub mod subprocess;
pub mod types;

pub use black::BlackEngine;
pub use discovery::EngineManager;
pub use engine::{Engines, Formatter};
pub use error::{EngineError, Result};
pub use isort::IsortEngine;
pub use types::{FormatContext, HealthReport};
