//! Operation dispatch
//!
//! Operations are plain functions registered by name in an
//! [`OperationTable`] when the dispatcher is built. A request naming
//! anything else gets the unknown-command reply.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use pyfix_engine::{Engines, FormatContext};
use pyfix_fs::find_project_root;

use crate::pipeline::{FormatPipeline, RunOrder};
use crate::{Error, Reply, Request, Result};

/// An operation handler.
pub type Handler = fn(&CommandDispatcher, &Request) -> Result<Reply>;

/// Name -> handler mapping, fixed once the dispatcher is built.
#[derive(Debug, Clone, Default)]
pub struct OperationTable {
    handlers: BTreeMap<&'static str, Handler>,
}

impl OperationTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table of built-in operations.
    pub fn builtin() -> Result<Self> {
        let mut table = Self::new();
        table.register("fix", fix)?;
        Ok(table)
    }

    /// Register `handler` under `name`.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateOperation`] if `name` is taken.
    pub fn register(&mut self, name: &'static str, handler: Handler) -> Result<()> {
        if self.handlers.contains_key(name) {
            return Err(Error::DuplicateOperation(name.to_string()));
        }
        self.handlers.insert(name, handler);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Handler> {
        self.handlers.get(name).copied()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }
}

/// Routes decoded requests to their operations.
#[derive(Debug)]
pub struct CommandDispatcher {
    engines: Engines,
    operations: OperationTable,
    cwd: PathBuf,
}

impl CommandDispatcher {
    /// A dispatcher serving the built-in operations.
    ///
    /// `cwd` stands in for the working directory when a request has no
    /// usable file path.
    pub fn new(engines: Engines, cwd: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::with_operations(engines, cwd, OperationTable::builtin()?))
    }

    pub fn with_operations(
        engines: Engines,
        cwd: impl Into<PathBuf>,
        operations: OperationTable,
    ) -> Self {
        Self {
            engines,
            operations,
            cwd: cwd.into(),
        }
    }

    pub fn engines(&self) -> &Engines {
        &self.engines
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Run the operation a request names.
    pub fn dispatch(&self, request: &Request) -> Result<Reply> {
        let Some(handler) = self.operations.get(&request.operation) else {
            tracing::debug!(
                operation = %request.operation,
                known = ?self.operations.names().collect::<Vec<_>>(),
                "No handler registered"
            );
            return Err(Error::UnknownOperation(request.operation.clone()));
        };
        handler(self, request)
    }

    /// Decode and dispatch raw input, turning any failure into an error reply.
    pub fn process(&self, raw: &str) -> Reply {
        match Request::decode(raw).and_then(|request| self.dispatch(&request)) {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(code = %err.code(), error = %err, "Request failed");
                Reply::from(&err)
            }
        }
    }
}

/// `fix`: format `source` with both engines.
fn fix(dispatcher: &CommandDispatcher, request: &Request) -> Result<Reply> {
    let args = request.fix_arguments()?;
    let cwd = match &args.cwd {
        Some(dir) => dispatcher.cwd().join(dir),
        None => dispatcher.cwd().to_path_buf(),
    };

    let file_path = request.file_path.as_ref().map(|path| cwd.join(path));
    let root = find_project_root(file_path.as_deref(), &cwd);
    tracing::debug!(%root, file_path = ?file_path, "Resolved project root");

    let context = FormatContext::new(root, file_path);
    let text = FormatPipeline::new(dispatcher.engines()).apply(
        args.source,
        RunOrder::from(args.black_then_isort),
        request.require_present_config,
        &context,
    )?;
    Ok(Reply::file(text))
}
