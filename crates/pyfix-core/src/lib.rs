//! Request handling for pyfix
//!
//! One process handles one request:
//!
//! 1. [`Session::start`] consumes the engine probe. Missing engines end the
//!    session before any input is read.
//! 2. [`CommandDispatcher`] decodes the [`Request`] and routes it through an
//!    [`OperationTable`] to the `fix` operation.
//! 3. `fix` finds the project root and runs the [`FormatPipeline`].
//! 4. The [`Reply`] is written with [`emit`] as a single JSON object.
//!
//! Every failure on the way becomes an error reply; nothing escapes as a
//! crash or a non-zero exit status.

pub mod dispatcher;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod reply;
pub mod request;
pub mod session;

pub use dispatcher::{CommandDispatcher, Handler, OperationTable};
pub use error::{Error, Result};
pub use pipeline::{FormatPipeline, RunOrder};
pub use reply::Reply;
pub use request::{FixArguments, Request};
pub use session::{Session, emit, serve};
