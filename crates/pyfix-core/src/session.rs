//! One request per process
//!
//! A [`Session`] starts in [`Session::AwaitingRequest`] when the engines are
//! usable, and goes straight to [`Session::Terminated`] when they are not.
//! Handling the one request moves it to `Terminated` as well; the reply it
//! carries is what the process prints.

use std::io::{Read, Write};
use std::path::PathBuf;

use pyfix_engine::{EngineError, Engines};

use crate::{CommandDispatcher, Error, Reply, Result};

/// Request-handling state
#[derive(Debug)]
pub enum Session {
    /// Ready to read the request
    AwaitingRequest(CommandDispatcher),
    /// Done; the reply is final
    Terminated(Reply),
}

impl Session {
    /// Start a session from the startup engine probe.
    ///
    /// An unavailable environment terminates the session immediately with
    /// the environment error reply.
    pub fn start(probe: std::result::Result<Engines, EngineError>, cwd: impl Into<PathBuf>) -> Self {
        let started = probe
            .map_err(Error::from)
            .and_then(|engines| CommandDispatcher::new(engines, cwd));

        match started {
            Ok(dispatcher) => Self::AwaitingRequest(dispatcher),
            Err(err) => {
                tracing::warn!(error = %err, "Cannot serve requests");
                Self::Terminated(Reply::from(&err))
            }
        }
    }

    pub fn is_awaiting(&self) -> bool {
        matches!(self, Self::AwaitingRequest(_))
    }

    /// The final reply, once terminated.
    pub fn reply(&self) -> Option<&Reply> {
        match self {
            Self::AwaitingRequest(_) => None,
            Self::Terminated(reply) => Some(reply),
        }
    }

    /// Handle the raw request. A terminated session stays as it is.
    pub fn handle(self, raw: &str) -> Self {
        match self {
            Self::AwaitingRequest(dispatcher) => Self::Terminated(dispatcher.process(raw)),
            terminated => terminated,
        }
    }

    /// Read the whole of `input` as the request and handle it.
    ///
    /// Input is only read while awaiting a request.
    pub fn receive(self, input: &mut impl Read) -> Self {
        if !self.is_awaiting() {
            return self;
        }

        let mut bytes = Vec::new();
        let raw = input
            .read_to_end(&mut bytes)
            .map_err(Error::from)
            .and_then(|_| String::from_utf8(bytes).map_err(Error::invalid_request));

        match raw {
            Ok(raw) => self.handle(&raw),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read request");
                Self::Terminated(Reply::from(&err))
            }
        }
    }

    /// The reply to emit. `None` until a request was handled.
    pub fn into_reply(self) -> Option<Reply> {
        match self {
            Self::AwaitingRequest(_) => None,
            Self::Terminated(reply) => Some(reply),
        }
    }
}

/// Write `reply` as one JSON object and flush. No newline follows it.
pub fn emit(output: &mut impl Write, reply: &Reply) -> Result<()> {
    serde_json::to_writer(&mut *output, reply)?;
    output.flush()?;
    Ok(())
}

/// Drive `session` to completion over `input` and `output`.
pub fn serve(session: Session, mut input: impl Read, mut output: impl Write) -> Result<()> {
    let session = session.receive(&mut input);
    if let Some(reply) = session.into_reply() {
        emit(&mut output, &reply)?;
    }
    Ok(())
}
