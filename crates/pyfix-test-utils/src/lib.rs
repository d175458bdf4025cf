//! Shared test utilities for the pyfix workspace.
//!
//! - [`project::TestProject`]: a temporary Python project with helpers for
//!   writing markers and configuration files
//! - [`fakes`]: in-process stand-ins for black and isort, so pipeline tests
//!   do not need a Python interpreter

pub mod fakes;
pub mod project;

pub use fakes::{
    Call, CallLog, FakeBlack, FakeIsort, RejectingFormatter, fake_engines, logged_engines,
};
pub use project::TestProject;
