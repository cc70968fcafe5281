//! Text-menu console over injected input/output streams.
//!
//! # Responsibility
//! - Drive the menu state machine and the per-action flows.
//! - Convert malformed input into re-prompts or user-facing messages.
//!
//! # Invariants
//! - Validation and parse errors never escape a flow; control always
//!   returns to the menu.
//! - End of input ends the loop normally; only I/O failures propagate.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

pub mod controller;
pub mod input;

pub use controller::{Console, MenuChoice};

pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[derive(Debug)]
pub enum ConsoleError {
    /// Input stream reached end-of-file while a prompt was pending.
    InputClosed,
    Io(io::Error),
}

impl Display for ConsoleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputClosed => write!(f, "input stream closed"),
            Self::Io(err) => write!(f, "console i/o failed: {err}"),
        }
    }
}

impl Error for ConsoleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InputClosed => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for ConsoleError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
