//! Commands produced by the parser and consumed by the executor

use crate::core::error::StarlogError;
use crate::core::models::{BodyKind, CelestialBody};
use crate::core::store::Handle;
use std::fmt;

/// One fully validated console command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Blank line
    NoOp,
    /// Input was rejected; the message is shown and the console continues
    ShowError(String),
    /// Store a new body under an already-resolved parent
    AddBody {
        body: CelestialBody,
        parent: Option<Handle>,
    },
    /// List every name of one kind; `label` is the word the user typed
    ListKind { kind: BodyKind, label: String },
    /// Count bodies of every kind
    Stats,
    /// Show a galaxy with all of its descendants
    PrintGalaxy(Handle),
    /// Show the command summary
    Help,
    /// Leave the console
    Exit,
}

impl From<StarlogError> for Command {
    fn from(err: StarlogError) -> Self {
        Command::ShowError(err.to_string())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::NoOp => write!(f, "noop"),
            Command::ShowError(message) => write!(f, "error: {}", message),
            Command::AddBody { body, .. } => {
                write!(f, "add {} {}", body.kind().noun(), body.name())
            }
            Command::ListKind { label, .. } => write!(f, "list {}", label),
            Command::Stats => write!(f, "stats"),
            Command::PrintGalaxy(handle) => write!(f, "print #{}", handle.index()),
            Command::Help => write!(f, "help"),
            Command::Exit => write!(f, "exit"),
        }
    }
}
