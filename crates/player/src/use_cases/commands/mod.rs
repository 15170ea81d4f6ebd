//! Command classification and interpretation.

mod command;
mod interpreter;

pub use command::Command;
pub use interpreter::{CommandInterpreter, Dispatch, Interpretation, RemoteAction};
