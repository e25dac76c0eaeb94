//! Command interpreter for termfolio.
//!
//! The interpreter is a registry-based dispatch system. Commands implement
//! the `Command` trait and are registered by name and alias. A secondary
//! pattern table supplies canned replies around registry dispatch. The
//! interpreter also owns submission history and tab completion.

mod commands;
pub mod completion;
pub mod file_commands;
pub mod history;
mod interpreter;
pub mod markup;
mod profile_commands;
pub mod responder;
pub mod time;

/// Register all built-in commands into a registry.
pub use commands::register_builtins;
/// Single-match tab completion.
pub use completion::Completer;
/// Submitted-line history with a recall cursor.
pub use history::History;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (markup or signals).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Read-only context passed to every command.
pub use interpreter::Environment;
/// The shell: parsing, dispatch, history and completion.
pub use interpreter::Interpreter;
/// Echo plus output of one submitted line.
pub use interpreter::Submission;
/// Canned replies keyed by input line or first token.
pub use responder::{PatternResponder, Response};
