//! Session core for termfolio.
//!
//! Ties the interpreter to an output [`Renderer`], runs the boot sequence
//! and gates key input until it finishes.

pub mod boot;
pub mod renderer;
pub mod session;

pub use boot::{BootPoll, BootScheduler, BootState, Pacing};
pub use renderer::{Renderer, Scrollback};
pub use session::{InputBuffer, KeyOutcome, Session};
