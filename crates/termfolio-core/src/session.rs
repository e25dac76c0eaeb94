//! One interactive terminal session.
//!
//! A session owns the interpreter, the renderer, the editable input line and
//! the boot scheduler. Key presses are ignored until the boot sequence has
//! finished; afterwards they are mapped to submit, completion, history recall,
//! screen clear or plain editing.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use termfolio_terminal::{CommandOutput, Interpreter, Submission};
use termfolio_types::config::TermfolioConfig;
use termfolio_types::input::{Key, KeyAction, KeyEvent};

use crate::boot::{BootPoll, BootScheduler, BootState, Pacing};
use crate::renderer::Renderer;

// ---------------------------------------------------------------------------
// InputBuffer
// ---------------------------------------------------------------------------

/// The editable command line with a caret.
///
/// The caret is a character index in `[0, len]`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    caret: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the contents and park the caret at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.caret = self.char_len();
    }

    /// Take the contents, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        self.caret = 0;
        std::mem::take(&mut self.text)
    }

    pub fn insert(&mut self, ch: char) {
        let at = self.byte_offset(self.caret);
        self.text.insert(at, ch);
        self.caret += 1;
    }

    pub fn backspace(&mut self) {
        if self.caret == 0 {
            return;
        }
        self.caret -= 1;
        let at = self.byte_offset(self.caret);
        self.text.remove(at);
    }

    pub fn delete(&mut self) {
        if self.caret < self.char_len() {
            let at = self.byte_offset(self.caret);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.caret = (self.caret + 1).min(self.char_len());
    }

    pub fn home(&mut self) {
        self.caret = 0;
    }

    pub fn end(&mut self) {
        self.caret = self.char_len();
    }

    /// Apply an editing key. Returns `false` if the key does not edit.
    pub fn apply(&mut self, event: &KeyEvent) -> bool {
        let m = event.modifiers;
        match event.key {
            Key::Char(c) if !m.ctrl && !m.alt => self.insert(c),
            Key::Backspace => self.backspace(),
            Key::Delete => self.delete(),
            Key::Left => self.move_left(),
            Key::Right => self.move_right(),
            Key::Home => self.home(),
            Key::End => self.end(),
            _ => return false,
        }
        true
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// What happened to a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The boot sequence is still running; nothing changed.
    Rejected,
    /// The key was handled (possibly as a no-op).
    Handled,
}

/// An interpreter wired to a renderer, gated by the boot sequence.
pub struct Session<R: Renderer> {
    interpreter: Interpreter,
    renderer: R,
    input: InputBuffer,
    boot: BootScheduler,
    focused: bool,
}

impl<R: Renderer> Session<R> {
    /// Build a session from configuration with an entropy-seeded boot pacer.
    pub fn new(config: &TermfolioConfig, renderer: R) -> Self {
        let boot = BootScheduler::new(
            config.boot_steps(),
            Pacing::from_config(&config.boot),
            StdRng::from_entropy(),
        );
        Self::with_parts(Interpreter::from_config(config), renderer, boot)
    }

    pub fn with_parts(interpreter: Interpreter, renderer: R, boot: BootScheduler) -> Self {
        Self {
            interpreter,
            renderer,
            input: InputBuffer::new(),
            boot,
            focused: false,
        }
    }

    /// Whether key presses are accepted.
    pub fn is_interactive(&self) -> bool {
        self.boot.is_complete()
    }

    /// Whether the input line has focus.
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub fn boot_state(&self) -> BootState {
        self.boot.state()
    }

    /// Advance the boot sequence by one step.
    ///
    /// When the sequence completes, input is enabled and focused.
    pub fn poll_boot(&mut self) -> BootPoll {
        let poll = self.boot.poll(&mut self.renderer, &self.interpreter);
        if poll == BootPoll::Complete && !self.focused {
            self.focused = true;
            log::debug!("input enabled");
        }
        poll
    }

    /// Run the boot sequence to the end, handing each delay to `sleep`.
    pub fn run_boot(&mut self, mut sleep: impl FnMut(Duration)) {
        while let BootPoll::Sleep(d) = self.poll_boot() {
            sleep(d);
        }
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyOutcome {
        if !self.is_interactive() {
            log::trace!("key {:?} dropped during boot", event.key);
            return KeyOutcome::Rejected;
        }

        match event.action() {
            KeyAction::Submit => {
                let line = self.input.take();
                self.submit(&line);
            },
            KeyAction::Complete => {
                let completed = self.interpreter.complete(self.input.text());
                self.input.set_text(completed);
            },
            KeyAction::RecallPrevious => {
                if let Some(entry) = self.interpreter.recall_previous() {
                    self.input.set_text(entry);
                }
            },
            KeyAction::RecallNext => {
                let entry = self.interpreter.recall_next();
                self.input.set_text(entry);
            },
            KeyAction::ClearScreen => self.renderer.clear(),
            KeyAction::Edit => {
                self.input.apply(&event);
            },
        }
        KeyOutcome::Handled
    }

    /// Execute one line as if it had been typed and submitted.
    ///
    /// The echo is rendered before the output. A clear signal removes both.
    /// Ignored while booting.
    pub fn submit(&mut self, raw: &str) {
        if !self.is_interactive() {
            log::trace!("submission dropped during boot");
            return;
        }
        let Some(Submission { echo, output }) = self.interpreter.execute(raw) else {
            return;
        };
        self.renderer.append(&echo);
        match output {
            CommandOutput::Markup(m) => self.renderer.append(&m),
            CommandOutput::None => {},
            CommandOutput::Clear => self.renderer.clear(),
        }
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
