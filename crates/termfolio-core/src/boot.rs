//! Boot sequence: typed status lines revealed one character at a time.
//!
//! The scheduler is a cooperative state machine. Each [`BootScheduler::poll`]
//! performs one visible step against the renderer and reports how long the
//! caller should wait before polling again. Hosts drive it from their own
//! loop (a timer, a frame tick, or a blocking sleep).

use std::time::Duration;

use rand::Rng;
use rand::rngs::StdRng;

use termfolio_terminal::markup::{self, BLANK_LINE};
use termfolio_terminal::{CommandOutput, Interpreter};
use termfolio_types::config::{BootConfig, BootStep};

use crate::renderer::Renderer;

/// Style class of the hint line.
pub const BOOT_HINT_CLASS: &str = "boot-hint";

/// Hint shown once the boot sequence has finished.
pub const BOOT_HINT: &str = "Type 'help' to see available commands.";

/// Lifecycle of the boot sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootState {
    Idle,
    Running,
    Complete,
}

/// Result of one scheduler poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPoll {
    /// Wait this long, then poll again.
    Sleep(Duration),
    /// The sequence is done; further polls are no-ops.
    Complete,
}

/// Per-character delay with bounded random variation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pacing {
    base_ms: f64,
    jitter: f64,
    min_ms: f64,
}

impl Pacing {
    pub fn new(base_ms: u64, jitter: f64, min_ms: u64) -> Self {
        Self {
            base_ms: base_ms as f64,
            jitter: jitter.clamp(0.0, 1.0),
            min_ms: min_ms as f64,
        }
    }

    pub fn from_config(config: &BootConfig) -> Self {
        Self::new(config.char_delay_ms, config.jitter, config.min_delay_ms)
    }

    /// Delay before the next character: `base * (1 +/- jitter)`, floored at
    /// the minimum.
    pub fn char_delay<G: Rng>(&self, rng: &mut G) -> Duration {
        let r: f64 = rng.gen_range(0.0..1.0);
        let ms = self.base_ms + (r - 0.5) * self.base_ms * 2.0 * self.jitter;
        micros(ms.max(self.min_ms))
    }

    /// Inclusive bounds of [`Pacing::char_delay`].
    pub fn bounds(&self) -> (Duration, Duration) {
        let lo = (self.base_ms * (1.0 - self.jitter)).max(self.min_ms);
        let hi = (self.base_ms * (1.0 + self.jitter)).max(self.min_ms);
        (micros(lo), micros(hi))
    }
}

fn micros(ms: f64) -> Duration {
    Duration::from_micros((ms * 1000.0).round() as u64)
}

#[derive(Debug)]
enum Phase {
    /// About to start step `index`.
    Start { index: usize },
    /// Revealing step `index`; `next` characters already shown.
    Typing {
        index: usize,
        chars: Vec<char>,
        next: usize,
    },
    Done,
}

/// Drives the boot sequence against a [`Renderer`].
#[derive(Debug)]
pub struct BootScheduler<G = StdRng> {
    steps: Vec<BootStep>,
    pacing: Pacing,
    rng: G,
    state: BootState,
    phase: Phase,
}

impl<G: Rng> BootScheduler<G> {
    pub fn new(steps: Vec<BootStep>, pacing: Pacing, rng: G) -> Self {
        Self {
            steps,
            pacing,
            rng,
            state: BootState::Idle,
            phase: Phase::Start { index: 0 },
        }
    }

    pub fn state(&self) -> BootState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == BootState::Complete
    }

    pub fn steps(&self) -> &[BootStep] {
        &self.steps
    }

    /// Advance by one visible step.
    ///
    /// The interpreter supplies the system-summary block appended after the
    /// last configured step.
    pub fn poll(&mut self, renderer: &mut dyn Renderer, interpreter: &Interpreter) -> BootPoll {
        if self.state == BootState::Idle {
            log::info!("boot sequence started ({} steps)", self.steps.len());
            self.state = BootState::Running;
        }

        loop {
            match &mut self.phase {
                Phase::Done => return BootPoll::Complete,
                Phase::Start { index } => {
                    let index = *index;
                    let Some(step) = self.steps.get(index) else {
                        self.finish(renderer, interpreter);
                        return BootPoll::Complete;
                    };
                    if step.text.is_empty() {
                        renderer.append(BLANK_LINE);
                        self.phase = Phase::Start { index: index + 1 };
                        return BootPoll::Sleep(Duration::from_millis(step.delay_ms));
                    }
                    renderer.begin_line(&step.class);
                    self.phase = Phase::Typing {
                        index,
                        chars: step.text.chars().collect(),
                        next: 0,
                    };
                },
                Phase::Typing { index, chars, next } => {
                    if let Some(&ch) = chars.get(*next) {
                        renderer.push_char(ch);
                        *next += 1;
                        return BootPoll::Sleep(self.pacing.char_delay(&mut self.rng));
                    }
                    let index = *index;
                    let step = &self.steps[index];
                    renderer.end_line(step.suffix.as_deref());
                    let delay = Duration::from_millis(step.delay_ms);
                    self.phase = Phase::Start { index: index + 1 };
                    return BootPoll::Sleep(delay);
                },
            }
        }
    }

    /// Poll until complete, handing every requested delay to `sleep`.
    pub fn run_to_completion(
        &mut self,
        renderer: &mut dyn Renderer,
        interpreter: &Interpreter,
        mut sleep: impl FnMut(Duration),
    ) {
        while let BootPoll::Sleep(d) = self.poll(renderer, interpreter) {
            sleep(d);
        }
    }

    fn finish(&mut self, renderer: &mut dyn Renderer, interpreter: &Interpreter) {
        match interpreter.run_command("neofetch", &[]) {
            CommandOutput::Markup(m) => renderer.append(&m),
            other => log::warn!("neofetch produced {other:?} during boot"),
        }
        renderer.append(BLANK_LINE);
        renderer.append(&markup::text_line(BOOT_HINT_CLASS, BOOT_HINT));
        renderer.append(BLANK_LINE);
        self.phase = Phase::Done;
        self.state = BootState::Complete;
        log::info!("boot sequence complete");
    }
}
