//! Renderer that writes flattened output to a raw-mode terminal.

use std::io::{self, Write};

use crossterm::cursor::{MoveTo, MoveToColumn};
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;

use termfolio_core::{InputBuffer, Renderer};
use termfolio_types::config::PromptConfig;

use crate::plain::to_plain;

/// Writes session output to `W`, redrawing the prompt line on request.
pub struct TerminalRenderer<W: Write> {
    out: W,
    prompt: String,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, prompt: &PromptConfig) -> Self {
        Self {
            out,
            prompt: format!("{}@{} {} $ ", prompt.user, prompt.host, prompt.home),
        }
    }

    /// Erase the prompt line so output can take its place.
    pub fn clear_prompt(&mut self) -> io::Result<()> {
        queue!(self.out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        self.out.flush()
    }

    /// Draw the prompt and input text, with the cursor at the caret.
    pub fn draw_prompt(&mut self, input: &InputBuffer) -> io::Result<()> {
        let col = self.prompt.chars().count() + input.caret();
        queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(&self.prompt),
            Print(input.text()),
            MoveToColumn(u16::try_from(col).unwrap_or(u16::MAX)),
        )?;
        self.out.flush()
    }

    /// Write plain text, translating newlines for raw mode.
    fn write_plain(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.replace('\n', "\r\n").as_bytes())
    }

    fn emit(&mut self, what: &str, f: impl FnOnce(&mut Self) -> io::Result<()>) {
        if let Err(e) = f(self).and_then(|()| self.out.flush()) {
            log::warn!("terminal write failed ({what}): {e}");
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn append(&mut self, markup: &str) {
        let text = to_plain(markup);
        self.emit("append", |r| {
            r.write_plain(&text)?;
            r.out.write_all(b"\r\n")
        });
    }

    fn begin_line(&mut self, _class: &str) {
        self.emit("begin_line", |r| {
            queue!(r.out, MoveToColumn(0))?;
            Ok(())
        });
    }

    fn push_char(&mut self, ch: char) {
        self.emit("push_char", |r| write!(r.out, "{ch}"));
    }

    fn end_line(&mut self, suffix: Option<&str>) {
        let suffix = suffix.map(to_plain).unwrap_or_default();
        self.emit("end_line", |r| {
            r.write_plain(&suffix)?;
            r.out.write_all(b"\r\n")
        });
    }

    fn clear(&mut self) {
        self.emit("clear", |r| {
            queue!(r.out, Clear(ClearType::All), MoveTo(0, 0))?;
            Ok(())
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> TerminalRenderer<Vec<u8>> {
        TerminalRenderer::new(Vec::new(), &PromptConfig::default())
    }

    fn written(r: TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(r.into_inner()).unwrap()
    }

    #[test]
    fn append_writes_crlf_lines() {
        let mut r = renderer();
        r.append("<div class=\"line\">a</div>\n<div class=\"line\">b</div>");
        assert_eq!(written(r), "a\r\nb\r\n");
    }

    #[test]
    fn typed_line_then_suffix() {
        let mut r = renderer();
        r.push_char('O');
        r.push_char('K');
        r.end_line(Some("<span class=\"boot-ok\">OK</span>"));
        assert!(written(r).ends_with("OKOK\r\n"));
    }

    #[test]
    fn prompt_contains_text() {
        let mut r = renderer();
        let mut input = InputBuffer::new();
        input.set_text("help");
        r.draw_prompt(&input).unwrap();
        assert!(written(r).contains("visitor@termfolio ~ $ help"));
    }

    #[test]
    fn clear_emits_escape() {
        let mut r = renderer();
        r.clear();
        assert!(written(r).contains("\u{1b}[2J"));
    }
}
