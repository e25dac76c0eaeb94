//! Markup helpers shared by the interpreter and the built-in commands.
//!
//! Output blocks are pre-escaped HTML fragments. Anything derived from
//! user input or profile content goes through [`escape_html`] first.

use termfolio_types::config::PromptConfig;
use termfolio_types::error::TermfolioError;

/// A blank spacer line.
pub const BLANK_LINE: &str = "<div class=\"line\">&nbsp;</div>";

/// Escape text for safe inclusion in markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A single line with optional extra classes. `content` must already be markup.
pub fn line(class: &str, content: &str) -> String {
    if class.is_empty() {
        format!("<div class=\"line\">{content}</div>")
    } else {
        format!("<div class=\"line {class}\">{content}</div>")
    }
}

/// A single line of escaped plain text.
pub fn text_line(class: &str, text: &str) -> String {
    line(class, &escape_html(text))
}

/// Section header used at the top of profile views.
pub fn section_header(title: &str) -> String {
    text_line("section-header", title)
}

/// Prompt-prefixed echo of a submitted command line.
pub fn echo_line(prompt: &PromptConfig, command: &str) -> String {
    format!(
        "<div class=\"line\"><span class=\"prompt-echo\">{}@{} <span class=\"blue\">{}</span> $ </span><span class=\"command-echo\">{}</span></div>",
        escape_html(&prompt.user),
        escape_html(&prompt.host),
        escape_html(&prompt.home),
        escape_html(command),
    )
}

/// The one-line diagnostic rendered for a failed submission.
pub fn diagnostic(err: &TermfolioError) -> String {
    match err {
        TermfolioError::UnknownCommand(name) => text_line(
            "error",
            &format!("command not found: {name}. Type 'help' for available commands."),
        ),
        TermfolioError::PrivilegeDenied => {
            text_line("red", "Nice try. You don't have root access here.")
        },
        TermfolioError::MissingOperand { .. } | TermfolioError::NoSuchFile { .. } => {
            text_line("error", &err.to_string())
        },
        other => text_line("error", &format!("error: {other}")),
    }
}
