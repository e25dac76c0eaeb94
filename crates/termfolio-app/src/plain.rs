//! Flatten output markup into plain terminal text.
//!
//! Block elements (`div`, `pre`) become line breaks. Source newlines and
//! indentation between tags are dropped, except inside `pre`. A couple of
//! inline classes get terminal-friendly spacing in place of CSS layout.

/// Column the description starts at in `help` rows.
const HELP_COLUMN: usize = 22;

/// Decode a character reference name (without `&` and `;`).
fn lookup_entity(name: &str) -> Option<&'static str> {
    let s = match name {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" | "#39" => "'",
        "nbsp" => " ",
        _ => return None,
    };
    Some(s)
}

struct Tag<'a> {
    name: String,
    closing: bool,
    class: &'a str,
}

fn parse_tag(raw: &str) -> Tag<'_> {
    let closing = raw.starts_with('/');
    let body = raw.trim_start_matches('/');
    let name: String = body
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();
    let class = body
        .find("class=\"")
        .map(|i| {
            let rest = &body[i + 7..];
            rest.find('"').map_or(rest, |end| &rest[..end])
        })
        .unwrap_or("");
    Tag {
        name,
        closing,
        class,
    }
}

#[derive(Default)]
struct Flattener {
    out: String,
    pre_depth: usize,
    /// Class and line column of each open span.
    spans: Vec<(String, usize)>,
}

impl Flattener {
    fn column(&self) -> usize {
        let start = self.out.rfind('\n').map_or(0, |i| i + 1);
        self.out[start..].chars().count()
    }

    fn break_line(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
    }

    fn text(&mut self, segment: &str) {
        if self.pre_depth == 0 && segment.contains('\n') && segment.trim().is_empty() {
            return;
        }
        let mut rest = segment;
        while let Some(amp) = rest.find('&') {
            self.out.push_str(&rest[..amp]);
            let tail = &rest[amp + 1..];
            match tail.find(';').and_then(|semi| {
                lookup_entity(&tail[..semi]).map(|decoded| (decoded, semi))
            }) {
                Some((decoded, semi)) => {
                    self.out.push_str(decoded);
                    rest = &tail[semi + 1..];
                },
                None => {
                    self.out.push('&');
                    rest = tail;
                },
            }
        }
        self.out.push_str(rest);
    }

    fn tag(&mut self, tag: Tag<'_>) {
        match (tag.name.as_str(), tag.closing) {
            ("div", _) => self.break_line(),
            ("pre", false) => {
                self.break_line();
                self.pre_depth += 1;
            },
            ("pre", true) => {
                self.pre_depth = self.pre_depth.saturating_sub(1);
                self.break_line();
            },
            ("br", _) => self.out.push('\n'),
            ("span", false) => {
                let col = self.column();
                self.spans.push((tag.class.to_string(), col));
            },
            ("span", true) => {
                if let Some((class, _)) = self.spans.pop() {
                    self.after_span(&class);
                }
            },
            _ => {},
        }
    }

    fn after_span(&mut self, class: &str) {
        let classes: Vec<&str> = class.split_whitespace().collect();
        if classes.contains(&"help-cmd") {
            let pad = HELP_COLUMN.saturating_sub(self.column()).max(1);
            self.out.push_str(&" ".repeat(pad));
        } else if classes.contains(&"tag") {
            self.out.push(' ');
        }
    }
}

/// Convert a markup fragment to plain text. The result never ends with a
/// newline.
pub fn to_plain(markup: &str) -> String {
    let mut f = Flattener::default();
    let mut rest = markup;
    while let Some(open) = rest.find('<') {
        f.text(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('>') {
            Some(close) => {
                f.tag(parse_tag(&after[..close]));
                rest = &after[close + 1..];
            },
            None => {
                f.text(&rest[open..]);
                rest = "";
            },
        }
    }
    f.text(rest);
    let trimmed_len = f.out.trim_end_matches('\n').len();
    f.out.truncate(trimmed_len);
    f.out
}

#[cfg(test)]
mod tests {
    use super::*;
    use termfolio_terminal::markup::{self, BLANK_LINE};
    use termfolio_types::config::PromptConfig;

    #[test]
    fn single_line() {
        assert_eq!(to_plain("<div class=\"line\">hello</div>"), "hello");
    }

    #[test]
    fn blank_line_is_a_space() {
        assert_eq!(to_plain(BLANK_LINE), " ");
    }

    #[test]
    fn entities_decoded() {
        assert_eq!(
            to_plain(&markup::text_line("", "<a & \"b\" 'c'>")),
            "<a & \"b\" 'c'>"
        );
    }

    #[test]
    fn unknown_entity_kept_verbatim() {
        assert_eq!(to_plain("a &bogus; b &"), "a &bogus; b &");
    }

    #[test]
    fn echo_line_flattens_to_prompt() {
        let prompt = PromptConfig::default();
        assert_eq!(
            to_plain(&markup::echo_line(&prompt, "ls -la")),
            "visitor@termfolio ~ $ ls -la"
        );
    }

    #[test]
    fn nested_blocks_drop_source_indentation() {
        let m = "<div class=\"project\">\n  <div class=\"project-name\">x</div>\n  <div>y</div>\n</div>";
        assert_eq!(to_plain(m), "x\ny");
    }

    #[test]
    fn pre_keeps_newlines() {
        let m = "<div>\n  <pre class=\"ascii\"> /\\\n \\/</pre>\n  <div>info</div>\n</div>";
        assert_eq!(to_plain(m), " /\\\n \\/\ninfo");
    }

    #[test]
    fn help_rows_are_columned() {
        let m = "<div class=\"help-row\"><span class=\"help-cmd\">help</span><span class=\"help-desc dim\">Show help</span></div>";
        assert_eq!(to_plain(m), format!("help{}Show help", " ".repeat(18)));
    }

    #[test]
    fn tags_are_spaced() {
        let m = "<div class=\"line\"><span class=\"tag\">Rust</span><span class=\"tag\">Go</span></div>";
        assert_eq!(to_plain(m), "Rust Go");
    }

    #[test]
    fn unterminated_tag_is_text() {
        assert_eq!(to_plain("a < b"), "a < b");
    }
}
