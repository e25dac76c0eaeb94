//! Tab completion over the command and file namespaces.

/// Proposes at most one unambiguous completion for the current input.
#[derive(Debug, Clone)]
pub struct Completer {
    commands: Vec<String>,
    file_command: String,
    files: Vec<String>,
}

impl Completer {
    /// `commands` is the command-name namespace; `files` is completed
    /// only as the single argument of `file_command`.
    pub fn new(commands: Vec<String>, file_command: &str, files: Vec<String>) -> Self {
        Self {
            commands: commands.into_iter().map(|c| c.to_lowercase()).collect(),
            file_command: file_command.to_lowercase(),
            files,
        }
    }

    /// Complete `text`, or return it unchanged when there is no single match.
    pub fn complete(&self, text: &str) -> String {
        let parts = split_whitespace_runs(text);

        if parts.len() <= 1 {
            let partial = parts.first().copied().unwrap_or("").to_lowercase();
            if partial.is_empty() {
                return text.to_string();
            }
            return match unique_prefix_match(&self.commands, &partial) {
                Some(m) => m.to_string(),
                None => text.to_string(),
            };
        }

        if parts.len() == 2 && parts[0].to_lowercase() == self.file_command {
            let partial = parts[1].to_lowercase();
            if let Some(m) = unique_prefix_match(&self.files, &partial) {
                return format!("{} {m}", parts[0]);
            }
        }

        text.to_string()
    }
}

fn unique_prefix_match<'a>(candidates: &'a [String], partial: &str) -> Option<&'a str> {
    let mut matches = candidates
        .iter()
        .filter(|c| c.to_lowercase().starts_with(partial));
    match (matches.next(), matches.next()) {
        (Some(only), None) => Some(only.as_str()),
        _ => None,
    }
}

/// Split on runs of whitespace, keeping empty edge tokens.
///
/// `" a  b "` gives `["", "a", "b", ""]`, and `""` gives `[""]`, so a
/// trailing space after a command counts as starting a second token.
pub fn split_whitespace_runs(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_gap = false;
    for (i, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if !in_gap {
                parts.push(&text[start..i]);
                in_gap = true;
            }
        } else if in_gap {
            start = i;
            in_gap = false;
        }
    }
    if in_gap {
        parts.push("");
    } else {
        parts.push(&text[start..]);
    }
    parts
}
