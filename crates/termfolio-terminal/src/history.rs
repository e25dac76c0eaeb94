//! Submitted-line history with an up/down recall cursor.

/// Append-only command history plus the recall cursor.
///
/// The cursor lives in `0..=len`. `cursor == len` means "not recalling":
/// the edit buffer is past the newest entry.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and leave recall mode.
    pub fn submit(&mut self, line: &str) {
        self.entries.push(line.to_string());
        self.cursor = self.entries.len();
    }

    /// Step back one entry. Returns `None` when already at the oldest
    /// entry; the caller keeps its current edit text.
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward one entry. Walking past the newest entry returns an
    /// empty string and parks the cursor at `len`.
    pub fn recall_next(&mut self) -> &str {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            &self.entries[self.cursor]
        } else {
            self.cursor = self.entries.len();
            ""
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(lines: &[&str]) -> History {
        let mut h = History::new();
        for l in lines {
            h.submit(l);
        }
        h
    }

    #[test]
    fn empty_history_recalls_nothing() {
        let mut h = History::new();
        assert_eq!(h.recall_previous(), None);
        assert_eq!(h.recall_next(), "");
        assert_eq!(h.cursor(), 0);
    }

    #[test]
    fn submit_moves_cursor_to_end() {
        let h = with(&["a", "b"]);
        assert_eq!(h.len(), 2);
        assert_eq!(h.cursor(), 2);
    }

    #[test]
    fn previous_walks_backwards_then_clamps() {
        let mut h = with(&["a", "b", "c"]);
        assert_eq!(h.recall_previous(), Some("c"));
        assert_eq!(h.recall_previous(), Some("b"));
        assert_eq!(h.recall_previous(), Some("a"));
        assert_eq!(h.recall_previous(), None);
        assert_eq!(h.cursor(), 0);
    }

    #[test]
    fn next_returns_to_blank_line() {
        let mut h = with(&["a", "b"]);
        h.recall_previous();
        h.recall_previous();
        assert_eq!(h.recall_next(), "b");
        assert_eq!(h.recall_next(), "");
        assert_eq!(h.cursor(), 2);
        assert_eq!(h.recall_next(), "");
        assert_eq!(h.cursor(), 2);
    }

    #[test]
    fn next_without_recall_stays_blank() {
        let mut h = with(&["a"]);
        assert_eq!(h.recall_next(), "");
        assert_eq!(h.cursor(), 1);
    }

    #[test]
    fn submit_during_recall_exits_recall() {
        let mut h = with(&["a", "b"]);
        h.recall_previous();
        h.submit("c");
        assert_eq!(h.cursor(), 3);
        assert_eq!(h.recall_previous(), Some("c"));
    }

    #[test]
    fn duplicates_are_kept() {
        let h = with(&["ls", "ls"]);
        assert_eq!(h.entries(), ["ls", "ls"]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn previous_yields_reverse_order(lines in proptest::collection::vec("[a-z ]{1,12}", 0..20)) {
                let mut h = History::new();
                for l in &lines {
                    h.submit(l);
                }
                let mut recalled = Vec::new();
                while let Some(l) = h.recall_previous() {
                    recalled.push(l.to_string());
                }
                let mut expected = lines.clone();
                expected.reverse();
                prop_assert_eq!(recalled, expected);
                prop_assert_eq!(h.cursor(), 0);
                prop_assert_eq!(h.recall_previous(), None);
            }

            #[test]
            fn next_reaches_blank_exactly_once(lines in proptest::collection::vec("[a-z]{1,8}", 1..20)) {
                let mut h = History::new();
                for l in &lines {
                    h.submit(l);
                }
                while h.recall_previous().is_some() {}
                let mut forward = Vec::new();
                loop {
                    let l = h.recall_next().to_string();
                    if l.is_empty() {
                        break;
                    }
                    forward.push(l);
                }
                prop_assert_eq!(forward, lines[1..].to_vec());
                prop_assert_eq!(h.cursor(), h.len());
                prop_assert_eq!(h.recall_next(), "");
                prop_assert_eq!(h.cursor(), h.len());
            }

            #[test]
            fn cursor_stays_in_range(ops in proptest::collection::vec(0u8..3, 0..60)) {
                let mut h = History::new();
                for (i, op) in ops.iter().enumerate() {
                    match op {
                        0 => h.submit(&format!("cmd{i}")),
                        1 => { h.recall_previous(); },
                        _ => { h.recall_next(); },
                    }
                    prop_assert!(h.cursor() <= h.len());
                }
            }
        }
    }
}
