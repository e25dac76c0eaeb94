//! Output sink for rendered content, plus the in-memory scrollback.

/// Receives rendered content in chronological order.
///
/// Implementations append, never reorder, and keep the view on the newest
/// content. The only removal is a full [`Renderer::clear`].
pub trait Renderer {
    /// Append a complete markup block.
    fn append(&mut self, markup: &str);

    /// Open a new line that will be revealed character by character.
    fn begin_line(&mut self, class: &str);

    /// Reveal one more character of the open line.
    fn push_char(&mut self, ch: char);

    /// Close the open line, appending `suffix` markup in one piece.
    fn end_line(&mut self, suffix: Option<&str>);

    /// Drop all content.
    fn clear(&mut self);
}

/// One unit of scrollback content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Opaque pre-rendered markup.
    Block(String),
    /// A line revealed by the boot animation.
    Typed {
        class: String,
        /// Plain text revealed so far.
        text: String,
        suffix: Option<String>,
        open: bool,
    },
}

impl Entry {
    /// Markup for this entry as currently revealed.
    pub fn to_markup(&self) -> String {
        match self {
            Entry::Block(m) => m.clone(),
            Entry::Typed {
                class, text, suffix, ..
            } => {
                let body = format!(
                    "{}{}",
                    termfolio_terminal::markup::escape_html(text),
                    suffix.as_deref().unwrap_or("")
                );
                termfolio_terminal::markup::line(class, &body)
            },
        }
    }
}

/// In-memory, append-only scrollback buffer.
#[derive(Debug, Default, Clone)]
pub struct Scrollback {
    entries: Vec<Entry>,
    /// Index one past the last visible entry; pinned to the newest content.
    scroll_position: usize,
}

impl Scrollback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the view shows the newest entry.
    pub fn is_scrolled_to_bottom(&self) -> bool {
        self.scroll_position == self.entries.len()
    }

    /// All entries joined as one markup document.
    pub fn to_markup(&self) -> String {
        self.entries
            .iter()
            .map(Entry::to_markup)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_position = self.entries.len();
    }

    fn open_line(&mut self) -> Option<&mut Entry> {
        match self.entries.last_mut() {
            Some(e @ Entry::Typed { open: true, .. }) => Some(e),
            _ => None,
        }
    }
}

impl Renderer for Scrollback {
    fn append(&mut self, markup: &str) {
        self.entries.push(Entry::Block(markup.to_string()));
        self.scroll_to_bottom();
    }

    fn begin_line(&mut self, class: &str) {
        self.entries.push(Entry::Typed {
            class: class.to_string(),
            text: String::new(),
            suffix: None,
            open: true,
        });
        self.scroll_to_bottom();
    }

    fn push_char(&mut self, ch: char) {
        if self.open_line().is_none() {
            log::warn!("push_char without an open line, opening one");
            self.begin_line("");
        }
        if let Some(Entry::Typed { text, .. }) = self.open_line() {
            text.push(ch);
        }
        self.scroll_to_bottom();
    }

    fn end_line(&mut self, suffix: Option<&str>) {
        if let Some(Entry::Typed {
            suffix: slot, open, ..
        }) = self.open_line()
        {
            *slot = suffix.map(str::to_string);
            *open = false;
        }
        self.scroll_to_bottom();
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.scroll_to_bottom();
    }
}
