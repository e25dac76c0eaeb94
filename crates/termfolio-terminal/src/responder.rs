//! Canned replies keyed by full input line or by first token.
//!
//! The table is consulted twice by the interpreter: once with the whole
//! lowercased line before anything else, and once with the first token
//! after registry dispatch missed.

use std::collections::HashMap;

use crate::markup;

/// Value stored for a pattern key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Render this markup.
    Reply(String),
    /// Key is reserved but produces nothing here, so the registry
    /// command of the same name stays reachable.
    PassThrough,
}

/// Immutable table of pattern responses.
#[derive(Debug, Default, Clone)]
pub struct PatternResponder {
    table: HashMap<String, Response>,
}

impl PatternResponder {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in easter eggs.
    pub fn with_defaults() -> Self {
        let mut r = Self::new();
        let sandboxed = "This terminal is sandboxed. Nothing here can touch a real disk.";
        let no_npm = "No node_modules were harmed in the making of this website.";
        for (key, class, text) in [
            (
                "sudo hire me",
                "green",
                "Permission granted. Sending offer letter... \u{2713} Check your inbox.",
            ),
            ("rm -rf /", "purple", sandboxed),
            ("rm -rf", "purple", sandboxed),
            (
                "vim",
                "purple",
                "You've entered vim. Good luck getting out. (Type 'q' to escape)",
            ),
            ("q", "dim", "You escaped vim! Not everyone can say that."),
            (
                "claude",
                "purple",
                "Yes, an AI pair programmer helped build this. The irony is intentional.",
            ),
            (
                "exit",
                "purple",
                "You can check out any time you like, but you can never leave.",
            ),
            (
                "cd ..",
                "error",
                "Permission denied. There's nothing above this. This is the root of everything.",
            ),
            ("cd", "dim", "Already home."),
            ("curl", "purple", "Why curl when you can just... be here?"),
            ("npm install", "purple", no_npm),
            (
                "pip install",
                "purple",
                "This site runs on 0 runtime dependencies. Refreshing, isn't it?",
            ),
            ("npm", "purple", no_npm),
            ("node", "dim", "Node? We don't need no stinking Node."),
            ("python", "dim", "import visitor; visitor.hire()"),
            (
                "git status",
                "green",
                "On branch main. Everything committed. Everything shipped.",
            ),
            (
                "git push",
                "green",
                "Already deployed. Static hosting is fast like that.",
            ),
            ("man", "dim", "RTFM? This IS the manual. Type 'help'."),
            (
                "hackertyper",
                "purple",
                "You're already hacking. Look at you go.",
            ),
        ] {
            r.insert(key, Response::Reply(markup::text_line(class, text)));
        }
        r.insert("whoami", Response::PassThrough);
        r
    }

    /// Add or replace a key. Keys are matched case-insensitively.
    pub fn insert(&mut self, key: &str, response: Response) {
        self.table.insert(key.trim().to_lowercase(), response);
    }

    /// Raw lookup, distinguishing "absent" from "pass-through".
    pub fn lookup(&self, key: &str) -> Option<&Response> {
        self.table.get(&key.trim().to_lowercase())
    }

    /// Markup to render for `key`, if the key holds a reply.
    pub fn reply(&self, key: &str) -> Option<&str> {
        match self.lookup(key) {
            Some(Response::Reply(markup)) => Some(markup),
            Some(Response::PassThrough) | None => None,
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
