//! The pretend filesystem: ls, cat, pwd.
//!
//! There is no real filesystem. `cat` maps a closed set of file names onto
//! the profile commands and re-runs them.

use termfolio_types::error::{Result, TermfolioError};

use crate::interpreter::{Command, CommandOutput, Environment};
use crate::markup;

/// The command whose single argument completes from the file namespace.
pub const FILE_COMMAND: &str = "cat";

/// A name `cat` understands.
#[derive(Debug, Clone, Copy)]
pub struct VirtualFile {
    pub name: &'static str,
    /// Registry command whose output is the file's content.
    pub command: &'static str,
    /// Shown by `ls` and offered by tab completion.
    pub listed: bool,
}

pub const FILES: &[VirtualFile] = &[
    VirtualFile {
        name: "about.txt",
        command: "whoami",
        listed: true,
    },
    VirtualFile {
        name: "experience.log",
        command: "experience",
        listed: true,
    },
    VirtualFile {
        name: "skills.json",
        command: "skills",
        listed: true,
    },
    VirtualFile {
        name: "projects/",
        command: "projects",
        listed: true,
    },
    VirtualFile {
        name: "projects",
        command: "projects",
        listed: false,
    },
    VirtualFile {
        name: "contact.sh",
        command: "contact",
        listed: true,
    },
    VirtualFile {
        name: "education.txt",
        command: "education",
        listed: true,
    },
];

/// File names offered by tab completion, in listing order.
pub fn completable_files() -> Vec<String> {
    FILES
        .iter()
        .filter(|f| f.listed)
        .map(|f| f.name.to_string())
        .collect()
}

/// Look up a file by exact name.
pub fn lookup(name: &str) -> Option<&'static VirtualFile> {
    FILES.iter().find(|f| f.name == name)
}

fn listing_class(name: &str) -> &'static str {
    if name.ends_with('/') {
        "blue"
    } else if name.ends_with(".sh") {
        "green"
    } else {
        "cyan"
    }
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

pub(crate) struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List files in current directory"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        let listed: Vec<&VirtualFile> = FILES.iter().filter(|f| f.listed).collect();
        let rows: Vec<String> = listed
            .chunks(3)
            .map(|row| {
                let cells: Vec<String> = row
                    .iter()
                    .map(|f| {
                        format!(
                            "<span class=\"{}\">{:<15}</span>",
                            listing_class(f.name),
                            markup::escape_html(f.name)
                        )
                    })
                    .collect();
                markup::line("", cells.join(" ").trim_end())
            })
            .collect();
        Ok(CommandOutput::Markup(rows.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// cat
// ---------------------------------------------------------------------------

pub(crate) struct CatCmd;
impl Command for CatCmd {
    fn name(&self) -> &str {
        FILE_COMMAND
    }
    fn description(&self) -> &str {
        "View file contents"
    }
    fn usage(&self) -> &str {
        "cat <file>"
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let Some(&arg) = args.first() else {
            return Err(TermfolioError::MissingOperand {
                command: FILE_COMMAND.to_string(),
            });
        };
        let name = arg.strip_prefix("./").unwrap_or(arg);
        match lookup(name) {
            Some(file) => env.registry.dispatch(file.command, &[], env),
            None => Err(TermfolioError::NoSuchFile {
                command: FILE_COMMAND.to_string(),
                name: name.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// pwd
// ---------------------------------------------------------------------------

pub(crate) struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> &str {
        "pwd"
    }
    fn description(&self) -> &str {
        "Print working directory"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Markup(markup::text_line("", env.cwd)))
    }
}
