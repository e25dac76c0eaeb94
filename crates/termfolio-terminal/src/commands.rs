//! Built-in commands for the termfolio shell.

use termfolio_types::error::Result;

use crate::file_commands::{CatCmd, LsCmd, PwdCmd};
use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};
use crate::markup::{self, escape_html};
use crate::profile_commands::{
    ContactCmd, EducationCmd, ExperienceCmd, NeofetchCmd, ProjectsCmd, SkillsCmd, WhoamiCmd,
};
use crate::time::format_timestamp;

/// Register all built-in commands into a registry.
///
/// Registration order is the order shown by `help` and searched by tab
/// completion.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(ExperienceCmd));
    reg.register(Box::new(SkillsCmd));
    reg.register(Box::new(ProjectsCmd));
    reg.register(Box::new(EducationCmd));
    reg.register(Box::new(ContactCmd));
    reg.register(Box::new(NeofetchCmd));
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(CatCmd));
    reg.register(Box::new(PwdCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(EchoCmd));
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Show this help message"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let mut out = vec![
            markup::section_header("Available Commands"),
            markup::text_line("dim", &"\u{2500}".repeat(41)),
        ];
        for cmd in env.registry.list() {
            let label = if cmd.aliases().is_empty() {
                cmd.usage().to_string()
            } else {
                let mut names = vec![cmd.name()];
                names.extend_from_slice(cmd.aliases());
                names.join(" / ")
            };
            out.push(format!(
                "<div class=\"help-row\"><span class=\"help-cmd\">{}</span><span class=\"help-desc dim\">{}</span></div>",
                escape_html(&label),
                escape_html(cmd.description())
            ));
        }
        out.push(markup::text_line(
            "dim",
            "Tip: Use \u{2191}\u{2193} for history, Tab for autocomplete",
        ));
        Ok(CommandOutput::Markup(out.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the terminal"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Show current date & time"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let now = env.time.now();
        Ok(CommandOutput::Markup(markup::text_line(
            "",
            &format_timestamp(&now),
        )))
    }
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Echo text back"
    }
    fn usage(&self) -> &str {
        "echo <text>"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        if args.is_empty() {
            return Ok(CommandOutput::Markup(markup::BLANK_LINE.to_string()));
        }
        Ok(CommandOutput::Markup(markup::text_line("", &args.join(" "))))
    }
}
