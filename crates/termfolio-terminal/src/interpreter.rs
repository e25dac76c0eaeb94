//! Command trait, registry, and dispatch logic.
//!
//! Dispatch order for a submitted line:
//! 1. exact full-line pattern response,
//! 2. privileged-prefix rejection,
//! 3. registry command by first token,
//! 4. first-token pattern response,
//! 5. "command not found".

use std::collections::HashMap;

use termfolio_types::config::{PromptConfig, TermfolioConfig};
use termfolio_types::error::{Result, TermfolioError};
use termfolio_types::profile::Profile;

use crate::completion::Completer;
use crate::history::History;
use crate::markup;
use crate::responder::PatternResponder;
use crate::time::{SystemClock, TimeSource};

/// Lines starting with this are treated as privilege escalation attempts.
const PRIVILEGED_PREFIX: &str = "sudo ";

/// The one privileged phrase that is not rejected.
const ALLOWED_PRIVILEGED: &str = "sudo hire me";

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Pre-escaped markup to append to the scrollback.
    Markup(String),
    /// Command produced no visible output.
    None,
    /// Signal to clear the scrollback. Nothing is appended.
    Clear,
}

/// Read-only context passed to every command.
pub struct Environment<'a> {
    /// Directory reported by `pwd`.
    pub cwd: &'a str,
    /// Content presented by the profile commands.
    pub profile: &'a Profile,
    /// Wall clock for `date`.
    pub time: &'a dyn TimeSource,
    /// The registry itself, for commands that delegate to other commands.
    pub registry: &'a CommandRegistry,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// Alternative names dispatching to the same handler.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "cat <file>").
    fn usage(&self) -> &str {
        self.name()
    }

    /// Execute the command with the given arguments and environment.
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput>;
}

/// Registry of available commands.
///
/// Keys are lowercased names and aliases. Registration order is kept for
/// `help` and for the completion namespace.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under its name and aliases. A key that is
    /// already taken is rebound to the new command.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let slot = self.commands.len();
        let mut keys = vec![cmd.name().to_lowercase()];
        keys.extend(cmd.aliases().iter().map(|a| a.to_lowercase()));
        for key in keys {
            if self.index.insert(key.clone(), slot).is_some() {
                log::warn!("command '{key}' registered twice, keeping the newest");
            }
        }
        self.commands.push(cmd);
    }

    /// Look up a command by name or alias, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.index
            .get(&name.to_lowercase())
            .map(|&slot| self.commands[slot].as_ref())
    }

    /// Run a registered command.
    pub fn dispatch(
        &self,
        name: &str,
        args: &[&str],
        env: &Environment<'_>,
    ) -> Result<CommandOutput> {
        match self.get(name) {
            Some(cmd) => cmd.execute(args, env),
            None => Err(TermfolioError::UnknownCommand(name.to_lowercase())),
        }
    }

    /// Commands still reachable by at least one key, in registration order.
    pub fn list(&self) -> impl Iterator<Item = &dyn Command> + '_ {
        self.commands
            .iter()
            .enumerate()
            .filter(|(slot, _)| self.index.values().any(|s| s == slot))
            .map(|(_, cmd)| cmd.as_ref())
    }

    /// Every dispatchable key (names then aliases), in registration order.
    pub fn names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for (slot, cmd) in self.commands.iter().enumerate() {
            let keys = std::iter::once(cmd.name()).chain(cmd.aliases().iter().copied());
            for key in keys {
                let key = key.to_lowercase();
                if self.index.get(&key) == Some(&slot) && !names.contains(&key) {
                    names.push(key);
                }
            }
        }
        names
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Result of one non-blank submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Prompt-prefixed echo of the trimmed line, rendered before `output`.
    pub echo: String,
    pub output: CommandOutput,
}

/// The shell: registry, pattern table, history and completion, plus the
/// per-session context handed to commands.
pub struct Interpreter {
    registry: CommandRegistry,
    responder: PatternResponder,
    history: History,
    completer: Completer,
    prompt: PromptConfig,
    cwd: String,
    profile: Profile,
    time: Box<dyn TimeSource>,
}

impl Interpreter {
    /// Build an interpreter with the built-in commands and easter eggs.
    pub fn from_config(config: &TermfolioConfig) -> Self {
        let mut registry = CommandRegistry::new();
        crate::register_builtins(&mut registry);
        Self::new(registry, PatternResponder::with_defaults(), config)
    }

    /// Build an interpreter around an explicit registry and pattern table.
    pub fn new(
        registry: CommandRegistry,
        responder: PatternResponder,
        config: &TermfolioConfig,
    ) -> Self {
        let completer = Completer::new(
            registry.names(),
            crate::file_commands::FILE_COMMAND,
            crate::file_commands::completable_files(),
        );
        Self {
            registry,
            responder,
            history: History::new(),
            completer,
            prompt: config.prompt.clone(),
            cwd: config.cwd.clone(),
            profile: config.profile.clone(),
            time: Box::new(SystemClock),
        }
    }

    /// Replace the wall clock used by `date`.
    pub fn with_time_source(mut self, time: Box<dyn TimeSource>) -> Self {
        self.time = time;
        self
    }

    /// Parse and execute a raw input line.
    ///
    /// Blank input is a no-op (`None`): no echo and no history entry.
    /// Anything else is recorded in history and always produces an echo,
    /// even when the command is unknown.
    pub fn execute(&mut self, raw: &str) -> Option<Submission> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let echo = markup::echo_line(&self.prompt, trimmed);
        self.history.submit(trimmed);

        let output = match self.resolve(trimmed) {
            Ok(output) => output,
            Err(e) => {
                log::debug!("'{trimmed}' failed: {e}");
                CommandOutput::Markup(markup::diagnostic(&e))
            },
        };
        Some(Submission { echo, output })
    }

    /// Run a registry command directly, bypassing echo, history and the
    /// pattern table. Errors are rendered as diagnostics.
    pub fn run_command(&self, name: &str, args: &[&str]) -> CommandOutput {
        let env = self.environment();
        self.registry
            .dispatch(name, args, &env)
            .unwrap_or_else(|e| CommandOutput::Markup(markup::diagnostic(&e)))
    }

    fn resolve(&self, trimmed: &str) -> Result<CommandOutput> {
        let lower = trimmed.to_lowercase();

        if let Some(reply) = self.responder.reply(&lower) {
            log::debug!("pattern response for '{lower}'");
            return Ok(CommandOutput::Markup(reply.to_string()));
        }

        if lower.starts_with(PRIVILEGED_PREFIX) && lower != ALLOWED_PRIVILEGED {
            log::debug!("privileged input rejected");
            return Err(TermfolioError::PrivilegeDenied);
        }

        let mut tokens = trimmed.split_whitespace();
        let name = tokens.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = tokens.collect();

        if let Some(cmd) = self.registry.get(&name) {
            log::debug!("dispatching '{name}' with {} args", args.len());
            return cmd.execute(&args, &self.environment());
        }

        if let Some(reply) = self.responder.reply(&name) {
            log::debug!("first-token pattern response for '{name}'");
            return Ok(CommandOutput::Markup(reply.to_string()));
        }

        Err(TermfolioError::UnknownCommand(name))
    }

    fn environment(&self) -> Environment<'_> {
        Environment {
            cwd: &self.cwd,
            profile: &self.profile,
            time: self.time.as_ref(),
            registry: &self.registry,
        }
    }

    /// Tab-complete the current input text.
    pub fn complete(&self, text: &str) -> String {
        self.completer.complete(text)
    }

    /// Step back through history. `None` means no older entry.
    pub fn recall_previous(&mut self) -> Option<String> {
        self.history.recall_previous().map(str::to_string)
    }

    /// Step forward through history; empty once past the newest entry.
    pub fn recall_next(&mut self) -> String {
        self.history.recall_next().to_string()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn responder(&self) -> &PatternResponder {
        &self.responder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::Response;
    use crate::time::FixedClock;

    struct ShoutCmd;
    impl Command for ShoutCmd {
        fn name(&self) -> &str {
            "shout"
        }
        fn aliases(&self) -> &[&str] {
            &["yell"]
        }
        fn description(&self) -> &str {
            "Uppercase the arguments"
        }
        fn execute(&self, args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
            Ok(CommandOutput::Markup(args.join(" ").to_uppercase()))
        }
    }

    struct ArgsCmd;
    impl Command for ArgsCmd {
        fn name(&self) -> &str {
            "args"
        }
        fn description(&self) -> &str {
            "Debug-print the arguments"
        }
        fn execute(&self, args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
            Ok(CommandOutput::Markup(format!("{args:?}")))
        }
    }

    fn interp() -> Interpreter {
        let t = chrono::DateTime::parse_from_rfc3339("2026-10-19T14:03:07+02:00").unwrap();
        Interpreter::from_config(&TermfolioConfig::default())
            .with_time_source(Box::new(FixedClock(t)))
    }

    fn output_of(i: &mut Interpreter, line: &str) -> String {
        match i.execute(line).expect("non-blank input").output {
            CommandOutput::Markup(m) => m,
            other => panic!("expected markup, got {other:?}"),
        }
    }

    // -- Registry --

    #[test]
    fn register_and_dispatch_by_alias() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(ShoutCmd));
        assert!(reg.get("shout").is_some());
        assert!(reg.get("YELL").is_some());
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.names(), ["shout", "yell"]);
    }

    #[test]
    fn register_replaces_existing_key() {
        struct Other;
        impl Command for Other {
            fn name(&self) -> &str {
                "shout"
            }
            fn description(&self) -> &str {
                "replacement"
            }
            fn execute(&self, _: &[&str], _: &Environment<'_>) -> Result<CommandOutput> {
                Ok(CommandOutput::None)
            }
        }
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(ShoutCmd));
        reg.register(Box::new(Other));
        assert_eq!(reg.get("shout").unwrap().description(), "replacement");
        // The alias still points at the first command.
        assert_eq!(reg.get("yell").unwrap().description(), "Uppercase the arguments");
        assert_eq!(reg.names(), ["yell", "shout"]);
    }

    #[test]
    fn list_skips_fully_shadowed_commands() {
        struct Plain(&'static str);
        impl Command for Plain {
            fn name(&self) -> &str {
                self.0
            }
            fn description(&self) -> &str {
                self.0
            }
            fn execute(&self, _: &[&str], _: &Environment<'_>) -> Result<CommandOutput> {
                Ok(CommandOutput::None)
            }
        }
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(Plain("a")));
        reg.register(Box::new(Plain("b")));
        reg.register(Box::new(Plain("a")));
        let names: Vec<&str> = reg.list().map(|c| c.name()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn dispatch_unknown_is_error() {
        let i = interp();
        let env = i.environment();
        let err = i.registry().dispatch("nope", &[], &env).unwrap_err();
        assert!(matches!(err, TermfolioError::UnknownCommand(n) if n == "nope"));
    }

    // -- Submission basics --

    #[test]
    fn blank_input_is_noop() {
        let mut i = interp();
        assert!(i.execute("").is_none());
        assert!(i.execute("   \t ").is_none());
        assert!(i.history().is_empty());
    }

    #[test]
    fn echo_precedes_output_even_for_unknown() {
        let mut i = interp();
        let sub = i.execute("  frobnicate  ").unwrap();
        assert!(sub.echo.contains("<span class=\"command-echo\">frobnicate</span>"));
        match sub.output {
            CommandOutput::Markup(m) => {
                assert!(m.contains("command not found: frobnicate."));
                assert!(m.contains("help"));
            },
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn history_records_trimmed_line() {
        let mut i = interp();
        i.execute("  pwd ");
        i.execute("bogus");
        assert_eq!(i.history().entries(), ["pwd", "bogus"]);
        assert_eq!(i.history().cursor(), 2);
    }

    #[test]
    fn submission_exits_recall_mode() {
        let mut i = interp();
        i.execute("pwd");
        i.execute("date");
        assert_eq!(i.recall_previous().as_deref(), Some("date"));
        i.execute("ls");
        assert_eq!(i.history().cursor(), 3);
    }

    // -- Dispatch order --

    #[test]
    fn command_name_is_case_insensitive_args_keep_case() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(ArgsCmd));
        let mut i = Interpreter::new(reg, PatternResponder::new(), &TermfolioConfig::default());
        assert_eq!(output_of(&mut i, "ARGS Foo  bAR"), r#"["Foo", "bAR"]"#);
    }

    #[test]
    fn exact_pattern_beats_registry() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(ShoutCmd));
        let mut responder = PatternResponder::new();
        responder.insert("shout loud", Response::Reply("egg".into()));
        let mut i = Interpreter::new(reg, responder, &TermfolioConfig::default());
        assert_eq!(output_of(&mut i, "Shout LOUD"), "egg");
        assert_eq!(output_of(&mut i, "shout quiet"), "QUIET");
    }

    #[test]
    fn pass_through_key_keeps_registry_reachable() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(ShoutCmd));
        let mut responder = PatternResponder::new();
        responder.insert("shout", Response::PassThrough);
        let mut i = Interpreter::new(reg, responder, &TermfolioConfig::default());
        assert_eq!(output_of(&mut i, "shout"), "");
        assert_eq!(output_of(&mut i, "shout hi"), "HI");
    }

    #[test]
    fn reply_key_shadows_same_named_command() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(ShoutCmd));
        let mut responder = PatternResponder::new();
        responder.insert("shout", Response::Reply("egg".into()));
        let mut i = Interpreter::new(reg, responder, &TermfolioConfig::default());
        assert_eq!(output_of(&mut i, "shout"), "egg");
        // With arguments the full line misses, so the registry wins.
        assert_eq!(output_of(&mut i, "shout hi"), "HI");
    }

    #[test]
    fn whoami_reaches_registry_through_pass_through() {
        let mut i = interp();
        assert_eq!(
            i.responder().lookup("whoami"),
            Some(&Response::PassThrough)
        );
        let out = output_of(&mut i, "whoami");
        assert_eq!(out, output_of(&mut i, "about"));
        assert!(out.contains("$ whoami"));
    }

    #[test]
    fn first_token_pattern_after_registry_miss() {
        let mut i = interp();
        let out = output_of(&mut i, "npm run build");
        assert!(out.contains("node_modules"));
        let out = output_of(&mut i, "cd /etc");
        assert!(out.contains("Already home."));
    }

    #[test]
    fn exact_multiword_pattern() {
        let mut i = interp();
        assert!(output_of(&mut i, "cd ..").contains("root of everything"));
        assert!(output_of(&mut i, "rm -rf /").contains("sandboxed"));
        assert!(output_of(&mut i, "git status").contains("On branch main"));
    }

    #[test]
    fn unmatched_multiword_falls_to_not_found() {
        let mut i = interp();
        let out = output_of(&mut i, "git log");
        assert!(out.contains("command not found: git."));
    }

    #[test]
    fn unknown_name_is_lowercased_and_escaped() {
        let mut i = interp();
        let out = output_of(&mut i, "<B>oom");
        assert!(out.contains("command not found: &lt;b&gt;oom."));
    }

    // -- Privilege gate --

    #[test]
    fn sudo_prefix_denied() {
        let mut i = interp();
        let out = output_of(&mut i, "sudo rm -rf /");
        assert!(out.contains("root access"));
        assert!(!out.contains("offer letter"));
        assert!(!out.contains("sandboxed"));
    }

    #[test]
    fn sudo_of_real_command_denied() {
        let mut i = interp();
        assert!(output_of(&mut i, "sudo ls").contains("root access"));
    }

    #[test]
    fn allow_listed_phrase_case_insensitive() {
        let mut i = interp();
        let out = output_of(&mut i, "SUDO HIRE ME");
        assert!(out.contains("offer letter"));
        assert!(!out.contains("root access"));
    }

    #[test]
    fn allow_listed_phrase_bypasses_gate_without_pattern() {
        let mut i = Interpreter::new(
            CommandRegistry::new(),
            PatternResponder::new(),
            &TermfolioConfig::default(),
        );
        // Not denied; with no pattern or command it is simply unknown.
        let out = output_of(&mut i, "sudo hire me");
        assert!(out.contains("command not found: sudo."));
    }

    #[test]
    fn bare_sudo_is_unknown() {
        let mut i = interp();
        assert!(output_of(&mut i, "sudo").contains("command not found: sudo."));
    }

    #[test]
    fn denied_input_still_enters_history() {
        let mut i = interp();
        i.execute("sudo reboot");
        assert_eq!(i.history().entries(), ["sudo reboot"]);
    }

    // -- Completion and run_command --

    #[test]
    fn completion_uses_registry_names() {
        let i = interp();
        assert_eq!(i.complete("hel"), "help");
        assert_eq!(i.complete("ab"), "about");
        assert_eq!(i.complete("cat ab"), "cat about.txt");
    }

    #[test]
    fn run_command_bypasses_history() {
        let i = interp();
        match i.run_command("pwd", &[]) {
            CommandOutput::Markup(m) => assert!(m.contains("/home/visitor/portfolio")),
            other => panic!("unexpected {other:?}"),
        }
        assert!(i.history().is_empty());
    }

    #[test]
    fn run_command_unknown_renders_diagnostic() {
        let i = interp();
        match i.run_command("nope", &[]) {
            CommandOutput::Markup(m) => assert!(m.contains("command not found: nope.")),
            other => panic!("unexpected {other:?}"),
        }
    }
}
