//! Views over the configured profile: whoami, experience, skills,
//! projects, education, contact, neofetch.

use termfolio_types::error::Result;
use termfolio_types::profile::TimelineEntry;

use crate::interpreter::{Command, CommandOutput, Environment};
use crate::markup::{escape_html, line, section_header, text_line};

/// Label column width in the neofetch info block.
const NEOFETCH_LABEL_WIDTH: usize = 14;

fn timeline(entries: &[TimelineEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| {
            let mut block = String::from("<div class=\"timeline-entry\">\n");
            block.push_str(&format!(
                "  <div class=\"role\">{}</div>\n",
                escape_html(&e.role)
            ));
            block.push_str(&format!(
                "  <div class=\"company bright\">{}</div>\n",
                escape_html(&e.organization)
            ));
            block.push_str(&format!(
                "  <div class=\"date\">{}</div>\n",
                escape_html(&e.period)
            ));
            for d in &e.details {
                block.push_str(&format!(
                    "  <div class=\"detail\">\u{2022} {}</div>\n",
                    escape_html(d)
                ));
            }
            block.push_str("</div>");
            block
        })
        .collect()
}

// ---------------------------------------------------------------------------
// whoami / about
// ---------------------------------------------------------------------------

pub(crate) struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn aliases(&self) -> &[&str] {
        &["about"]
    }
    fn description(&self) -> &str {
        "Who is behind this terminal?"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let p = env.profile;
        let mut lines = vec![
            section_header("$ whoami"),
            "<div class=\"output-block\">".to_string(),
            text_line("bright", &p.name),
            text_line("amber", &p.headline),
        ];
        if !p.tagline.is_empty() {
            lines.push(text_line("dim", &p.tagline));
        }
        if !p.locations.is_empty() {
            let places: Vec<String> = p
                .locations
                .iter()
                .map(|l| format!("<span class=\"cyan\">{}</span>", escape_html(l)))
                .collect();
            lines.push(line("", &format!("Based in {}.", places.join(" &amp; "))));
        }
        lines.extend(p.summary.iter().map(|s| text_line("", s)));
        lines.push("</div>".to_string());
        Ok(CommandOutput::Markup(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// experience / work
// ---------------------------------------------------------------------------

pub(crate) struct ExperienceCmd;
impl Command for ExperienceCmd {
    fn name(&self) -> &str {
        "experience"
    }
    fn aliases(&self) -> &[&str] {
        &["work"]
    }
    fn description(&self) -> &str {
        "Work history & timeline"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let mut lines = vec![section_header("$ experience")];
        lines.extend(timeline(&env.profile.experience));
        Ok(CommandOutput::Markup(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// skills
// ---------------------------------------------------------------------------

pub(crate) struct SkillsCmd;
impl Command for SkillsCmd {
    fn name(&self) -> &str {
        "skills"
    }
    fn description(&self) -> &str {
        "Technical skills & tools"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let mut lines = vec![section_header("$ skills")];
        for group in &env.profile.skills {
            let color = escape_html(&group.color);
            let tags: String = group
                .items
                .iter()
                .map(|item| {
                    format!(
                        "<span class=\"tag\" style=\"border-color:{color};color:{color}\">{}</span>",
                        escape_html(item)
                    )
                })
                .collect();
            lines.push(text_line("amber", &group.label));
            lines.push(line("", &tags));
        }
        Ok(CommandOutput::Markup(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

pub(crate) struct ProjectsCmd;
impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        "projects"
    }
    fn description(&self) -> &str {
        "Project showcase"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let mut lines = vec![section_header("$ projects")];
        for p in &env.profile.projects {
            let note = p
                .note
                .as_deref()
                .map(|n| format!(" <span class=\"dim\">{}</span>", escape_html(n)))
                .unwrap_or_default();
            let stat_class = match p.stats_class.as_deref() {
                Some(c) => format!("project-stat {}", escape_html(c)),
                None => "project-stat".to_string(),
            };
            lines.push(format!(
                "<div class=\"project\">\n  <div class=\"project-name\">{}{note}</div>\n  <div class=\"project-desc\">{}</div>\n  <div class=\"{stat_class}\">{}</div>\n</div>",
                escape_html(&p.name),
                escape_html(&p.description),
                escape_html(&p.stats),
            ));
        }
        Ok(CommandOutput::Markup(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// education
// ---------------------------------------------------------------------------

pub(crate) struct EducationCmd;
impl Command for EducationCmd {
    fn name(&self) -> &str {
        "education"
    }
    fn description(&self) -> &str {
        "Education history"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let mut lines = vec![section_header("$ education")];
        lines.extend(timeline(&env.profile.education));
        Ok(CommandOutput::Markup(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// contact
// ---------------------------------------------------------------------------

pub(crate) struct ContactCmd;
impl Command for ContactCmd {
    fn name(&self) -> &str {
        "contact"
    }
    fn description(&self) -> &str {
        "Get in touch"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let mut lines = vec![
            section_header("$ contact"),
            "<div class=\"output-block\">".to_string(),
        ];
        for c in &env.profile.contact {
            let value = match &c.href {
                Some(href) => format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
                    escape_html(href),
                    escape_html(&c.text)
                ),
                None => escape_html(&c.text),
            };
            lines.push(line(
                "",
                &format!(
                    "<span class=\"amber\">{:<8}</span> {value}",
                    escape_html(&c.label)
                ),
            ));
        }
        lines.push("</div>".to_string());
        Ok(CommandOutput::Markup(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// neofetch
// ---------------------------------------------------------------------------

pub(crate) struct NeofetchCmd;
impl Command for NeofetchCmd {
    fn name(&self) -> &str {
        "neofetch"
    }
    fn description(&self) -> &str {
        "System info (the fun way)"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let n = &env.profile.neofetch;
        let info: String = n
            .info
            .iter()
            .map(|(label, value)| {
                format!(
                    "<div><span class=\"label\">{}</span><span class=\"value\">{}</span></div>",
                    escape_html(&format!("{label:<width$}", width = NEOFETCH_LABEL_WIDTH)),
                    escape_html(value)
                )
            })
            .collect();
        Ok(CommandOutput::Markup(format!(
            "<div class=\"neofetch\">\n  <pre class=\"neofetch-ascii\">{}</pre>\n  <div class=\"neofetch-info\">{info}</div>\n</div>",
            escape_html(&n.ascii)
        )))
    }
}
