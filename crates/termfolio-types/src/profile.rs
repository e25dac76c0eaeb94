//! Profile content presented by the built-in commands.
//!
//! All strings are plain text. Command handlers escape them before
//! wrapping them in markup, so a profile can never inject tags.

use serde::Deserialize;

/// The person (or project) the terminal describes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    /// Short dimmed line under the headline.
    pub tagline: String,
    /// Places shown in the "Based in" line.
    pub locations: Vec<String>,
    /// Free-form summary lines.
    pub summary: Vec<String>,
    pub experience: Vec<TimelineEntry>,
    pub education: Vec<TimelineEntry>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub contact: Vec<ContactLink>,
    pub neofetch: Neofetch,
}

/// One role or course in a timeline.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TimelineEntry {
    pub role: String,
    pub organization: String,
    pub period: String,
    pub details: Vec<String>,
}

/// A labelled group of skill tags sharing one accent color.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub label: String,
    /// CSS color used for the tag border and text.
    pub color: String,
    pub items: Vec<String>,
}

/// A project card.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    /// Dimmed note after the name, e.g. "(this website)".
    pub note: Option<String>,
    pub description: String,
    pub stats: String,
    /// Style class for the stats line (`amber`, `green`, ...).
    pub stats_class: Option<String>,
}

/// A contact row with an optional link target.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactLink {
    pub label: String,
    pub text: String,
    pub href: Option<String>,
}

/// Data for the system-summary view.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Neofetch {
    pub ascii: String,
    /// `(label, value)` rows.
    pub info: Vec<(String, String)>,
}

impl Default for Neofetch {
    fn default() -> Self {
        let ascii = [
            r"  _                      __       _ _       ",
            r" | |_ ___ _ __ _ __ ___ / _| ___ | (_) ___  ",
            r" | __/ _ \ '__| '_ ` _ \ |_ / _ \| | |/ _ \ ",
            r" | ||  __/ |  | | | | | |  _| (_) | | | (_) |",
            r"  \__\___|_|  |_| |_| |_|_|  \___/|_|_|\___/ ",
        ]
        .join("\n");
        let info = [
            ("OS", "TermfolioOS 1.0"),
            ("Host", "Somewhere on the internet"),
            ("Kernel", "Ship fast, keep it simple"),
            ("Shell", "termfolio"),
            ("Packages", "serde, toml, log, thiserror"),
            ("CPU", "Caffeine-powered"),
            ("Memory", "Several years of engineering"),
            ("Uptime", "Always shipping"),
        ]
        .into_iter()
        .map(|(l, v)| (l.to_string(), v.to_string()))
        .collect();
        Self { ascii, info }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Alex Example".to_string(),
            headline: "Software Engineer".to_string(),
            tagline: "Builds small tools that do one thing well".to_string(),
            locations: vec!["Lisbon".to_string(), "Remote".to_string()],
            summary: vec![
                "I like shipping fast, building with care, and keeping things simple.".to_string(),
            ],
            experience: vec![
                TimelineEntry {
                    role: "Senior Engineer".to_string(),
                    organization: "Example Corp".to_string(),
                    period: "2022 - Present".to_string(),
                    details: vec![
                        "Led the platform rewrite".to_string(),
                        "Owned CI/CD and release tooling".to_string(),
                    ],
                },
                TimelineEntry {
                    role: "Software Engineer".to_string(),
                    organization: "Sample Labs".to_string(),
                    period: "2019 - 2022".to_string(),
                    details: vec!["Backend services and internal CLIs".to_string()],
                },
            ],
            education: vec![TimelineEntry {
                role: "B.Sc. Computer Science".to_string(),
                organization: "Example University".to_string(),
                period: "2015 - 2019".to_string(),
                details: Vec::new(),
            }],
            skills: vec![
                SkillGroup {
                    label: "Languages".to_string(),
                    color: "#67e8f9".to_string(),
                    items: vec!["Rust".to_string(), "Python".to_string(), "TypeScript".to_string()],
                },
                SkillGroup {
                    label: "Tools & Platforms".to_string(),
                    color: "#4ade80".to_string(),
                    items: vec!["Git".to_string(), "Linux".to_string(), "Docker".to_string()],
                },
                SkillGroup {
                    label: "Principles".to_string(),
                    color: "#ffb627".to_string(),
                    items: vec!["Clean Architecture".to_string(), "Ship Fast".to_string()],
                },
            ],
            projects: vec![
                Project {
                    name: "termfolio".to_string(),
                    note: Some("(this terminal)".to_string()),
                    description: "Interactive terminal portfolio".to_string(),
                    stats: "Configurable profile, scripted boot, tab completion".to_string(),
                    stats_class: Some("green".to_string()),
                },
                Project {
                    name: "logpipe".to_string(),
                    note: None,
                    description: "Structured log shipper".to_string(),
                    stats: "Used in production at Example Corp".to_string(),
                    stats_class: Some("amber".to_string()),
                },
            ],
            contact: vec![
                ContactLink {
                    label: "Email".to_string(),
                    text: "alex@example.com".to_string(),
                    href: Some("mailto:alex@example.com".to_string()),
                },
                ContactLink {
                    label: "GitHub".to_string(),
                    text: "github.com/example".to_string(),
                    href: Some("https://github.com/example".to_string()),
                },
            ],
            neofetch: Neofetch::default(),
        }
    }
}
