//! Runtime configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! a working terminal.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TermfolioError};
use crate::profile::Profile;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TermfolioConfig {
    /// Site name used by the default boot script.
    pub site: String,
    /// Directory reported by `pwd`.
    pub cwd: String,
    pub prompt: PromptConfig,
    pub boot: BootConfig,
    pub profile: Profile,
}

/// Prompt shown in front of every echoed command line.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub user: String,
    pub host: String,
    /// Symbol for the working directory, usually `~`.
    pub home: String,
}

/// Pacing of the boot animation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BootConfig {
    /// Base delay between revealed characters.
    pub char_delay_ms: u64,
    /// Relative jitter applied to each character delay (0.3 = +-30%).
    pub jitter: f64,
    /// Floor for any single character delay.
    pub min_delay_ms: u64,
    /// Explicit boot script. `None` uses the built-in script for `site`.
    pub steps: Option<Vec<BootStep>>,
}

/// One scripted boot line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BootStep {
    /// Text revealed character by character. Empty means a spacer line.
    #[serde(default)]
    pub text: String,
    /// Style class of the line.
    #[serde(default)]
    pub class: String,
    /// Markup appended in one piece after the text is revealed.
    #[serde(default)]
    pub suffix: Option<String>,
    /// Pause after the line is complete.
    #[serde(default)]
    pub delay_ms: u64,
}

impl Default for TermfolioConfig {
    fn default() -> Self {
        Self {
            site: "termfolio.dev".to_string(),
            cwd: "/home/visitor/portfolio".to_string(),
            prompt: PromptConfig::default(),
            boot: BootConfig::default(),
            profile: Profile::default(),
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            user: "visitor".to_string(),
            host: "termfolio".to_string(),
            home: "~".to_string(),
        }
    }
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            char_delay_ms: 6,
            jitter: 0.3,
            min_delay_ms: 3,
            steps: None,
        }
    }
}

const BOOT_OK: &str = "<span class=\"boot-ok\">OK</span>";

/// The built-in boot script for a site name.
pub fn default_boot_steps(site: &str) -> Vec<BootStep> {
    let step = |text: String, class: &str, suffix: Option<&str>, delay_ms| BootStep {
        text,
        class: class.to_string(),
        suffix: suffix.map(str::to_string),
        delay_ms,
    };
    vec![
        step(format!("Booting {site}..."), "boot-text", None, 80),
        step(
            "Loading kernel modules.............. ".to_string(),
            "boot-text",
            Some(BOOT_OK),
            100,
        ),
        step(
            "Initializing neural interface....... ".to_string(),
            "boot-text",
            Some(BOOT_OK),
            80,
        ),
        step(
            "Establishing connection............. ".to_string(),
            "boot-text",
            Some(BOOT_OK),
            100,
        ),
        step(String::new(), "", None, 80),
        step(format!("Welcome to {site}"), "boot-welcome", None, 60),
    ]
}

impl TermfolioConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&source)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// The boot script: the configured one, or the built-in one for `site`.
    pub fn boot_steps(&self) -> Vec<BootStep> {
        match &self.boot.steps {
            Some(steps) => steps.clone(),
            None => default_boot_steps(&self.site),
        }
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.boot.jitter) {
            return Err(TermfolioError::Config(format!(
                "boot.jitter must be in [0, 1), got {}",
                self.boot.jitter
            )));
        }
        if self.boot.min_delay_ms == 0 {
            return Err(TermfolioError::Config(
                "boot.min_delay_ms must be at least 1".to_string(),
            ));
        }
        if self.prompt.user.trim().is_empty() || self.prompt.host.trim().is_empty() {
            return Err(TermfolioError::Config(
                "prompt.user and prompt.host must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let cfg = TermfolioConfig::from_toml("").unwrap();
        assert_eq!(cfg.boot.char_delay_ms, 6);
        assert_eq!(cfg.boot.min_delay_ms, 3);
        assert!((cfg.boot.jitter - 0.3).abs() < f64::EPSILON);
        assert_eq!(cfg.prompt.home, "~");
    }

    #[test]
    fn default_boot_script_uses_site() {
        let cfg = TermfolioConfig::from_toml(r#"site = "example.org""#).unwrap();
        let steps = cfg.boot_steps();
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[0].text, "Booting example.org...");
        assert_eq!(steps[5].text, "Welcome to example.org");
        assert_eq!(steps[5].class, "boot-welcome");
    }

    #[test]
    fn default_boot_script_has_one_spacer() {
        let steps = default_boot_steps("x");
        assert_eq!(steps.iter().filter(|s| s.text.is_empty()).count(), 1);
        assert_eq!(steps.iter().filter(|s| s.suffix.is_some()).count(), 3);
    }

    #[test]
    fn explicit_steps_override_default() {
        let cfg = TermfolioConfig::from_toml(
            r#"
[[boot.steps]]
text = "hi"
class = "boot-text"
delay_ms = 5
"#,
        )
        .unwrap();
        let steps = cfg.boot_steps();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].text, "hi");
        assert_eq!(steps[0].suffix, None);
    }

    #[test]
    fn prompt_section_parses() {
        let cfg = TermfolioConfig::from_toml(
            r#"
[prompt]
user = "guest"
host = "box"
"#,
        )
        .unwrap();
        assert_eq!(cfg.prompt.user, "guest");
        assert_eq!(cfg.prompt.host, "box");
        assert_eq!(cfg.prompt.home, "~");
    }

    #[test]
    fn jitter_out_of_range_rejected() {
        let err = TermfolioConfig::from_toml("[boot]\njitter = 1.5").unwrap_err();
        assert!(matches!(err, TermfolioError::Config(_)));
    }

    #[test]
    fn zero_min_delay_rejected() {
        let err = TermfolioConfig::from_toml("[boot]\nmin_delay_ms = 0").unwrap_err();
        assert!(format!("{err}").contains("min_delay_ms"));
    }

    #[test]
    fn empty_prompt_user_rejected() {
        let err = TermfolioConfig::from_toml("[prompt]\nuser = \"  \"").unwrap_err();
        assert!(matches!(err, TermfolioError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = TermfolioConfig::from_toml("site = ").unwrap_err();
        assert!(matches!(err, TermfolioError::TomlParse(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("termfolio.toml");
        std::fs::write(&path, "cwd = \"/srv/site\"\n").unwrap();
        let cfg = TermfolioConfig::load(&path).unwrap();
        assert_eq!(cfg.cwd, "/srv/site");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TermfolioConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, TermfolioError::Io(_)));
    }
}
