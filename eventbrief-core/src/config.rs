//! eventbrief configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};

use crate::error::{EventbriefError, EventbriefResult};
use crate::extract::DEFAULT_TAG;
use crate::ics::DEFAULT_UID_DOMAIN;

const ENV_PREFIX: &str = "EVENTBRIEF";

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_tag() -> String {
    DEFAULT_TAG.to_string()
}

fn default_duration_hours() -> f64 {
    1.0
}

fn default_uid_domain() -> String {
    DEFAULT_UID_DOMAIN.to_string()
}

/// Configuration at ~/.config/eventbrief/config.toml
///
/// Every key is optional; `EVENTBRIEF_*` environment variables override the
/// file, with `__` separating sections (`EVENTBRIEF_INVITE__DURATION_HOURS`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EventbriefConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub extract: ExtractConfig,

    #[serde(default)]
    pub invite: InviteConfig,
}

/// Settings for event extraction.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ExtractConfig {
    /// Tag marking event bullets, as in `**[EVENT]**`
    #[serde(default = "default_tag")]
    pub tag: String,
}

/// Defaults applied to generated invites.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct InviteConfig {
    #[serde(default = "default_duration_hours")]
    pub duration_hours: f64,

    #[serde(default)]
    pub organizer_name: String,

    #[serde(default)]
    pub organizer_email: String,

    /// Suffix for generated uids (`<uuid>@<uid_domain>`)
    #[serde(default = "default_uid_domain")]
    pub uid_domain: String,
}

impl Default for EventbriefConfig {
    fn default() -> Self {
        EventbriefConfig {
            log_level: default_log_level(),
            extract: ExtractConfig::default(),
            invite: InviteConfig::default(),
        }
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        ExtractConfig { tag: default_tag() }
    }
}

impl Default for InviteConfig {
    fn default() -> Self {
        InviteConfig {
            duration_hours: default_duration_hours(),
            organizer_name: String::new(),
            organizer_email: String::new(),
            uid_domain: default_uid_domain(),
        }
    }
}

impl EventbriefConfig {
    pub fn config_path() -> EventbriefResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventbriefError::Config("Could not determine config directory".into()))?
            .join("eventbrief");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location. A missing file means defaults.
    pub fn load() -> EventbriefResult<Self> {
        Self::build(&Self::config_path()?, false)
    }

    /// Load from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> EventbriefResult<Self> {
        Self::build(path, true)
    }

    fn build(path: &Path, required: bool) -> EventbriefResult<Self> {
        Self::build_with_env(path, required, None)
    }

    /// `env` replaces the process environment when given.
    fn build_with_env(
        path: &Path,
        required: bool,
        env: Option<Map<String, String>>,
    ) -> EventbriefResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .build()
            .map_err(|e| EventbriefError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventbriefError::Config(e.to_string()))
    }

    /// Create a config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EventbriefResult<()> {
        let defaults = Self::default();
        let contents = format!(
            "\
# eventbrief configuration

# Log level when RUST_LOG is not set (error, warn, info, debug, trace):
# log_level = \"{}\"

[extract]
# Tag marking event bullets, as in **[EVENT]**:
# tag = \"{}\"

[invite]
# Length of generated invites in hours:
# duration_hours = {:.1}

# Organizer written into invites (ORGANIZER is omitted without an email):
# organizer_name = \"Startup Hub\"
# organizer_email = \"events@example.com\"

# Suffix of generated invite uids:
# uid_domain = \"{}\"
",
            defaults.log_level,
            defaults.extract.tag,
            defaults.invite.duration_hours,
            defaults.invite.uid_domain,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventbriefError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EventbriefError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Serialize the current settings as TOML.
    pub fn to_toml(&self) -> EventbriefResult<String> {
        toml::to_string_pretty(self).map_err(|e| EventbriefError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_library_constants() {
        let config = EventbriefConfig::default();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.extract.tag, "EVENT");
        assert_eq!(config.invite.duration_hours, 1.0);
        assert_eq!(config.invite.uid_domain, "eventbrief");
        assert!(config.invite.organizer_email.is_empty());
    }

    #[test]
    fn test_default_template_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        EventbriefConfig::create_default_config(&path).unwrap();
        let loaded = EventbriefConfig::load_from(&path).unwrap();

        assert_eq!(loaded, EventbriefConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[invite]\nduration_hours = 2.5\norganizer_email = \"team@hub.example\"\n",
        )
        .unwrap();

        let loaded = EventbriefConfig::load_from(&path).unwrap();
        assert_eq!(loaded.invite.duration_hours, 2.5);
        assert_eq!(loaded.invite.organizer_email, "team@hub.example");
        assert_eq!(loaded.invite.uid_domain, "eventbrief");
        assert_eq!(loaded.extract.tag, "EVENT");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = EventbriefConfig::load_from(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(EventbriefError::Config(_))));
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "log_level = \"info\"\n[extract]\ntag = \"EVENT\"\n[invite]\nduration_hours = 1.0\n",
        )
        .unwrap();

        let env: Map<String, String> = [
            ("EVENTBRIEF_INVITE__DURATION_HOURS", "2.5"),
            ("EVENTBRIEF_EXTRACT__TAG", "MEETUP"),
            ("UNRELATED_INVITE__DURATION_HOURS", "9"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let loaded = EventbriefConfig::build_with_env(&path, true, Some(env)).unwrap();
        assert_eq!(loaded.invite.duration_hours, 2.5);
        assert_eq!(loaded.extract.tag, "MEETUP");
        assert_eq!(loaded.log_level, "info");
        assert_eq!(loaded.invite.uid_domain, "eventbrief");
    }

    #[test]
    fn test_environment_alone_over_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let env: Map<String, String> = [("EVENTBRIEF_LOG_LEVEL".to_string(), "debug".to_string())]
            .into_iter()
            .collect();

        let loaded =
            EventbriefConfig::build_with_env(&dir.path().join("absent.toml"), false, Some(env))
                .unwrap();
        assert_eq!(loaded.log_level, "debug");
        assert_eq!(loaded.invite, InviteConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EventbriefConfig::default();
        let text = config.to_toml().unwrap();
        let parsed: EventbriefConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
