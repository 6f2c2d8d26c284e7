use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::render::Format;

/// Optional `apidoc.toml` (or .yaml/.json) in the working directory.
const SETTINGS_FILE: &str = "apidoc";
const ENV_PREFIX: &str = "APIDOC";

#[derive(Debug, Deserialize)]
struct RawSettings {
    strict: bool,
    format: String,
    out: Option<PathBuf>,
}

/// Run configuration, threaded explicitly into the reader and the output stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Validation failures abort the run instead of being logged.
    pub strict: bool,
    pub format: Format,
    /// Explicit output path; derived per input file when unset.
    pub out: Option<PathBuf>,
}

/// Values given on the command line. They win over the settings file and environment.
#[derive(Debug, Default)]
pub struct Overrides<'a> {
    pub strict: Option<bool>,
    pub format: Option<&'a str>,
    pub out: Option<&'a Path>,
}

impl Settings {
    /// Layers defaults, the settings file, `APIDOC_*` environment variables and the
    /// command line, then checks the format name.
    pub fn load(overrides: &Overrides) -> Result<Self, ConfigError> {
        Self::load_with_env(overrides, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(overrides: &Overrides, env: Environment) -> Result<Self, ConfigError> {
        let raw: RawSettings = Config::builder()
            .set_default("strict", false)?
            .set_default("format", Format::Markdown.to_string())?
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(env)
            .set_override_option("strict", overrides.strict)?
            .set_override_option("format", overrides.format)?
            .set_override_option("out", overrides.out.map(|p| p.to_string_lossy().into_owned()))?
            .build()?
            .try_deserialize()?;

        Ok(Settings {
            strict: raw.strict,
            format: raw.format.parse()?,
            out: raw.out,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn command_line_values() {
        let out = Path::new("docs/api.html");
        let overrides = Overrides {
            strict: Some(true),
            format: Some("html"),
            out: Some(out),
        };
        let settings = Settings::load_with_env(&overrides, env(&[])).unwrap();
        assert!(settings.strict);
        assert_eq!(settings.format, Format::Html);
        assert_eq!(settings.out.as_deref(), Some(out));
    }

    #[test]
    fn defaults() {
        let settings = Settings::load_with_env(&Overrides::default(), env(&[])).unwrap();
        assert!(!settings.strict);
        assert_eq!(settings.format, Format::Markdown);
        assert_eq!(settings.out, None);
    }

    #[test]
    fn unsupported_format_is_a_config_error() {
        let overrides = Overrides {
            format: Some("pdf"),
            ..Default::default()
        };
        let err = Settings::load_with_env(&overrides, env(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(f) if f == "pdf"));
    }

    #[test]
    fn environment_layer() {
        let vars = [("APIDOC_STRICT", "true"), ("APIDOC_FORMAT", "json")];
        let settings = Settings::load_with_env(&Overrides::default(), env(&vars)).unwrap();
        assert!(settings.strict);
        assert_eq!(settings.format, Format::Json);
    }

    #[test]
    fn explicit_false_beats_environment() {
        let overrides = Overrides {
            strict: Some(false),
            ..Default::default()
        };
        let vars = [("APIDOC_STRICT", "true")];
        let settings = Settings::load_with_env(&overrides, env(&vars)).unwrap();
        assert!(!settings.strict);
    }
}
