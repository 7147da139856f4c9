use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings read from `Domkit.toml`. Every field is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct DomkitConfig {
    pub(crate) render: RenderConfig,
    pub(crate) password: PasswordConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct RenderConfig {
    /// The `id` of the container descriptions are rendered into.
    pub(crate) mount_id: String,

    /// Indent the HTML output.
    pub(crate) pretty: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mount_id: "root".to_string(),
            pretty: false,
        }
    }
}

/// Starting options for the password generator demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct PasswordConfig {
    pub(crate) length: usize,
    pub(crate) numbers: bool,
    pub(crate) chars: bool,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: 8,
            numbers: false,
            chars: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl DomkitConfig {
    pub(crate) const FILE_NAME: &'static str = "Domkit.toml";

    /// Load the config from `path`, or from `Domkit.toml` in the working directory.
    ///
    /// An explicit path has to exist. The implicit file is optional and its absence means
    /// defaults.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(Self::FILE_NAME), false),
        };

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no {} found, using defaults", Self::FILE_NAME);
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        let config: DomkitConfig = toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_is_all_defaults() {
        let config: DomkitConfig = toml::from_str("").unwrap();
        assert_eq!(config, DomkitConfig::default());
        assert_eq!(config.render.mount_id, "root");
        assert_eq!(config.password.length, 8);
    }

    #[test]
    fn partial_sections() {
        let config: DomkitConfig = toml::from_str(
            r#"
            [render]
            pretty = true

            [password]
            numbers = true
            length = 16
            "#,
        )
        .unwrap();

        assert!(config.render.pretty);
        assert_eq!(config.render.mount_id, "root");
        assert_eq!(
            config.password,
            PasswordConfig {
                length: 16,
                numbers: true,
                chars: false,
            }
        );
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = DomkitConfig::load(Some(Path::new("definitely/not/here/Domkit.toml")));
        assert!(matches!(err, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn bad_types_are_reported() {
        assert!(toml::from_str::<DomkitConfig>("[render]\npretty = \"yes\"").is_err());
    }
}
