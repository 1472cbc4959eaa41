use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::charset::CharEncoding;
use crate::error::CodecError;
use crate::sanitize::Platform;

pub const CONFIG_FILE: &str = "textcodec.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub replacement: String,
    pub encoding: String,
    pub platform: String,
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            replacement: String::new(),
            encoding: "utf-8".to_string(),
            platform: "host".to_string(),
            json: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Self::load_from(CONFIG_FILE)
    }

    /// Reads a config file. A missing file gives the defaults; nothing is written back.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let path = path.as_ref();
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            log::debug!("loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn encoding(&self) -> Result<CharEncoding, CodecError> {
        CharEncoding::from_label(&self.encoding)
    }

    pub fn platform(&self) -> Result<Platform, CodecError> {
        self.platform.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
        assert!(!dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "encoding = \"GB18030\"\njson = true").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.encoding().unwrap(), CharEncoding::Gb18030);
        assert!(config.json);
        assert_eq!(config.replacement, "");
        assert_eq!(config.platform().unwrap(), Platform::host());
    }

    #[test]
    fn test_bad_values() {
        let config = Config {
            encoding: "latin-9000".to_string(),
            platform: "beos".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.encoding(), Err(CodecError::UnsupportedEncoding(_))));
        assert!(matches!(config.platform(), Err(CodecError::UnknownPlatform(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "json = \"maybe").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }
}
