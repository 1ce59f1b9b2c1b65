use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

use crate::ConfigProvider;

const CONFIG_FILE_NAME: &str = ".bill.toml";

#[derive(Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigDO {
    num_people: Option<i8>,
}

#[derive(Debug, Default)]
pub(crate) struct Config {
    /// The file the settings were read from, if any.
    source: Option<PathBuf>,
    /// Head count used when `--numPeople` is not given.
    num_people: Option<i8>,
}

impl Config {
    /// Loads the settings from `explicit` or from the default location.
    ///
    /// An explicit file must exist and parse. The default file
    /// (`$HOME/.bill.toml`) is optional, but is still rejected when malformed.
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        if let Some(path) = explicit {
            return Config::from_path(path);
        }

        let Some(path) = Self::default_path() else {
            tracing::debug!("no home directory found, skipping config file");
            return Ok(Config::default());
        };
        if !path.is_file() {
            tracing::debug!("no config file at '{}'", path.display());
            return Ok(Config::default());
        }
        Config::from_path(path)
    }

    pub fn from_path<P>(path: P) -> Result<Config>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = std::fs::read_to_string(path)
            .with_context(|| anyhow!("Failed to open config file at: '{}'", path.display()))?;
        let config_do = toml_edit::de::from_str::<ConfigDO>(&file).with_context(|| {
            anyhow!("Failed to parse the config file at: '{}'", path.display())
        })?;

        tracing::info!("Using config file: {}", path.display());
        Ok(Config {
            source: Some(path.to_path_buf()),
            num_people: config_do.num_people,
        })
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
    }
}

impl ConfigProvider for Config {
    fn num_people(&self) -> Option<i8> {
        self.num_people
    }
}
