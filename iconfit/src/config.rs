use crate::{default_icons, IconSpec, Options};
use anyhow::{Context, Result};
use iconscale::Filter;
use serde::Deserialize;
use std::path::Path;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    icons: Vec<IconSpec>,
    filter: Filter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icons: default_icons(),
            filter: Filter::default(),
        }
    }
}

impl Config {
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Default::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_yaml(&contents).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct RawConfig {
            filter: Option<String>,
            icons: Option<Vec<IconSpec>>,
        }

        // an empty document is an empty config
        if contents.trim().is_empty() {
            return Ok(Default::default());
        }
        let config: Option<RawConfig> = serde_yaml::from_str(contents)?;
        let Some(config) = config else {
            return Ok(Default::default());
        };
        let filter = match config.filter {
            Some(filter) => filter.parse()?,
            None => Filter::default(),
        };
        let icons = match config.icons {
            Some(icons) => {
                anyhow::ensure!(!icons.is_empty(), "icons must not be empty");
                for icon in &icons {
                    icon.validate()?;
                }
                icons
            }
            None => default_icons(),
        };
        Ok(Self { icons, filter })
    }

    pub fn icons(&self) -> &[IconSpec] {
        &self.icons
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn options(&self, dry_run: bool) -> Options {
        Options {
            filter: self.filter,
            dry_run,
        }
    }
}
