use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

pub mod command;
mod config;

pub use crate::command::{normalize, Outcome, Report};
pub use crate::config::Config;
pub use iconscale::Filter;

/// An icon file and the pixel size it is expected to have.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct IconSpec {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl IconSpec {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Rejects entries that could never match a file directly inside the
    /// scanned folder.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.width > 0 && self.height > 0,
            "{}: expected size must be non zero",
            self.name
        );
        let is_plain = Path::new(&self.name)
            .file_name()
            .map(|name| name == self.name.as_str())
            .unwrap_or(false);
        if !is_plain || self.name.contains(['/', '\\']) {
            anyhow::bail!("{}: expected a plain file name", self.name);
        }
        Ok(())
    }
}

impl std::fmt::Display for IconSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({}x{})", self.name, self.width, self.height)
    }
}

/// The icon set of an app bundle, 1x and 2x variants.
pub fn default_icons() -> Vec<IconSpec> {
    vec![
        IconSpec::new("appIcon_2x.png", 72, 72),
        IconSpec::new("appIcon.png", 36, 36),
        IconSpec::new("appIconAlt_2x.png", 72, 72),
        IconSpec::new("appIconAlt.png", 36, 36),
        IconSpec::new("appLogo.png", 160, 40),
        IconSpec::new("appLogo_2x.png", 320, 80),
    ]
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Options {
    pub filter: Filter,
    /// Report mismatches without writing anything.
    pub dry_run: bool,
}
