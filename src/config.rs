use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Error, Result};
use crate::silhouette::BuildingParams;

/// Scene layout. Every field has a default, so a config file only needs
/// the keys it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rows: usize,
    pub columns: usize,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub theme: Option<String>,
    pub seed: Option<u64>,
    pub building: BuildingParams,
    /// Share of each cell a building may fill.
    pub fit: f64,
    /// Fresh silhouettes tried per cell before giving up.
    pub max_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rows: 2,
            columns: 8,
            canvas_width: 1920,
            canvas_height: 1080,
            theme: None,
            seed: None,
            building: BuildingParams::default(),
            fit: 0.8,
            max_attempts: 8,
        }
    }
}

impl Config {
    pub fn from_json_value(v: serde_json::Value) -> Result<Self> {
        let cfg: Config = serde_json::from_value(v)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let cfg: Config = serde_json::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let fail = |msg: &str| Err(Error::InvalidConfig(msg.to_string()));
        if self.rows == 0 || self.columns == 0 {
            return fail("rows and columns must be positive");
        }
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return fail("canvas dimensions must be positive");
        }
        if !(self.fit > 0.0 && self.fit <= 1.0) {
            return fail("fit must be in (0, 1]");
        }
        if self.max_attempts == 0 {
            return fail("max_attempts must be positive");
        }
        let b = &self.building;
        if b.width < 3 || b.height < 2 || b.nlines == 0 {
            return fail("building needs width >= 3, height >= 2 and at least one line");
        }
        Ok(())
    }

    pub fn cell_size(&self) -> (f64, f64) {
        (
            self.canvas_width as f64 / self.columns as f64,
            self.canvas_height as f64 / self.rows as f64,
        )
    }
}
