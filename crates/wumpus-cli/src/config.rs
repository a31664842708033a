//! Hunter configuration, loaded from `.wumpus/config.yaml`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use wumpus_agent::AgentKind;

/// Where `init` writes and `load_from_dir` looks, relative to the working directory.
pub const CONFIG_PATH: &str = ".wumpus/config.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HunterConfig {
    /// Side of the cave including the wall ring.
    #[serde(default = "default_grid_size")]
    pub grid_size: usize,

    #[serde(default)]
    pub agent: AgentKind,

    /// Seed for the random baseline.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Print the decision trace as JSON once the run ends.
    #[serde(default)]
    pub trace: bool,

    /// Log the belief grid every turn (debug level).
    #[serde(default)]
    pub render: bool,
}

fn default_grid_size() -> usize {
    6
}
fn default_seed() -> u64 {
    0x5EED
}

impl Default for HunterConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            agent: AgentKind::default(),
            seed: default_seed(),
            trace: false,
            render: false,
        }
    }
}

impl HunterConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Looks for `.wumpus/config.yaml` under `dir`, falling back to defaults.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = Self::path_in(dir);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_PATH)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_size < 3 {
            bail!(
                "grid_size must be at least 3 (walls plus one cell), got {}",
                self.grid_size
            );
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String> {
        let body = serde_yaml::to_string(self).context("Failed to serialize config")?;
        Ok(format!("# Wumpus hunter configuration\n\n{body}"))
    }
}
