/*!
 * TOML command manifest
 *
 * Describes a command group without a `clap` definition:
 *
 * ```toml
 * [settings]
 * command_prefix = "hydra-pywr"
 *
 * [[commands]]
 * name = "run"
 * short_help = "Run Pywr"
 * category = "model"
 *
 * [[commands.params]]
 * name = "network_id"
 * required = true
 * ```
 */

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::command_spec::{CommandGroup, CommandSpec};
use super::descriptor::PluginSettings;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("command {0} is declared more than once")]
    DuplicateCommand(String),

    #[error("command #{index} has an empty name")]
    EmptyName { index: usize },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub settings: PluginSettings,

    #[serde(default)]
    pub commands: Vec<CommandSpec>,
}

impl Manifest {
    pub fn group(&self) -> CommandGroup {
        self.commands.iter().cloned().collect()
    }
}

pub fn parse_manifest(content: &str) -> Result<Manifest, ManifestError> {
    let manifest: Manifest = toml::from_str(content)?;

    for (index, command) in manifest.commands.iter().enumerate() {
        if command.name.trim().is_empty() {
            return Err(ManifestError::EmptyName { index });
        }
        if manifest.commands[..index]
            .iter()
            .any(|c| c.name == command.name)
        {
            return Err(ManifestError::DuplicateCommand(command.name.clone()));
        }
    }

    debug!("parsed manifest with {} commands", manifest.commands.len());
    Ok(manifest)
}

pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest(&content)
}
