//! Plugin generation and export

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};
use xmltree::Element;

use super::command_spec::CommandGroup;
use super::descriptor::{make_plugin_with, PluginSettings};
use super::xml::{plugin_to_xml, write_plugin_xml};
use crate::utils::error::AppResult;

pub const PLUGIN_FILE_NAME: &str = "plugin.xml";

/// `(command name, plugin tree)` for every command of `group` that declares
/// a category. Other commands are skipped.
pub fn make_plugins<'a>(
    group: &'a CommandGroup,
    docker_image: &'a str,
) -> impl Iterator<Item = (String, Element)> + 'a {
    make_plugins_with(group, PluginSettings::default(), docker_image)
}

pub fn make_plugins_with<'a>(
    group: &'a CommandGroup,
    settings: PluginSettings,
    docker_image: &'a str,
) -> impl Iterator<Item = (String, Element)> + 'a {
    group.commands().filter_map(move |(name, command)| {
        let Some(category) = command.app_category() else {
            debug!("command {} has no app category, skipping", name);
            return None;
        };
        let plugin = make_plugin_with(&settings, command, category, docker_image);
        Some((name.to_string(), plugin_to_xml(&plugin)))
    })
}

/// Write `output_dir/<name>/plugin.xml` for every generated plugin.
///
/// Returns the written paths in generation order.
pub fn export_plugins(
    group: &CommandGroup,
    settings: &PluginSettings,
    docker_image: &str,
    output_dir: &Path,
) -> AppResult<Vec<PathBuf>> {
    let mut written = Vec::new();

    for (name, xml) in make_plugins_with(group, settings.clone(), docker_image) {
        let plugin_dir = output_dir.join(&name);
        fs::create_dir_all(&plugin_dir)
            .with_context(|| format!("failed to create {}", plugin_dir.display()))?;

        let path = plugin_dir.join(PLUGIN_FILE_NAME);
        let file = fs::File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        write_plugin_xml(&xml, file)
            .with_context(|| format!("failed to write {}", path.display()))?;

        info!("wrote plugin {} to {}", name, path.display());
        written.push(path);
    }

    Ok(written)
}
