//! Plugin descriptor
//!
//! The flat record written to `plugin.xml` for one command.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::args::{make_args, switch_collisions, ArgumentDescriptor};
use super::command_spec::CommandSpec;

/// Fixed values shared by every generated plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginSettings {
    /// Executable the plugin command is prefixed with
    pub command_prefix: String,
    pub shell: String,
    pub location: String,
    pub log_extension: String,
    pub output_extension: String,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            command_prefix: "hydra-pywr".to_string(),
            shell: "docker".to_string(),
            location: ".".to_string(),
            log_extension: ".log".to_string(),
            output_extension: ".out".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginDescriptor {
    pub plugin_name: Option<String>,
    pub plugin_dir: String,
    pub plugin_description: Option<String>,
    pub plugin_category: String,
    pub plugin_command: String,
    pub plugin_shell: String,
    pub plugin_docker_image: String,
    pub plugin_location: String,
    pub plugin_nativelogextension: String,
    pub plugin_nativeoutputextension: String,
    pub smallicon: Option<String>,
    pub largeicon: Option<String>,
    pub plugin_epilog: Option<String>,
    pub mandatory_args: Vec<ArgumentDescriptor>,
    pub non_mandatory_args: Vec<ArgumentDescriptor>,
}

/// Value of one descriptor key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorValue<'a> {
    Text(Option<&'a str>),
    Args(&'a [ArgumentDescriptor]),
}

impl PluginDescriptor {
    /// Keys and values in document order. `switches` is always empty.
    pub fn entries(&self) -> Vec<(&'static str, DescriptorValue<'_>)> {
        use DescriptorValue::{Args, Text};

        vec![
            ("plugin_name", Text(self.plugin_name.as_deref())),
            ("plugin_dir", Text(Some(self.plugin_dir.as_str()))),
            ("plugin_description", Text(self.plugin_description.as_deref())),
            ("plugin_category", Text(Some(self.plugin_category.as_str()))),
            ("plugin_command", Text(Some(self.plugin_command.as_str()))),
            ("plugin_shell", Text(Some(self.plugin_shell.as_str()))),
            ("plugin_docker_image", Text(Some(self.plugin_docker_image.as_str()))),
            ("plugin_location", Text(Some(self.plugin_location.as_str()))),
            (
                "plugin_nativelogextension",
                Text(Some(self.plugin_nativelogextension.as_str())),
            ),
            (
                "plugin_nativeoutputextension",
                Text(Some(self.plugin_nativeoutputextension.as_str())),
            ),
            ("smallicon", Text(self.smallicon.as_deref())),
            ("largeicon", Text(self.largeicon.as_deref())),
            ("plugin_epilog", Text(self.plugin_epilog.as_deref())),
            ("mandatory_args", Args(&self.mandatory_args)),
            ("non_mandatory_args", Args(&self.non_mandatory_args)),
            ("switches", Text(None)),
        ]
    }
}

/// Build the descriptor for `command` with the default settings.
pub fn make_plugin(command: &CommandSpec, category: &str, docker_image: &str) -> PluginDescriptor {
    make_plugin_with(&PluginSettings::default(), command, category, docker_image)
}

pub fn make_plugin_with(
    settings: &PluginSettings,
    command: &CommandSpec,
    category: &str,
    docker_image: &str,
) -> PluginDescriptor {
    debug!("building plugin descriptor for command {}", command.name);

    for switch in switch_collisions(command) {
        warn!(
            "command {} has several parameters mapping to switch {}",
            command.name, switch
        );
    }

    PluginDescriptor {
        plugin_name: command.short_help.clone(),
        plugin_dir: String::new(),
        plugin_description: command.help.clone(),
        plugin_category: category.to_string(),
        plugin_command: format!("{} {}", settings.command_prefix, command.name),
        plugin_shell: settings.shell.clone(),
        plugin_docker_image: docker_image.to_string(),
        plugin_location: settings.location.clone(),
        plugin_nativelogextension: settings.log_extension.clone(),
        plugin_nativeoutputextension: settings.output_extension.clone(),
        smallicon: None,
        largeicon: None,
        plugin_epilog: command.epilog.clone(),
        mandatory_args: make_args(command, true).collect(),
        non_mandatory_args: make_args(command, false).collect(),
    }
}
