//! Hydra plugin descriptor generator
//!
//! Turns the command metadata of a CLI (its sub-commands, help text and
//! parameters) into `plugin.xml` descriptors understood by the Hydra plugin
//! registration system:
//! - command sources: in-memory model, `clap::Command` introspection, TOML manifests
//! - descriptor and argument builders
//! - XML serialization and on-disk export

pub mod plugin; // descriptor generation
pub mod utils; // errors and logging

pub use plugin::{
    export_plugins, make_args, make_plugin, make_plugins, plugin_to_xml, ArgumentDescriptor,
    CommandGroup, CommandSpec, ParamKind, ParamSpec, PluginDescriptor, PluginSettings,
};
