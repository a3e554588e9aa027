//! Plugin descriptor generation
//!
//! command source -> descriptor -> argument descriptors -> `plugin_info` XML
//!

pub mod args;
pub mod builtin;
pub mod clap_source;
pub mod command_spec;
pub mod descriptor;
pub mod generator;
pub mod manifest;
pub mod xml;

pub use args::{make_args, ArgumentDescriptor};
pub use command_spec::{CommandGroup, CommandSpec, ParamKind, ParamSpec};
pub use descriptor::{make_plugin, make_plugin_with, PluginDescriptor, PluginSettings};
pub use generator::{export_plugins, make_plugins, make_plugins_with, PLUGIN_FILE_NAME};
pub use manifest::{load_manifest, parse_manifest, Manifest, ManifestError};
pub use xml::{plugin_to_xml, plugin_xml_string, write_plugin_xml};
