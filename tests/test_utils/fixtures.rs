/*!
 * Shared fixtures for the integration tests
 */

use hydra_plugin_gen::{CommandGroup, CommandSpec, ParamKind, ParamSpec};
use xmltree::{Element, XMLNode};

pub const TEST_IMAGE: &str = "myimage:latest";

/// The single-command group used by the end-to-end checks
pub fn run_group() -> CommandGroup {
    CommandGroup::new().with_command(
        CommandSpec::new("run")
            .with_short_help("Run a model")
            .with_help("Run a Pywr model stored in Hydra.")
            .with_category("Network")
            .with_param(ParamSpec::option("network_id").required()),
    )
}

/// A mixed group: plugins, plain commands and non-argument controls
pub fn mixed_group() -> CommandGroup {
    CommandGroup::new()
        .with_command(
            CommandSpec::new("export")
                .with_short_help("Export to Pywr JSON")
                .with_help("Export a network.")
                .with_epilog("Requires a running Hydra server.")
                .with_category("export")
                .with_param(ParamSpec::option("network_id").required())
                .with_param(ParamSpec::option("scenario_id").required())
                .with_param(ParamSpec::option("user_id"))
                .with_param(ParamSpec::option("data_dir"))
                .with_param(ParamSpec::new("help", ParamKind::Other)),
        )
        .with_command(CommandSpec::new("register").with_short_help("Register the template"))
        .with_command(
            CommandSpec::new("import")
                .with_short_help("Import a Pywr JSON")
                .with_category("import")
                .with_param(ParamSpec::argument("filename").required())
                .with_param(ParamSpec::option("tags").multiple()),
        )
}

pub fn child_text(el: &Element, name: &str) -> Option<String> {
    el.get_child(name)
        .and_then(|c| c.get_text())
        .map(|t| t.to_string())
}

/// `<arg>` children of `mandatory_args` / `non_mandatory_args`
pub fn args_of<'a>(root: &'a Element, list: &str) -> Vec<&'a Element> {
    root.get_child(list)
        .map(|l| {
            l.children
                .iter()
                .filter_map(|n| match n {
                    XMLNode::Element(e) if e.name == "arg" => Some(e),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}
