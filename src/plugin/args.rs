//! Argument descriptors
//!
//! Presentation of a command's parameters as Hydra plugin switches.

use serde::Serialize;

use super::command_spec::CommandSpec;

/// Parameters whose value Hydra fills in from its own context.
const ARGTYPES: [(&str, &str); 3] = [
    ("network_id", "network"),
    ("scenario_id", "scenario"),
    ("user_id", "user"),
];

/// One parameter as seen by the plugin system
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentDescriptor {
    pub name: String,
    pub switch: String,
    pub multiple: bool,
    pub argtype: Option<&'static str>,
}

impl ArgumentDescriptor {
    pub fn new(name: &str, multiple: bool) -> Self {
        Self {
            name: name.to_string(),
            switch: switch_for(name),
            multiple,
            argtype: argtype_for(name),
        }
    }

    /// `Y` / `N` as written to the descriptor
    pub fn multiple_flag(&self) -> &'static str {
        if self.multiple {
            "Y"
        } else {
            "N"
        }
    }
}

/// `scenario_id` -> `--scenario-id`. Not reversible for names that already
/// contain hyphens.
pub fn switch_for(name: &str) -> String {
    format!("--{}", name.replace('_', "-"))
}

pub fn argtype_for(name: &str) -> Option<&'static str> {
    ARGTYPES
        .iter()
        .find(|(param, _)| *param == name)
        .map(|(_, argtype)| *argtype)
}

/// Descriptors for every argument-like parameter of `command` whose required
/// flag equals `required`, in declaration order.
pub fn make_args(
    command: &CommandSpec,
    required: bool,
) -> impl Iterator<Item = ArgumentDescriptor> + '_ {
    command
        .params
        .iter()
        .filter(|param| param.kind.is_argument_like())
        .filter(move |param| param.required == required)
        .map(|param| ArgumentDescriptor::new(&param.name, param.multiple))
}

/// Switches produced by more than one argument-like parameter of `command`.
pub fn switch_collisions(command: &CommandSpec) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut collisions = Vec::new();
    for param in command.params.iter().filter(|p| p.kind.is_argument_like()) {
        let switch = switch_for(&param.name);
        if seen.contains(&switch) {
            if !collisions.contains(&switch) {
                collisions.push(switch);
            }
        } else {
            seen.push(switch);
        }
    }
    collisions
}
