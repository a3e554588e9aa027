//! Command metadata model
//!
//! The collaborator side of the generator: a group of named sub-commands, each
//! carrying help text, an optional Hydra app category and its parameters.

use serde::{Deserialize, Serialize};

/// How a parameter is presented on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    /// Positional argument
    Argument,
    /// `--long` style option or flag
    #[default]
    Option,
    /// Any other control (help, version, ...); never exported as a plugin argument
    Other,
}

impl ParamKind {
    /// Positional and option-style parameters are the only ones Hydra can pass.
    pub fn is_argument_like(&self) -> bool {
        matches!(self, ParamKind::Argument | ParamKind::Option)
    }
}

/// A single command parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,

    #[serde(default)]
    pub required: bool,

    /// Whether the parameter accepts repeated values
    #[serde(default)]
    pub multiple: bool,

    #[serde(default)]
    pub kind: ParamKind,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            required: false,
            multiple: false,
            kind,
        }
    }

    pub fn argument(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::Argument)
    }

    pub fn option(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::Option)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }
}

/// Metadata of one sub-command
///
/// `category` is the Hydra app category. A command without one (or with an
/// empty one) is not a plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub name: String,

    /// One-line description, used as the plugin display name
    #[serde(default)]
    pub short_help: Option<String>,

    #[serde(default)]
    pub help: Option<String>,

    #[serde(default)]
    pub epilog: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub params: Vec<ParamSpec>,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_short_help(mut self, short_help: impl Into<String>) -> Self {
        self.short_help = Some(short_help.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_epilog(mut self, epilog: impl Into<String>) -> Self {
        self.epilog = Some(epilog.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// The category, if the command declares a non-empty one.
    pub fn app_category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// An ordered group of sub-commands, keyed by name
///
/// Iteration follows registration order; re-registering a name replaces the
/// command in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandGroup {
    commands: Vec<CommandSpec>,
}

impl CommandGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, spec: CommandSpec) {
        match self.commands.iter_mut().find(|c| c.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.commands.push(spec),
        }
    }

    pub fn register_all(&mut self, specs: impl IntoIterator<Item = CommandSpec>) {
        for spec in specs {
            self.register(spec);
        }
    }

    pub fn with_command(mut self, spec: CommandSpec) -> Self {
        self.register(spec);
        self
    }

    pub fn lookup(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// `(name, command)` pairs in registration order
    pub fn commands(&self) -> impl Iterator<Item = (&str, &CommandSpec)> {
        self.commands.iter().map(|c| (c.name.as_str(), c))
    }

    pub fn count(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl FromIterator<CommandSpec> for CommandGroup {
    fn from_iter<I: IntoIterator<Item = CommandSpec>>(iter: I) -> Self {
        let mut group = CommandGroup::new();
        group.register_all(iter);
        group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_spec_builder() {
        let spec = CommandSpec::new("run")
            .with_short_help("Run Pywr")
            .with_help("Run a Pywr model stored in Hydra.")
            .with_category("model")
            .with_param(ParamSpec::option("network_id").required())
            .with_param(ParamSpec::option("output").multiple());

        assert_eq!(spec.name, "run");
        assert_eq!(spec.app_category(), Some("model"));
        assert_eq!(spec.params.len(), 2);
        assert!(spec.params[0].required);
        assert!(!spec.params[0].multiple);
        assert!(spec.params[1].multiple);
        assert!(spec.epilog.is_none());
    }

    #[test]
    fn test_empty_category_is_absent() {
        assert_eq!(CommandSpec::new("x").app_category(), None);
        assert_eq!(CommandSpec::new("x").with_category("").app_category(), None);
    }

    #[test]
    fn test_param_kind_argument_like() {
        assert!(ParamKind::Argument.is_argument_like());
        assert!(ParamKind::Option.is_argument_like());
        assert!(!ParamKind::Other.is_argument_like());
    }

    #[test]
    fn test_group_preserves_order_and_replaces() {
        let mut group = CommandGroup::new();
        group.register(CommandSpec::new("export"));
        group.register(CommandSpec::new("import"));
        group.register(CommandSpec::new("export").with_category("export"));

        let names: Vec<_> = group.commands().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["export", "import"]);
        assert_eq!(group.count(), 2);
        assert_eq!(
            group.lookup("export").and_then(|c| c.app_category()),
            Some("export")
        );
        assert!(group.lookup("run").is_none());
    }
}
