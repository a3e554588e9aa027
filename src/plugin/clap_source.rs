//! `clap` introspection
//!
//! Builds a [`CommandGroup`] from the sub-commands of a `clap::Command`.
//! clap has no custom attributes, so the Hydra app category of each
//! sub-command comes from a table keyed by sub-command name.

use std::collections::HashMap;

use clap::{Arg, ArgAction, Command};

use super::command_spec::{CommandGroup, CommandSpec, ParamKind, ParamSpec};

impl CommandGroup {
    pub fn from_clap(cmd: &Command, categories: &HashMap<String, String>) -> Self {
        cmd.get_subcommands()
            .map(|sub| command_from_clap(sub, categories.get(sub.get_name()).cloned()))
            .collect()
    }
}

pub fn command_from_clap(cmd: &Command, category: Option<String>) -> CommandSpec {
    let short_help = cmd.get_about().map(|s| s.to_string());
    let help = cmd
        .get_long_about()
        .map(|s| s.to_string())
        .or_else(|| short_help.clone());

    CommandSpec {
        name: cmd.get_name().to_string(),
        short_help,
        help,
        epilog: cmd.get_after_help().map(|s| s.to_string()),
        category,
        params: cmd.get_arguments().map(param_from_clap).collect(),
    }
}

pub fn param_from_clap(arg: &Arg) -> ParamSpec {
    let multiple = matches!(arg.get_action(), ArgAction::Append)
        || arg
            .get_num_args()
            .map(|range| range.max_values() > 1)
            .unwrap_or(false);

    ParamSpec {
        name: arg.get_id().to_string(),
        required: arg.is_required_set(),
        multiple,
        kind: param_kind(arg),
    }
}

fn param_kind(arg: &Arg) -> ParamKind {
    match arg.get_action() {
        ArgAction::Help | ArgAction::HelpShort | ArgAction::HelpLong | ArgAction::Version => {
            ParamKind::Other
        }
        _ if arg.is_positional() => ParamKind::Argument,
        _ => ParamKind::Option,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Arg;

    fn cli() -> Command {
        Command::new("tool")
            .subcommand(
                Command::new("run")
                    .about("Run a model")
                    .long_about("Run a model stored in Hydra and save the results.")
                    .after_help("Results are written back to the scenario.")
                    .arg(Arg::new("network_id").long("network-id").required(true))
                    .arg(
                        Arg::new("tag")
                            .long("tag")
                            .action(ArgAction::Append),
                    )
                    .arg(Arg::new("files").num_args(1..))
                    .arg(
                        Arg::new("version_info")
                            .long("version-info")
                            .action(ArgAction::Version),
                    ),
            )
            .subcommand(Command::new("register").about("Register the template"))
    }

    fn categories() -> HashMap<String, String> {
        HashMap::from([("run".to_string(), "model".to_string())])
    }

    #[test]
    fn test_from_clap_commands() {
        let group = CommandGroup::from_clap(&cli(), &categories());
        assert_eq!(group.count(), 2);

        let run = group.lookup("run").unwrap();
        assert_eq!(run.short_help.as_deref(), Some("Run a model"));
        assert_eq!(
            run.help.as_deref(),
            Some("Run a model stored in Hydra and save the results.")
        );
        assert_eq!(
            run.epilog.as_deref(),
            Some("Results are written back to the scenario.")
        );
        assert_eq!(run.app_category(), Some("model"));

        let register = group.lookup("register").unwrap();
        assert_eq!(register.help.as_deref(), Some("Register the template"));
        assert_eq!(register.app_category(), None);
    }

    #[test]
    fn test_from_clap_params() {
        let group = CommandGroup::from_clap(&cli(), &categories());
        let run = group.lookup("run").unwrap();

        let network = &run.params[0];
        assert_eq!(network.name, "network_id");
        assert!(network.required);
        assert!(!network.multiple);
        assert_eq!(network.kind, ParamKind::Option);

        let tag = &run.params[1];
        assert!(tag.multiple);
        assert!(!tag.required);

        let files = &run.params[2];
        assert_eq!(files.kind, ParamKind::Argument);
        assert!(files.multiple);

        assert_eq!(run.params[3].kind, ParamKind::Other);
    }
}
