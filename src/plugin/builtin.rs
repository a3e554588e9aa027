//! Built-in hydra-pywr command line
//!
//! The sub-commands of `hydra-pywr` and the Hydra app categories of those
//! that are published as plugins.

use std::collections::HashMap;

use clap::{Arg, ArgAction, Command};

use super::command_spec::CommandGroup;

const HYDRA_EPILOG: &str =
    "Connection details are read from the Hydra client configuration of the container.";

fn id_option(id: &'static str, long: &'static str, short: char, help: &'static str) -> Arg {
    Arg::new(id)
        .long(long)
        .short(short)
        .value_parser(clap::value_parser!(i64))
        .help(help)
}

/// The `hydra-pywr` command tree
pub fn hydra_pywr_cli() -> Command {
    Command::new("hydra-pywr")
        .about("Tools for running Pywr models stored in Hydra")
        .subcommand(
            Command::new("import")
                .about("Import a Pywr JSON")
                .long_about("Import a Pywr JSON model file as a new Hydra network.")
                .after_help(HYDRA_EPILOG)
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("Pywr JSON file to import"),
                )
                .arg(id_option("project_id", "project-id", 'p', "Target project").required(true))
                .arg(id_option("user_id", "user-id", 'u', "Hydra user"))
                .arg(
                    Arg::new("template_id")
                        .long("template-id")
                        .value_parser(clap::value_parser!(i64))
                        .help("Template to apply to the network"),
                )
                .arg(
                    Arg::new("projection")
                        .long("projection")
                        .help("Map projection of the node coordinates"),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export to Pywr JSON")
                .long_about("Export a Hydra network and scenario to a Pywr JSON model file.")
                .after_help(HYDRA_EPILOG)
                .arg(id_option("network_id", "network-id", 'n', "Network to export").required(true))
                .arg(
                    id_option("scenario_id", "scenario-id", 's', "Scenario to export")
                        .required(true),
                )
                .arg(id_option("user_id", "user-id", 'u', "Hydra user"))
                .arg(
                    Arg::new("data_dir")
                        .long("data-dir")
                        .default_value("/data")
                        .help("Directory the JSON is written to"),
                )
                .arg(
                    Arg::new("json_sort_keys")
                        .long("json-sort-keys")
                        .action(ArgAction::SetTrue)
                        .help("Sort the keys of the output"),
                ),
        )
        .subcommand(
            Command::new("run")
                .about("Run Pywr")
                .long_about("Run a Pywr model stored in Hydra and save the results to the scenario.")
                .after_help(HYDRA_EPILOG)
                .arg(id_option("network_id", "network-id", 'n', "Network to run").required(true))
                .arg(id_option("scenario_id", "scenario-id", 's', "Scenario to run").required(true))
                .arg(id_option("user_id", "user-id", 'u', "Hydra user"))
                .arg(
                    Arg::new("output_frequency")
                        .long("output-frequency")
                        .help("Resample frequency of the saved results"),
                )
                .arg(
                    Arg::new("solver")
                        .long("solver")
                        .help("Pywr solver to use"),
                )
                .arg(
                    Arg::new("check_model")
                        .long("check-model")
                        .action(ArgAction::SetTrue)
                        .help("Validate the model before running"),
                ),
        )
        .subcommand(
            Command::new("register")
                .about("Register the Pywr template with Hydra")
                .arg(
                    Arg::new("config")
                        .long("config")
                        .default_value("full")
                        .help("Template configuration name"),
                ),
        )
        .subcommand(
            Command::new("unregister")
                .about("Remove the Pywr template from Hydra")
                .arg(
                    Arg::new("config")
                        .long("config")
                        .default_value("full")
                        .help("Template configuration name"),
                ),
        )
        .subcommand(
            Command::new("make-plugins")
                .about("Generate the Hydra plugin descriptors")
                .arg(
                    Arg::new("docker_image")
                        .long("docker-image")
                        .required(true)
                        .help("Image the plugins run in"),
                ),
        )
}

pub fn hydra_app_categories() -> HashMap<String, String> {
    [("import", "import"), ("export", "export"), ("run", "model")]
        .into_iter()
        .map(|(name, category)| (name.to_string(), category.to_string()))
        .collect()
}

pub fn load_builtin_group() -> CommandGroup {
    CommandGroup::from_clap(&hydra_pywr_cli(), &hydra_app_categories())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        hydra_pywr_cli().debug_assert();
    }

    #[test]
    fn test_builtin_group() {
        let group = load_builtin_group();
        assert_eq!(group.count(), 6);

        let plugins: Vec<_> = group
            .commands()
            .filter(|(_, c)| c.app_category().is_some())
            .map(|(name, _)| name)
            .collect();
        assert_eq!(plugins, vec!["import", "export", "run"]);
    }

    #[test]
    fn test_run_parameters() {
        let group = load_builtin_group();
        let run = group.lookup("run").unwrap();
        let required: Vec<_> = run
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(required, vec!["network_id", "scenario_id"]);
    }
}
