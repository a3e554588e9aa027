//! Hydra plugin descriptor generator

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use xmltree::{Element, XMLNode};

use hydra_plugin_gen::plugin::{
    builtin::load_builtin_group, export_plugins, load_manifest, make_plugins_with, CommandGroup,
    PluginSettings,
};
use hydra_plugin_gen::app_bail;
use hydra_plugin_gen::utils::{error::app_error, init_logging};

#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Cli {
    /// Docker image the generated plugins run in
    #[clap(long)]
    docker_image: String,

    /// Directory receiving one `<command>/plugin.xml` per plugin
    #[clap(long, default_value = "plugins")]
    output_dir: PathBuf,

    /// TOML command manifest (defaults to the built-in hydra-pywr commands)
    #[clap(long)]
    manifest: Option<PathBuf>,

    /// Print a JSON summary instead of writing files
    #[clap(long)]
    dry_run: bool,

    #[clap(long, short)]
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct PluginSummary {
    name: String,
    category: Option<String>,
    mandatory_args: usize,
    non_mandatory_args: usize,
}

impl PluginSummary {
    fn from_xml(name: String, xml: &Element) -> Self {
        let count_args = |list: &str| {
            xml.get_child(list)
                .map(|el| {
                    el.children
                        .iter()
                        .filter(|n| matches!(n, XMLNode::Element(_)))
                        .count()
                })
                .unwrap_or(0)
        };
        Self {
            category: xml
                .get_child("plugin_category")
                .and_then(|el| el.get_text())
                .map(|t| t.to_string()),
            mandatory_args: count_args("mandatory_args"),
            non_mandatory_args: count_args("non_mandatory_args"),
            name,
        }
    }
}

fn load_source(cli: &Cli) -> Result<(CommandGroup, PluginSettings)> {
    match &cli.manifest {
        Some(path) => {
            let manifest = load_manifest(path)
                .with_context(|| format!("failed to load manifest {}", path.display()))?;
            Ok((manifest.group(), manifest.settings))
        }
        None => Ok((load_builtin_group(), PluginSettings::default())),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose).map_err(app_error)?;

    if cli.docker_image.trim().is_empty() {
        app_bail!("--docker-image must not be empty");
    }

    let (group, settings) = load_source(&cli)?;
    info!("loaded {} commands", group.count());

    if cli.dry_run {
        let summaries: Vec<_> = make_plugins_with(&group, settings, &cli.docker_image)
            .map(|(name, xml)| PluginSummary::from_xml(name, &xml))
            .collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    let written = export_plugins(&group, &settings, &cli.docker_image, &cli.output_dir)?;
    info!(
        "generated {} plugins in {}",
        written.len(),
        cli.output_dir.display()
    );

    Ok(())
}
