//! `casestudy` command line tool
//!
//! Create, edit, validate and render case-study documents, and move them in
//! and out of a directory of host records.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use casestudy_store::RecordKind;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use config::CliConfig;

fn cli() -> Command {
    let file = || {
        Arg::new("file")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("Document JSON file")
    };
    let store_dir = || {
        Arg::new("dir")
            .long("dir")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("Directory holding one JSON file per record")
    };

    Command::new("casestudy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Author and render case-study documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML file with [builder] and [render] tables"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Raise log level (-v info, -vv debug, -vvv trace)"),
        )
        .subcommand(Command::new("new").about("Print a blank document"))
        .subcommand(
            Command::new("validate")
                .about("Check a document file")
                .arg(file()),
        )
        .subcommand(
            Command::new("tabs")
                .about("List the report tabs of a document")
                .arg(file()),
        )
        .subcommand(
            Command::new("render")
                .about("Render a document as Markdown")
                .arg(file())
                .arg(
                    Arg::new("tab")
                        .long("tab")
                        .help("Tab id to show (overview, architecture, features, roadmap, deployment, visuals)"),
                )
                .arg(
                    Arg::new("all")
                        .long("all")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("tab")
                        .help("Render every tab"),
                ),
        )
        .subcommand(
            Command::new("set")
                .about("Set a value at a dotted path, e.g. features.items.0.title")
                .arg(file())
                .arg(Arg::new("path").required(true).help("Dotted document path"))
                .arg(
                    Arg::new("value")
                        .required(true)
                        .help("JSON value; other text is stored as a string"),
                ),
        )
        .subcommand(
            Command::new("toggle")
                .about("Turn an optional section or roadmap bucket on or off")
                .arg(file())
                .arg(
                    Arg::new("key")
                        .required(true)
                        .help("deployment, visuals, or a roadmap bucket key"),
                )
                .arg(
                    Arg::new("state")
                        .required(true)
                        .value_parser(["on", "off"]),
                ),
        )
        .subcommand(
            Command::new("icons")
                .about("Search the icon registry")
                .arg(Arg::new("query").help("Case-insensitive name fragment")),
        )
        .subcommand(Command::new("schema").about("Print the document JSON Schema"))
        .subcommand(
            Command::new("store")
                .about("Host record store")
                .subcommand_required(true)
                .subcommand(
                    Command::new("save")
                        .about("Save a document file into a record")
                        .arg(store_dir())
                        .arg(Arg::new("id").long("id").help("Record id, generated when omitted"))
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .default_value("project")
                                .value_parser(["project", "article"]),
                        )
                        .arg(file()),
                )
                .subcommand(
                    Command::new("load")
                        .about("Print the document stored in a record")
                        .arg(store_dir())
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(
                    Command::new("list")
                        .about("List record ids")
                        .arg(store_dir()),
                ),
        )
}

fn init_logging(matches: &ArgMatches) {
    let default_level = match matches.get_count("verbose") {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if matches.get_flag("log-json") {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn required<'a, T>(args: &'a ArgMatches, id: &str) -> Result<&'a T>
where
    T: Clone + Send + Sync + 'static,
{
    args.get_one::<T>(id)
        .ok_or_else(|| anyhow!("missing argument <{id}>"))
}

async fn run(matches: &ArgMatches, config: &CliConfig) -> Result<String> {
    match matches.subcommand() {
        Some(("new", _)) => commands::new_document(config),
        Some(("validate", args)) => commands::validate(required::<PathBuf>(args, "file")?),
        Some(("tabs", args)) => commands::tabs(required::<PathBuf>(args, "file")?),
        Some(("render", args)) => commands::render(
            required::<PathBuf>(args, "file")?,
            args.get_one::<String>("tab").map(String::as_str),
            args.get_flag("all"),
            config,
        ),
        Some(("set", args)) => commands::set(
            required::<PathBuf>(args, "file")?,
            required::<String>(args, "path")?,
            required::<String>(args, "value")?,
            config,
        ),
        Some(("toggle", args)) => commands::toggle(
            required::<PathBuf>(args, "file")?,
            required::<String>(args, "key")?,
            required::<String>(args, "state")? == "on",
            config,
        ),
        Some(("icons", args)) => Ok(commands::icons(
            args.get_one::<String>("query").map(String::as_str),
            config,
        )),
        Some(("schema", _)) => commands::schema(),
        Some(("store", store)) => match store.subcommand() {
            Some(("save", args)) => {
                let kind: RecordKind = required::<String>(args, "kind")?
                    .parse()
                    .map_err(|e: String| anyhow!(e))?;
                commands::store_save(
                    required::<PathBuf>(args, "dir")?,
                    args.get_one::<String>("id").map(String::as_str),
                    kind,
                    required::<PathBuf>(args, "file")?,
                )
                .await
            }
            Some(("load", args)) => {
                commands::store_load(
                    required::<PathBuf>(args, "dir")?,
                    required::<String>(args, "id")?,
                    config,
                )
                .await
            }
            Some(("list", args)) => commands::store_list(required::<PathBuf>(args, "dir")?).await,
            _ => Err(anyhow!("unknown store command")),
        },
        _ => Err(anyhow!("unknown command")),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(&matches);

    let config = CliConfig::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    let output = run(&matches, &config).await?;
    print!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn parses_store_save() {
        let matches = cli()
            .try_get_matches_from([
                "casestudy", "store", "save", "--dir", "records", "--kind", "article", "doc.json",
            ])
            .unwrap();
        let (_, store) = matches.subcommand().unwrap();
        let (name, args) = store.subcommand().unwrap();
        assert_eq!(name, "save");
        assert_eq!(required::<String>(args, "kind").unwrap(), "article");
        assert!(args.get_one::<String>("id").is_none());
    }

    #[test]
    fn render_tab_conflicts_with_all() {
        assert!(cli()
            .try_get_matches_from(["casestudy", "render", "doc.json", "--tab", "roadmap", "--all"])
            .is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let matches = cli()
            .try_get_matches_from(["casestudy", "icons", "rock", "--log-json", "-vv"])
            .unwrap();
        assert!(matches.get_flag("log-json"));
        assert_eq!(matches.get_count("verbose"), 2);
    }

    #[tokio::test]
    async fn runs_icons_command() {
        let matches = cli().try_get_matches_from(["casestudy", "icons", "zap"]).unwrap();
        let out = run(&matches, &CliConfig::default()).await.unwrap();
        assert!(out.contains("Zap"));
    }
}
