use anyhow::{Context, Result, bail};
use reqwest::blocking::Client;
use std::{env, path::PathBuf, process};
use wikitree_config::Config;
use wikitree_engine::{Section, io, try_parse_document};

#[derive(Debug, Default, PartialEq)]
struct Args {
    config_path: Option<PathBuf>,
    pretty: bool,
}

impl Args {
    fn parse(args: &[String]) -> Result<Self> {
        let mut parsed = Self::default();
        for arg in args {
            match arg.as_str() {
                "--pretty" => parsed.pretty = true,
                flag if flag.starts_with("--") => bail!("Unknown option: {flag}"),
                path if parsed.config_path.is_none() => {
                    parsed.config_path = Some(PathBuf::from(path));
                }
                extra => bail!("Unexpected argument: {extra}"),
            }
        }
        Ok(parsed)
    }
}

/// Config from the given path, else the user config file, else built-ins.
fn load_config(config_path: Option<&PathBuf>) -> Result<Config> {
    if let Some(path) = config_path {
        log::info!("Using config file from CLI argument: {}", path.display());
        return Config::load_from_path(path)?
            .with_context(|| format!("Config file '{}' not found", path.display()));
    }

    match Config::load()? {
        Some(config) => {
            log::info!("Loaded config from {}", Config::config_path().display());
            Ok(config)
        }
        None => {
            log::info!("No config file found, using built-in sources");
            Ok(Config::default())
        }
    }
}

/// Parse every configured source, in order, into one tree.
fn build_tree(config: &Config, client: &Client) -> Result<Section> {
    let mut root = Section::new(config.root_name.as_str());

    for source in &config.sources {
        let lines = io::open_source(client, &source.url)
            .with_context(|| format!("Failed to open {}", source.url))?;
        try_parse_document(lines, &source.parse_options(), &mut root)
            .with_context(|| format!("Failed to read {}", source.url))?;
        log::info!(
            "Parsed {}: {} settings so far",
            source.url,
            root.total_settings()
        );
    }

    Ok(root)
}

fn render(tree: &Section, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(tree)?
    } else {
        serde_json::to_string(tree)?
    };
    Ok(json)
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args.config_path.as_ref())?;
    if config.sources.is_empty() {
        log::warn!("No sources configured, output will only contain the root");
    }

    let client = io::http_client()?;
    let tree = build_tree(&config, &client)?;
    println!("{}", render(&tree, args.pretty)?);
    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let argv: Vec<String> = env::args().collect();
    let program_name = argv
        .first()
        .cloned()
        .unwrap_or_else(|| "wikitree-cli".to_string());

    let args = match Args::parse(argv.get(1..).unwrap_or_default()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program_name} [--pretty] [config.toml]");
            eprintln!(
                "Without a config path, {} is used if present",
                Config::config_path().display()
            );
            process::exit(1);
        }
    };

    if let Err(e) = run(&args) {
        log::error!("{e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
