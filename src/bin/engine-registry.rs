use anyhow::{Context, Result};
use clap::Parser;
use engine_registry::config::HostConfig;
use engine_registry::{logging, EngineRegistry};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "engine-registry")]
#[command(about = "Register playback engines and print their priority order")]
struct Args {
    /// Host config file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long)]
    debug: bool,

    /// Extra engine id to register after the configured ones (repeatable)
    #[arg(short, long = "engine")]
    engines: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => HostConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => HostConfig::default(),
    };
    config.engines.extend(args.engines);

    if args.debug {
        config.log.filter = String::from("debug");
        logging::init_ignoring_env(&config.log)?;
    } else {
        logging::init(&config.log)?;
    }

    let registry: EngineRegistry = config.engine_descriptors().into_iter().collect();
    info!("Registered engines: {}", registry.len());

    for id in registry.ids() {
        println!("{id}");
    }

    Ok(())
}
