use anyhow::Context;
use clap::Parser;
use rutorrent_autoconf::utils::{logger, render, validation::Validate};
use rutorrent_autoconf::{CliConfig, LocalFs, Resolver, ResolverConfig};

fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if let Err(e) = run(&cli) {
        tracing::error!("❌ {:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &CliConfig) -> anyhow::Result<()> {
    tracing::debug!("CLI config: {:?}", cli);

    let config = match &cli.config {
        Some(path) => ResolverConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path.display()))?,
        None => ResolverConfig::default(),
    };

    if let Err(e) = config.validate() {
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        return Err(e).context("Configuration validation failed");
    }

    let source = match &cli.sysroot {
        Some(root) => {
            tracing::info!("Probing under sysroot {}", root.display());
            LocalFs::with_sysroot(root)
        }
        None => LocalFs::new(),
    };

    let resolution = Resolver::with_config(source, config).resolve();
    let output = render::render(&resolution, cli.format).context("Failed to render output")?;
    print!("{}", output);

    Ok(())
}
