use anyhow::Context;
use clap::Parser;
use lexc_drv::{logging::init_logging, run, Cli, Config, Settings};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    let settings = Settings::resolve(&cli, config);

    init_logging(settings.verbose, settings.no_color)?;
    debug!(?settings, "resolved settings");

    let report = run(&settings).context("lexc failed")?;
    debug!(?report, "done");
    Ok(())
}
