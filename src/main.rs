use clap::Parser;
use miette::IntoDiagnostic;
use tracing::debug;

use wildcard::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use wildcard::adapter::inbound::cli::output::{self, OutputConfig};
use wildcard::adapter::inbound::cli::{config, formations, optimize, squad};
use wildcard::infrastructure::config::settings::Config;

fn main() -> miette::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let config_path = cli.command.config_path();
    let mut settings = Config::load_or_default(config_path).into_diagnostic()?;
    if cli.quiet {
        settings.logging.level = "warn".into();
    }
    settings.init_logging();
    debug!(command = ?cli.command, "wildcard starting");

    let result = match &cli.command {
        Commands::Optimize(args) => optimize::execute(args, &settings),
        Commands::Squad(args) => squad::execute(args),
        Commands::Formations => formations::execute(),
        Commands::Config(ConfigCommand::Validate(_)) => {
            config::execute_validate(&settings, config_path)
        }
    };

    if let Err(err) = &result {
        if output::is_json() {
            output::error(&err.to_string());
            std::process::exit(1);
        }
    }
    result.into_diagnostic()
}
