use clap::Parser;
use pathgen::cli::{run_cli, Cli};
use pathgen::logging::{init_logging_with_config, LogConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env();
    if let Some(format) = cli.log_format {
        log_config.format = format.into();
    }
    init_logging_with_config(&log_config)?;

    run_cli(cli)
}
