use std::process::ExitCode;
use switchyard::cli::run_cli;
use switchyard::logging::{init_logging_with_config, LogConfig};

fn main() -> anyhow::Result<ExitCode> {
    init_logging_with_config(&LogConfig::from_env())?;
    let status = run_cli()?;
    Ok(ExitCode::from(status))
}
