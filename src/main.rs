use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use domain::Config;
use service::{CompletionService, FormatService, Service, ServiceResult};

pub(crate) use provider::ConfigProvider;

mod cli;
mod domain;
mod logging;
mod provider;
mod service;

fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version also end up here
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    logging::init(args.log);

    FormatService::run(run(args))
}

fn run(args: Cli) -> ServiceResult {
    if let Some(shell) = args.completions {
        return CompletionService::run(shell);
    }

    let config = Config::load(args.config.as_deref())?;
    tracing::debug!(source = ?config.source(), "loaded config");
    Service::new(config).run(args)
}
