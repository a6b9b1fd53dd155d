use std::process::ExitCode;

use clap::Parser;

use soql_gen::cli::Args;
use soql_gen::config::ConfigFile;
use soql_gen::logging::init_logging;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = ConfigFile::load(args.config.as_deref())?;
    init_logging(&config.logging.filter);

    let output = args.command.run(&config, args.format)?;
    println!("{}", output.text);

    if output.failed {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
