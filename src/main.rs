use clap::Parser;
use organize::cli::{Args, run_cli};
use organize::error::exit_codes;
use organize::logging;
use organize::output::OutputFormatter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init_logging(&args.log_file, args.verbose) {
        OutputFormatter::error(&e.to_string());
        return ExitCode::from(e.exit_code());
    }

    match run_cli(&args) {
        Ok(_) => ExitCode::from(exit_codes::SUCCESS),
        Err(e) => {
            tracing::error!("{}", e);
            OutputFormatter::error(&e.to_string());
            ExitCode::from(e.exit_code())
        }
    }
}
