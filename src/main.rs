use clap::Parser;

use ziglint::cli::Cli;
use ziglint::driver::{self, RunOptions};
use ziglint::{EXIT_FATAL, exit_code_for};

fn main() {
    let cli = Cli::parse();

    // 1. Translate CLI arguments into run options
    let options = RunOptions {
        paths: cli.paths,
        config_path: cli.config,
        no_config: cli.no_config,
        exclude: cli.exclude,
        include: cli.include,
        max_line_length: cli.max_line_length,
        color: cli.color.into(),
        quiet: cli.quiet,
    };

    // 2. Lint everything; the exit code carries the error count
    let exit_code = match driver::run(&options) {
        Ok(error_count) => exit_code_for(error_count),
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_FATAL
        }
    };

    std::process::exit(exit_code);
}
