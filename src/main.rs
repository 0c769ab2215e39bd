// GitHub user lookup - Main Entry Point
// Reads GITHUB_TOKEN and prints the authenticated user

use clap::Parser;
use github_user::{cli::Cli, config, report, verbosity};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    verbosity::init_logging(cli.verbose);

    let options = cli.run_options();
    let mut stdout = std::io::stdout().lock();

    match github_user::run(&options, config::process_env, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", report(&e));
            ExitCode::from(e.exit_code())
        }
    }
}
