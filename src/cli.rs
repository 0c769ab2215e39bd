// Command-line surface
use crate::app::RunOptions;
use crate::config::EnvFile;
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Print the GitHub user that owns GITHUB_TOKEN
#[derive(Debug, Parser)]
#[command(name = "github_user", version, about)]
pub struct Cli {
    /// Env file to merge into the environment before reading GITHUB_TOKEN
    #[arg(long, value_name = "PATH", env = "GITHUB_USER_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    /// Do not load any env file; takes precedence over --env-file
    #[arg(long)]
    pub no_env_file: bool,

    /// Indent the JSON response
    #[arg(long)]
    pub pretty: bool,

    /// Append a record of each API call to this file
    #[arg(long, value_name = "PATH")]
    pub api_log: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn env_file(&self) -> EnvFile {
        match (&self.env_file, self.no_env_file) {
            (_, true) => EnvFile::Disabled,
            (Some(path), false) => EnvFile::Path(path.clone()),
            (None, false) => EnvFile::Search,
        }
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            env_file: self.env_file(),
            format: if self.pretty { OutputFormat::Pretty } else { OutputFormat::Compact },
            api_log: self.api_log.clone(),
            ..RunOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        temp_env::with_var_unset("GITHUB_USER_ENV_FILE", || {
            let cli = Cli::try_parse_from(["github_user"]).unwrap();
            let options = cli.run_options();
            assert_eq!(options.env_file, EnvFile::Search);
            assert_eq!(options.format, OutputFormat::Compact);
            assert_eq!(options.api_base_url, "https://api.github.com");
            assert!(options.api_log.is_none());
            assert_eq!(cli.verbose, 0);
        });
    }

    #[test]
    fn test_flags() {
        temp_env::with_var_unset("GITHUB_USER_ENV_FILE", || {
            let cli = Cli::try_parse_from([
                "github_user",
                "--env-file",
                "secrets.env",
                "--pretty",
                "--api-log",
                "api.log",
                "-vv",
            ])
            .unwrap();
            let options = cli.run_options();
            assert_eq!(options.env_file, EnvFile::Path(PathBuf::from("secrets.env")));
            assert_eq!(options.format, OutputFormat::Pretty);
            assert_eq!(options.api_log, Some(PathBuf::from("api.log")));
            assert_eq!(cli.verbose, 2);
        });
    }

    #[test]
    fn test_no_env_file() {
        temp_env::with_var_unset("GITHUB_USER_ENV_FILE", || {
            let cli = Cli::try_parse_from(["github_user", "--no-env-file"]).unwrap();
            assert_eq!(cli.env_file(), EnvFile::Disabled);

            let both = Cli::try_parse_from(["github_user", "--no-env-file", "--env-file", "x.env"]).unwrap();
            assert_eq!(both.env_file(), EnvFile::Disabled);
        });
    }
}
