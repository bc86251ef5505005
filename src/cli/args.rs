//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
#[derive(Debug, Parser)]
#[command(
    name = "secureguard",
    version,
    about = "SecureGuard - security awareness portal for the terminal",
    long_about = "Browse security training modules, threat bulletins, policies and \
                  cheat sheets, check password strength, and practice incident reports."
)]
pub struct CliConfig {
    /// Page to open first (e.g. training, module-phishing, cheatsheet-password)
    #[arg(value_name = "PAGE", default_value = "home")]
    pub page: String,

    /// Training content file (default: ./secureguard/modules.json, then the config dir)
    #[arg(long = "content", value_name = "PATH")]
    pub content: Option<PathBuf>,

    /// Do not reload the content file when it changes
    #[arg(long = "no-watch")]
    pub no_watch: bool,

    /// Event loop tick in milliseconds
    #[arg(
        long = "tick-rate",
        value_name = "MS",
        default_value_t = 100,
        value_parser = clap::value_parser!(u64).range(10..=5000)
    )]
    pub tick_rate: u64,

    /// Log file (default: <cache dir>/secureguard/secureguard.log)
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print a cheat sheet as plain text and exit
    /// (incident-response, phishing, password, social-engineering)
    #[arg(long = "print", value_name = "TAG")]
    pub print: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        CliConfig::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::try_parse_from(["secureguard"]).unwrap();
        assert_eq!(config.page, "home");
        assert_eq!(config.tick_rate, 100);
        assert!(!config.no_watch);
        assert_eq!(config.verbose, 0);
        assert!(config.print.is_none());
    }

    #[test]
    fn test_full_arguments() {
        let config = CliConfig::try_parse_from([
            "secureguard",
            "module-phishing",
            "--content",
            "custom.json",
            "--no-watch",
            "--tick-rate",
            "250",
            "-vv",
        ])
        .unwrap();
        assert_eq!(config.page, "module-phishing");
        assert_eq!(config.content, Some(PathBuf::from("custom.json")));
        assert!(config.no_watch);
        assert_eq!(config.tick_rate, 250);
        assert_eq!(config.verbose, 2);
    }

    #[test]
    fn test_tick_rate_range() {
        assert!(CliConfig::try_parse_from(["secureguard", "--tick-rate", "1"]).is_err());
    }
}
