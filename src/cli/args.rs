use clap::Parser;
use std::path::PathBuf;

/// Interactive library catalog: books, members, loans and overdue fines
#[derive(Parser, Debug)]
#[command(name = "library-catalog")]
#[command(about = "Interactive library catalog: books, members, loans and overdue fines", long_about = None)]
pub struct CliArgs {
    /// Path to a TOML configuration file
    #[arg(
        long = "config",
        value_name = "PATH",
        help = "Path to a TOML configuration file (default: ./library-catalog.toml if present)"
    )]
    pub config: Option<PathBuf>,

    /// Log level override for this crate
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        help = "Log level: error, warn, info, debug or trace (overrides configuration)"
    )]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::no_options(&["program"], None, None)]
    #[case::config_only(&["program", "--config", "lib.toml"], Some("lib.toml"), None)]
    #[case::log_level_only(&["program", "--log-level", "debug"], None, Some("debug"))]
    #[case::all_options(
        &["program", "--config", "lib.toml", "--log-level", "trace"],
        Some("lib.toml"),
        Some("trace")
    )]
    fn test_option_parsing(
        #[case] args: &[&str],
        #[case] config: Option<&str>,
        #[case] log_level: Option<&str>,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.config, config.map(PathBuf::from));
        assert_eq!(parsed.log_level.as_deref(), log_level);
    }

    #[rstest]
    #[case::unknown_flag(&["program", "--verbose"])]
    #[case::missing_value(&["program", "--config"])]
    #[case::positional(&["program", "books.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
